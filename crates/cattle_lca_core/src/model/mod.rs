//! Typed in-memory wrappers over resource tables.
//!
//! # Responsibility
//! - Project each table's rows into a keyed, immutable accessor.
//! - Turn nulls and absent keys into explicit lookup failures.
//!
//! # Invariants
//! - Wrappers never re-filter by country; the store already did.
//! - A lookup yields exactly one value or a `LookupError`.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod animal;
pub mod animal_features;
pub mod cohort;
pub mod columns;
pub mod concentrate;
mod country_row;
pub mod emissions_factors;
pub mod grass;
mod keyed;
pub mod upstream;

pub type LookupResult<T> = Result<T, LookupError>;

/// Caller-input and data-gap failures raised by lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    UnknownForageType(String),
    UnknownConcentrateType(String),
    UnknownUpstreamType(String),
    UnknownCohort(String),
    UnknownParameter(String),
    UnknownGrazingType(String),
    UnknownStorageType(String),
    UnknownSpreadingType(String),
    /// Key is valid but the store holds no value for `field`.
    MissingValue {
        source: &'static str,
        key: String,
        field: String,
    },
}

impl Display for LookupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownForageType(name) => write!(f, "unsupported forage type `{name}`"),
            Self::UnknownConcentrateType(name) => {
                write!(f, "unsupported concentrate type `{name}`")
            }
            Self::UnknownUpstreamType(name) => write!(f, "unsupported upstream type `{name}`"),
            Self::UnknownCohort(name) => write!(f, "unsupported cohort `{name}`"),
            Self::UnknownParameter(name) => write!(f, "unsupported parameter `{name}`"),
            Self::UnknownGrazingType(name) => write!(f, "unsupported grazing type `{name}`"),
            Self::UnknownStorageType(name) => write!(f, "unsupported storage type `{name}`"),
            Self::UnknownSpreadingType(name) => {
                write!(f, "unsupported daily spreading type `{name}`")
            }
            Self::MissingValue { source, key, field } => {
                write!(f, "no `{field}` value in {source} for `{key}`")
            }
        }
    }
}

impl Error for LookupError {}

pub(crate) fn require(
    value: Option<f64>,
    source: &'static str,
    key: &str,
    field: &str,
) -> LookupResult<f64> {
    value.ok_or_else(|| LookupError::MissingValue {
        source,
        key: key.to_string(),
        field: field.to_string(),
    })
}
