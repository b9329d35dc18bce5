//! SQLite resource store access.
//!
//! # Responsibility
//! - Open the cattle resource database read-only.
//! - Read the five logical tables into typed row sets.
//!
//! # Invariants
//! - Country scoping is applied here and nowhere downstream.
//! - Table and column names are the persisted contract with the store.
//!
//! # See also
//! - `schema/0001_resource_tables.sql`

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;
pub mod table_store;

pub use open::{open_store, open_store_in_memory};
pub use table_store::{CellValue, CountryCode, Row, RowSet, Table, TableStore};

pub type DbResult<T> = Result<T, DbError>;

/// Construction-time failures of the resource store.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The backing store could not be opened or is missing required tables.
    StoreUnavailable {
        path: String,
        reason: String,
    },
    /// Requested logical table is not one of the five recognized tables.
    UnknownTable(String),
    /// Requested index column does not exist on the table.
    UnknownColumn {
        table: &'static str,
        column: String,
    },
    /// Index column values are not unique.
    DuplicateIndexKey {
        table: &'static str,
        column: String,
        key: String,
    },
    InvalidData(String),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::StoreUnavailable { path, reason } => {
                write!(f, "resource store `{path}` is unavailable: {reason}")
            }
            Self::UnknownTable(name) => write!(f, "unknown resource table `{name}`"),
            Self::UnknownColumn { table, column } => {
                write!(f, "table `{table}` has no column `{column}`")
            }
            Self::DuplicateIndexKey { table, column, key } => write!(
                f,
                "index column `{column}` of `{table}` has duplicate key `{key}`"
            ),
            Self::InvalidData(message) => write!(f, "invalid resource data: {message}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::StoreUnavailable { .. }
            | Self::UnknownTable(_)
            | Self::UnknownColumn { .. }
            | Self::DuplicateIndexKey { .. }
            | Self::InvalidData(_) => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
