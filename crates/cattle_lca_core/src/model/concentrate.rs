//! Concentrate feed composition and upstream footprint.

use super::columns::concentrate as col;
use super::keyed::KeyedTable;
use super::{LookupError, LookupResult};
use crate::db::{DbResult, RowSet};
use std::str::FromStr;

/// Key of the synthetic record averaging every concentrate.
pub const AVERAGE_CONCENTRATE: &str = "average";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcentrateField {
    DryMatterDigestibility,
    DigestibleEnergy,
    CrudeProtein,
    GrossEnergyMjeDryMatter,
    Co2e,
    Po4e,
}

impl ConcentrateField {
    const ALL_COLUMNS: [&'static str; 6] = [
        col::CON_DRY_MATTER_DIGESTIBILITY,
        col::CON_DIGESTIBLE_ENERGY,
        col::CON_CRUDE_PROTEIN,
        col::GROSS_ENERGY_MJE_DRY_MATTER,
        col::CON_CO2_E,
        col::CON_PO4_E,
    ];

    pub fn column(self) -> &'static str {
        match self {
            Self::DryMatterDigestibility => col::CON_DRY_MATTER_DIGESTIBILITY,
            Self::DigestibleEnergy => col::CON_DIGESTIBLE_ENERGY,
            Self::CrudeProtein => col::CON_CRUDE_PROTEIN,
            Self::GrossEnergyMjeDryMatter => col::GROSS_ENERGY_MJE_DRY_MATTER,
            Self::Co2e => col::CON_CO2_E,
            Self::Po4e => col::CON_PO4_E,
        }
    }
}

impl FromStr for ConcentrateField {
    type Err = LookupError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            col::CON_DRY_MATTER_DIGESTIBILITY => Ok(Self::DryMatterDigestibility),
            col::CON_DIGESTIBLE_ENERGY => Ok(Self::DigestibleEnergy),
            col::CON_CRUDE_PROTEIN => Ok(Self::CrudeProtein),
            col::GROSS_ENERGY_MJE_DRY_MATTER => Ok(Self::GrossEnergyMjeDryMatter),
            col::CON_CO2_E => Ok(Self::Co2e),
            col::CON_PO4_E => Ok(Self::Po4e),
            other => Err(LookupError::UnknownParameter(other.to_string())),
        }
    }
}

/// Concentrate type → feed quality and upstream emissions.
#[derive(Debug, Clone, PartialEq)]
pub struct Concentrate {
    table: KeyedTable,
}

impl Concentrate {
    pub fn from_rows(rows: RowSet) -> DbResult<Self> {
        let table =
            KeyedTable::from_rows(rows, col::CON_TYPE, &ConcentrateField::ALL_COLUMNS)?
                .with_average(AVERAGE_CONCENTRATE, &ConcentrateField::ALL_COLUMNS);
        Ok(Self { table })
    }

    /// # Errors
    /// - `UnknownConcentrateType` when `con_type` is not stored.
    /// - `MissingValue` when the type has no value for `field`.
    pub fn get(&self, con_type: &str, field: ConcentrateField) -> LookupResult<f64> {
        self.table
            .value(con_type, field.column(), LookupError::UnknownConcentrateType)
    }

    pub fn con_dry_matter_digestibility(&self, con_type: &str) -> LookupResult<f64> {
        self.get(con_type, ConcentrateField::DryMatterDigestibility)
    }

    pub fn con_digestible_energy(&self, con_type: &str) -> LookupResult<f64> {
        self.get(con_type, ConcentrateField::DigestibleEnergy)
    }

    pub fn con_crude_protein(&self, con_type: &str) -> LookupResult<f64> {
        self.get(con_type, ConcentrateField::CrudeProtein)
    }

    pub fn gross_energy_mje_dry_matter(&self, con_type: &str) -> LookupResult<f64> {
        self.get(con_type, ConcentrateField::GrossEnergyMjeDryMatter)
    }

    /// kg CO2e per kg concentrate.
    pub fn con_co2_e(&self, con_type: &str) -> LookupResult<f64> {
        self.get(con_type, ConcentrateField::Co2e)
    }

    /// kg PO4e per kg concentrate.
    pub fn con_po4_e(&self, con_type: &str) -> LookupResult<f64> {
        self.get(con_type, ConcentrateField::Po4e)
    }

    pub fn contains(&self, con_type: &str) -> bool {
        self.table.contains(con_type)
    }

    pub fn con_types(&self) -> impl Iterator<Item = &str> {
        self.table.keys()
    }

    pub fn len(&self) -> usize {
        self.table.stored_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_loaded(&self) -> bool {
        !self.is_empty()
    }
}
