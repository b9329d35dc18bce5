//! Pre-farm-gate input and process factors.

use super::columns::upstream as col;
use super::keyed::KeyedTable;
use super::{LookupError, LookupResult};
use crate::db::{DbResult, RowSet};
use std::str::FromStr;

pub const DIESEL_INDIRECT: &str = "diesel_indirect";
pub const DIESEL_DIRECT: &str = "diesel_direct";
pub const ELECTRICITY_CONSUMED: &str = "electricity_consumed";
pub const AMMONIUM_NITRATE_FERTILISER: &str = "ammonium_nitrate_fertiliser";
pub const UREA_FERTILISER: &str = "urea_fert";
pub const TRIPLE_SUPERPHOSPHATE: &str = "triple_superphosphate";
pub const POTASSIUM_CHLORIDE: &str = "potassium_chloride";
pub const LIME: &str = "lime";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamField {
    FunctionalUnit,
    KgCo2e,
    KgPo4e,
    KgSo2e,
    Mje,
    KgSbe,
}

impl UpstreamField {
    const ALL_COLUMNS: [&'static str; 6] = [
        col::UPSTREAM_FU,
        col::UPSTREAM_KG_CO2E,
        col::UPSTREAM_KG_PO4E,
        col::UPSTREAM_KG_SO2E,
        col::UPSTREAM_MJE,
        col::UPSTREAM_KG_SBE,
    ];

    pub fn column(self) -> &'static str {
        match self {
            Self::FunctionalUnit => col::UPSTREAM_FU,
            Self::KgCo2e => col::UPSTREAM_KG_CO2E,
            Self::KgPo4e => col::UPSTREAM_KG_PO4E,
            Self::KgSo2e => col::UPSTREAM_KG_SO2E,
            Self::Mje => col::UPSTREAM_MJE,
            Self::KgSbe => col::UPSTREAM_KG_SBE,
        }
    }
}

impl FromStr for UpstreamField {
    type Err = LookupError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            col::UPSTREAM_FU => Ok(Self::FunctionalUnit),
            col::UPSTREAM_KG_CO2E => Ok(Self::KgCo2e),
            col::UPSTREAM_KG_PO4E => Ok(Self::KgPo4e),
            col::UPSTREAM_KG_SO2E => Ok(Self::KgSo2e),
            col::UPSTREAM_MJE => Ok(Self::Mje),
            col::UPSTREAM_KG_SBE => Ok(Self::KgSbe),
            other => Err(LookupError::UnknownParameter(other.to_string())),
        }
    }
}

/// Upstream type (fertiliser, diesel, electricity, ...) → impact factors.
#[derive(Debug, Clone, PartialEq)]
pub struct Upstream {
    table: KeyedTable,
}

impl Upstream {
    pub fn from_rows(rows: RowSet) -> DbResult<Self> {
        let table = KeyedTable::from_rows(rows, col::UPSTREAM_TYPE, &UpstreamField::ALL_COLUMNS)?;
        Ok(Self { table })
    }

    /// # Errors
    /// - `UnknownUpstreamType` when `upstream_type` is not stored.
    /// - `MissingValue` when the type has no value for `field`.
    pub fn get(&self, upstream_type: &str, field: UpstreamField) -> LookupResult<f64> {
        self.table
            .value(upstream_type, field.column(), LookupError::UnknownUpstreamType)
    }

    pub fn upstream_fu(&self, upstream_type: &str) -> LookupResult<f64> {
        self.get(upstream_type, UpstreamField::FunctionalUnit)
    }

    pub fn upstream_kg_co2e(&self, upstream_type: &str) -> LookupResult<f64> {
        self.get(upstream_type, UpstreamField::KgCo2e)
    }

    pub fn upstream_kg_po4e(&self, upstream_type: &str) -> LookupResult<f64> {
        self.get(upstream_type, UpstreamField::KgPo4e)
    }

    pub fn upstream_kg_so2e(&self, upstream_type: &str) -> LookupResult<f64> {
        self.get(upstream_type, UpstreamField::KgSo2e)
    }

    pub fn upstream_mje(&self, upstream_type: &str) -> LookupResult<f64> {
        self.get(upstream_type, UpstreamField::Mje)
    }

    pub fn upstream_kg_sbe(&self, upstream_type: &str) -> LookupResult<f64> {
        self.get(upstream_type, UpstreamField::KgSbe)
    }

    pub fn contains(&self, upstream_type: &str) -> bool {
        self.table.contains(upstream_type)
    }

    pub fn upstream_types(&self) -> impl Iterator<Item = &str> {
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

#[cfg(test)]
mod tests {
    use super::{Upstream, UpstreamField, DIESEL_DIRECT};
    use crate::db::{CellValue, Row, RowSet, Table};
    use crate::model::LookupError;

    #[test]
    fn upstream_has_no_synthetic_average() {
        let rows = RowSet::new(
            Table::Upstream,
            vec!["upstream_type".to_string(), "upstream_kg_co2e".to_string()],
            vec![Row::new([
                ("upstream_type", CellValue::Text(DIESEL_DIRECT.to_string())),
                ("upstream_kg_co2e", CellValue::Real(0.264)),
            ])],
        );
        let upstream = Upstream::from_rows(rows).expect("wrapper from rows");

        assert_eq!(upstream.upstream_kg_co2e(DIESEL_DIRECT).expect("upstream kg co2e"), 0.264);
        assert!(!upstream.contains("average"));
        assert_eq!(
            upstream.get("average", UpstreamField::KgCo2e).unwrap_err(),
            LookupError::UnknownUpstreamType("average".to_string())
        );
    }
}
