//! Forage quality per grass genus.

use super::columns::grass as col;
use super::keyed::KeyedTable;
use super::{LookupError, LookupResult};
use crate::db::{DbResult, RowSet};
use std::str::FromStr;

/// Key of the synthetic record averaging every genus.
pub const AVERAGE_FORAGE: &str = "average";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrassField {
    ForageDryMatterDigestibility,
    CrudeProtein,
    GrossEnergy,
}

impl GrassField {
    const ALL_COLUMNS: [&'static str; 3] = [
        col::FORAGE_DRY_MATTER_DIGESTIBILITY,
        col::CRUDE_PROTEIN,
        col::GROSS_ENERGY,
    ];

    pub fn column(self) -> &'static str {
        match self {
            Self::ForageDryMatterDigestibility => col::FORAGE_DRY_MATTER_DIGESTIBILITY,
            Self::CrudeProtein => col::CRUDE_PROTEIN,
            Self::GrossEnergy => col::GROSS_ENERGY,
        }
    }
}

impl FromStr for GrassField {
    type Err = LookupError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            col::FORAGE_DRY_MATTER_DIGESTIBILITY => Ok(Self::ForageDryMatterDigestibility),
            col::CRUDE_PROTEIN => Ok(Self::CrudeProtein),
            col::GROSS_ENERGY => Ok(Self::GrossEnergy),
            other => Err(LookupError::UnknownParameter(other.to_string())),
        }
    }
}

/// Grass genus → digestibility, crude protein and gross energy.
#[derive(Debug, Clone, PartialEq)]
pub struct Grass {
    table: KeyedTable,
}

impl Grass {
    /// Builds the wrapper and its `average` record.
    ///
    /// # Errors
    /// - Index errors when genus names are null or duplicated.
    pub fn from_rows(rows: RowSet) -> DbResult<Self> {
        let table = KeyedTable::from_rows(rows, col::GRASS_GENUS, &GrassField::ALL_COLUMNS)?
            .with_average(AVERAGE_FORAGE, &GrassField::ALL_COLUMNS);
        Ok(Self { table })
    }

    /// # Errors
    /// - `UnknownForageType` when `forage` is not a known genus.
    /// - `MissingValue` when the genus has no value for `field`.
    pub fn get(&self, forage: &str, field: GrassField) -> LookupResult<f64> {
        self.table
            .value(forage, field.column(), LookupError::UnknownForageType)
    }

    pub fn forage_dry_matter_digestibility(&self, forage: &str) -> LookupResult<f64> {
        self.get(forage, GrassField::ForageDryMatterDigestibility)
    }

    pub fn crude_protein(&self, forage: &str) -> LookupResult<f64> {
        self.get(forage, GrassField::CrudeProtein)
    }

    /// Gross energy, MJ per kg dry matter.
    pub fn gross_energy_mje_dry_matter(&self, forage: &str) -> LookupResult<f64> {
        self.get(forage, GrassField::GrossEnergy)
    }

    pub fn contains(&self, forage: &str) -> bool {
        self.table.contains(forage)
    }

    /// Genus names, including `average`.
    pub fn forage_types(&self) -> impl Iterator<Item = &str> {
        self.table.keys()
    }

    /// Number of stored genera, excluding the synthetic `average`.
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
    use super::{Grass, GrassField, AVERAGE_FORAGE};
    use crate::db::{CellValue, Row, RowSet, Table};
    use crate::model::LookupError;

    fn grass_rows() -> RowSet {
        let row = |genus: &str, dmd: Option<f64>, cp: f64| {
            Row::new([
                ("grass_genus", CellValue::Text(genus.to_string())),
                (
                    "forage_dry_matter_digestibility",
                    dmd.map_or(CellValue::Null, CellValue::Real),
                ),
                ("crude_protein", CellValue::Real(cp)),
                ("gross_energy", CellValue::Null),
            ])
        };
        RowSet::new(
            Table::Grass,
            vec![
                "grass_genus".to_string(),
                "forage_dry_matter_digestibility".to_string(),
                "crude_protein".to_string(),
                "gross_energy".to_string(),
            ],
            vec![
                row("Lolium", Some(0.80), 18.0),
                row("Festuca", Some(0.70), 16.0),
                row("Poa", None, 14.0),
            ],
        )
    }

    #[test]
    fn get_reads_named_genus() {
        let grass = Grass::from_rows(grass_rows()).expect("wrapper from rows");
        assert_eq!(grass.crude_protein("Festuca").expect("crude protein Festuca"), 16.0);
        assert_eq!(grass.len(), 3);
    }

    #[test]
    fn null_field_is_missing_value_not_unknown_genus() {
        let grass = Grass::from_rows(grass_rows()).expect("wrapper from rows");
        assert!(matches!(
            grass.forage_dry_matter_digestibility("Poa"),
            Err(LookupError::MissingValue { field, .. }) if field == "forage_dry_matter_digestibility"
        ));
        assert_eq!(
            grass.get("Unicorn", GrassField::CrudeProtein).unwrap_err(),
            LookupError::UnknownForageType("Unicorn".to_string())
        );
    }

    #[test]
    fn average_skips_nulls() {
        let grass = Grass::from_rows(grass_rows()).expect("wrapper from rows");
        let dmd = grass.forage_dry_matter_digestibility(AVERAGE_FORAGE)
            .expect("forage dry matter digestibility");
        assert!((dmd - 0.75).abs() < 1e-12);
        assert_eq!(grass.crude_protein(AVERAGE_FORAGE).expect("crude protein"), 16.0);
        assert!(grass.gross_energy_mje_dry_matter(AVERAGE_FORAGE).is_err());
    }

    #[test]
    fn stored_average_row_is_replaced_by_computed_mean() {
        let seeded = grass_rows();
        let mut rows = seeded.rows().to_vec();
        rows.push(Row::new([
            ("grass_genus", CellValue::Text(AVERAGE_FORAGE.to_string())),
            ("forage_dry_matter_digestibility", CellValue::Real(0.9)),
            ("crude_protein", CellValue::Real(1.0)),
            ("gross_energy", CellValue::Null),
        ]));
        let grass = Grass::from_rows(RowSet::new(Table::Grass, seeded.columns().to_vec(), rows))
            .expect("grass with stored average");

        assert_eq!(grass.crude_protein(AVERAGE_FORAGE).expect("average cp"), 12.25);
        let dmd = grass
            .forage_dry_matter_digestibility(AVERAGE_FORAGE)
            .expect("average dmd");
        assert!((dmd - 0.8).abs() < 1e-12);
        assert_eq!(grass.len(), 4);
    }

    #[test]
    fn field_names_parse_from_columns() {
        assert_eq!(
            "crude_protein".parse::<GrassField>().expect("known name"),
            GrassField::CrudeProtein
        );
        assert!("protein".parse::<GrassField>().is_err());
    }
}
