//! Country-specific animal physiology: birth and mature weights plus
//! per-cohort daily weight gain and nitrogen retention.

use super::cohort::Cohort;
use super::columns::animal_features as col;
use super::country_row::CountryRow;
use super::LookupResult;
use crate::db::{DbResult, RowSet};

#[derive(Debug, Clone, PartialEq)]
pub struct AnimalFeatures {
    row: CountryRow,
}

impl AnimalFeatures {
    /// # Errors
    /// - `DbError::InvalidData` when `rows` holds more than one row.
    pub fn from_rows(rows: RowSet, country: &str) -> DbResult<Self> {
        Ok(Self {
            row: CountryRow::from_rows(rows, country)?,
        })
    }

    /// Any numeric column of the row by name.
    pub fn get(&self, field: &str) -> LookupResult<f64> {
        self.row.value(field)
    }

    pub fn birth_weight(&self) -> LookupResult<f64> {
        self.get(col::BIRTH_WEIGHT)
    }

    pub fn mature_weight_bulls(&self) -> LookupResult<f64> {
        self.get(col::MATURE_WEIGHT_BULLS)
    }

    pub fn mature_weight_dairy_cows(&self) -> LookupResult<f64> {
        self.get(col::MATURE_WEIGHT_DAIRY_COWS)
    }

    pub fn mature_weight_suckler_cows(&self) -> LookupResult<f64> {
        self.get(col::MATURE_WEIGHT_SUCKLER_COWS)
    }

    /// Daily live-weight gain, kg per head per day.
    pub fn weight_gain(&self, cohort: Cohort) -> LookupResult<f64> {
        self.get(&cohort.weight_gain_column())
    }

    /// Fraction of ingested nitrogen retained by the animal.
    pub fn n_retention(&self, cohort: Cohort) -> LookupResult<f64> {
        self.get(&cohort.n_retention_column())
    }

    pub fn country(&self) -> &str {
        self.row.country()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.row.columns()
    }

    /// `false` when the store holds no row for the country.
    pub fn is_loaded(&self) -> bool {
        self.row.is_loaded()
    }

    pub fn is_empty(&self) -> bool {
        !self.is_loaded()
    }
}

#[cfg(test)]
mod tests {
    use super::AnimalFeatures;
    use crate::db::{CellValue, DbError, Row, RowSet, Table};
    use crate::model::cohort::Cohort;
    use crate::model::LookupError;

    fn columns() -> Vec<String> {
        [
            "id",
            "ef_country",
            "mature_weight_dairy_cows",
            "DxB_calves_m_weight_gain",
            "DxB_calves_f_weight_gain",
        ]
        .iter()
        .map(|name| name.to_string())
        .collect()
    }

    fn ireland_row() -> Row {
        Row::new([
            ("id", CellValue::Real(1.0)),
            ("ef_country", CellValue::Text("ireland".to_string())),
            ("mature_weight_dairy_cows", CellValue::Real(538.0)),
            ("DxB_calves_m_weight_gain", CellValue::Real(0.9)),
            ("DxB_calves_f_weight_gain", CellValue::Real(0.8)),
        ])
    }

    #[test]
    fn male_cohort_reads_its_own_column() {
        let rows = RowSet::new(Table::AnimalFeatures, columns(), vec![ireland_row()]);
        let features = AnimalFeatures::from_rows(rows, "ireland").expect("wrapper from rows");

        assert_eq!(features.weight_gain(Cohort::DxB_calves_m).expect("weight gain"), 0.9);
        assert_eq!(features.weight_gain(Cohort::DxB_calves_f).expect("weight gain"), 0.8);
        assert_eq!(features.mature_weight_dairy_cows().expect("mature weight dairy cows"), 538.0);
        assert!(features.columns().all(|name| name != "ef_country" && name != "id"));
    }

    #[test]
    fn absent_country_yields_missing_values() {
        let rows = RowSet::new(Table::AnimalFeatures, columns(), Vec::new());
        let features = AnimalFeatures::from_rows(rows, "atlantis").expect("wrapper from rows");

        assert!(!features.is_loaded());
        assert_eq!(
            features.mature_weight_dairy_cows().unwrap_err(),
            LookupError::MissingValue {
                source: "animal_features_database",
                key: "atlantis".to_string(),
                field: "mature_weight_dairy_cows".to_string(),
            }
        );
    }

    #[test]
    fn unknown_column_is_unknown_parameter() {
        let rows = RowSet::new(Table::AnimalFeatures, columns(), vec![ireland_row()]);
        let features = AnimalFeatures::from_rows(rows, "ireland").expect("wrapper from rows");
        assert_eq!(
            features.get("horn_length").unwrap_err(),
            LookupError::UnknownParameter("horn_length".to_string())
        );
    }

    #[test]
    fn several_rows_for_one_country_are_rejected() {
        let rows = RowSet::new(
            Table::AnimalFeatures,
            columns(),
            vec![ireland_row(), ireland_row()],
        );
        assert!(matches!(
            AnimalFeatures::from_rows(rows, "ireland"),
            Err(DbError::InvalidData(_))
        ));
    }
}
