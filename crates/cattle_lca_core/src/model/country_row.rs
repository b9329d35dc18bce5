//! Shared storage for country-scoped tables holding one row per country.

use super::{require, LookupError, LookupResult};
use crate::db::table_store::COUNTRY_COLUMN;
use crate::db::{DbError, DbResult, RowSet};
use std::collections::BTreeMap;

const ID_COLUMN: &str = "id";

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CountryRow {
    source: &'static str,
    country: String,
    /// Every numeric column the store exposes, null when no row was found.
    values: BTreeMap<String, Option<f64>>,
    loaded: bool,
}

impl CountryRow {
    /// # Errors
    /// - `DbError::InvalidData` when the store holds several rows for `country`.
    pub(crate) fn from_rows(rows: RowSet, country: &str) -> DbResult<Self> {
        if rows.len() > 1 {
            return Err(DbError::InvalidData(format!(
                "{} holds {} rows for country `{country}`",
                rows.table().name(),
                rows.len()
            )));
        }

        let row = rows.rows().first();
        let values = rows
            .columns()
            .iter()
            .filter(|column| column.as_str() != ID_COLUMN && column.as_str() != COUNTRY_COLUMN)
            .map(|column| (column.clone(), row.and_then(|row| row.number(column))))
            .collect();

        Ok(Self {
            source: rows.table().name(),
            country: country.to_string(),
            values,
            loaded: row.is_some(),
        })
    }

    /// # Errors
    /// - `UnknownParameter` when the store has no such column.
    /// - `MissingValue` when the country has no row or the cell is null.
    pub(crate) fn value(&self, field: &str) -> LookupResult<f64> {
        let value = self
            .values
            .get(field)
            .ok_or_else(|| LookupError::UnknownParameter(field.to_string()))?;
        require(*value, self.source, &self.country, field)
    }

    pub(crate) fn has_column(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    pub(crate) fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub(crate) fn country(&self) -> &str {
        &self.country
    }

    pub(crate) fn is_loaded(&self) -> bool {
        self.loaded
    }
}
