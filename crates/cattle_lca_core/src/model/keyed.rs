//! Shared storage for wrappers keyed by a natural key column.

use super::{require, LookupError, LookupResult};
use crate::db::{DbResult, RowSet};
use std::collections::BTreeMap;

type Record = BTreeMap<&'static str, Option<f64>>;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct KeyedTable {
    source: &'static str,
    records: BTreeMap<String, Record>,
    stored: usize,
}

impl KeyedTable {
    /// Builds records for `fields`, keyed by `key_column`.
    ///
    /// Re-indexes `rows` unless the store already indexed them by the key.
    pub(crate) fn from_rows(
        rows: RowSet,
        key_column: &str,
        fields: &[&'static str],
    ) -> DbResult<Self> {
        let rows = if rows.index_column() == Some(key_column) {
            rows
        } else {
            rows.with_index(key_column)?
        };

        let records = rows
            .entries()
            .map(|(key, row)| {
                let record = fields
                    .iter()
                    .map(|field| (*field, row.number(field)))
                    .collect();
                (key.to_string(), record)
            })
            .collect();

        Ok(Self {
            source: rows.table().name(),
            stored: rows.len(),
            records,
        })
    }

    /// Sets the record under `key` to the mean of every non-null stored value
    /// of each field. A stored row with the same key is averaged in, then
    /// replaced.
    pub(crate) fn with_average(mut self, key: &str, fields: &[&'static str]) -> Self {
        let average = fields
            .iter()
            .map(|field| {
                let values: Vec<f64> = self
                    .records
                    .values()
                    .filter_map(|record| record.get(field).copied().flatten())
                    .collect();
                let mean = if values.is_empty() {
                    None
                } else {
                    Some(values.iter().sum::<f64>() / values.len() as f64)
                };
                (*field, mean)
            })
            .collect();

        self.records.insert(key.to_string(), average);
        self
    }

    pub(crate) fn value(
        &self,
        key: &str,
        field: &'static str,
        unknown_key: fn(String) -> LookupError,
    ) -> LookupResult<f64> {
        let record = self
            .records
            .get(key)
            .ok_or_else(|| unknown_key(key.to_string()))?;
        require(record.get(field).copied().flatten(), self.source, key, field)
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Number of records read from the store, excluding synthetic ones.
    pub(crate) fn stored_len(&self) -> usize {
        self.stored
    }
}
