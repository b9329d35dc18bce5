//! Table reads against the resource store.
//!
//! # Responsibility
//! - Map logical table names to the five recognized resource tables.
//! - Read whole tables, optionally country-scoped and re-indexed by a column.
//!
//! # Invariants
//! - Only `Table` variants are ever interpolated into SQL.
//! - Country filtering applies to country-scoped tables only.
//! - A country filter matching zero rows yields an empty `RowSet`.

use super::open::open_store;
use super::{DbError, DbResult};
use log::{debug, error};
use rusqlite::types::ValueRef;
use rusqlite::Connection;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Instant;

/// Column carrying the country on country-scoped tables.
pub const COUNTRY_COLUMN: &str = "ef_country";

/// Region identifier scoping every country-dependent read.
///
/// Matching is exact: no case folding or whitespace trimming is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CountryCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CountryCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CountryCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The five logical tables of the resource store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Grass,
    Upstream,
    EmissionsFactors,
    Concentrate,
    AnimalFeatures,
}

impl Table {
    pub const ALL: [Table; 5] = [
        Table::Grass,
        Table::Upstream,
        Table::EmissionsFactors,
        Table::Concentrate,
        Table::AnimalFeatures,
    ];

    /// Physical table name in the store.
    pub fn name(self) -> &'static str {
        match self {
            Self::Grass => "grass_database",
            Self::Upstream => "upstream_database",
            Self::EmissionsFactors => "emissions_factors_database",
            Self::Concentrate => "concentrate_database",
            Self::AnimalFeatures => "animal_features_database",
        }
    }

    /// Resolves a physical table name.
    ///
    /// # Errors
    /// - `DbError::UnknownTable` for any name outside the recognized five.
    pub fn from_name(name: &str) -> DbResult<Self> {
        Self::ALL
            .into_iter()
            .find(|table| table.name() == name)
            .ok_or_else(|| DbError::UnknownTable(name.to_string()))
    }

    /// Whether rows of this table carry an `ef_country` column.
    pub fn is_country_scoped(self) -> bool {
        matches!(self, Self::EmissionsFactors | Self::AnimalFeatures)
    }
}

/// One cell read from the store.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    /// Integers widen to `Real`.
    Real(f64),
    Text(String),
}

impl CellValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Real(value) => Some(*value),
            Self::Null | Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            Self::Null | Self::Real(_) => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    fn index_key(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Text(value) => Some(value.clone()),
            Self::Real(value)
                if value.fract() == 0.0
                    && *value >= i64::MIN as f64
                    && *value < i64::MAX as f64 =>
            {
                Some(format!("{}", *value as i64))
            }
            Self::Real(value) => Some(value.to_string()),
        }
    }
}

/// Mapping from column name to cell for one record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new<K: Into<String>>(cells: impl IntoIterator<Item = (K, CellValue)>) -> Self {
        Self {
            cells: cells
                .into_iter()
                .map(|(column, value)| (column.into(), value))
                .collect(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Numeric value of a column; `None` when absent, null or textual.
    pub fn number(&self, column: &str) -> Option<f64> {
        self.get(column).and_then(CellValue::as_f64)
    }

    pub fn text(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(CellValue::as_text)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct RowIndex {
    column: String,
    positions: BTreeMap<String, usize>,
}

/// Ordered records read from one table.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSet {
    table: Table,
    columns: Vec<String>,
    rows: Vec<Row>,
    index: Option<RowIndex>,
}

impl RowSet {
    pub fn new(table: Table, columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self {
            table,
            columns,
            rows,
            index: None,
        }
    }

    /// Re-keys the row set by `column`.
    ///
    /// # Errors
    /// - `DbError::UnknownColumn` when the table has no such column.
    /// - `DbError::InvalidData` when a key cell is null.
    /// - `DbError::DuplicateIndexKey` when two rows share a key.
    pub fn with_index(mut self, column: &str) -> DbResult<Self> {
        if !self.columns.iter().any(|name| name == column) {
            return Err(DbError::UnknownColumn {
                table: self.table.name(),
                column: column.to_string(),
            });
        }

        let mut positions = BTreeMap::new();
        for (position, row) in self.rows.iter().enumerate() {
            let key = row
                .get(column)
                .and_then(CellValue::index_key)
                .ok_or_else(|| {
                    DbError::InvalidData(format!(
                        "null index value in {}.{column}",
                        self.table.name()
                    ))
                })?;
            if positions.insert(key.clone(), position).is_some() {
                return Err(DbError::DuplicateIndexKey {
                    table: self.table.name(),
                    column: column.to_string(),
                    key,
                });
            }
        }

        self.index = Some(RowIndex {
            column: column.to_string(),
            positions,
        });
        Ok(self)
    }

    pub fn table(&self) -> Table {
        self.table
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn index_column(&self) -> Option<&str> {
        self.index.as_ref().map(|index| index.column.as_str())
    }

    /// Iterates `(key, row)` pairs in key order. Empty for unindexed sets.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Row)> {
        self.index.iter().flat_map(move |index| {
            index
                .positions
                .iter()
                .filter_map(move |(key, position)| {
                    self.rows.get(*position).map(|row| (key.as_str(), row))
                })
        })
    }

    /// Looks up a row by index key. Always `None` for unindexed sets.
    pub fn get(&self, key: &str) -> Option<&Row> {
        let index = self.index.as_ref()?;
        index
            .positions
            .get(key)
            .and_then(|position| self.rows.get(*position))
    }
}

/// Reader over the resource store bound to one country.
pub struct TableStore {
    conn: Connection,
    country: CountryCode,
}

impl TableStore {
    /// Wraps a connection that already exposes the resource tables.
    pub fn new(conn: Connection, country: CountryCode) -> Self {
        Self { conn, country }
    }

    /// Opens a resource database file for `country`.
    pub fn open(path: impl AsRef<Path>, country: CountryCode) -> DbResult<Self> {
        Ok(Self::new(open_store(path)?, country))
    }

    pub fn country(&self) -> &CountryCode {
        &self.country
    }

    /// Reads a table by physical name.
    ///
    /// # Errors
    /// - `DbError::UnknownTable` when `table_name` is not recognized.
    /// - Index errors from `RowSet::with_index`.
    pub fn read_table(
        &self,
        table_name: &str,
        country_filter: Option<&CountryCode>,
        index_column: Option<&str>,
    ) -> DbResult<RowSet> {
        let table = Table::from_name(table_name)?;
        self.read(table, country_filter, index_column)
    }

    /// Reads a recognized table.
    ///
    /// `country_filter` is ignored for tables without a country dimension.
    pub fn read(
        &self,
        table: Table,
        country_filter: Option<&CountryCode>,
        index_column: Option<&str>,
    ) -> DbResult<RowSet> {
        let started_at = Instant::now();
        match self.read_rows(table, country_filter, index_column) {
            Ok(row_set) => {
                debug!(
                    "event=table_read module=db status=ok table={} rows={} indexed={} duration_ms={}",
                    table.name(),
                    row_set.len(),
                    row_set.index_column().is_some(),
                    started_at.elapsed().as_millis()
                );
                Ok(row_set)
            }
            Err(err) => {
                error!(
                    "event=table_read module=db status=error table={} duration_ms={} error={}",
                    table.name(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    pub fn grass_data(&self, index_column: Option<&str>) -> DbResult<RowSet> {
        self.read(Table::Grass, None, index_column)
    }

    pub fn upstream_data(&self, index_column: Option<&str>) -> DbResult<RowSet> {
        self.read(Table::Upstream, None, index_column)
    }

    pub fn emissions_factor_data(&self, index_column: Option<&str>) -> DbResult<RowSet> {
        self.read(Table::EmissionsFactors, Some(&self.country), index_column)
    }

    pub fn concentrate_data(&self, index_column: Option<&str>) -> DbResult<RowSet> {
        self.read(Table::Concentrate, None, index_column)
    }

    pub fn animal_features_data(&self, index_column: Option<&str>) -> DbResult<RowSet> {
        self.read(Table::AnimalFeatures, Some(&self.country), index_column)
    }

    fn read_rows(
        &self,
        table: Table,
        country_filter: Option<&CountryCode>,
        index_column: Option<&str>,
    ) -> DbResult<RowSet> {
        let country = country_filter.filter(|_| table.is_country_scoped());
        let sql = match country {
            Some(_) => format!(
                "SELECT * FROM {} WHERE {COUNTRY_COLUMN} = ?1;",
                table.name()
            ),
            None => format!("SELECT * FROM {};", table.name()),
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut rows = match country {
            Some(code) => stmt.query([code.as_str()])?,
            None => stmt.query([])?,
        };

        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            let mut cells = BTreeMap::new();
            for (position, column) in columns.iter().enumerate() {
                let cell = parse_cell(table, column, row.get_ref(position)?)?;
                cells.insert(column.clone(), cell);
            }
            records.push(Row { cells });
        }

        let row_set = RowSet::new(table, columns, records);
        match index_column {
            Some(column) => row_set.with_index(column),
            None => Ok(row_set),
        }
    }
}

fn parse_cell(table: Table, column: &str, value: ValueRef<'_>) -> DbResult<CellValue> {
    match value {
        ValueRef::Null => Ok(CellValue::Null),
        ValueRef::Integer(value) => Ok(CellValue::Real(value as f64)),
        ValueRef::Real(value) => Ok(CellValue::Real(value)),
        ValueRef::Text(bytes) => std::str::from_utf8(bytes)
            .map(|text| CellValue::Text(text.to_string()))
            .map_err(|_| {
                DbError::InvalidData(format!(
                    "non UTF-8 text in {}.{column}",
                    table.name()
                ))
            }),
        ValueRef::Blob(_) => Err(DbError::InvalidData(format!(
            "unexpected blob in {}.{column}",
            table.name()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::{CellValue, CountryCode, Row, RowSet, Table};
    use crate::db::DbError;

    fn genus_row(genus: &str, dmd: Option<f64>) -> Row {
        Row::new([
            ("grass_genus", CellValue::Text(genus.to_string())),
            (
                "forage_dry_matter_digestibility",
                dmd.map_or(CellValue::Null, CellValue::Real),
            ),
        ])
    }

    fn grass_columns() -> Vec<String> {
        vec![
            "grass_genus".to_string(),
            "forage_dry_matter_digestibility".to_string(),
        ]
    }

    #[test]
    fn table_names_resolve_both_ways() {
        for table in Table::ALL {
            assert_eq!(Table::from_name(table.name()).expect("known table name"), table);
        }
        assert!(matches!(
            Table::from_name("sheep_database"),
            Err(DbError::UnknownTable(name)) if name == "sheep_database"
        ));
    }

    #[test]
    fn only_country_tables_are_scoped() {
        assert!(Table::EmissionsFactors.is_country_scoped());
        assert!(Table::AnimalFeatures.is_country_scoped());
        assert!(!Table::Grass.is_country_scoped());
        assert!(!Table::Upstream.is_country_scoped());
        assert!(!Table::Concentrate.is_country_scoped());
    }

    #[test]
    fn with_index_rekeys_rows_by_column() {
        let rows = RowSet::new(
            Table::Grass,
            grass_columns(),
            vec![genus_row("Lolium", Some(0.8)), genus_row("Festuca", None)],
        )
        .with_index("grass_genus")
        .expect("index rows");

        assert_eq!(rows.index_column(), Some("grass_genus"));
        let festuca = rows.get("Festuca").expect("indexed row");
        assert!(festuca.get("forage_dry_matter_digestibility").expect("column cell").is_null());
        assert_eq!(
            rows.get("Lolium").expect("indexed row").number("forage_dry_matter_digestibility"),
            Some(0.8)
        );
        assert!(rows.get("Poa").is_none());
    }

    #[test]
    fn with_index_rejects_duplicates_and_unknown_columns() {
        let duplicated = RowSet::new(
            Table::Grass,
            grass_columns(),
            vec![genus_row("Lolium", Some(0.8)), genus_row("Lolium", Some(0.7))],
        );
        assert!(matches!(
            duplicated.clone().with_index("grass_genus"),
            Err(DbError::DuplicateIndexKey { key, .. }) if key == "Lolium"
        ));
        assert!(matches!(
            duplicated.with_index("genus"),
            Err(DbError::UnknownColumn { column, .. }) if column == "genus"
        ));
    }

    #[test]
    fn numeric_keys_beyond_i64_stay_distinct() {
        let id_row = |id: f64| Row::new([("id", CellValue::Real(id))]);
        let rows = RowSet::new(
            Table::Upstream,
            vec!["id".to_string()],
            vec![id_row(1e19), id_row(2e19), id_row(3.0)],
        )
        .with_index("id")
        .expect("distinct numeric keys");

        assert_eq!(rows.len(), 3);
        assert!(rows.get("10000000000000000000").is_some());
        assert!(rows.get("20000000000000000000").is_some());
        assert!(rows.get("3").is_some());
    }

    #[test]
    fn unindexed_row_set_has_no_keyed_access() {
        let rows = RowSet::new(Table::Grass, grass_columns(), vec![genus_row("Lolium", None)]);
        assert!(rows.get("Lolium").is_none());
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn country_code_matches_exactly() {
        assert_ne!(CountryCode::new("Ireland"), CountryCode::new("ireland"));
        assert_eq!(CountryCode::from("ireland").as_str(), "ireland");
    }
}
