//! Canonical resource-store schema and table presence checks.
//!
//! # Responsibility
//! - Hold the DDL describing the five resource tables.
//! - Verify a store exposes every table the loader reads.
//!
//! # Invariants
//! - Applied schema version is mirrored to `PRAGMA user_version`.
//! - Production stores are never altered; only fresh in-memory stores are
//!   bootstrapped from this DDL.

use crate::db::table_store::Table;
use crate::db::{DbError, DbResult};
use rusqlite::Connection;

const SCHEMA_VERSION: u32 = 1;
const SCHEMA_SQL: &str = include_str!("0001_resource_tables.sql");

/// Returns the schema version this binary creates.
pub fn schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Creates the resource tables on an empty connection.
///
/// Stores already at the current version are left untouched.
pub fn apply_schema(conn: &mut Connection) -> DbResult<()> {
    let current_version = current_user_version(conn)?;
    if current_version > SCHEMA_VERSION {
        return Err(DbError::InvalidData(format!(
            "store schema version {current_version} is newer than supported {SCHEMA_VERSION}"
        )));
    }
    if current_version == SCHEMA_VERSION {
        return Ok(());
    }

    let tx = conn.transaction()?;
    tx.execute_batch(SCHEMA_SQL)?;
    tx.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    tx.commit()?;

    Ok(())
}

/// Lists recognized tables absent from the connected store.
pub fn missing_tables(conn: &Connection) -> DbResult<Vec<&'static str>> {
    let mut stmt = conn.prepare(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
    )?;

    let mut missing = Vec::new();
    for table in Table::ALL {
        let exists: i64 = stmt.query_row([table.name()], |row| row.get(0))?;
        if exists == 0 {
            missing.push(table.name());
        }
    }
    Ok(missing)
}

fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::{apply_schema, missing_tables, schema_version};
    use rusqlite::Connection;

    #[test]
    fn apply_schema_creates_every_table_once() {
        let mut conn = Connection::open_in_memory().expect("open in memory");
        assert_eq!(missing_tables(&conn).expect("missing tables").len(), 5);

        apply_schema(&mut conn).expect("schema apply");
        apply_schema(&mut conn).expect("schema apply");

        assert!(missing_tables(&conn).expect("missing tables").is_empty());
        let version: u32 = conn
            .query_row("PRAGMA user_version;", [], |row| row.get(0))
            .expect("query");
        assert_eq!(version, schema_version());
    }

    #[test]
    fn apply_schema_rejects_newer_store() {
        let mut conn = Connection::open_in_memory().expect("open in memory");
        conn.execute_batch("PRAGMA user_version = 99;").expect("version bump");
        assert!(apply_schema(&mut conn).is_err());
    }
}
