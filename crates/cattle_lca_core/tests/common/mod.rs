#![allow(dead_code)]

use cattle_lca_core::db::schema::apply_schema;
use cattle_lca_core::open_store_in_memory;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub const SEED_SQL: &str = include_str!("../fixtures/resource_seed.sql");

/// In-memory store with the `ireland` and `france` seed rows.
pub fn seeded_memory_store() -> Connection {
    let conn = open_store_in_memory().expect("in-memory store");
    conn.execute_batch(SEED_SQL).expect("seed rows");
    conn
}

/// Writes a seeded resource database file under `dir`.
pub fn seeded_file_store(dir: &Path) -> PathBuf {
    let path = dir.join("cattle_database.db");
    let mut conn = Connection::open(&path).expect("open store");
    apply_schema(&mut conn).expect("schema apply");
    conn.execute_batch(SEED_SQL).expect("seed rows");
    path
}
