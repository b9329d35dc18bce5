use cattle_lca_core::db::schema::{apply_schema, schema_version};
use cattle_lca_core::db::Table;
use cattle_lca_core::{open_store, open_store_in_memory};
use rusqlite::Connection;

#[test]
fn in_memory_store_carries_every_resource_table() {
    let conn = open_store_in_memory().expect("in-memory store");

    assert_eq!(user_version(&conn), schema_version());
    for table in Table::ALL {
        assert_table_exists(&conn, table.name());
    }
}

#[test]
fn applying_schema_twice_is_idempotent() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("cattle_database.db");

    let mut conn = Connection::open(&path).expect("open store");
    apply_schema(&mut conn).expect("schema apply");
    conn.execute(
        "INSERT INTO grass_database (grass_genus, crude_protein) VALUES ('Lolium', 18.0);",
        [],
    )
    .expect("insert");
    apply_schema(&mut conn).expect("schema apply");

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM grass_database;", [], |row| row.get(0))
        .expect("query");
    assert_eq!(rows, 1);
    drop(conn);

    let conn = open_store(&path).expect("open store");
    assert_eq!(user_version(&conn), schema_version());
}

fn user_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .expect("query")
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .expect("query");
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
