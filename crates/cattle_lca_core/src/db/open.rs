//! Connection bootstrap for the resource store.
//!
//! # Responsibility
//! - Open the resource database file read-only.
//! - Refuse stores that lack any of the recognized tables.
//!
//! # Invariants
//! - File stores are never created or written by this crate.
//! - Returned connections expose all five resource tables.

use super::schema::{apply_schema, missing_tables};
use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens an existing resource database file in read-only mode.
///
/// # Errors
/// - `DbError::StoreUnavailable` when the file cannot be opened or a
///   recognized table is missing.
///
/// # Side effects
/// - Emits `store_open` logging events with duration and status.
pub fn open_store(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=store_open module=db status=start mode=file");

    let conn = match Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    ) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=store_open module=db status=error mode=file duration_ms={} error_code=store_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(DbError::StoreUnavailable {
                path: path.display().to_string(),
                reason: err.to_string(),
            });
        }
    };

    match verify_store(&conn, path) {
        Ok(()) => {
            info!(
                "event=store_open module=db status=ok mode=file duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=store_open module=db status=error mode=file duration_ms={} error_code=store_verify_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Opens an empty in-memory store carrying the canonical resource schema.
///
/// Callers seed it with their own rows before handing it to a loader.
pub fn open_store_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=store_open module=db status=start mode=memory");

    let mut conn = Connection::open_in_memory()?;
    match apply_schema(&mut conn) {
        Ok(()) => {
            info!(
                "event=store_open module=db status=ok mode=memory duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=store_open module=db status=error mode=memory duration_ms={} error_code=schema_apply_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn verify_store(conn: &Connection, path: &Path) -> DbResult<()> {
    let unavailable = |reason: String| DbError::StoreUnavailable {
        path: path.display().to_string(),
        reason,
    };

    conn.busy_timeout(Duration::from_secs(5))
        .map_err(|err| unavailable(err.to_string()))?;
    // A corrupt or non-SQLite file only fails on first read.
    let missing = missing_tables(conn).map_err(|err| unavailable(err.to_string()))?;
    if !missing.is_empty() {
        return Err(unavailable(format!(
            "missing tables: {}",
            missing.join(", ")
        )));
    }
    Ok(())
}
