//! Schema migration registry and executor.
//!
//! # Invariants
//! - Registered versions are strictly increasing.
//! - The applied version is mirrored to `PRAGMA user_version`.
//! - Application data is never touched before migrations succeed.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

/// Registered migrations, oldest first. The executor applies everything
/// newer than the database's recorded version inside one transaction.
const MIGRATIONS: &[(u32, &str)] = &[(1, include_str!("0001_local_entries.sql"))];

/// Returns the newest migration version this binary knows.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |(version, _)| *version)
}

/// Brings the connection's schema up to [`latest_version`].
///
/// # Errors
/// - `DbError::UnsupportedSchemaVersion` when the database was written by a
///   newer binary than this one.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let recorded = recorded_version(conn)?;
    let latest = latest_version();

    if recorded > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: recorded,
            latest_supported: latest,
        });
    }

    let pending: Vec<&(u32, &str)> = MIGRATIONS
        .iter()
        .filter(|(version, _)| *version > recorded)
        .collect();
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (version, sql) in pending {
        tx.execute_batch(sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {version};"))?;
    }
    tx.commit()?;

    Ok(())
}

fn recorded_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?)
}
