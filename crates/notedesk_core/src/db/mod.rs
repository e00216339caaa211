//! SQLite storage bootstrap and schema migration entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the Notedesk core.
//! - Apply schema migrations in deterministic order.
//! - Resolve the default on-disk database location.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Core code must not read/write application data before migrations succeed.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Resolves the default database file location.
///
/// `NOTEDESK_DB` overrides the full path; otherwise the database lives at
/// `$HOME/.notedesk/notedesk.db`.
///
/// # Errors
/// - Returns an error when neither `NOTEDESK_DB` nor `HOME` is set.
pub fn default_store_path() -> Result<PathBuf, String> {
    resolve_store_path(
        std::env::var_os("NOTEDESK_DB"),
        std::env::var_os("HOME"),
    )
}

/// Pure resolution over already-read environment values, so callers and
/// tests can supply them without touching the process environment.
fn resolve_store_path(
    override_path: Option<std::ffi::OsString>,
    home: Option<std::ffi::OsString>,
) -> Result<PathBuf, String> {
    if let Some(path) = override_path {
        return Ok(PathBuf::from(path));
    }
    let home = home.ok_or_else(|| "HOME not set; set NOTEDESK_DB explicitly".to_string())?;
    Ok(PathBuf::from(home).join(".notedesk").join("notedesk.db"))
}
