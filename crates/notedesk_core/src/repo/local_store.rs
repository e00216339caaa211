//! Key-value local store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide synchronous write-through persistence for the five collection
//!   keys (`notes`, `folders`, `tasks`, `settings`, `tags`).
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Every key is one row; writes are single upsert statements, so a failed
//!   write on one key cannot corrupt any other key.
//! - Values are JSON text; decode failures are surfaced, never masked.

use crate::db::{open_db, open_db_in_memory, DbError, DbResult};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type StorageResult<T> = Result<T, StorageError>;

/// Identifier of one independently persisted collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKey {
    Notes,
    Folders,
    Tasks,
    Settings,
    Tags,
}

impl StoreKey {
    /// Stable wire name used as the storage row key.
    pub fn as_str(self) -> &'static str {
        match self {
            StoreKey::Notes => "notes",
            StoreKey::Folders => "folders",
            StoreKey::Tasks => "tasks",
            StoreKey::Settings => "settings",
            StoreKey::Tags => "tags",
        }
    }
}

impl Display for StoreKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persistence error for one key operation.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    Serialize {
        key: StoreKey,
        source: serde_json::Error,
    },
    Deserialize {
        key: StoreKey,
        source: serde_json::Error,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize { key, source } => {
                write!(f, "failed to serialize `{key}` value: {source}")
            }
            Self::Deserialize { key, source } => {
                write!(f, "failed to decode persisted `{key}` value: {source}")
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize { source, .. } => Some(source),
            Self::Deserialize { source, .. } => Some(source),
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Synchronous write-through key-value persistence.
///
/// The domain store holds the authoritative in-memory state; this trait is
/// its durability seam. Implementations must keep keys independent.
pub trait LocalStore {
    /// Reads the raw JSON text stored under `key`, or `None` when absent.
    fn read(&self, key: StoreKey) -> StorageResult<Option<String>>;

    /// Writes raw JSON text under `key`, replacing any previous value.
    fn write(&mut self, key: StoreKey, value: &str) -> StorageResult<()>;

    /// Reads and decodes the value stored under `key`.
    fn load<T: DeserializeOwned>(&self, key: StoreKey) -> StorageResult<Option<T>> {
        match self.read(key)? {
            Some(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|source| StorageError::Deserialize { key, source }),
            None => Ok(None),
        }
    }

    /// Encodes and writes `value` under `key`.
    fn save<T: Serialize>(&mut self, key: StoreKey, value: &T) -> StorageResult<()> {
        let text = serde_json::to_string(value)
            .map_err(|source| StorageError::Serialize { key, source })?;
        self.write(key, &text)
    }
}

/// SQLite-backed local store. One row per key in `local_entries`.
#[derive(Debug)]
pub struct SqliteLocalStore {
    conn: Connection,
}

impl SqliteLocalStore {
    /// Wraps an already migrated connection.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Opens a file-backed store, applying pending migrations.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self::new(open_db(path)?))
    }

    /// Opens an in-memory store, applying pending migrations.
    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self::new(open_db_in_memory()?))
    }
}

impl LocalStore for SqliteLocalStore {
    fn read(&self, key: StoreKey) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM local_entries WHERE key = ?1;",
                [key.as_str()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&mut self, key: StoreKey, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO local_entries (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key.as_str(), value],
        )?;
        debug!(
            "event=store_write module=repo status=ok key={} bytes={}",
            key,
            value.len()
        );
        Ok(())
    }
}
