//! Playbill Storage Layer
//!
//! SQLite-backed persistence for the history log and the user's extraction
//! settings. The two live in separate keyspaces with different consistency
//! expectations - the history log is local-only and grows over time, the
//! settings are synced, small and rarely written - and are never conflated.
//!
//! The history log is stored as one JSON value holding the whole ordered
//! log, newest first, capped at [`HISTORY_CAPACITY`] entries. Appends are a
//! read-modify-write of that value; two concurrent appends from different
//! processes may lose an update. That race is an accepted limitation, not a
//! guarantee - within one process the connection serializes writers.
//!
//! # Examples
//!
//! ```no_run
//! use playbill_store::Store;
//!
//! let store = Store::open("playbill.db").unwrap();
//! let entries = store.history().unwrap();
//! ```

#![warn(missing_docs)]

use chrono::NaiveDate;
use playbill_domain::traits::HistoryStore;
use playbill_domain::{ExtractionSettings, HistoryEntry, HISTORY_CAPACITY};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use thiserror::Error;

const HISTORY_KEY: &str = "history";
const SETTINGS_KEY: &str = "extraction_settings";

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored value did not parse as the expected shape
    #[error("invalid stored data: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// SQLite-backed store for history and settings.
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own
/// `Store` instance.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) a store at the given database path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Open an in-memory store, useful for testing
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        let store = Self { conn };
        store.conn.execute_batch(include_str!("schema.sql"))?;
        Ok(store)
    }

    fn read_value(&self, table: &str, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row(
                &format!("SELECT value FROM {} WHERE key = ?1", table),
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_value(&self, table: &str, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            &format!("INSERT OR REPLACE INTO {} (key, value) VALUES (?1, ?2)", table),
            params![key, value],
        )?;
        Ok(())
    }

    /// Insert `entry` at the front of the history log.
    ///
    /// Read-modify-write of the whole log value; when the log exceeds
    /// [`HISTORY_CAPACITY`] after insertion, the oldest entries are evicted
    /// from the back.
    pub fn append_history(&mut self, entry: HistoryEntry) -> Result<(), StoreError> {
        let mut log = self.history()?;
        log.insert(0, entry);
        log.truncate(HISTORY_CAPACITY);

        let value = serde_json::to_string(&log)?;
        self.write_value("local_store", HISTORY_KEY, &value)
    }

    /// Full current history log, newest first
    pub fn history(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        match self.read_value("local_store", HISTORY_KEY)? {
            Some(value) => Ok(serde_json::from_str(&value)?),
            None => Ok(Vec::new()),
        }
    }

    /// Saved extraction settings, `None` when nothing was ever saved.
    ///
    /// Callers treat `None` as "use the built-in defaults".
    pub fn settings(&self) -> Result<Option<ExtractionSettings>, StoreError> {
        match self.read_value("sync_store", SETTINGS_KEY)? {
            Some(value) => Ok(Some(serde_json::from_str(&value)?)),
            None => Ok(None),
        }
    }

    /// Persist extraction settings in the sync scope
    pub fn save_settings(&mut self, settings: &ExtractionSettings) -> Result<(), StoreError> {
        let value = serde_json::to_string(settings)?;
        self.write_value("sync_store", SETTINGS_KEY, &value)
    }

    /// The full history log as an indented JSON document
    pub fn export_history(&self) -> Result<Vec<u8>, StoreError> {
        let log = self.history()?;
        Ok(serde_json::to_vec_pretty(&log)?)
    }

    /// File name for an export created on `date`
    pub fn export_file_name(date: NaiveDate) -> String {
        format!("playbill-scan-{}.json", date.format("%Y-%m-%d"))
    }
}

impl HistoryStore for Store {
    type Error = StoreError;

    fn append(&mut self, entry: HistoryEntry) -> Result<(), StoreError> {
        self.append_history(entry)
    }

    fn history(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        Store::history(self)
    }

    fn settings(&self) -> Result<Option<ExtractionSettings>, StoreError> {
        Store::settings(self)
    }

    fn save_settings(&mut self, settings: &ExtractionSettings) -> Result<(), StoreError> {
        Store::save_settings(self, settings)
    }
}
