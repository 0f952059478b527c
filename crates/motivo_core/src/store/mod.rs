//! Record store: list-under-key persistence shared by every screen.
//!
//! # Responsibility
//! - Define the storage contract screens load/save their record lists with.
//! - Keep JSON encoding details out of the service layer.
//!
//! # Invariants
//! - `load` fails soft: missing key, read failure, or malformed JSON all
//!   yield an empty list and a logged warning, never an error.
//! - `save` serializes the full list and writes it in one statement; write
//!   failures surface to the caller unretried.

use crate::db::DbError;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod sqlite;

pub use sqlite::SqliteRecordStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for record store operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// Record list could not be encoded to JSON.
    Serialize {
        key: String,
        source: serde_json::Error,
    },
    /// Connection has not been migrated to the supported schema version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Migrated schema is missing a table this store requires.
    MissingRequiredTable(&'static str),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize { key, source } => {
                write!(f, "failed to encode records for key `{key}`: {source}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize { source, .. } => Some(source),
            Self::UninitializedConnection { .. } | Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage contract for screen record lists and settings scalars.
///
/// Implementations persist raw strings; the provided `load`/`save` methods
/// layer JSON record-list encoding on top.
pub trait RecordStore {
    /// Reads the raw value stored under `key`, if any.
    fn get_raw(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set_raw(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes `key`; removing an absent key is a no-op.
    fn remove(&self, key: &str) -> StoreResult<()>;

    /// Loads the record list stored under `key`.
    ///
    /// Fail-soft by contract: any read or decode problem is logged and
    /// reported as an empty list, matching first-run state.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T>
    where
        Self: Sized,
    {
        let raw = match self.get_raw(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("event=store_load module=store status=error key={key} error={err}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(err) => {
                warn!(
                    "event=store_load module=store status=malformed key={key} error={err}"
                );
                Vec::new()
            }
        }
    }

    /// Serializes `records` as a JSON array and writes it under `key`.
    fn save<T: Serialize>(&self, key: &str, records: &[T]) -> StoreResult<()>
    where
        Self: Sized,
    {
        let payload = serde_json::to_string(records).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.set_raw(key, &payload)
    }
}
