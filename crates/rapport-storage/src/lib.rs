//! # rapport-storage
//!
//! SQLite persistence layer: one writer connection, a read pool for
//! file-backed databases, `user_version` migrations, and the query modules
//! behind every storage trait of `rapport-core`.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use rapport_core::constants::DATE_FORMAT;
use rapport_core::errors::{RapportError, RapportResult, StorageError};

/// Wrap any SQLite-level failure as `StoreUnavailable`.
pub(crate) fn to_storage_err(message: impl Into<String>) -> RapportError {
    RapportError::StoreUnavailable(StorageError::SqliteError {
        message: message.into(),
    })
}

/// Timestamps are stored as fixed-width RFC 3339 UTC text so that
/// lexical order equals chronological order and the first ten
/// characters are the UTC calendar day.
pub(crate) fn ts_to_sql(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn ts_from_sql(raw: &str) -> RapportResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| to_storage_err(format!("parse timestamp '{raw}': {e}")))
}

pub(crate) fn date_to_sql(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub(crate) fn date_from_sql(raw: &str) -> RapportResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|e| to_storage_err(format!("parse date '{raw}': {e}")))
}
