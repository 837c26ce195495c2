//! Schema migrations using PRAGMA user_version.

pub mod v001_relationship_tables;
pub mod v002_conversation_tables;
pub mod v003_story_tables;
pub mod v004_mood_history;

use rusqlite::Connection;

use rapport_core::errors::{RapportResult, StorageError};

type MigrationFn = fn(&Connection) -> RapportResult<()>;

const MIGRATIONS: &[(u32, MigrationFn)] = &[
    (1, v001_relationship_tables::migrate),
    (2, v002_conversation_tables::migrate),
    (3, v003_story_tables::migrate),
    (4, v004_mood_history::migrate),
];

/// Latest schema version known to this build.
pub const LATEST_VERSION: u32 = 4;

/// Run all pending migrations.
pub fn run_migrations(conn: &Connection) -> RapportResult<()> {
    let current = current_version(conn)?;

    for (version, migrate) in MIGRATIONS {
        if current < *version {
            migrate(conn).map_err(|e| StorageError::MigrationFailed {
                version: *version,
                reason: e.to_string(),
            })?;
            conn.pragma_update(None, "user_version", version)
                .map_err(|e| StorageError::MigrationFailed {
                    version: *version,
                    reason: e.to_string(),
                })?;
            tracing::info!(version = version, "applied migration");
        }
    }

    Ok(())
}

/// Get the current schema version.
pub fn current_version(conn: &Connection) -> RapportResult<u32> {
    let version = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;
    Ok(version)
}
