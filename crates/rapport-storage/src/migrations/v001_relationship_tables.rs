//! v001: relationship_states, one row per (user, companion).

use rusqlite::Connection;

use rapport_core::errors::RapportResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> RapportResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS relationship_states (
            id                  TEXT PRIMARY KEY,
            user_id             TEXT NOT NULL,
            companion_id        TEXT NOT NULL,
            mood_score          REAL NOT NULL CHECK (mood_score BETWEEN 0 AND 100),
            relationship_score  REAL NOT NULL CHECK (relationship_score BETWEEN 0 AND 100),
            last_interaction_at TEXT NOT NULL,
            updated_at          TEXT NOT NULL,
            UNIQUE (user_id, companion_id)
        );

        CREATE INDEX IF NOT EXISTS idx_relationship_user_updated
            ON relationship_states(user_id, updated_at);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
