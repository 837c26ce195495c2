//! v003: stories, story_reactions.

use rusqlite::Connection;

use rapport_core::errors::RapportResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> RapportResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS stories (
            id           TEXT PRIMARY KEY,
            companion_id TEXT NOT NULL,
            created_at   TEXT NOT NULL,
            expires_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_stories_companion ON stories(companion_id);

        CREATE TABLE IF NOT EXISTS story_reactions (
            id         TEXT PRIMARY KEY,
            user_id    TEXT NOT NULL,
            story_id   TEXT NOT NULL REFERENCES stories(id) ON DELETE CASCADE,
            media_id   TEXT NOT NULL,
            reaction   TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_reactions_user ON story_reactions(user_id, created_at);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
