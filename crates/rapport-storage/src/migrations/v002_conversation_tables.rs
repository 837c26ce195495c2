//! v002: companions, messages, memories.

use rusqlite::Connection;

use rapport_core::errors::RapportResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> RapportResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS companions (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            avatar_url  TEXT NOT NULL DEFAULT '',
            personality TEXT NOT NULL DEFAULT '',
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS messages (
            id           TEXT PRIMARY KEY,
            user_id      TEXT NOT NULL,
            companion_id TEXT NOT NULL,
            content      TEXT NOT NULL,
            role         TEXT NOT NULL CHECK (role IN ('user', 'companion')),
            is_memorized INTEGER NOT NULL DEFAULT 0,
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_messages_conversation
            ON messages(user_id, companion_id, created_at);

        CREATE TABLE IF NOT EXISTS memories (
            id           TEXT PRIMARY KEY,
            user_id      TEXT NOT NULL,
            companion_id TEXT NOT NULL,
            message_id   TEXT,
            content      TEXT NOT NULL,
            tag          TEXT,
            pinned       INTEGER NOT NULL DEFAULT 0,
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_memories_pair ON memories(user_id, companion_id);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
