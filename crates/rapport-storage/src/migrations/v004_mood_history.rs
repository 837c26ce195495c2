//! v004: mood_history, one snapshot per (user, companion, day).

use rusqlite::Connection;

use rapport_core::errors::RapportResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> RapportResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS mood_history (
            user_id       TEXT NOT NULL,
            companion_id  TEXT NOT NULL,
            recorded_date TEXT NOT NULL,
            mood_score    REAL NOT NULL,
            PRIMARY KEY (user_id, companion_id, recorded_date)
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
