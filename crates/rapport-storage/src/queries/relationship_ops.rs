//! Relationship state CRUD and the atomic add-then-clamp update.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};

use rapport_core::errors::{RapportError, RapportResult};
use rapport_core::models::RelationshipState;
use rapport_core::score::Score;

use crate::{to_storage_err, ts_from_sql, ts_to_sql};

const STATE_COLUMNS: &str = "id, user_id, companion_id, mood_score, relationship_score,
                             last_interaction_at, updated_at";

/// Raw row before timestamp parsing.
type StateRow = (String, String, String, f64, f64, String, String);

fn read_row(row: &Row<'_>) -> rusqlite::Result<StateRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
    ))
}

fn into_state(raw: StateRow) -> RapportResult<RelationshipState> {
    let (id, user_id, companion_id, mood, relationship, last_interaction, updated) = raw;
    Ok(RelationshipState {
        id,
        user_id,
        companion_id,
        mood_score: Score::new(mood),
        relationship_score: Score::new(relationship),
        last_interaction_at: ts_from_sql(&last_interaction)?,
        updated_at: ts_from_sql(&updated)?,
    })
}

/// Insert a new state. A second state for the same pair is `AlreadyExists`.
pub fn insert_state(conn: &Connection, state: &RelationshipState) -> RapportResult<()> {
    let result = conn.execute(
        "INSERT INTO relationship_states (
            id, user_id, companion_id, mood_score, relationship_score,
            last_interaction_at, updated_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            state.id,
            state.user_id,
            state.companion_id,
            state.mood_score.value(),
            state.relationship_score.value(),
            ts_to_sql(state.last_interaction_at),
            ts_to_sql(state.updated_at),
        ],
    );

    match result {
        Ok(_) => Ok(()),
        Err(rusqlite::Error::SqliteFailure(err, _))
            if err.code == ErrorCode::ConstraintViolation =>
        {
            Err(RapportError::AlreadyExists {
                user_id: state.user_id.clone(),
                companion_id: state.companion_id.clone(),
            })
        }
        Err(e) => Err(to_storage_err(e.to_string())),
    }
}

/// Get the stored state for a pair.
pub fn get_state(
    conn: &Connection,
    user_id: &str,
    companion_id: &str,
) -> RapportResult<Option<RelationshipState>> {
    let raw = conn
        .query_row(
            &format!(
                "SELECT {STATE_COLUMNS} FROM relationship_states
                 WHERE user_id = ?1 AND companion_id = ?2"
            ),
            params![user_id, companion_id],
            read_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    raw.map(into_state).transpose()
}

/// All states of a user, most recently updated first.
pub fn list_states(conn: &Connection, user_id: &str) -> RapportResult<Vec<RelationshipState>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {STATE_COLUMNS} FROM relationship_states
             WHERE user_id = ?1
             ORDER BY updated_at DESC, id ASC"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![user_id], read_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut states = Vec::new();
    for row in rows {
        let raw = row.map_err(|e| to_storage_err(e.to_string()))?;
        states.push(into_state(raw)?);
    }
    Ok(states)
}

/// Overwrite scores and timestamps of an existing state, keyed by id.
pub fn update_state(conn: &Connection, state: &RelationshipState) -> RapportResult<()> {
    let changed = conn
        .execute(
            "UPDATE relationship_states
             SET mood_score = ?1, relationship_score = ?2,
                 last_interaction_at = ?3, updated_at = ?4
             WHERE id = ?5",
            params![
                state.mood_score.value(),
                state.relationship_score.value(),
                ts_to_sql(state.last_interaction_at),
                ts_to_sql(state.updated_at),
                state.id,
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    if changed == 0 {
        return Err(RapportError::RelationshipNotFound {
            user_id: state.user_id.clone(),
            companion_id: state.companion_id.clone(),
        });
    }
    Ok(())
}

/// Add deltas and clamp to [0, 100] in a single statement, so concurrent
/// events on the same pair cannot lose each other's increments.
pub fn apply_delta(
    conn: &Connection,
    user_id: &str,
    companion_id: &str,
    mood_delta: f64,
    relationship_delta: f64,
    now: DateTime<Utc>,
) -> RapportResult<Option<RelationshipState>> {
    let raw = conn
        .query_row(
            &format!(
                "UPDATE relationship_states
                 SET mood_score = MIN(100.0, MAX(0.0, mood_score + ?3)),
                     relationship_score = MIN(100.0, MAX(0.0, relationship_score + ?4)),
                     last_interaction_at = ?5,
                     updated_at = ?5
                 WHERE user_id = ?1 AND companion_id = ?2
                 RETURNING {STATE_COLUMNS}"
            ),
            params![user_id, companion_id, mood_delta, relationship_delta, ts_to_sql(now)],
            read_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    raw.map(into_state).transpose()
}
