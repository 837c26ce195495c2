//! Stories and the reactions users leave on them.

use rusqlite::{params, Connection, OptionalExtension};

use rapport_core::errors::RapportResult;
use rapport_core::models::{ReactionKind, RecentReaction, Story, StoryReaction};

use crate::{to_storage_err, ts_from_sql, ts_to_sql};

pub fn insert_story(conn: &Connection, story: &Story) -> RapportResult<()> {
    conn.execute(
        "INSERT INTO stories (id, companion_id, created_at, expires_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            story.id,
            story.companion_id,
            ts_to_sql(story.created_at),
            ts_to_sql(story.expires_at),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_story(conn: &Connection, id: &str) -> RapportResult<Option<Story>> {
    let raw = conn
        .query_row(
            "SELECT id, companion_id, created_at, expires_at FROM stories WHERE id = ?1",
            params![id],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                ))
            },
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    match raw {
        None => Ok(None),
        Some((id, companion_id, created_at, expires_at)) => Ok(Some(Story {
            id,
            companion_id,
            created_at: ts_from_sql(&created_at)?,
            expires_at: ts_from_sql(&expires_at)?,
        })),
    }
}

pub fn insert_reaction(conn: &Connection, reaction: &StoryReaction) -> RapportResult<()> {
    conn.execute(
        "INSERT INTO story_reactions (id, user_id, story_id, media_id, reaction, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            reaction.id,
            reaction.user_id,
            reaction.story_id,
            reaction.media_id,
            reaction.reaction.as_str(),
            ts_to_sql(reaction.created_at),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

fn parse_kind(raw: &str) -> Option<ReactionKind> {
    match raw.parse::<ReactionKind>() {
        Ok(kind) => Some(kind),
        Err(_) => {
            tracing::warn!(reaction = raw, "skipping unknown stored reaction kind");
            None
        }
    }
}

/// Per-kind reaction counts for a user on one companion's stories.
pub fn reaction_counts(
    conn: &Connection,
    user_id: &str,
    companion_id: &str,
) -> RapportResult<Vec<(ReactionKind, u64)>> {
    let mut stmt = conn
        .prepare(
            "SELECT sr.reaction, COUNT(*)
             FROM story_reactions sr
             JOIN stories s ON sr.story_id = s.id
             WHERE sr.user_id = ?1 AND s.companion_id = ?2
             GROUP BY sr.reaction",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![user_id, companion_id], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut counts = Vec::new();
    for row in rows {
        let (raw, count) = row.map_err(|e| to_storage_err(e.to_string()))?;
        if let Some(kind) = parse_kind(&raw) {
            counts.push((kind, count.max(0) as u64));
        }
    }
    Ok(counts)
}

/// Most recent reactions first.
pub fn recent_reactions(
    conn: &Connection,
    user_id: &str,
    companion_id: &str,
    limit: usize,
) -> RapportResult<Vec<RecentReaction>> {
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    let mut stmt = conn
        .prepare(
            "SELECT sr.reaction, sr.created_at
             FROM story_reactions sr
             JOIN stories s ON sr.story_id = s.id
             WHERE sr.user_id = ?1 AND s.companion_id = ?2
             ORDER BY sr.created_at DESC, sr.rowid DESC
             LIMIT ?3",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![user_id, companion_id, limit], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut recent = Vec::new();
    for row in rows {
        let (raw, reacted_at) = row.map_err(|e| to_storage_err(e.to_string()))?;
        if let Some(reaction) = parse_kind(&raw) {
            recent.push(RecentReaction {
                reaction,
                reacted_at: ts_from_sql(&reacted_at)?,
            });
        }
    }
    Ok(recent)
}
