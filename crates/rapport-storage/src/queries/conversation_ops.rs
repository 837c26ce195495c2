//! Companions, messages, memories, and the aggregate reads built on them.

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use rapport_core::errors::{RapportError, RapportResult};
use rapport_core::models::{Companion, ConversationStats, Memory, Message, MessageRole};

use crate::{date_from_sql, to_storage_err, ts_from_sql, ts_to_sql};

pub fn insert_companion(conn: &Connection, companion: &Companion) -> RapportResult<()> {
    conn.execute(
        "INSERT INTO companions (id, name, description, avatar_url, personality, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            companion.id,
            companion.name,
            companion.description,
            companion.avatar_url,
            companion.personality,
            ts_to_sql(companion.created_at),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_companion(conn: &Connection, id: &str) -> RapportResult<Option<Companion>> {
    let raw = conn
        .query_row(
            "SELECT id, name, description, avatar_url, personality, created_at
             FROM companions WHERE id = ?1",
            params![id],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, String>(5)?,
                ))
            },
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    match raw {
        None => Ok(None),
        Some((id, name, description, avatar_url, personality, created_at)) => Ok(Some(Companion {
            id,
            name,
            description,
            avatar_url,
            personality,
            created_at: ts_from_sql(&created_at)?,
        })),
    }
}

pub fn insert_message(conn: &Connection, message: &Message) -> RapportResult<()> {
    conn.execute(
        "INSERT INTO messages (id, user_id, companion_id, content, role, is_memorized, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            message.id,
            message.user_id,
            message.companion_id,
            message.content,
            message.role.as_str(),
            message.is_memorized,
            ts_to_sql(message.created_at),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

fn parse_role(raw: &str) -> RapportResult<MessageRole> {
    match raw {
        "user" => Ok(MessageRole::User),
        "companion" => Ok(MessageRole::Companion),
        other => Err(to_storage_err(format!("unknown message role '{other}'"))),
    }
}

/// Newest first. Ties on `created_at` fall back to insertion order.
pub fn recent_messages(
    conn: &Connection,
    user_id: &str,
    companion_id: &str,
    limit: usize,
) -> RapportResult<Vec<Message>> {
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    let mut stmt = conn
        .prepare(
            "SELECT id, user_id, companion_id, content, role, is_memorized, created_at
             FROM messages
             WHERE user_id = ?1 AND companion_id = ?2
             ORDER BY created_at DESC, rowid DESC
             LIMIT ?3",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![user_id, companion_id, limit], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, bool>(5)?,
                row.get::<_, String>(6)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut messages = Vec::new();
    for row in rows {
        let (id, user_id, companion_id, content, role, is_memorized, created_at) =
            row.map_err(|e| to_storage_err(e.to_string()))?;
        messages.push(Message {
            id,
            user_id,
            companion_id,
            content,
            role: parse_role(&role)?,
            is_memorized,
            created_at: ts_from_sql(&created_at)?,
        });
    }
    Ok(messages)
}

/// Insert a memory. When it points at a message, that message is flagged
/// as memorized in the same transaction.
pub fn insert_memory(conn: &Connection, memory: &Memory) -> RapportResult<()> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(e.to_string()))?;

    tx.execute(
        "INSERT INTO memories (id, user_id, companion_id, message_id, content, tag, pinned, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            memory.id,
            memory.user_id,
            memory.companion_id,
            memory.message_id,
            memory.content,
            memory.tag,
            memory.pinned,
            ts_to_sql(memory.created_at),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    if let Some(message_id) = &memory.message_id {
        let changed = tx
            .execute(
                "UPDATE messages SET is_memorized = 1
                 WHERE id = ?1 AND user_id = ?2 AND companion_id = ?3",
                params![message_id, memory.user_id, memory.companion_id],
            )
            .map_err(|e| to_storage_err(e.to_string()))?;
        if changed == 0 {
            return Err(RapportError::invalid(format!(
                "message '{message_id}' does not belong to this conversation"
            )));
        }
    }

    tx.commit().map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Distinct UTC days on which the user sent at least one message, newest first.
pub fn distinct_user_message_dates(
    conn: &Connection,
    user_id: &str,
    companion_id: &str,
) -> RapportResult<Vec<NaiveDate>> {
    let mut stmt = conn
        .prepare(
            "SELECT DISTINCT substr(created_at, 1, 10) AS msg_date
             FROM messages
             WHERE user_id = ?1 AND companion_id = ?2 AND role = 'user'
             ORDER BY msg_date DESC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![user_id, companion_id], |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut dates = Vec::new();
    for row in rows {
        let raw = row.map_err(|e| to_storage_err(e.to_string()))?;
        dates.push(date_from_sql(&raw)?);
    }
    Ok(dates)
}

/// Message and memory totals plus the earliest message of either role.
pub fn conversation_stats(
    conn: &Connection,
    user_id: &str,
    companion_id: &str,
) -> RapportResult<ConversationStats> {
    let (messages, memories, first): (i64, i64, Option<String>) = conn
        .query_row(
            "SELECT
                (SELECT count(*) FROM messages WHERE user_id = ?1 AND companion_id = ?2),
                (SELECT count(*) FROM memories WHERE user_id = ?1 AND companion_id = ?2),
                (SELECT min(created_at) FROM messages WHERE user_id = ?1 AND companion_id = ?2)",
            params![user_id, companion_id],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(ConversationStats {
        message_count: messages.max(0) as u64,
        memory_count: memories.max(0) as u64,
        first_message_at: first.as_deref().map(ts_from_sql).transpose()?,
    })
}
