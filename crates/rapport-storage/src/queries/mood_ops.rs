//! Daily mood snapshots.

use chrono::{Days, NaiveDate};
use rusqlite::{params, Connection};

use rapport_core::errors::RapportResult;

use crate::{date_from_sql, date_to_sql, to_storage_err};

/// Write the snapshot for a day. A repeat write on the same day overwrites.
pub fn upsert_snapshot(
    conn: &Connection,
    user_id: &str,
    companion_id: &str,
    mood_score: f64,
    date: NaiveDate,
) -> RapportResult<()> {
    conn.execute(
        "INSERT INTO mood_history (user_id, companion_id, recorded_date, mood_score)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT (user_id, companion_id, recorded_date)
         DO UPDATE SET mood_score = excluded.mood_score",
        params![user_id, companion_id, date_to_sql(date), mood_score],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Snapshots dated `today - window_days` through `today`, ascending.
pub fn get_history(
    conn: &Connection,
    user_id: &str,
    companion_id: &str,
    window_days: u32,
    today: NaiveDate,
) -> RapportResult<Vec<(NaiveDate, f64)>> {
    let since = today
        .checked_sub_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MIN);

    let mut stmt = conn
        .prepare(
            "SELECT recorded_date, mood_score FROM mood_history
             WHERE user_id = ?1 AND companion_id = ?2
               AND recorded_date >= ?3 AND recorded_date <= ?4
             ORDER BY recorded_date ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(
            params![user_id, companion_id, date_to_sql(since), date_to_sql(today)],
            |row| Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?)),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut history = Vec::new();
    for row in rows {
        let (date, score) = row.map_err(|e| to_storage_err(e.to_string()))?;
        history.push((date_from_sql(&date)?, score));
    }
    Ok(history)
}
