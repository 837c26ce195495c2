use chrono::{DateTime, Utc};

use rapport_core::models::{ConversationStats, InsightStats};

/// Whole days since the first message, counting the first day as day one.
/// Zero when there is no first message.
pub fn days_together(first_message_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> u32 {
    match first_message_at {
        None => 0,
        Some(first) => {
            let days = (now - first).num_days().max(0);
            u32::try_from(days).unwrap_or(u32::MAX - 1) + 1
        }
    }
}

/// Lift raw store counts into the public stats block.
pub fn insight_stats(raw: &ConversationStats, now: DateTime<Utc>) -> InsightStats {
    InsightStats {
        total_messages: raw.message_count,
        total_memories: raw.memory_count,
        first_message: raw.first_message_at,
        days_together: days_together(raw.first_message_at, now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn first_day_counts_as_one() {
        let first = Utc.with_ymd_and_hms(2025, 4, 1, 10, 0, 0).unwrap();
        assert_eq!(days_together(None, first), 0);
        assert_eq!(days_together(Some(first), first), 1);
        assert_eq!(days_together(Some(first), first + Duration::hours(23)), 1);
        assert_eq!(days_together(Some(first), first + Duration::hours(24)), 2);
        assert_eq!(days_together(Some(first), first + Duration::days(6)), 7);
    }

    #[test]
    fn clock_skew_is_day_one() {
        let first = Utc.with_ymd_and_hms(2025, 4, 1, 10, 0, 0).unwrap();
        assert_eq!(days_together(Some(first), first - Duration::hours(5)), 1);
    }
}
