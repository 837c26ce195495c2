//! Aggregate reads: mood history window, interaction dates, stats, reactions.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use rapport_core::models::{
    Companion, Memory, Message, MessageRole, ReactionKind, Story, StoryReaction,
};
use rapport_core::traits::{IConversationStorage, IInsightsStorage, IStoryStorage};
use rapport_storage::StorageEngine;

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, day, hour, 0, 0).unwrap()
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
}

fn seeded() -> StorageEngine {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine
        .register_companion(&Companion {
            id: "c1".into(),
            name: "Mira".into(),
            description: "A calm listener".into(),
            avatar_url: String::new(),
            personality: "introspective and warm".into(),
            created_at: at(1, 0),
        })
        .unwrap();
    engine
}

fn story(id: &str, companion_id: &str) -> Story {
    Story {
        id: id.into(),
        companion_id: companion_id.into(),
        created_at: at(1, 0),
        expires_at: at(2, 0),
    }
}

fn react(engine: &StorageEngine, story_id: &str, kind: ReactionKind, when: DateTime<Utc>) {
    engine
        .create_reaction(&StoryReaction {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: "u1".into(),
            story_id: story_id.into(),
            media_id: "m1".into(),
            reaction: kind,
            created_at: when,
        })
        .unwrap();
}

#[test]
fn mood_snapshot_upsert_keeps_one_row_per_day() {
    let engine = seeded();
    engine.upsert_mood_snapshot("u1", "c1", 40.0, date(10)).unwrap();
    engine.upsert_mood_snapshot("u1", "c1", 55.0, date(10)).unwrap();
    engine.upsert_mood_snapshot("u1", "c1", 60.0, date(11)).unwrap();

    let history = engine.get_mood_history("u1", "c1", 14, date(11)).unwrap();
    assert_eq!(history, vec![(date(10), 55.0), (date(11), 60.0)]);
}

#[test]
fn mood_history_respects_window_and_is_ascending() {
    let engine = seeded();
    for day in [1, 5, 16, 20] {
        engine
            .upsert_mood_snapshot("u1", "c1", f64::from(day), date(day))
            .unwrap();
    }
    // Another pair must not leak in.
    engine.upsert_mood_snapshot("u2", "c1", 99.0, date(19)).unwrap();

    let history = engine.get_mood_history("u1", "c1", 14, date(20)).unwrap();
    let days: Vec<NaiveDate> = history.iter().map(|(d, _)| *d).collect();
    assert_eq!(days, vec![date(16), date(20)]);

    let wide = engine.get_mood_history("u1", "c1", 19, date(20)).unwrap();
    assert_eq!(wide.len(), 4);
}

#[test]
fn interaction_dates_are_distinct_user_days_descending() {
    let engine = seeded();
    for (day, hour, role) in [
        (3, 9, MessageRole::User),
        (3, 22, MessageRole::User),
        (4, 10, MessageRole::Companion),
        (5, 23, MessageRole::User),
        (1, 8, MessageRole::User),
    ] {
        engine
            .create_message(&Message::new("u1", "c1", "hi", role, at(day, hour)))
            .unwrap();
    }

    let dates = engine.get_distinct_interaction_dates("u1", "c1").unwrap();
    assert_eq!(dates, vec![date(5), date(3), date(1)]);
    assert!(engine
        .get_distinct_interaction_dates("u1", "other")
        .unwrap()
        .is_empty());
}

#[test]
fn stats_count_both_roles_and_memories() {
    let engine = seeded();
    assert_eq!(engine.get_stats("u1", "c1").unwrap().message_count, 0);
    assert!(engine.get_stats("u1", "c1").unwrap().first_message_at.is_none());

    let first = Message::new("u1", "c1", "hello", MessageRole::User, at(2, 7));
    engine.create_message(&first).unwrap();
    engine
        .create_message(&Message::new("u1", "c1", "hey!", MessageRole::Companion, at(2, 8)))
        .unwrap();
    engine
        .create_memory(&Memory {
            id: "mem1".into(),
            user_id: "u1".into(),
            companion_id: "c1".into(),
            message_id: Some(first.id.clone()),
            content: "likes tea".into(),
            tag: Some("preference".into()),
            pinned: false,
            created_at: at(2, 9),
        })
        .unwrap();

    let stats = engine.get_stats("u1", "c1").unwrap();
    assert_eq!(stats.message_count, 2);
    assert_eq!(stats.memory_count, 1);
    assert_eq!(stats.first_message_at, Some(at(2, 7)));

    let recent = engine.recent_messages("u1", "c1", 10).unwrap();
    assert_eq!(recent[0].content, "hey!");
    assert!(recent[1].is_memorized);
}

#[test]
fn memory_for_foreign_message_is_rejected() {
    let engine = seeded();
    let msg = Message::new("u2", "c1", "not yours", MessageRole::User, at(2, 7));
    engine.create_message(&msg).unwrap();

    let err = engine
        .create_memory(&Memory {
            id: "mem1".into(),
            user_id: "u1".into(),
            companion_id: "c1".into(),
            message_id: Some(msg.id),
            content: "x".into(),
            tag: None,
            pinned: false,
            created_at: at(2, 9),
        })
        .unwrap_err();
    assert!(err.is_client_error());
    assert_eq!(engine.get_stats("u1", "c1").unwrap().memory_count, 0);
}

#[test]
fn recent_messages_limit_newest_first() {
    let engine = seeded();
    for i in 0..5 {
        engine
            .create_message(&Message::new(
                "u1",
                "c1",
                format!("m{i}"),
                MessageRole::User,
                at(3, 0) + Duration::minutes(i),
            ))
            .unwrap();
    }
    let recent: Vec<String> = engine
        .recent_messages("u1", "c1", 3)
        .unwrap()
        .into_iter()
        .map(|m| m.content)
        .collect();
    assert_eq!(recent, vec!["m4", "m3", "m2"]);
}

#[test]
fn reactions_are_scoped_to_the_companion() {
    let engine = seeded();
    engine.create_story(&story("s1", "c1")).unwrap();
    engine.create_story(&story("s2", "c2")).unwrap();
    assert_eq!(engine.get_story("s1").unwrap().unwrap().companion_id, "c1");
    assert!(engine.get_story("missing").unwrap().is_none());

    react(&engine, "s1", ReactionKind::Love, at(4, 1));
    react(&engine, "s1", ReactionKind::Love, at(4, 2));
    react(&engine, "s1", ReactionKind::Sad, at(4, 3));
    react(&engine, "s2", ReactionKind::Angry, at(4, 4));

    let mut counts = engine.get_reaction_counts("u1", "c1").unwrap();
    counts.sort();
    assert_eq!(counts, vec![(ReactionKind::Love, 2), (ReactionKind::Sad, 1)]);

    let recent = engine.get_recent_reactions("u1", "c1", 2).unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].reaction, ReactionKind::Sad);
    assert_eq!(recent[0].reacted_at, at(4, 3));
    assert_eq!(recent[1].reaction, ReactionKind::Love);
}
