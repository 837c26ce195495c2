use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rapport_core::models::*;
use rapport_core::score::{clamp_score, Score};

#[test]
fn clamp_bounds_extremes() {
    assert_eq!(clamp_score(-5.0), 0.0);
    assert_eq!(clamp_score(150.0), 100.0);
    assert_eq!(clamp_score(42.5), 42.5);
    assert_eq!(clamp_score(f64::NAN), 0.0);
    assert_eq!(clamp_score(f64::INFINITY), 100.0);
}

#[test]
fn score_adjusted_saturates() {
    let s = Score::new(98.0);
    assert_eq!(s.adjusted(2.0).value(), 100.0);
    assert_eq!((s + 5.0).value(), 100.0);
    assert_eq!(Score::new(1.0).adjusted(-3.0), Score::MIN);
}

#[test]
fn score_deserialization_clamps() {
    let high: Score = serde_json::from_str("150.0").unwrap();
    assert_eq!(high.value(), 100.0);
    let low: Score = serde_json::from_str("-7.5").unwrap();
    assert_eq!(low.value(), 0.0);
    let inside: Score = serde_json::from_str("42.5").unwrap();
    assert_eq!(inside.value(), 42.5);
    assert_eq!(serde_json::to_string(&inside).unwrap(), "42.5");
}

#[test]
fn relationship_state_deserialization_clamps_scores() {
    let json = r#"{
        "id": "r1",
        "user_id": "u1",
        "companion_id": "c1",
        "mood_score": 250.0,
        "relationship_score": -40.0,
        "last_interaction_at": "2025-03-01T12:00:00Z",
        "updated_at": "2025-03-01T12:00:00Z"
    }"#;
    let state: RelationshipState = serde_json::from_str(json).unwrap();
    assert_eq!(state.mood_score, Score::MAX);
    assert_eq!(state.relationship_score, Score::MIN);
}

proptest! {
    #[test]
    fn clamp_is_bounded_and_idempotent(v in proptest::num::f64::ANY) {
        let once = clamp_score(v);
        prop_assert!((0.0..=100.0).contains(&once));
        prop_assert_eq!(clamp_score(once), once);
    }
}

#[test]
fn reaction_kind_parses_vocabulary() {
    assert_eq!("love".parse::<ReactionKind>().unwrap(), ReactionKind::Love);
    assert_eq!("heart_eyes".parse::<ReactionKind>().unwrap(), ReactionKind::HeartEyes);
    let err = "laugh".parse::<ReactionKind>().unwrap_err();
    assert!(err.is_client_error());
}

#[test]
fn reaction_kind_serializes_snake_case() {
    let json = serde_json::to_string(&ReactionKind::HeartEyes).unwrap();
    assert_eq!(json, "\"heart_eyes\"");
}

#[test]
fn relationship_view_flattens_state_fields() {
    let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    let view = RelationshipView {
        state: RelationshipState::new("u1", "c1", 50.0, 0.0, now),
        mood_label: MoodLabel::Happy,
    };
    let value = serde_json::to_value(&view).unwrap();
    assert_eq!(value["user_id"], "u1");
    assert_eq!(value["mood_score"], 50.0);
    assert_eq!(value["mood_label"], "Happy");
}

#[test]
fn new_state_clamps_initial_scores() {
    let now = Utc::now();
    let state = RelationshipState::new("u", "c", 140.0, -3.0, now);
    assert_eq!(state.mood_score.value(), 100.0);
    assert_eq!(state.relationship_score.value(), 0.0);
    assert_eq!(state.last_interaction_at, now);
}
