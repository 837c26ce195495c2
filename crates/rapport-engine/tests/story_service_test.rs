mod common;

use chrono::Duration;
use common::{failing_writes, harness, t0};
use rapport_core::errors::RapportError;
use rapport_core::models::ReactionKind;
use rapport_core::traits::IInsightsStorage;

#[test]
fn reaction_is_recorded_and_credited() {
    let h = harness();
    h.runtime.relationships.create("u1", "c1").unwrap();

    let record = h
        .runtime
        .stories
        .react_to_story("u1", "s1", "media-1", "heart_eyes")
        .unwrap();
    assert_eq!(record.reaction, ReactionKind::HeartEyes);
    assert_eq!(record.created_at, t0());

    let view = h.runtime.relationships.get_decayed("u1", "c1").unwrap();
    assert_eq!(view.state.mood_score.value(), 53.0);
    assert_eq!(view.state.relationship_score.value(), 2.0);

    let history = h
        .runtime
        .storage
        .get_mood_history("u1", "c1", 14, t0().date_naive())
        .unwrap();
    assert_eq!(history, vec![(t0().date_naive(), 53.0)]);
}

#[test]
fn same_day_reactions_overwrite_the_snapshot() {
    let h = harness();
    h.runtime.relationships.create("u1", "c1").unwrap();
    h.runtime.stories.react_to_story("u1", "s1", "m", "love").unwrap();
    h.clock.advance(Duration::hours(3));
    h.runtime.stories.react_to_story("u1", "s1", "m", "sad").unwrap();

    let history = h
        .runtime
        .storage
        .get_mood_history("u1", "c1", 14, t0().date_naive())
        .unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].1, 56.0);
}

#[test]
fn unknown_reaction_is_rejected_before_any_write() {
    let h = harness();
    h.runtime.relationships.create("u1", "c1").unwrap();

    let err = h
        .runtime
        .stories
        .react_to_story("u1", "s1", "m", "thumbs_up")
        .unwrap_err();
    assert!(matches!(err, RapportError::InvalidInput { .. }));

    // Even for a missing story, validation runs first.
    let err = h
        .runtime
        .stories
        .react_to_story("u1", "nope", "m", "thumbs_up")
        .unwrap_err();
    assert!(matches!(err, RapportError::InvalidInput { .. }));

    assert!(h.runtime.storage.get_reaction_counts("u1", "c1").unwrap().is_empty());
    let view = h.runtime.relationships.get_decayed("u1", "c1").unwrap();
    assert_eq!(view.state.relationship_score.value(), 0.0);
}

#[test]
fn missing_story_is_not_found() {
    let h = harness();
    let err = h
        .runtime
        .stories
        .react_to_story("u1", "nope", "m", "love")
        .unwrap_err();
    assert!(matches!(err, RapportError::StoryNotFound { .. }));
    assert!(err.is_not_found());
}

#[test]
fn reaction_without_relationship_skips_scoring() {
    let h = harness();
    h.runtime.stories.react_to_story("u1", "s1", "m", "angry").unwrap();

    assert!(h.runtime.relationships.find_decayed("u1", "c1").unwrap().is_none());
    assert_eq!(
        h.runtime.storage.get_reaction_counts("u1", "c1").unwrap(),
        vec![(ReactionKind::Angry, 1)]
    );
    assert!(h
        .runtime
        .storage
        .get_mood_history("u1", "c1", 14, t0().date_naive())
        .unwrap()
        .is_empty());
}

#[test]
fn failed_relationship_write_keeps_the_reaction() {
    let h = harness();
    h.runtime.relationships.create("u1", "c1").unwrap();
    let failing = failing_writes(&h);

    let record = failing
        .stories
        .react_to_story("u1", "s1", "media-1", "love")
        .unwrap();
    assert_eq!(record.reaction, ReactionKind::Love);

    let counts = h.runtime.storage.get_reaction_counts("u1", "c1").unwrap();
    assert_eq!(counts, vec![(ReactionKind::Love, 1)]);

    let history = h
        .runtime
        .storage
        .get_mood_history("u1", "c1", 14, t0().date_naive())
        .unwrap();
    assert!(history.is_empty());

    let view = failing.relationships.get_decayed("u1", "c1").unwrap();
    assert_eq!(view.state.mood_score.value(), 50.0);
}
