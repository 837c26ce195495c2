use chrono::{DateTime, Utc};

use rapport_core::config::ScoringConfig;
use rapport_core::models::{MoodLabel, RelationshipState, RelationshipView};
use rapport_core::score::Score;

use crate::decay::DecayFunction;
use crate::events::EventScorer;
use crate::mood::MoodClassifier;

/// The scoring tables built once from config and shared by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringEngine {
    classifier: MoodClassifier,
    decay: DecayFunction,
    events: EventScorer,
    initial_mood: f64,
    initial_relationship: f64,
}

impl ScoringEngine {
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            classifier: MoodClassifier::new(config.thresholds),
            decay: DecayFunction::new(config.mood_decay_per_hour),
            events: EventScorer::from_config(config),
            initial_mood: config.initial_mood,
            initial_relationship: config.initial_relationship,
        }
    }

    pub fn classifier(&self) -> &MoodClassifier {
        &self.classifier
    }

    pub fn decay(&self) -> &DecayFunction {
        &self.decay
    }

    pub fn events(&self) -> &EventScorer {
        &self.events
    }

    pub fn label(&self, score: f64) -> MoodLabel {
        self.classifier.label(score)
    }

    /// Initial state for a newly selected companion.
    pub fn initial_state(
        &self,
        user_id: &str,
        companion_id: &str,
        now: DateTime<Utc>,
    ) -> RelationshipState {
        RelationshipState::new(
            user_id,
            companion_id,
            self.initial_mood,
            self.initial_relationship,
            now,
        )
    }

    /// Read-time projection: decay the mood of a copy and attach its label.
    /// The relationship score never decays.
    pub fn project(&self, mut state: RelationshipState, now: DateTime<Utc>) -> RelationshipView {
        let decayed = self
            .decay
            .apply(state.mood_score.value(), state.last_interaction_at, now);
        state.mood_score = Score::new(decayed);
        let mood_label = self.classifier.label(decayed);
        RelationshipView { state, mood_label }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::default())
    }
}
