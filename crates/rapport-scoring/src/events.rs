use rapport_core::config::{EventDeltas, ScoringConfig};
use rapport_core::models::InteractionKind;
use rapport_core::score::Score;

/// Fixed delta table per interaction kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventScorer {
    chat_turn: EventDeltas,
    story_reaction: EventDeltas,
}

/// Scores after an event, already clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreUpdate {
    pub mood: Score,
    pub relationship: Score,
}

impl EventScorer {
    pub fn new(chat_turn: EventDeltas, story_reaction: EventDeltas) -> Self {
        Self {
            chat_turn,
            story_reaction,
        }
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self::new(config.chat_turn, config.story_reaction)
    }

    pub fn deltas(&self, kind: InteractionKind) -> EventDeltas {
        match kind {
            InteractionKind::ChatTurn => self.chat_turn,
            InteractionKind::StoryReaction => self.story_reaction,
        }
    }

    /// Add the event's deltas to a stored (undecayed) baseline and clamp.
    pub fn apply(&self, kind: InteractionKind, mood: Score, relationship: Score) -> ScoreUpdate {
        let d = self.deltas(kind);
        ScoreUpdate {
            mood: mood.adjusted(d.mood),
            relationship: relationship.adjusted(d.relationship),
        }
    }
}

impl Default for EventScorer {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::default())
    }
}
