//! The fixed milestone catalog.
//!
//! Entries are evaluated in catalog order. Mood and bond entries depend on a
//! stored relationship state and are left out entirely when none exists.

use rapport_core::config::MoodThresholds;
use rapport_core::models::{InsightStats, Milestone, RelationshipState};

/// Relationship score that counts as a strong bond.
pub const BOND_STRONG: f64 = 50.0;
/// Relationship score of a maxed-out bond.
pub const BOND_MAX: f64 = 100.0;

/// What a catalog entry is measured against.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Criterion {
    Messages(u64),
    Memories(u64),
    DaysTogether(u32),
    Mood(f64),
    Bond(f64),
}

impl Criterion {
    fn needs_state(self) -> bool {
        matches!(self, Criterion::Mood(_) | Criterion::Bond(_))
    }

    fn achieved(self, stats: &InsightStats, state: Option<&RelationshipState>) -> bool {
        match self {
            Criterion::Messages(n) => stats.total_messages >= n,
            Criterion::Memories(n) => stats.total_memories >= n,
            Criterion::DaysTogether(n) => stats.days_together >= n,
            Criterion::Mood(min) => state.is_some_and(|s| s.mood_score.value() >= min),
            Criterion::Bond(min) => state.is_some_and(|s| s.relationship_score.value() >= min),
        }
    }
}

struct Entry {
    key: &'static str,
    title: &'static str,
    description: &'static str,
    criterion: Criterion,
}

fn catalog(thresholds: &MoodThresholds) -> [Entry; 12] {
    [
        Entry {
            key: "first_message",
            title: "First Words",
            description: "Sent your first message",
            criterion: Criterion::Messages(1),
        },
        Entry {
            key: "messages_50",
            title: "Getting Chatty",
            description: "Exchanged 50 messages",
            criterion: Criterion::Messages(50),
        },
        Entry {
            key: "messages_200",
            title: "Deep Conversations",
            description: "Exchanged 200 messages",
            criterion: Criterion::Messages(200),
        },
        Entry {
            key: "messages_1000",
            title: "Inseparable",
            description: "Exchanged 1,000 messages",
            criterion: Criterion::Messages(1000),
        },
        Entry {
            key: "first_memory",
            title: "First Memory",
            description: "Saved your first memory together",
            criterion: Criterion::Memories(1),
        },
        Entry {
            key: "memories_10",
            title: "Memory Lane",
            description: "Saved 10 memories together",
            criterion: Criterion::Memories(10),
        },
        Entry {
            key: "week_together",
            title: "One Week Together",
            description: "Been connected for 7 days",
            criterion: Criterion::DaysTogether(7),
        },
        Entry {
            key: "month_together",
            title: "One Month Together",
            description: "Been connected for 30 days",
            criterion: Criterion::DaysTogether(30),
        },
        Entry {
            key: "mood_happy",
            title: "Warming Up",
            description: "Reached Happy mood level",
            criterion: Criterion::Mood(thresholds.happy_from),
        },
        Entry {
            key: "mood_attached",
            title: "Deeply Attached",
            description: "Reached Attached mood level",
            criterion: Criterion::Mood(thresholds.attached_from),
        },
        Entry {
            key: "bond_50",
            title: "Strong Bond",
            description: "Relationship score reached 50",
            criterion: Criterion::Bond(BOND_STRONG),
        },
        Entry {
            key: "bond_max",
            title: "Soulmates",
            description: "Reached maximum relationship score",
            criterion: Criterion::Bond(BOND_MAX),
        },
    ]
}

/// Evaluate the catalog against stats and the stored (undecayed) state.
pub fn evaluate_milestones(
    stats: &InsightStats,
    state: Option<&RelationshipState>,
    thresholds: &MoodThresholds,
) -> Vec<Milestone> {
    catalog(thresholds)
        .into_iter()
        .filter(|entry| state.is_some() || !entry.criterion.needs_state())
        .map(|entry| Milestone {
            key: entry.key.to_string(),
            title: entry.title.to_string(),
            description: entry.description.to_string(),
            achieved: entry.criterion.achieved(stats, state),
        })
        .collect()
}
