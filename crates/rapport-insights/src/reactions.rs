//! Reaction summaries over the fixed reaction vocabulary.

use std::collections::BTreeMap;

use rapport_core::models::{ReactionKind, ReactionSummary, RecentReaction};

/// Fold raw per-kind counts into a summary. Every kind appears in `counts`.
/// The dominant emotion is the highest count, ties going to the kind listed
/// first in [`ReactionKind::ALL`]; it is `None` only when there are no reactions.
pub fn summarize_reactions(
    raw_counts: &[(ReactionKind, u64)],
    recent: Vec<RecentReaction>,
) -> ReactionSummary {
    let mut counts: BTreeMap<ReactionKind, u64> =
        ReactionKind::ALL.iter().map(|&k| (k, 0)).collect();
    for &(kind, n) in raw_counts {
        *counts.entry(kind).or_insert(0) += n;
    }

    let total = counts.values().sum();

    let mut dominant: Option<(ReactionKind, u64)> = None;
    for kind in ReactionKind::ALL {
        let n = counts.get(&kind).copied().unwrap_or(0);
        if n > 0 && dominant.map_or(true, |(_, best)| n > best) {
            dominant = Some((kind, n));
        }
    }

    ReactionSummary {
        total,
        counts,
        recent,
        dominant_emotion: dominant.map(|(kind, _)| kind),
    }
}
