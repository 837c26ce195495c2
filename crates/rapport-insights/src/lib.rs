//! # rapport-insights
//!
//! Read-side analytics over the stored conversation history: consecutive-day
//! streaks, the milestone catalog, days-together stats, and reaction summaries.
//! [`InsightsAggregator`] stitches them together behind the storage traits.

pub mod aggregator;
pub mod milestones;
pub mod reactions;
pub mod stats;
pub mod streak;

pub use aggregator::InsightsAggregator;
pub use milestones::evaluate_milestones;
pub use reactions::summarize_reactions;
pub use stats::{days_together, insight_stats};
pub use streak::compute_streak;
