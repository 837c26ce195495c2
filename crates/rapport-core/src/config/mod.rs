pub mod defaults;
mod insights_config;
mod observability_config;
mod scoring_config;
mod storage_config;

pub use insights_config::InsightsConfig;
pub use observability_config::ObservabilityConfig;
pub use scoring_config::{EventDeltas, MoodThresholds, ScoringConfig};
pub use storage_config::StorageConfig;

use serde::{Deserialize, Serialize};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RapportConfig {
    pub storage: StorageConfig,
    pub scoring: ScoringConfig,
    pub insights: InsightsConfig,
    pub observability: ObservabilityConfig,
}

impl RapportConfig {
    /// Parse a TOML string. Missing sections and fields take their defaults.
    pub fn from_toml(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }
}
