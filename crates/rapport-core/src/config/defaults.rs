// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "rapport.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Scoring ---
pub const DEFAULT_MOOD_SCORE: f64 = 50.0;
pub const DEFAULT_RELATIONSHIP_SCORE: f64 = 0.0;
pub const DEFAULT_MOOD_DECAY_PER_HOUR: f64 = 0.5;
pub const DEFAULT_NEUTRAL_FROM: f64 = 20.0;
pub const DEFAULT_HAPPY_FROM: f64 = 50.0;
pub const DEFAULT_ATTACHED_FROM: f64 = 80.0;
pub const DEFAULT_CHAT_MOOD_DELTA: f64 = 2.0;
pub const DEFAULT_CHAT_RELATIONSHIP_DELTA: f64 = 1.0;
pub const DEFAULT_REACTION_MOOD_DELTA: f64 = 3.0;
pub const DEFAULT_REACTION_RELATIONSHIP_DELTA: f64 = 2.0;

// --- Insights ---
pub const DEFAULT_MOOD_HISTORY_DAYS: u32 = 14;
pub const DEFAULT_RECENT_REACTIONS: usize = 5;
pub const DEFAULT_CONVERSATION_HISTORY: usize = 20;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
