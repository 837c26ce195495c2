/// Rapport system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lower bound of every mood and relationship score.
pub const SCORE_MIN: f64 = 0.0;

/// Upper bound of every mood and relationship score.
pub const SCORE_MAX: f64 = 100.0;

/// Calendar-day format used for snapshot and interaction dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Maximum length of a chat message or saved memory, in characters.
pub const MAX_CONTENT_CHARS: usize = 4000;
