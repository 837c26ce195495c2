use chrono::{DateTime, NaiveDate, Utc};

/// Source of wall-clock time. Decay and streaks are computed against it.
pub trait IClock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// The current UTC calendar day.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
