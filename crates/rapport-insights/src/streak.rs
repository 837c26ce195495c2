//! Consecutive-day interaction streaks.

use chrono::NaiveDate;

use rapport_core::models::StreakInfo;

fn is_next_day(newer: NaiveDate, older: NaiveDate) -> bool {
    (newer - older).num_days() == 1
}

/// Compute current and longest streaks from distinct interaction dates in
/// descending order.
///
/// The current streak is alive only when the most recent date is today or
/// yesterday. Two dates extend a run only when exactly one day apart, so
/// duplicate or out-of-order input breaks the run instead of inflating it.
pub fn compute_streak(dates: &[NaiveDate], today: NaiveDate) -> StreakInfo {
    let Some(&latest) = dates.first() else {
        return StreakInfo::default();
    };

    let mut longest = 1u32;
    let mut run = 1u32;
    for pair in dates.windows(2) {
        if is_next_day(pair[0], pair[1]) {
            run += 1;
        } else {
            longest = longest.max(run);
            run = 1;
        }
    }
    longest = longest.max(run);

    let mut current = if (today - latest).num_days() > 1 { 0 } else { 1 };
    if current > 0 {
        current += dates
            .windows(2)
            .take_while(|pair| is_next_day(pair[0], pair[1]))
            .count() as u32;
    }

    StreakInfo {
        current,
        longest: longest.max(current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn ago(today: NaiveDate, n: u64) -> NaiveDate {
        today - Days::new(n)
    }

    #[test]
    fn single_date_today_and_stale() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        assert_eq!(
            compute_streak(&[today], today),
            StreakInfo { current: 1, longest: 1 }
        );
        assert_eq!(
            compute_streak(&[ago(today, 2)], today),
            StreakInfo { current: 0, longest: 1 }
        );
    }

    #[test]
    fn duplicate_dates_do_not_extend() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let dates = [today, today, ago(today, 1)];
        assert_eq!(
            compute_streak(&dates, today),
            StreakInfo { current: 1, longest: 2 }
        );
    }
}
