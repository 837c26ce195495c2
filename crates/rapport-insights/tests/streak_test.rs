use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rapport_core::models::StreakInfo;
use rapport_insights::compute_streak;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 20).unwrap()
}

fn ago(n: u64) -> NaiveDate {
    today() - Days::new(n)
}

#[test]
fn empty_input_is_zero() {
    assert_eq!(compute_streak(&[], today()), StreakInfo { current: 0, longest: 0 });
}

#[test]
fn live_run_with_an_older_gap() {
    let dates = [ago(0), ago(1), ago(2), ago(5)];
    assert_eq!(compute_streak(&dates, today()), StreakInfo { current: 3, longest: 3 });
}

#[test]
fn broken_run_keeps_longest() {
    let dates = [ago(3), ago(4)];
    assert_eq!(compute_streak(&dates, today()), StreakInfo { current: 0, longest: 2 });
}

#[test]
fn run_ending_yesterday_is_still_current() {
    let dates = [ago(1), ago(2)];
    assert_eq!(compute_streak(&dates, today()), StreakInfo { current: 2, longest: 2 });
}

#[test]
fn older_run_can_be_longest() {
    let dates = [ago(0), ago(1), ago(4), ago(5), ago(6), ago(7)];
    assert_eq!(compute_streak(&dates, today()), StreakInfo { current: 2, longest: 4 });
}

proptest! {
    #[test]
    fn current_never_exceeds_longest(offsets in prop::collection::btree_set(0u64..60, 0..30)) {
        let dates: Vec<NaiveDate> = offsets.iter().map(|&n| ago(n)).collect();
        let info = compute_streak(&dates, today());
        prop_assert!(info.current <= info.longest);
        prop_assert!(info.longest as usize <= dates.len());
        if !dates.is_empty() {
            prop_assert!(info.longest >= 1);
        }
    }

    #[test]
    fn contiguous_block_ending_today(len in 1u64..40) {
        let dates: Vec<NaiveDate> = (0..len).map(ago).collect();
        let info = compute_streak(&dates, today());
        prop_assert_eq!(info.current as u64, len);
        prop_assert_eq!(info.longest as u64, len);
    }
}
