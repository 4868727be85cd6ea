mod common;

use chrono::{Datelike, Days, Weekday};
use savings_core::{build_ledger, ledger::CHALLENGE_DAYS};

use common::{date, MONDAY_LEDGER, WEDNESDAY_LEDGER};

#[test]
fn invariants_hold_for_three_years_of_start_dates() {
    let mut start = date(2023, 1, 1);
    let last = date(2025, 12, 31);

    while start <= last {
        let ledger = build_ledger(start).unwrap();

        assert_eq!(ledger.total_savings(), 5050, "start {start}");
        assert_eq!(ledger.entries().len(), CHALLENGE_DAYS as usize);
        for (i, entry) in ledger.entries().iter().enumerate() {
            assert_eq!(entry.date, start + Days::new(i as u64));
            assert_eq!(entry.amount, i as u32 + 1);
            assert_eq!(entry.day_number, entry.amount);
            assert_eq!(entry.weekday, entry.date.weekday());
        }

        let weeks = ledger.weekly_summaries();
        assert!(
            weeks.len() == 14 || weeks.len() == 15,
            "start {start} produced {} weeks",
            weeks.len()
        );
        assert!(weeks.iter().all(|w| w.week_start.weekday() == Weekday::Mon));
        assert!(weeks.windows(2).all(|pair| pair[0].week_start < pair[1].week_start));

        start = start.succ_opt().unwrap();
    }
}

#[test]
fn building_twice_yields_identical_ledgers() {
    let start = date(2024, 7, 17);
    assert_eq!(build_ledger(start).unwrap(), build_ledger(start).unwrap());
}

#[test]
fn monday_start_rolls_up_full_weeks() {
    let ledger = &*MONDAY_LEDGER;
    let weeks = ledger.weekly_summaries();

    assert_eq!(weeks.len(), 15);
    assert_eq!(weeks[0].week_start, date(2024, 1, 1));
    assert_eq!(ledger.weekly_total(date(2024, 1, 1)), Some(28));
    assert_eq!(ledger.weekly_total(date(2024, 1, 8)), Some(77));
    assert_eq!(weeks[14].week_start, date(2024, 4, 8));
    assert_eq!(weeks[14].total, 99 + 100);

    let summed: u32 = weeks.iter().map(|w| w.total).sum();
    assert_eq!(summed, ledger.total_savings());
}

#[test]
fn wednesday_start_follows_running_sum_semantics() {
    let ledger = &*WEDNESDAY_LEDGER;
    let weeks = ledger.weekly_summaries();

    assert_eq!(weeks.len(), 14);
    assert_eq!(weeks[0].week_start, date(2024, 1, 8));
    // Days 1..=5 are cleared by the Sunday reset before the first Monday.
    assert_eq!(weeks[0].total, 63);
    assert_eq!(ledger.weekly_total(date(2024, 1, 1)), None);
    assert_eq!(weeks[13].week_start, date(2024, 4, 8));
    assert_eq!(weeks[13].total, 97 + 98 + 99 + 100);
}

#[test]
fn leap_day_is_part_of_the_window() {
    let ledger = build_ledger(date(2024, 2, 1)).unwrap();
    let leap = ledger.entry_on(date(2024, 2, 29)).unwrap();
    assert_eq!(leap.day_number, 29);
    assert_eq!(leap.weekday_name(), "Thursday");
}
