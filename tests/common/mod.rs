#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use once_cell::sync::Lazy;
use savings_core::{build_ledger, time::FixedClock, Ledger};

/// Monday start: every week is complete except the trailing two days.
pub static MONDAY_LEDGER: Lazy<Ledger> =
    Lazy::new(|| build_ledger(date(2024, 1, 1)).expect("build Monday ledger"));

/// Wednesday start: exercises the mid-week rollup behaviour.
pub static WEDNESDAY_LEDGER: Lazy<Ledger> =
    Lazy::new(|| build_ledger(date(2024, 1, 3)).expect("build Wednesday ledger"));

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

pub fn export_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap()
}

pub fn fixed_clock() -> FixedClock {
    FixedClock(export_instant())
}
