//! Savings ledger domain models and the 100-day schedule builder.

pub mod builder;
pub mod schedule;

pub use builder::{build_ledger, parse_start_date, start_date_from_ymd};
pub use schedule::{Ledger, ScheduleEntry, WeeklySummary};

/// Number of days in a savings challenge.
pub const CHALLENGE_DAYS: u32 = 100;

/// Canonical date layout for input, report and export keys.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
