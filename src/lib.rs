#![doc(test(attr(deny(warnings))))]

//! Savings Core builds the 100-day incremental savings challenge: a daily
//! schedule with Monday-keyed weekly rollups, a text report, and weekly goals
//! exported as iCalendar events.

pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod export;
pub mod ledger;
pub mod report;
pub mod session;
pub mod time;
pub mod utils;

use std::sync::Once;

pub use errors::{Result, SavingsError};
pub use export::{build_export_events, CalendarEvent};
pub use ledger::{build_ledger, Ledger, ScheduleEntry, WeeklySummary};
pub use report::format_report;
pub use session::ChallengeSession;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Savings Core tracing initialized.");
    });
}
