//! Weekly savings goals as all-day calendar events.

pub mod ics;
pub mod writer;

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    currency::format_amount,
    errors::{Result, SavingsError},
    ledger::{Ledger, WeeklySummary},
    time::Clock,
};

pub use ics::{CalendarSerializer, IcsSerializer};
pub use writer::{default_file_name, ensure_ics_extension, write_calendar};

const UID_DOMAIN: &str = "savings-challenge";

/// One exported weekly goal. `end_date` is exclusive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarEvent {
    pub uid: String,
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub stamp: DateTime<Utc>,
}

impl CalendarEvent {
    fn for_week(summary: &WeeklySummary, stamp: DateTime<Utc>) -> Result<Self> {
        let end_date = summary
            .week_start
            .checked_add_days(Days::new(1))
            .ok_or_else(|| {
                SavingsError::InvalidDate(format!(
                    "no calendar day follows {}",
                    summary.week_start
                ))
            })?;
        let amount = format_amount(summary.total);
        Ok(Self {
            uid: format!("{}@{}", Uuid::new_v4(), UID_DOMAIN),
            title: format!("Savings Goal: {}", amount),
            description: format!(
                "Weekly savings target: {}\nPart of your 100-day savings challenge!",
                amount
            ),
            start_date: summary.week_start,
            end_date,
            stamp,
        })
    }
}

/// Builds one event per weekly summary, in ledger order.
///
/// All events of one export share the same stamp. Fails with
/// [`SavingsError::NoLedgerAvailable`] when nothing has been generated yet.
pub fn build_export_events(
    ledger: Option<&Ledger>,
    clock: &dyn Clock,
) -> Result<Vec<CalendarEvent>> {
    let ledger = ledger.ok_or(SavingsError::NoLedgerAvailable)?;
    let stamp = clock.now();
    ledger
        .weekly_summaries()
        .iter()
        .map(|summary| CalendarEvent::for_week(summary, stamp))
        .collect()
}
