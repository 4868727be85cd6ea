use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::debug;

use crate::errors::{Result, SavingsError};

use super::{Ledger, ScheduleEntry, WeeklySummary, CHALLENGE_DAYS, DATE_FORMAT};

/// Builds the full challenge ledger starting at `start_date`.
///
/// Day N saves N units. Weekly summaries are keyed by each Monday inside the
/// window and hold the running sum accumulated since the last Sunday reset.
/// Amounts saved before the first Monday of a mid-week start are cleared by
/// that week's Sunday reset and belong to no summary.
pub fn build_ledger(start_date: NaiveDate) -> Result<Ledger> {
    let mut entries = Vec::with_capacity(CHALLENGE_DAYS as usize);
    let mut weekly_summaries: Vec<WeeklySummary> = Vec::new();
    let mut current_week_sum = 0;
    let mut last_monday: Option<usize> = None;
    let mut total_savings = 0;

    for day in 0..CHALLENGE_DAYS {
        let date = start_date
            .checked_add_days(Days::new(u64::from(day)))
            .ok_or_else(|| {
                SavingsError::InvalidDate(format!(
                    "a challenge starting {} runs past the supported calendar range",
                    start_date.format(DATE_FORMAT)
                ))
            })?;
        let amount = day + 1;
        let weekday = date.weekday();

        entries.push(ScheduleEntry {
            date,
            day_number: day + 1,
            amount,
            weekday,
        });

        current_week_sum += amount;
        total_savings += amount;

        if weekday == Weekday::Mon {
            weekly_summaries.push(WeeklySummary {
                week_start: date,
                total: 0,
            });
            last_monday = Some(weekly_summaries.len() - 1);
        }

        if let Some(index) = last_monday {
            weekly_summaries[index].total = current_week_sum;
        }

        if weekday == Weekday::Sun {
            current_week_sum = 0;
        }
    }

    debug!(
        start = %start_date,
        weeks = weekly_summaries.len(),
        total = total_savings,
        "built savings ledger"
    );

    Ok(Ledger::new(
        start_date,
        entries,
        weekly_summaries,
        total_savings,
    ))
}

/// Parses a `YYYY-MM-DD` start date.
pub fn parse_start_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|err| {
        SavingsError::InvalidDate(format!("`{}` is not a YYYY-MM-DD date ({})", trimmed, err))
    })
}

pub fn start_date_from_ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        SavingsError::InvalidDate(format!(
            "{:04}-{:02}-{:02} is not a calendar date",
            year, month, day
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn monday_start_opens_first_week_on_day_one() {
        let ledger = build_ledger(date(2024, 1, 1)).unwrap();
        let first = ledger.weekly_summaries()[0];
        assert_eq!(first.week_start, date(2024, 1, 1));
        assert_eq!(first.total, 28);
        assert_eq!(ledger.weekly_summaries().len(), 15);
    }

    #[test]
    fn midweek_start_drops_days_before_first_monday() {
        let ledger = build_ledger(date(2024, 1, 3)).unwrap();
        let first = ledger.weekly_summaries()[0];
        assert_eq!(first.week_start, date(2024, 1, 8));
        assert_eq!(first.total, 6 + 7 + 8 + 9 + 10 + 11 + 12);
        assert_eq!(ledger.weekly_summaries().len(), 14);
        let summed: u32 = ledger.weekly_summaries().iter().map(|w| w.total).sum();
        assert_eq!(summed, 5050 - (1 + 2 + 3 + 4 + 5));
    }

    #[test]
    fn window_crosses_year_boundary() {
        let ledger = build_ledger(date(2023, 12, 25)).unwrap();
        assert_eq!(ledger.entries()[7].date, date(2024, 1, 1));
        assert_eq!(ledger.end_date(), date(2024, 4, 2));
        assert_eq!(ledger.weekly_total(date(2024, 1, 1)), Some(8 + 9 + 10 + 11 + 12 + 13 + 14));
    }

    #[test]
    fn start_near_calendar_limit_is_rejected() {
        let err = build_ledger(NaiveDate::MAX).unwrap_err();
        assert!(matches!(err, SavingsError::InvalidDate(_)));
    }

    #[test]
    fn parses_iso_dates_and_rejects_garbage() {
        assert_eq!(parse_start_date(" 2024-02-29 ").unwrap(), date(2024, 2, 29));
        assert!(matches!(
            parse_start_date("2023-02-29"),
            Err(SavingsError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_start_date("next tuesday"),
            Err(SavingsError::InvalidDate(_))
        ));
    }

    #[test]
    fn ymd_triples_are_validated() {
        assert_eq!(start_date_from_ymd(2024, 1, 3).unwrap(), date(2024, 1, 3));
        assert!(matches!(
            start_date_from_ymd(2024, 13, 1),
            Err(SavingsError::InvalidDate(_))
        ));
    }
}
