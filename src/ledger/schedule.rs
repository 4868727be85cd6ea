use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// One day of the challenge. `amount` always equals `day_number`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    pub day_number: u32,
    pub amount: u32,
    pub weekday: Weekday,
}

impl ScheduleEntry {
    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.weekday)
    }
}

/// Running weekly total keyed by the Monday that opened the week.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeeklySummary {
    pub week_start: NaiveDate,
    pub total: u32,
}

/// Complete schedule for one generation run. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ledger {
    start_date: NaiveDate,
    entries: Vec<ScheduleEntry>,
    weekly_summaries: Vec<WeeklySummary>,
    total_savings: u32,
}

impl Ledger {
    pub(crate) fn new(
        start_date: NaiveDate,
        entries: Vec<ScheduleEntry>,
        weekly_summaries: Vec<WeeklySummary>,
        total_savings: u32,
    ) -> Self {
        Self {
            start_date,
            entries,
            weekly_summaries,
            total_savings,
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Date of the final challenge day.
    pub fn end_date(&self) -> NaiveDate {
        self.entries
            .last()
            .map(|entry| entry.date)
            .unwrap_or(self.start_date)
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Weekly summaries in the order their Mondays were first encountered.
    pub fn weekly_summaries(&self) -> &[WeeklySummary] {
        &self.weekly_summaries
    }

    pub fn weekly_total(&self, monday: NaiveDate) -> Option<u32> {
        self.weekly_summaries
            .iter()
            .find(|summary| summary.week_start == monday)
            .map(|summary| summary.total)
    }

    pub fn entry_on(&self, date: NaiveDate) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|entry| entry.date == date)
    }

    pub fn total_savings(&self) -> u32 {
        self.total_savings
    }
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
