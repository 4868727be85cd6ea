//! Caller-owned state: the selected start date and the most recent ledger.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use crate::{
    errors::{Result, SavingsError},
    export::{self, CalendarEvent, CalendarSerializer, IcsSerializer},
    ledger::{build_ledger, Ledger},
    time::{Clock, SystemClock},
};

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub event_count: usize,
}

/// Holds at most one ledger, replaced wholesale by each generation.
pub struct ChallengeSession {
    selected_date: NaiveDate,
    current: Option<Ledger>,
    clock: Box<dyn Clock>,
    serializer: Box<dyn CalendarSerializer>,
}

impl Default for ChallengeSession {
    fn default() -> Self {
        Self::new(Box::new(SystemClock))
    }
}

impl ChallengeSession {
    /// Starts with today's date selected and no ledger.
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self {
            selected_date: clock.today(),
            current: None,
            clock,
            serializer: Box::new(IcsSerializer::default()),
        }
    }

    pub fn with_serializer(mut self, serializer: Box<dyn CalendarSerializer>) -> Self {
        self.serializer = serializer;
        self
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn select(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    pub fn current(&self) -> Option<&Ledger> {
        self.current.as_ref()
    }

    /// Builds a ledger for `start_date` and makes it current.
    ///
    /// On failure the previous ledger and selection are kept.
    pub fn generate(&mut self, start_date: NaiveDate) -> Result<&Ledger> {
        let ledger = build_ledger(start_date)?;
        self.selected_date = start_date;
        let ledger: &Ledger = self.current.insert(ledger);
        Ok(ledger)
    }

    pub fn generate_selected(&mut self) -> Result<&Ledger> {
        self.generate(self.selected_date)
    }

    pub fn export_events(&self) -> Result<Vec<CalendarEvent>> {
        export::build_export_events(self.current.as_ref(), self.clock.as_ref())
    }

    pub fn render_calendar(&self) -> Result<String> {
        let events = self.export_events()?;
        Ok(self.serializer.serialize(&events))
    }

    pub fn file_extension(&self) -> &'static str {
        self.serializer.extension()
    }

    /// Suggested export target inside `dir` for the current ledger.
    pub fn suggested_export_path(&self, dir: &Path) -> Result<PathBuf> {
        let ledger = self.current.as_ref().ok_or(SavingsError::NoLedgerAvailable)?;
        Ok(dir.join(export::default_file_name(
            ledger.start_date(),
            self.file_extension(),
        )))
    }

    /// Encodes the current ledger's weekly goals and writes them to `path`.
    pub fn export_to(&self, path: &Path) -> Result<ExportSummary> {
        let events = self.export_events()?;
        let contents = self.serializer.serialize(&events);
        let path = export::ensure_ics_extension(path.to_path_buf(), self.file_extension());
        export::write_calendar(&path, &contents)?;
        debug!(events = events.len(), "export finished");
        Ok(ExportSummary {
            path,
            event_count: events.len(),
        })
    }
}
