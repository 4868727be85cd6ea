use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use tracing::info;

use crate::{
    errors::{Result, SavingsError},
    ledger::DATE_FORMAT,
};

/// Writes an encoded calendar to `path` in one blocking call.
pub fn write_calendar(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|err| SavingsError::export_write(path, err))?;
    info!(path = %path.display(), bytes = contents.len(), "calendar exported");
    Ok(())
}

/// Appends `extension` when the chosen path has none.
pub fn ensure_ics_extension(path: PathBuf, extension: &str) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(extension)
    }
}

pub fn default_file_name(start_date: NaiveDate, extension: &str) -> String {
    format!(
        "savings-challenge-{}.{}",
        start_date.format(DATE_FORMAT),
        extension
    )
}
