use std::{fmt, io, path::PathBuf};

use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::cli::core::CommandError;
use crate::cli::output;

/// Print an informational message via the standard CLI output helpers.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

pub fn print_hint(message: impl fmt::Display) {
    output::hint(message);
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

/// Asks for a save path, pre-filled with `suggested`. Clearing the line or
/// pressing Ctrl-C cancels.
pub fn prompt_save_path(
    theme: &ColorfulTheme,
    prompt: &str,
    suggested: &str,
) -> Result<Option<PathBuf>, CommandError> {
    let answer = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .with_initial_text(suggested)
        .allow_empty(true)
        .interact_text();
    save_path_answer(answer)
}

/// Maps a prompt answer to a chosen path; `None` means the user backed out.
fn save_path_answer(
    answer: Result<String, dialoguer::Error>,
) -> Result<Option<PathBuf>, CommandError> {
    match answer {
        Ok(raw) => {
            let trimmed = raw.trim();
            Ok((!trimmed.is_empty()).then(|| PathBuf::from(trimmed)))
        }
        Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(err.into()),
    }
}
