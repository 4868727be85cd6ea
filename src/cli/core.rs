//! Shell dispatch, error reporting, and shared context helpers.

use std::io;

use dialoguer::theme::ColorfulTheme;
use rustyline::error::ReadlineError;
use strsim::levenshtein;
use thiserror::Error;

use crate::{
    config::{Config, ConfigManager},
    errors::SavingsError,
    ledger::{Ledger, DATE_FORMAT},
    session::ChallengeSession,
};

use super::commands;
use super::io as cli_io;
use super::output::{self, OutputPreferences};
use super::registry::{CommandEntry, CommandRegistry};
pub use super::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Failure of a single shell command. Reported, never fatal.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] SavingsError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

/// Errors that end the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] SavingsError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        Self::with_components(mode, ChallengeSession::default(), config_manager)
    }

    pub fn with_components(
        mode: CliMode,
        session: ChallengeSession,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config = config_manager.load()?;
        let context = ShellContext {
            mode,
            registry,
            session,
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            running: true,
        };
        context.apply_output_preferences();
        Ok(context)
    }

    pub(crate) fn apply_output_preferences(&self) {
        let mut prefs = OutputPreferences::from(&self.config);
        if self.mode == CliMode::Script {
            prefs.color = false;
        }
        colored::control::set_override(prefs.color);
        output::set_preferences(prefs);
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn prompt(&self) -> String {
        format!(
            "savings [{}]> ",
            self.session.selected_date().format(DATE_FORMAT)
        )
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn require_ledger(&self) -> Result<&Ledger, CommandError> {
        self.session
            .current()
            .ok_or(CommandError::Core(SavingsError::NoLedgerAvailable))
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match super::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                cli_io::print_warning(&err);
                return Ok(LoopControl::Continue);
            }
        };

        let Some((raw, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };

        let command = raw.to_lowercase();
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &needle), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(cli_io::confirm_action(&self.theme, "Exit shell?", true)?)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_hint("Use `help <command>` for usage details.");
            }
            CommandError::Core(SavingsError::NoLedgerAvailable) => {
                cli_io::print_error("Please generate a savings report first!");
                cli_io::print_hint("Try `generate 2024-01-01` to get started.");
            }
            CommandError::Core(err @ SavingsError::InvalidDate(_)) => {
                cli_io::print_error(err);
                cli_io::print_hint("Dates use the YYYY-MM-DD format.");
            }
            CommandError::Core(err @ SavingsError::ExportWriteFailure { .. }) => {
                tracing::warn!(error = %err, "calendar export failed");
                cli_io::print_error(format!("Error saving calendar events: {}", err));
            }
            other => cli_io::print_error(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;
    use chrono::{NaiveDate, TimeZone, Utc};
    use tempfile::{tempdir, TempDir};

    fn context() -> (ShellContext, TempDir) {
        let dir = tempdir().unwrap();
        let session = ChallengeSession::new(Box::new(FixedClock(
            Utc.with_ymd_and_hms(2024, 1, 3, 10, 0, 0).unwrap(),
        )));
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let context = ShellContext::with_components(CliMode::Script, session, manager).unwrap();
        (context, dir)
    }

    #[test]
    fn generate_without_argument_uses_selected_date() {
        let (mut context, _dir) = context();
        context.process_line("generate").unwrap();
        let ledger = context.session.current().unwrap();
        assert_eq!(ledger.start_date(), NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
    }

    #[test]
    fn export_before_generate_reports_missing_ledger() {
        let (mut context, dir) = context();
        let target = dir.path().join("out.ics");
        let err = context
            .process_line(&format!("export {}", target.display()))
            .unwrap_err();
        assert!(matches!(err, CommandError::Core(SavingsError::NoLedgerAvailable)));
        assert!(!target.exists());
    }

    #[test]
    fn unknown_commands_do_not_stop_the_shell() {
        let (mut context, _dir) = context();
        assert_eq!(
            context.process_line("generat").unwrap(),
            LoopControl::Continue
        );
        assert!(context.running);
    }

    #[test]
    fn exit_stops_the_loop() {
        let (mut context, _dir) = context();
        assert_eq!(context.process_line("exit").unwrap(), LoopControl::Exit);
        assert!(!context.running);
    }

    #[test]
    fn theme_changes_are_persisted() {
        let (mut context, _dir) = context();
        context.process_line("theme plain").unwrap();
        let reloaded = context.config_manager.load().unwrap();
        assert_eq!(reloaded.theme, crate::config::Theme::Plain);
    }

    #[test]
    fn invalid_dates_are_rejected() {
        let (mut context, _dir) = context();
        let err = context.process_line("select 2024-02-30").unwrap_err();
        assert!(matches!(err, CommandError::Core(SavingsError::InvalidDate(_))));
    }
}
