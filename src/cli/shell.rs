use std::io::{self, BufRead};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};

use crate::cli::core::{CliError, CliMode, LoopControl, ShellContext};
use crate::cli::output::info as output_info;

/// Environment variable switching the shell to non-interactive script mode.
pub const SCRIPT_ENV: &str = "SAVINGS_CORE_CLI_SCRIPT";

fn detect_mode() -> CliMode {
    match std::env::var_os(SCRIPT_ENV) {
        Some(_) => CliMode::Script,
        None => CliMode::Interactive,
    }
}

pub fn run_cli() -> Result<(), CliError> {
    let mut context = ShellContext::new(detect_mode())?;
    match context.mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

/// Runs one line and reports its failure. Returns false once the shell should stop.
fn execute(context: &mut ShellContext, line: &str) -> bool {
    match context.process_line(line) {
        Ok(LoopControl::Exit) => false,
        Ok(LoopControl::Continue) => context.running,
        Err(err) => {
            context.report_error(err);
            context.running
        }
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandCompleter, DefaultHistory>::new()?;
    editor.set_helper(Some(CommandCompleter::new(context.command_names())));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    output_info("100-Day Savings Challenge. Type `help` to see available commands.");

    loop {
        let line = match editor.readline(&context.prompt()) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) if context.confirm_exit()? => break,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                output_info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        editor.add_history_entry(line).ok();
        if !execute(context, line) {
            break;
        }
    }
    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    for line in io::stdin().lock().lines() {
        if !execute(context, &line?) {
            break;
        }
    }
    Ok(())
}

/// Tab completion for the command word; dates and paths are left alone.
struct CommandCompleter {
    names: Vec<&'static str>,
}

impl CommandCompleter {
    fn new(mut names: Vec<&'static str>) -> Self {
        names.sort_unstable();
        Self { names }
    }

    /// Partial command word under the cursor, if the cursor is still on it.
    fn command_word(head: &str) -> Option<&str> {
        let word = head.trim_start();
        (!word.contains(char::is_whitespace)).then_some(word)
    }

    fn candidates(&self, word: &str) -> Vec<Pair> {
        let word = word.to_ascii_lowercase();
        self.names
            .iter()
            .filter(|name| name.starts_with(&word))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect()
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(match Self::command_word(&line[..pos]) {
            Some(word) => (pos - word.len(), self.candidates(word)),
            None => (pos, Vec::new()),
        })
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, shell_words::ParseError> {
    shell_words::split(input)
}
