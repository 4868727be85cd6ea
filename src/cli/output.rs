use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

use crate::config::{Config, Theme};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
    Section,
}

#[derive(Clone, Copy, Debug)]
pub struct OutputPreferences {
    pub theme: Theme,
    pub color: bool,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            color: true,
        }
    }
}

impl From<&Config> for OutputPreferences {
    fn from(config: &Config) -> Self {
        Self {
            theme: config.theme,
            color: config.ui_color_enabled,
        }
    }
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn label(kind: MessageKind, theme: Theme) -> &'static str {
    match (theme, kind) {
        (Theme::Iconic, MessageKind::Success) => "✅",
        (Theme::Iconic, MessageKind::Warning) => "⚠️",
        (Theme::Iconic, MessageKind::Error) => "❌",
        (Theme::Iconic, MessageKind::Hint) => "💡",
        (Theme::Plain, MessageKind::Success) => "[ok]",
        (Theme::Plain, MessageKind::Warning) => "[!]",
        (Theme::Plain, MessageKind::Error) => "[x]",
        (Theme::Plain, MessageKind::Hint) => "hint:",
        (_, MessageKind::Info) | (_, MessageKind::Section) => "",
    }
}

fn apply_style(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let text = message.to_string();

    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        _ => match label(kind, prefs.theme) {
            "" => text,
            icon => format!("{icon} {text}"),
        },
    };

    if !prefs.color {
        return formatted;
    }

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Hint => formatted.bright_cyan().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = apply_style(kind, message, &preferences());
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn hint(message: impl fmt::Display) {
    print(MessageKind::Hint, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

/// Prints a pre-rendered block (report text) verbatim.
pub fn block(text: &str) {
    print!("{}", text);
}
