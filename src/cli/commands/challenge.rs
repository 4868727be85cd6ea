use std::path::PathBuf;

use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::{self, section as output_section};
use crate::cli::registry::CommandEntry;
use crate::currency::{format_amount, format_selected_date};
use crate::ledger::{parse_start_date, DATE_FORMAT};
use crate::report::{render_report, weekly_line};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "select",
            "Pick the challenge start date",
            "select <YYYY-MM-DD>",
            cmd_select,
        ),
        CommandEntry::new(
            "generate",
            "Build the 100-day schedule and print the report",
            "generate [YYYY-MM-DD]",
            cmd_generate,
        ),
        CommandEntry::new(
            "report",
            "Print the report for the current schedule",
            "report",
            cmd_report,
        ),
        CommandEntry::new(
            "weeks",
            "List weekly savings goals",
            "weeks",
            cmd_weeks,
        ),
        CommandEntry::new(
            "status",
            "Show the selected date and current schedule",
            "status",
            cmd_status,
        ),
        CommandEntry::new(
            "export",
            "Save weekly goals as an .ics calendar",
            "export [path]",
            cmd_export,
        ),
    ]
}

fn single_arg<'a>(args: &[&'a str], usage: &str) -> Result<Option<&'a str>, CommandError> {
    match args {
        [] => Ok(None),
        [value] => Ok(Some(*value)),
        _ => Err(CommandError::InvalidArguments(format!("Usage: {}", usage))),
    }
}

fn cmd_select(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = single_arg(args, "select <YYYY-MM-DD>")?.ok_or_else(|| {
        CommandError::InvalidArguments("Usage: select <YYYY-MM-DD>".into())
    })?;
    let date = parse_start_date(raw)?;
    context.session.select(date);
    io::print_info(format!(
        "Selected Start Date: {}",
        format_selected_date(date)
    ));
    Ok(())
}

fn cmd_generate(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let start = match single_arg(args, "generate [YYYY-MM-DD]")? {
        Some(raw) => parse_start_date(raw)?,
        None => context.session.selected_date(),
    };
    let theme = context.config().theme;
    let ledger = context.session.generate(start)?;
    output::block(&render_report(ledger, theme));
    io::print_success(format!(
        "Schedule generated: {} through {}.",
        ledger.start_date().format(DATE_FORMAT),
        ledger.end_date().format(DATE_FORMAT)
    ));
    Ok(())
}

fn cmd_report(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let ledger = context.require_ledger()?;
    output::block(&render_report(ledger, context.config().theme));
    Ok(())
}

fn cmd_weeks(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let ledger = context.require_ledger()?;
    output_section("Weekly Summaries");
    for summary in ledger.weekly_summaries() {
        io::print_info(weekly_line(summary));
    }
    Ok(())
}

fn cmd_status(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output_section("Status");
    io::print_info(format!(
        "  Selected start : {}",
        format_selected_date(context.session.selected_date())
    ));
    match context.session.current() {
        Some(ledger) => {
            io::print_info(format!(
                "  Schedule       : {} through {}",
                ledger.start_date().format(DATE_FORMAT),
                ledger.end_date().format(DATE_FORMAT)
            ));
            io::print_info(format!(
                "  Weekly goals   : {}",
                ledger.weekly_summaries().len()
            ));
            io::print_info(format!(
                "  Total savings  : {}",
                format_amount(ledger.total_savings())
            ));
        }
        None => io::print_info("  Schedule       : not generated"),
    }
    Ok(())
}

fn cmd_export(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.require_ledger()?;

    let target = match single_arg(args, "export [path]")? {
        Some(raw) => Some(PathBuf::from(raw)),
        None => choose_export_path(context)?,
    };

    let Some(path) = target else {
        tracing::warn!("export cancelled before a path was chosen");
        io::print_info("Export cancelled; no file written.");
        return Ok(());
    };

    let summary = context.session.export_to(&path)?;
    io::print_success(format!(
        "Calendar events saved successfully to {} ({} events).",
        summary.path.display(),
        summary.event_count
    ));
    Ok(())
}

/// Save-dialog stand-in. Script mode has no prompt, so it counts as a cancel.
fn choose_export_path(context: &ShellContext) -> Result<Option<PathBuf>, CommandError> {
    if context.mode == CliMode::Script {
        return Ok(None);
    }
    let suggested = context
        .session
        .suggested_export_path(&context.config().resolve_export_dir())?;
    io::prompt_save_path(
        &context.theme,
        "Save calendar events to",
        &suggested.display().to_string(),
    )
}
