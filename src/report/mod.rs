//! Text rendering of a savings ledger.
//!
//! The plain theme is the canonical layout. The iconic theme only swaps
//! headings, rules and bullets; line content and ordering are shared.

use crate::{
    config::Theme,
    currency::format_amount,
    ledger::{Ledger, ScheduleEntry, WeeklySummary, DATE_FORMAT},
};

const RULE_WIDTH: usize = 40;

struct ReportStyle {
    title: &'static str,
    heavy_rule: char,
    light_rule: char,
    daily_heading: &'static str,
    daily_bullet: &'static str,
    weekly_heading: &'static str,
    weekly_bullet: &'static str,
    total_label: &'static str,
}

impl ReportStyle {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Plain => Self {
                title: "100-Day Savings Challenge Report",
                heavy_rule: '=',
                light_rule: '-',
                daily_heading: "Daily Savings:",
                daily_bullet: "",
                weekly_heading: "Weekly Summaries:",
                weekly_bullet: "",
                total_label: "Total Savings:",
            },
            Theme::Iconic => Self {
                title: "📊 Savings Challenge Report",
                heavy_rule: '═',
                light_rule: '─',
                daily_heading: "📅 Daily Savings:",
                daily_bullet: "📍 ",
                weekly_heading: "📆 Weekly Summaries:",
                weekly_bullet: "📅 ",
                total_label: "💰 Total Savings:",
            },
        }
    }

    fn rule(ch: char) -> String {
        std::iter::repeat(ch).take(RULE_WIDTH).collect()
    }
}

/// Renders the canonical plain-text report.
pub fn format_report(ledger: &Ledger) -> String {
    render_report(ledger, Theme::Plain)
}

pub fn render_report(ledger: &Ledger, theme: Theme) -> String {
    let style = ReportStyle::for_theme(theme);
    let mut report = String::new();

    report.push_str(&format!("{}\n", style.title));
    report.push_str(&format!("{}\n\n", ReportStyle::rule(style.heavy_rule)));

    report.push_str(&format!("{}\n", style.daily_heading));
    report.push_str(&format!("{}\n", ReportStyle::rule(style.light_rule)));
    for entry in ledger.entries() {
        report.push_str(&format!("{}{}\n", style.daily_bullet, daily_line(entry)));
    }

    report.push_str(&format!("\n{}\n", style.weekly_heading));
    report.push_str(&format!("{}\n", ReportStyle::rule(style.light_rule)));
    for summary in ledger.weekly_summaries() {
        report.push_str(&format!("{}{}\n", style.weekly_bullet, weekly_line(summary)));
    }

    report.push_str(&format!(
        "\n{} {}\n",
        style.total_label,
        format_amount(ledger.total_savings())
    ));
    report
}

/// `2024-01-01 (Monday): Day 1 - $1.00`
pub fn daily_line(entry: &ScheduleEntry) -> String {
    format!(
        "{} ({}): Day {} - {}",
        entry.date.format(DATE_FORMAT),
        entry.weekday_name(),
        entry.day_number,
        format_amount(entry.amount)
    )
}

/// `Week starting 2024-01-01: $28.00`
pub fn weekly_line(summary: &WeeklySummary) -> String {
    format!(
        "Week starting {}: {}",
        summary.week_start.format(DATE_FORMAT),
        format_amount(summary.total)
    )
}
