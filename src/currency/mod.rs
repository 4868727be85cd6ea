//! Money and date display helpers shared by the report, export and shell layers.

use chrono::NaiveDate;

pub const CURRENCY_SYMBOL: &str = "$";

/// Formats whole currency units with two decimals, e.g. `$28.00`.
pub fn format_amount(units: u32) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, f64::from(units))
}

/// Long-form date used for the selected start date, e.g. `January 03, 2024`.
pub fn format_selected_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}
