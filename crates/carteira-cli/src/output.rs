//! Output formatting utilities.

use colored::Colorize;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Formats and prints rows based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
    }
}

/// Prints any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Rounds a float for display. Non-finite values have no decimal form.
pub fn round(value: f64, decimals: u32) -> Option<Decimal> {
    Decimal::from_f64_retain(value).map(|d| d.round_dp(decimals))
}

/// Formats a money amount with a fixed number of decimals.
pub fn format_amount(value: f64, decimals: u32) -> String {
    match round(value, decimals) {
        Some(d) => format!("{:.prec$}", d, prec = decimals as usize),
        None => "-".to_string(),
    }
}

/// Formats a 0-100 percentage.
pub fn format_percent(value: f64, decimals: u32) -> String {
    match round(value, decimals) {
        Some(d) => format!("{:.prec$}%", d, prec = decimals as usize),
        None => "-".to_string(),
    }
}

/// Formats a quantity without trailing zeros (fractional units allowed).
pub fn format_quantity(value: f64) -> String {
    match round(value, 8) {
        Some(d) => d.normalize().to_string(),
        None => "-".to_string(),
    }
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair formatted as an amount.
    pub fn amount(key: impl Into<String>, value: f64, decimals: u32) -> Self {
        Self::new(key, format_amount(value, decimals))
    }

    /// Creates a key-value pair formatted as percentage.
    pub fn percent(key: impl Into<String>, value: f64, decimals: u32) -> Self {
        Self::new(key, format_percent(value, decimals))
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round() {
        assert_eq!(round(1234.5, 2), Some(dec!(1234.50)));
        assert_eq!(round(0.125, 1), Some(dec!(0.1)));
        assert_eq!(round(f64::NAN, 2), None);
        assert_eq!(round(f64::INFINITY, 2), None);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(10_000.0, 2), "10000.00");
        assert_eq!(format_amount(-80.0, 0), "-80");
        assert_eq!(format_amount(f64::NAN, 2), "-");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(30.0, 2), "30.00%");
        assert_eq!(format_percent(100.0 / 3.0, 1), "33.3%");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(100.0), "100");
        assert_eq!(format_quantity(0.5), "0.5");
        assert_eq!(format_quantity(0.00012345), "0.00012345");
    }
}
