//! Output formatting for subnet data.
//!
//! - [`csv`] - CSV output formatting
//! - [`terminal`] - Terminal output with colors
//! - JSON via serde

mod csv;
mod terminal;

pub use csv::{csv_header, csv_row, format_field};
pub use terminal::{format_line, text_report};

use crate::models::SubnetCalculator;
use clap::ValueEnum;
use std::error::Error;

/// How a subnet is rendered on stdout.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

/// Render `subnet` in the requested format.
pub fn render(subnet: &SubnetCalculator, format: OutputFormat) -> Result<String, Box<dyn Error>> {
    log::debug!("render({subnet}, {format:?})");
    let out = match format {
        OutputFormat::Text => text_report(subnet),
        OutputFormat::Csv => format!("{}\n{}", csv_header(true), csv_row(subnet, true)),
        OutputFormat::Json => serde_json::to_string_pretty(subnet)
            .map_err(|e| format!("Error serializing JSON: {e}"))?,
    };
    Ok(out)
}
