//! Terminal output.
//!
//! Labelled, coloured report of a subnet, one property per line.

use crate::models::SubnetCalculator;
use colored::Colorize;

/// Label width, long enough for "Total Number of Hosts:".
const LABEL_WIDTH: usize = 22;

/// Format a label/value pair with the label padded to `width`.
///
/// # Arguments
/// * `label` - The label, printed bold
/// * `value` - The value
/// * `width` - Minimum width of the label column
pub fn format_line<T: ToString>(label: &str, value: T, width: usize) -> String {
    let label = format!("{label}:");
    format!("{:<width$} {}", label.bold(), value.to_string())
}

/// Render the six subnet properties as text.
pub fn text_report(subnet: &SubnetCalculator) -> String {
    [
        format_line("IP Address", subnet.ip(), LABEL_WIDTH),
        format_line("Network Address", subnet.network().green(), LABEL_WIDTH),
        format_line("Broadcast Address", subnet.broadcast().yellow(), LABEL_WIDTH),
        format_line("Total Number of Hosts", subnet.host_count(), LABEL_WIDTH),
        format_line("Subnet Mask", subnet.mask(), LABEL_WIDTH),
        format_line("CIDR Notation", format!("/{}", subnet.prefix()), LABEL_WIDTH),
    ]
    .join("\n")
}
