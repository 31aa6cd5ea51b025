//! CSV output for subnet data.

use crate::models::SubnetCalculator;

/// Column names, in output order.
pub const CSV_HEADER: [&str; 6] = ["ip", "network", "broadcast", "hostCount", "mask", "prefix"];

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{}\"", value_str.replace('"', "\"\""));

    if quoted.len() >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Header line; `aligned` pads columns to line up with [`csv_row`].
pub fn csv_header(aligned: bool) -> String {
    CSV_HEADER
        .iter()
        .zip(widths(aligned))
        .map(|(name, width)| format_field(name, width))
        .collect::<Vec<String>>()
        .join(",")
}

/// One CSV row for `subnet`.
pub fn csv_row(subnet: &SubnetCalculator, aligned: bool) -> String {
    let values = [
        subnet.ip().to_string(),
        subnet.network().to_string(),
        subnet.broadcast().to_string(),
        subnet.host_count().to_string(),
        subnet.mask().to_string(),
        subnet.prefix().to_string(),
    ];
    values
        .iter()
        .zip(widths(aligned))
        .map(|(value, width)| format_field(value, width))
        .collect::<Vec<String>>()
        .join(",")
}

// widest values: "255.255.255.255" quoted is 17, 4294967296 quoted is 12
fn widths(aligned: bool) -> [usize; 6] {
    if aligned {
        [17, 17, 17, 12, 17, 8]
    } else {
        [0; 6]
    }
}
