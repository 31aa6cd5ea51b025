//! Dotted-decimal and 32 bit binary string conversion.
//!
//! Addresses are kept as strings of `'0'`/`'1'` characters so the network part can be
//! sliced straight off by prefix length.

use crate::error::SubnetError;
use regex::Regex;
use std::sync::OnceLock;

/// Number of bits in an IPv4 address.
pub const MAX_LENGTH: u8 = 32;

/// Four groups of 1-3 digits. Octet values are not range checked here, anything above
/// 255 is caught later by the 32 bit length check in [`ip_to_bin`].
static DOTTED_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_dotted_regex() -> &'static Regex {
    DOTTED_REGEX.get_or_init(|| {
        Regex::new(r"^[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}$").expect("Invalid Regex")
    })
}

/// Check that `ip` looks like a dotted-decimal IPv4 address.
///
/// # Examples
/// ```
/// use subnet_calc::models::validate_ip;
/// assert!(validate_ip("192.168.0.1"));
/// assert!(validate_ip("999.0.0.1"));
/// assert!(!validate_ip("192.168.0"));
/// ```
pub fn validate_ip(ip: &str) -> bool {
    get_dotted_regex().is_match(ip)
}

/// Convert a dotted-decimal address into its 32 bit binary string.
///
/// Each octet becomes at least 8 binary digits. An octet above 255 needs more, which
/// pushes the total past 32 bits and fails with [`SubnetError::Overflow`]. Fewer than
/// 32 bits (less than four octets) fails with [`SubnetError::Conversion`].
///
/// # Examples
/// ```
/// use subnet_calc::models::ip_to_bin;
/// assert_eq!(
///     ip_to_bin("255.255.255.0").unwrap(),
///     "11111111111111111111111100000000"
/// );
/// ```
pub fn ip_to_bin(ip: &str) -> Result<String, SubnetError> {
    expand("address", ip)
}

pub(crate) fn expand(kind: &'static str, dotted: &str) -> Result<String, SubnetError> {
    let mut bits = String::with_capacity(MAX_LENGTH as usize);
    for octet in dotted.split('.') {
        let value: u32 = octet.parse().map_err(|_| {
            SubnetError::Conversion(format!("{kind} {dotted} has a non numeric octet '{octet}'"))
        })?;
        bits.push_str(&format!("{value:08b}"));
    }
    log::trace!("{kind} {dotted} => {bits}");

    if bits.len() > MAX_LENGTH as usize {
        return Err(SubnetError::Overflow {
            kind,
            value: dotted.to_string(),
            bits: bits.len(),
        });
    }
    if bits.len() < MAX_LENGTH as usize {
        return Err(SubnetError::Conversion(format!(
            "{kind} {dotted} is only {} bits, expected 32",
            bits.len()
        )));
    }
    Ok(bits)
}

/// Convert a 32 bit binary string back into dotted-decimal.
///
/// # Examples
/// ```
/// use subnet_calc::models::bin_to_ip;
/// assert_eq!(
///     bin_to_ip("11000000101010000000000000000001").unwrap(),
///     "192.168.0.1"
/// );
/// ```
pub fn bin_to_ip(bin: &str) -> Result<String, SubnetError> {
    if bin.len() != MAX_LENGTH as usize || !bin.chars().all(|c| c == '0' || c == '1') {
        return Err(SubnetError::Conversion(format!(
            "'{bin}' is not a 32 bit binary string"
        )));
    }
    let octets = (0..MAX_LENGTH as usize)
        .step_by(8)
        .map(|i| {
            u8::from_str_radix(&bin[i..i + 8], 2)
                .map(|o| o.to_string())
                .map_err(|e| SubnetError::Conversion(format!("'{bin}': {e}")))
        })
        .collect::<Result<Vec<String>, SubnetError>>()?;
    Ok(octets.join("."))
}

/// Binary mask for a prefix: `prefix` ones padded with zeros to 32 bits.
pub(crate) fn mask_bits(prefix: u8) -> String {
    format!(
        "{:0<width$}",
        "1".repeat(prefix as usize),
        width = MAX_LENGTH as usize
    )
}

/// Keep the first `prefix` bits of `bin` and fill the host bits with `fill`.
pub(crate) fn fill_host_bits(bin: &str, prefix: u8, fill: char) -> String {
    let host_bits = (MAX_LENGTH - prefix) as usize;
    let mut out = String::with_capacity(MAX_LENGTH as usize);
    out.push_str(&bin[..prefix as usize]);
    out.extend(std::iter::repeat(fill).take(host_bits));
    out
}

/// True when the mask is a run of ones followed only by zeros.
pub(crate) fn is_contiguous(mask_bin: &str) -> bool {
    !mask_bin.trim_start_matches('1').contains('1')
}
