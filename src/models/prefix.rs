//! CIDR prefix input.

use crate::error::SubnetError;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::binary::MAX_LENGTH;

/// A prefix as handed in by a caller: a number, or text that should hold one.
///
/// Floats and text come from command lines and JSON documents, and are only turned into
/// an integer while the subnet is being built so that a bad value reports as
/// [`SubnetError::Conversion`]. A float is accepted when it has no fractional part.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PrefixArg {
    Int(i64),
    Float(f64),
    Text(String),
}

impl PrefixArg {
    /// Coerce to an integer and check it is a valid prefix length.
    pub fn resolve(&self) -> Result<u8, SubnetError> {
        let value = match self {
            PrefixArg::Int(v) => *v,
            PrefixArg::Float(v) => float_prefix(*v)?,
            PrefixArg::Text(s) => parse_prefix(s)?,
        };
        check_range(value)
    }
}

/// Parse integer-like prefix text, e.g. `"24"` or `" /24 "`.
///
/// # Examples
/// ```
/// use subnet_calc::models::parse_prefix;
/// assert_eq!(parse_prefix("24").unwrap(), 24);
/// assert_eq!(parse_prefix("/8").unwrap(), 8);
/// assert!(parse_prefix("twenty").is_err());
/// ```
pub fn parse_prefix(s: &str) -> Result<i64, SubnetError> {
    let trimmed = s.trim();
    let digits = trimmed.strip_prefix('/').unwrap_or(trimmed);
    digits
        .parse::<i64>()
        .map_err(|_| SubnetError::Conversion(format!("prefix '{s}' must be an integer")))
}

fn float_prefix(value: f64) -> Result<i64, SubnetError> {
    if value.is_finite() && value.fract() == 0.0 {
        // out of i64 range saturates, check_range rejects it
        Ok(value as i64)
    } else {
        Err(SubnetError::Conversion(format!(
            "prefix {value} must be an integer"
        )))
    }
}

fn check_range(value: i64) -> Result<u8, SubnetError> {
    if (0..=MAX_LENGTH as i64).contains(&value) {
        Ok(value as u8)
    } else {
        Err(SubnetError::Range(value))
    }
}

impl fmt::Display for PrefixArg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PrefixArg::Int(v) => write!(f, "{v}"),
            PrefixArg::Float(v) => write!(f, "{v}"),
            PrefixArg::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for PrefixArg {
    fn from(v: i64) -> Self {
        PrefixArg::Int(v)
    }
}

impl From<i32> for PrefixArg {
    fn from(v: i32) -> Self {
        PrefixArg::Int(v.into())
    }
}

impl From<u8> for PrefixArg {
    fn from(v: u8) -> Self {
        PrefixArg::Int(v.into())
    }
}

impl From<f64> for PrefixArg {
    fn from(v: f64) -> Self {
        PrefixArg::Float(v)
    }
}

impl From<&str> for PrefixArg {
    fn from(s: &str) -> Self {
        PrefixArg::Text(s.to_string())
    }
}

impl From<String> for PrefixArg {
    fn from(s: String) -> Self {
        PrefixArg::Text(s)
    }
}
