//! Errors raised while building a [`crate::models::SubnetCalculator`].

use thiserror::Error;

/// Every way constructing a subnet can fail.
///
/// Construction stops at the first error, there is never a partially built value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubnetError {
    /// Neither or both of mask and prefix were supplied.
    #[error("{0}")]
    Configuration(String),
    /// An address or mask is not four dot separated groups of 1-3 digits.
    #[error("{0}")]
    Validation(String),
    /// A prefix, octet or binary chunk could not be read as an integer.
    #[error("{0}")]
    Conversion(String),
    /// Prefix outside 0..=32.
    #[error("prefix {0} is out of range, must be between 0 and 32")]
    Range(i64),
    /// Binary expansion longer than 32 bits.
    #[error("{kind} {value} is longer than 32 bits ({bits} bits)")]
    Overflow {
        kind: &'static str,
        value: String,
        bits: usize,
    },
}

impl SubnetError {
    pub(crate) fn neither() -> Self {
        SubnetError::Configuration("either a mask or a prefix is required".to_string())
    }

    pub(crate) fn both() -> Self {
        SubnetError::Configuration("supply only one of mask or prefix, not both".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            SubnetError::neither().to_string(),
            "either a mask or a prefix is required"
        );
        assert_eq!(
            SubnetError::Range(33).to_string(),
            "prefix 33 is out of range, must be between 0 and 32"
        );
        let e = SubnetError::Overflow {
            kind: "ip address",
            value: "300.1.1.1".to_string(),
            bits: 33,
        };
        assert_eq!(
            e.to_string(),
            "ip address 300.1.1.1 is longer than 32 bits (33 bits)"
        );
    }
}
