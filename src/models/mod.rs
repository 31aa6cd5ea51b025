//! Subnet domain models.
//!
//! - [`SubnetCalculator`] - address plus mask or prefix, with derived subnet properties
//! - [`SubnetRequest`] - serde construction record
//! - [`PrefixArg`] - integer or integer-like prefix input
//! - binary helpers [`validate_ip`], [`ip_to_bin`], [`bin_to_ip`]

mod binary;
mod prefix;
mod request;
mod subnet;

// Re-export public types
pub use binary::{bin_to_ip, ip_to_bin, validate_ip, MAX_LENGTH};
pub use prefix::{parse_prefix, PrefixArg};
pub use request::SubnetRequest;
pub use subnet::SubnetCalculator;
