//! IPv4 subnet calculator.
//!
//! Build a [`models::SubnetCalculator`] from an address and either a dotted-decimal
//! mask or a CIDR prefix, then read network, broadcast, host count, mask and prefix.
//!
//! ```
//! use subnet_calc::models::SubnetCalculator;
//! let subnet = SubnetCalculator::with_prefix("10.0.5.200", 30).unwrap();
//! assert_eq!(subnet.broadcast(), "10.0.5.203");
//! assert_eq!(subnet.host_count(), 4);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod output;

pub use error::SubnetError;
pub use models::{SubnetCalculator, SubnetRequest};
