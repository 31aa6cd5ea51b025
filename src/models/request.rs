//! Construction record for a subnet, as read from JSON.

use super::prefix::PrefixArg;
use super::subnet::SubnetCalculator;
use crate::error::SubnetError;
use serde::{Deserialize, Serialize};

/// `{ "ip": ..., "mask": ... }` or `{ "ip": ..., "prefix": ... }`.
///
/// Both shapes deserialize, whether exactly one of mask or prefix is present is
/// checked by [`SubnetRequest::build`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SubnetRequest {
    pub ip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<PrefixArg>,
}

impl SubnetRequest {
    pub fn build(self) -> Result<SubnetCalculator, SubnetError> {
        SubnetCalculator::try_from(self)
    }
}
