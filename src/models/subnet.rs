//! The subnet calculator value object.
//!
//! A [`SubnetCalculator`] is built in one step from an address plus either a mask or a
//! prefix. Everything else is derived during construction and never changes afterwards.

use super::binary::{
    bin_to_ip, expand, fill_host_bits, is_contiguous, mask_bits, validate_ip, MAX_LENGTH,
};
use super::prefix::PrefixArg;
use super::request::SubnetRequest;
use crate::error::SubnetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Whichever of mask or prefix the caller supplied.
enum Netmask<'a> {
    Mask(&'a str),
    Prefix(PrefixArg),
}

/// IPv4 subnet properties derived from an address and a mask or prefix.
///
/// Deserializing reads a [`SubnetRequest`] and builds from it, so a JSON object goes
/// through the same checks as [`SubnetCalculator::new`].
///
/// # Examples
/// ```
/// use subnet_calc::models::SubnetCalculator;
/// let subnet = SubnetCalculator::with_mask("192.168.0.1", "255.255.255.0").unwrap();
/// assert_eq!(subnet.network(), "192.168.0.0");
/// assert_eq!(subnet.broadcast(), "192.168.0.255");
/// assert_eq!(subnet.host_count(), 256);
/// assert_eq!(subnet.prefix(), 24);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase", try_from = "SubnetRequest")]
pub struct SubnetCalculator {
    /// Address as supplied.
    ip: String,
    /// Lowest address, host bits cleared.
    network: String,
    /// Highest address, host bits set.
    broadcast: String,
    /// 2^(32 - prefix), network and broadcast included.
    host_count: u64,
    /// Dotted-decimal mask, as supplied or derived from the prefix.
    mask: String,
    /// Number of network bits, as supplied or counted from the mask.
    prefix: u8,
    #[serde(skip)]
    ip_bin: String,
    #[serde(skip)]
    mask_bin: String,
}

impl SubnetCalculator {
    /// Build a subnet from `ip` and exactly one of `mask` or `prefix`.
    pub fn new(
        ip: &str,
        mask: Option<&str>,
        prefix: Option<PrefixArg>,
    ) -> Result<SubnetCalculator, SubnetError> {
        log::debug!("SubnetCalculator::new(ip={ip}, mask={mask:?}, prefix={prefix:?})");

        let netmask = match (mask, prefix) {
            (Some(mask), None) => Netmask::Mask(mask),
            (None, Some(prefix)) => Netmask::Prefix(prefix),
            (None, None) => return Err(SubnetError::neither()),
            (Some(_), Some(_)) => return Err(SubnetError::both()),
        };

        if !validate_ip(ip) {
            return Err(SubnetError::Validation(format!(
                "ip address {ip} is invalid"
            )));
        }
        let ip_bin = expand("ip address", ip)?;

        let (mask, mask_bin, prefix) = match netmask {
            Netmask::Mask(mask) => {
                if !validate_ip(mask) {
                    return Err(SubnetError::Validation(format!("mask {mask} is invalid")));
                }
                let mask_bin = expand("mask", mask)?;
                let prefix = mask_bin.matches('1').count() as u8;
                if !is_contiguous(&mask_bin) {
                    log::warn!("mask {mask} is not contiguous, using /{prefix} from its set bits");
                }
                (mask.to_string(), mask_bin, prefix)
            }
            Netmask::Prefix(prefix) => {
                let prefix = prefix.resolve()?;
                let mask_bin = mask_bits(prefix);
                (bin_to_ip(&mask_bin)?, mask_bin, prefix)
            }
        };
        log::trace!("ip_bin={ip_bin} mask_bin={mask_bin} prefix={prefix}");

        let network = bin_to_ip(&fill_host_bits(&ip_bin, prefix, '0'))?;
        let broadcast = bin_to_ip(&fill_host_bits(&ip_bin, prefix, '1'))?;
        let host_count = 1u64 << (MAX_LENGTH - prefix);

        log::debug!("{ip}/{prefix} network={network} broadcast={broadcast} hosts={host_count}");
        Ok(SubnetCalculator {
            ip: ip.to_string(),
            network,
            broadcast,
            host_count,
            mask,
            prefix,
            ip_bin,
            mask_bin,
        })
    }

    pub fn with_mask(ip: &str, mask: &str) -> Result<SubnetCalculator, SubnetError> {
        SubnetCalculator::new(ip, Some(mask), None)
    }

    pub fn with_prefix(
        ip: &str,
        prefix: impl Into<PrefixArg>,
    ) -> Result<SubnetCalculator, SubnetError> {
        SubnetCalculator::new(ip, None, Some(prefix.into()))
    }

    /// Build from CIDR notation, e.g. `"10.0.5.200/30"`.
    pub fn from_cidr(addr_cidr: &str) -> Result<SubnetCalculator, SubnetError> {
        let addr_cidr = addr_cidr.trim();
        let (ip, prefix) = addr_cidr.split_once('/').ok_or_else(|| {
            SubnetError::Validation(format!("{addr_cidr} is not in address/prefix form"))
        })?;
        SubnetCalculator::with_prefix(ip, prefix)
    }

    pub fn ip(&self) -> &str {
        &self.ip
    }

    pub fn network(&self) -> &str {
        &self.network
    }

    pub fn broadcast(&self) -> &str {
        &self.broadcast
    }

    pub fn host_count(&self) -> u64 {
        self.host_count
    }

    pub fn mask(&self) -> &str {
        &self.mask
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// The 32 character binary form of the address.
    pub fn ip_bin(&self) -> &str {
        &self.ip_bin
    }

    /// The 32 character binary form of the mask.
    pub fn mask_bin(&self) -> &str {
        &self.mask_bin
    }

    /// Network in CIDR notation, e.g. `192.168.0.0/24`.
    pub fn cidr(&self) -> String {
        format!("{}/{}", self.network, self.prefix)
    }

    pub fn ip_addr(&self) -> Ipv4Addr {
        to_addr(&self.ip_bin)
    }

    pub fn mask_addr(&self) -> Ipv4Addr {
        to_addr(&self.mask_bin)
    }

    pub fn network_addr(&self) -> Ipv4Addr {
        to_addr(&fill_host_bits(&self.ip_bin, self.prefix, '0'))
    }

    pub fn broadcast_addr(&self) -> Ipv4Addr {
        to_addr(&fill_host_bits(&self.ip_bin, self.prefix, '1'))
    }
}

// Binary strings held by a built SubnetCalculator are always 32 valid digits.
fn to_addr(bin: &str) -> Ipv4Addr {
    let bits = bin
        .bytes()
        .fold(0u32, |acc, b| (acc << 1) | u32::from(b == b'1'));
    Ipv4Addr::from(bits)
}

impl TryFrom<SubnetRequest> for SubnetCalculator {
    type Error = SubnetError;

    fn try_from(request: SubnetRequest) -> Result<Self, Self::Error> {
        SubnetCalculator::new(&request.ip, request.mask.as_deref(), request.prefix)
    }
}

impl FromStr for SubnetCalculator {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubnetCalculator::from_cidr(s)
    }
}

impl fmt::Display for SubnetCalculator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.ip, self.prefix)
    }
}
