//! IPv4 CIDR notation utilities.
//!
//! Provides the [`Cidr`] struct for representing IPv4 address blocks in
//! CIDR notation, along with mask helpers used to normalize host bits.

use std::net::Ipv4Addr;
use std::str::FromStr;

use thiserror::Error;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Error parsing a CIDR block string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CidrError {
    /// The string is not in "address/prefix" form.
    #[error("invalid CIDR format '{0}': expected address/prefix")]
    Format(String),
    /// The address part does not parse as an IPv4 address.
    #[error("invalid IP address '{0}'")]
    Address(String),
    /// The prefix length part does not parse or exceeds /32.
    #[error("invalid prefix length '{0}'")]
    PrefixLength(String),
}

/// Convert a CIDR prefix length to a subnet mask as u32.
pub fn get_cidr_mask(len: u8) -> Result<u32, CidrError> {
    if len > MAX_LENGTH {
        Err(CidrError::PrefixLength(len.to_string()))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
///
/// Host bits below the prefix are cleared.
pub fn network_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, CidrError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// IPv4 address block in CIDR notation.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    /// The network address (host bits cleared on parse).
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub prefix_len: u8,
}

impl Cidr {
    /// Parse a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// Host bits set below the prefix are masked off rather than rejected,
    /// so "10.0.0.5/24" parses as 10.0.0.0/24.
    pub fn parse(block: &str) -> Result<Cidr, CidrError> {
        let block = block.trim();
        let parts: Vec<&str> = block.split('/').collect();
        if parts.len() != 2 {
            return Err(CidrError::Format(block.to_string()));
        }
        let addr: Ipv4Addr = parts[0]
            .parse()
            .map_err(|_| CidrError::Address(parts[0].to_string()))?;
        let prefix_len: u8 = parts[1]
            .parse()
            .map_err(|_| CidrError::PrefixLength(parts[1].to_string()))?;
        if prefix_len > MAX_LENGTH {
            return Err(CidrError::PrefixLength(parts[1].to_string()));
        }
        let addr = network_addr(addr, prefix_len)?;
        Ok(Cidr { addr, prefix_len })
    }
}

impl FromStr for Cidr {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cidr::parse(s)
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix_len)
    }
}

impl PartialEq for Cidr {
    fn eq(&self, other: &Cidr) -> bool {
        self.addr == other.addr && self.prefix_len == other.prefix_len
    }
}

impl PartialOrd for Cidr {
    fn partial_cmp(&self, other: &Cidr) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
