//! IPv4 address arithmetic on plain `u32` values.
//!
//! Dotted-quad text only exists at the edges ([`parse_address`] and
//! [`format_address`]); everything else works on 32-bit integers. Block
//! sizes are returned as `u64` because a `/0` holds 2^32 addresses.

use super::CidrError;
use std::fmt;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Parse dotted-quad text into its 32-bit value.
///
/// Leading zeros are accepted (`"010"` is ten), matching the validator's
/// `1-3 digits` rule rather than `std::net::Ipv4Addr`'s stricter parser.
///
/// # Examples
/// ```
/// use subnet_planner::models::parse_address;
/// assert_eq!(parse_address("192.168.1.1").unwrap(), 3232235777);
/// ```
pub fn parse_address(text: &str) -> Result<u32, CidrError> {
    let mut octets = [0u32; 4];
    let mut count = 0;
    for part in text.split('.') {
        if count == 4 {
            return Err(CidrError::MalformedSyntax);
        }
        let octet: u32 = part.parse().map_err(|_| CidrError::MalformedSyntax)?;
        if octet > 255 {
            return Err(CidrError::OctetOutOfRange);
        }
        octets[count] = octet;
        count += 1;
    }
    if count != 4 {
        return Err(CidrError::MalformedSyntax);
    }
    Ok((octets[0] << 24) | (octets[1] << 16) | (octets[2] << 8) | octets[3])
}

/// Format a 32-bit value as dotted-quad text.
///
/// # Examples
/// ```
/// use subnet_planner::models::format_address;
/// assert_eq!(format_address(4294967295), "255.255.255.255");
/// ```
pub fn format_address(addr: u32) -> String {
    format!(
        "{}.{}.{}.{}",
        (addr >> 24) & 0xFF,
        (addr >> 16) & 0xFF,
        (addr >> 8) & 0xFF,
        addr & 0xFF
    )
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// The shift happens in 64 bits so `/0` and `/32` need no special casing.
///
/// # Examples
/// ```
/// use subnet_planner::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0).unwrap(), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, CidrError> {
    if len > MAX_LENGTH {
        Err(CidrError::PrefixOutOfRange)
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given address and prefix length.
pub fn cut_addr(addr: u32, len: u8) -> Result<u32, CidrError> {
    Ok(addr & get_cidr_mask(len)?)
}

/// Calculate the broadcast (last) address for a given address and prefix length.
pub fn broadcast_addr(addr: u32, len: u8) -> Result<u32, CidrError> {
    let mask = get_cidr_mask(len)?;
    Ok((addr & mask) | !mask)
}

/// Number of addresses in a block of the given prefix length.
pub fn block_size(len: u8) -> Result<u64, CidrError> {
    if len > MAX_LENGTH {
        Err(CidrError::PrefixOutOfRange)
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

/// Prefix length of a block holding exactly `size` addresses.
///
/// Returns `None` unless `size` is a power of two no larger than 2^32.
pub fn prefix_for_size(size: u64) -> Option<u8> {
    if size == 0 || !size.is_power_of_two() || size > 1u64 << MAX_LENGTH {
        return None;
    }
    Some(MAX_LENGTH - size.trailing_zeros() as u8)
}

/// Calculate the minimum mask for an address based on trailing zeros.
///
/// `0.0.0.0` is aligned to every block size and yields `0`.
pub fn lo_mask(addr: u32) -> u8 {
    MAX_LENGTH - addr.trailing_zeros() as u8
}

/// Render an address as four dot-separated groups of 8 bits.
pub fn to_binary(addr: u32) -> String {
    addr.to_be_bytes()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .collect::<Vec<String>>()
        .join(".")
}

/// A network address together with its prefix length.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    /// Network address (already masked).
    pub network: u32,
    /// The prefix length (0-32).
    pub prefix: u8,
}

impl Cidr {
    /// Build a CIDR, masking `addr` down to its network address.
    pub fn new(addr: u32, prefix: u8) -> Result<Cidr, CidrError> {
        Ok(Cidr {
            network: cut_addr(addr, prefix)?,
            prefix,
        })
    }

    /// Number of addresses covered.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix.min(MAX_LENGTH))
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", format_address(self.network), self.prefix)
    }
}
