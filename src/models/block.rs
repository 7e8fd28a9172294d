//! Declared address block and its derived numeric fields.

use super::ipv4::{format_address, get_cidr_mask, parse_address, to_binary, Cidr, MAX_LENGTH};
use super::CidrError;
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_BLOCK_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a [`Block`].
#[derive(Serialize, Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
#[serde(transparent)]
pub struct BlockId(u64);

impl BlockId {
    fn next() -> BlockId {
        BlockId(NEXT_BLOCK_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A declared subnet. Immutable once computed.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: BlockId,
    /// CIDR text as entered, e.g. `192.168.1.0/24`.
    pub cidr: String,
    pub prefix_length: u8,
    /// First address of the block (network address).
    pub network_start: u32,
    /// Last address of the block (broadcast address), inclusive.
    pub network_end: u32,
    pub mask: u32,
    pub available_hosts: u64,
    pub first_host: u32,
    pub last_host: u32,
    /// Opaque display tag, never used in arithmetic.
    pub color: String,
}

/// Compute a [`Block`] from CIDR text.
///
/// The text is expected to have passed [`super::validate_cidr`]; anything
/// that slipped through is reported as an error rather than producing a
/// bogus block.
pub fn compute_block(cidr: &str, color: &str) -> Result<Block, CidrError> {
    let (ip, prefix) = cidr.split_once('/').ok_or(CidrError::MalformedSyntax)?;
    let prefix_length: u8 = prefix.parse().map_err(|_| CidrError::MalformedSyntax)?;
    if prefix_length > MAX_LENGTH {
        return Err(CidrError::PrefixOutOfRange);
    }
    let addr = parse_address(ip)?;

    let mask = get_cidr_mask(prefix_length)?;
    let network_start = addr & mask;
    let network_end = network_start | !mask;

    let size = 1u64 << (MAX_LENGTH - prefix_length);
    let available_hosts = size.saturating_sub(2);
    let (first_host, last_host) = if available_hosts > 0 {
        (network_start + 1, network_end - 1)
    } else {
        (network_start, network_start)
    };

    log::debug!(
        "compute_block({cidr}) -> {}-{} hosts={available_hosts}",
        format_address(network_start),
        format_address(network_end)
    );

    Ok(Block {
        id: BlockId::next(),
        cidr: cidr.to_string(),
        prefix_length,
        network_start,
        network_end,
        mask,
        available_hosts,
        first_host,
        last_host,
        color: color.to_string(),
    })
}

impl Block {
    /// Number of addresses in the block, network and broadcast included.
    pub fn total_addresses(&self) -> u64 {
        self.network_end as u64 - self.network_start as u64 + 1
    }

    /// Canonical `network/prefix` form, independent of how it was typed.
    pub fn network_cidr(&self) -> Cidr {
        Cidr {
            network: self.network_start,
            prefix: self.prefix_length,
        }
    }

    pub fn contains(&self, addr: u32) -> bool {
        addr >= self.network_start && addr <= self.network_end
    }

    /// Containment test on dotted-quad text; unparsable text is never contained.
    pub fn contains_text(&self, ip: &str) -> bool {
        parse_address(ip).is_ok_and(|addr| self.contains(addr))
    }

    pub fn network_address(&self) -> String {
        format_address(self.network_start)
    }

    pub fn broadcast_address(&self) -> String {
        format_address(self.network_end)
    }

    pub fn subnet_mask(&self) -> String {
        format_address(self.mask)
    }

    pub fn first_host_address(&self) -> String {
        format_address(self.first_host)
    }

    pub fn last_host_address(&self) -> String {
        format_address(self.last_host)
    }

    /// Network address in binary, for the bit-level details view.
    pub fn network_binary(&self) -> String {
        to_binary(self.network_start)
    }

    pub fn overlaps(&self, other: &Block) -> bool {
        self.network_start <= other.network_end && other.network_start <= self.network_end
    }

    pub fn same_range(&self, other: &Block) -> bool {
        self.network_start == other.network_start && self.network_end == other.network_end
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.cidr, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_block_24() {
        let block = compute_block("192.168.1.0/24", "#FF0000").unwrap();
        assert_eq!(block.cidr, "192.168.1.0/24");
        assert_eq!(block.network_address(), "192.168.1.0");
        assert_eq!(block.broadcast_address(), "192.168.1.255");
        assert_eq!(block.subnet_mask(), "255.255.255.0");
        assert_eq!(block.available_hosts, 254);
        assert_eq!(block.first_host_address(), "192.168.1.1");
        assert_eq!(block.last_host_address(), "192.168.1.254");
        assert_eq!(block.color, "#FF0000");
        assert_eq!(block.total_addresses(), 256);
    }

    #[test]
    fn test_compute_block_32() {
        let block = compute_block("10.1.2.3/32", "#000000").unwrap();
        assert_eq!(block.network_start, block.network_end);
        assert_eq!(block.subnet_mask(), "255.255.255.255");
        assert_eq!(block.available_hosts, 0);
        assert_eq!(block.first_host_address(), "10.1.2.3");
        assert_eq!(block.last_host_address(), "10.1.2.3");
    }

    #[test]
    fn test_compute_block_31() {
        let block = compute_block("10.1.2.2/31", "#000000").unwrap();
        assert_eq!(block.available_hosts, 0);
        assert_eq!(block.first_host, block.network_start);
        assert_eq!(block.last_host, block.network_start);
    }

    #[test]
    fn test_compute_block_0() {
        let block = compute_block("0.0.0.0/0", "#000000").unwrap();
        assert_eq!(block.mask, 0);
        assert_eq!(block.network_start, 0);
        assert_eq!(block.network_end, u32::MAX);
        assert_eq!(block.total_addresses(), 1u64 << 32);
        assert_eq!(block.available_hosts, (1u64 << 32) - 2);
    }

    #[test]
    fn test_compute_block_unaligned_text() {
        let block = compute_block("192.168.1.77/24", "#000000").unwrap();
        assert_eq!(block.cidr, "192.168.1.77/24");
        assert_eq!(block.network_cidr().to_string(), "192.168.1.0/24");
        assert_eq!(block.network_start & block.mask, block.network_start);
    }

    #[test]
    fn test_compute_block_rejects_unvalidated() {
        assert_eq!(
            compute_block("10.0.0.0/33", "#000000"),
            Err(CidrError::PrefixOutOfRange)
        );
        assert_eq!(
            compute_block("10.0.0.300/8", "#000000"),
            Err(CidrError::OctetOutOfRange)
        );
        assert_eq!(
            compute_block("nonsense", "#000000"),
            Err(CidrError::MalformedSyntax)
        );
    }

    #[test]
    fn test_ids_are_unique() {
        let a = compute_block("10.0.0.0/24", "#000000").unwrap();
        let b = compute_block("10.0.0.0/24", "#000000").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_contains() {
        let block = compute_block("192.168.1.0/24", "#000000").unwrap();
        assert!(block.contains_text("192.168.1.0"));
        assert!(block.contains_text("192.168.1.255"));
        assert!(!block.contains_text("192.168.2.0"));
        assert!(!block.contains_text("not an ip"));
    }

    #[test]
    fn test_network_binary() {
        let block = compute_block("10.0.0.0/8", "#000000").unwrap();
        assert_eq!(block.network_binary(), "00001010.00000000.00000000.00000000");
    }
}
