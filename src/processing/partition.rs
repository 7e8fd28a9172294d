//! Range to CIDR decomposition.
//!
//! Splits an arbitrary inclusive address range into the fewest CIDR blocks.

use crate::models::{lo_mask, Cidr, MAX_LENGTH};

/// Partition `[start, end]` into the minimal list of CIDR blocks.
///
/// Returns an empty list when `start > end`.
pub fn partition_range(start: u32, end: u32) -> Vec<Cidr> {
    let mut blocks = Vec::new();
    let end = end as u64;
    let mut next_ip = start as u64;

    while next_ip <= end {
        let mask = find_biggest_subnet(next_ip as u32, end - next_ip + 1);
        let cidr = Cidr {
            network: next_ip as u32,
            prefix: mask,
        };
        next_ip += cidr.size();
        blocks.push(cidr);
    }

    blocks
}

/// [`partition_range`] rendered as CIDR text.
pub fn partition_range_text(start: u32, end: u32) -> Vec<String> {
    partition_range(start, end)
        .iter()
        .map(|cidr| cidr.to_string())
        .collect()
}

/// Find the biggest block that starts at `start_ip` and fits in `remaining`.
///
/// The returned mask is constrained by:
/// 1. The alignment of `start_ip` (it must be a valid network address)
/// 2. The block must not run past the remaining span
fn find_biggest_subnet(start_ip: u32, remaining: u64) -> u8 {
    let mut next_mask = lo_mask(start_ip);
    while next_mask < MAX_LENGTH && (1u64 << (MAX_LENGTH - next_mask)) > remaining {
        next_mask += 1;
    }
    next_mask
}
