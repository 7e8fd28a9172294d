//! Address space totals over a block collection.

use super::gap_finder::UnusedRange;
use crate::models::Block;
use serde::Serialize;

/// How much of the span between the lowest and highest block is in use.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddressCoverage {
    /// Addresses from the first block's start to the last block's end.
    pub total_addresses: u64,
    /// Addresses inside at least one block; overlaps count once.
    pub used_addresses: u64,
    pub available_addresses: u64,
}

/// Compute [`AddressCoverage`] for a set of blocks.
pub fn address_coverage(blocks: &[Block]) -> AddressCoverage {
    let mut ranges: Vec<(u64, u64)> = blocks
        .iter()
        .map(|b| (b.network_start as u64, b.network_end as u64))
        .collect();
    ranges.sort_unstable();

    let (Some(first), Some(last_end)) = (ranges.first(), ranges.iter().map(|r| r.1).max()) else {
        return AddressCoverage::default();
    };
    let total_addresses = last_end - first.0 + 1;

    let mut used_addresses = 0;
    let (mut run_start, mut run_end) = *first;
    for &(start, end) in &ranges[1..] {
        if start > run_end + 1 {
            used_addresses += run_end - run_start + 1;
            run_start = start;
        }
        run_end = run_end.max(end);
    }
    used_addresses += run_end - run_start + 1;

    AddressCoverage {
        total_addresses,
        used_addresses,
        available_addresses: total_addresses - used_addresses,
    }
}

/// Sum of all unused range sizes.
pub fn total_unused(ranges: &[UnusedRange]) -> u64 {
    ranges.iter().map(|r| r.size).sum()
}
