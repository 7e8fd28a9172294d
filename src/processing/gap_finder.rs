//! Gap finding between declared blocks.
//!
//! Identifies unused address ranges between allocated blocks. Space before
//! the first block and after the last one is not considered.

use super::partition::partition_range_text;
use crate::models::{format_address, Block};
use serde::Serialize;

/// An inclusive run of addresses not covered by any block.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UnusedRange {
    pub start_address: u32,
    pub end_address: u32,
    pub size: u64,
    /// Minimal CIDR blocks covering exactly this range, in address order.
    pub covering_blocks: Vec<String>,
}

impl UnusedRange {
    fn new(start_address: u32, end_address: u32) -> UnusedRange {
        UnusedRange {
            start_address,
            end_address,
            size: end_address as u64 - start_address as u64 + 1,
            covering_blocks: partition_range_text(start_address, end_address),
        }
    }

    pub fn start_text(&self) -> String {
        format_address(self.start_address)
    }

    pub fn end_text(&self) -> String {
        format_address(self.end_address)
    }
}

/// Find the unused ranges between blocks, in ascending address order.
///
/// Each pair of neighbours in start order is compared on its own; touching
/// or overlapping neighbours leave no gap.
pub fn find_unused_ranges(blocks: &[Block]) -> Vec<UnusedRange> {
    let sorted = sorted_by_start(blocks);

    let ranges: Vec<UnusedRange> = sorted
        .windows(2)
        .filter_map(|pair| {
            let (prev_end, next_start) = (pair[0].network_end as u64, pair[1].network_start as u64);
            (prev_end + 1 < next_start)
                .then(|| UnusedRange::new((prev_end + 1) as u32, (next_start - 1) as u32))
        })
        .collect();

    log::debug!(
        "find_unused_ranges: {} block(s), {} gap(s)",
        blocks.len(),
        ranges.len()
    );
    ranges
}

/// Like [`find_unused_ranges`], but a block nested inside an earlier, larger
/// block cannot open a gap inside that larger block.
pub fn find_uncovered_ranges(blocks: &[Block]) -> Vec<UnusedRange> {
    let sorted = sorted_by_start(blocks);

    let mut ranges = Vec::new();
    let Some(first) = sorted.first() else {
        return ranges;
    };

    // highest address covered so far
    let mut covered_to = first.network_end as u64;
    for block in &sorted[1..] {
        let next_start = block.network_start as u64;
        if covered_to + 1 < next_start {
            ranges.push(UnusedRange::new(
                (covered_to + 1) as u32,
                (next_start - 1) as u32,
            ));
        }
        covered_to = covered_to.max(block.network_end as u64);
    }
    ranges
}

fn sorted_by_start(blocks: &[Block]) -> Vec<&Block> {
    let mut sorted: Vec<&Block> = blocks.iter().collect();
    sorted.sort_by_key(|b| b.network_start);
    sorted
}
