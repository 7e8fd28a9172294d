//! Supernet aggregation suggestions.
//!
//! Two strategies run over the same input and their results are simply
//! concatenated:
//! - pairwise: two equal-size blocks that together form one CIDR block
//! - group: maximal runs of touching equal-size blocks whose length is a
//!   power of two, merged in one step (four `/26` into a `/24`)
//!
//! A group suggestion does not replace the pairwise ones found inside the
//! same run; the caller decides which to apply.

use crate::models::{block_size, get_cidr_mask, prefix_for_size, Block, BlockId, Cidr};
use itertools::Itertools;
use serde::Serialize;

/// A proposal to replace several blocks by one enclosing block.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SupernetSuggestion {
    pub original_blocks: Vec<BlockId>,
    pub suggested_supernet: String,
    /// Addresses in the supernet that none of the original blocks cover.
    pub saved_addresses: u64,
    /// Share of the supernet covered by the original blocks, 0-100.
    pub efficiency: f64,
}

impl SupernetSuggestion {
    fn new(members: &[&Block], supernet: Cidr) -> SupernetSuggestion {
        let used: u64 = members.iter().map(|b| b.total_addresses()).sum();
        let size = supernet.size();
        SupernetSuggestion {
            original_blocks: members.iter().map(|b| b.id).collect(),
            suggested_supernet: supernet.to_string(),
            saved_addresses: size.saturating_sub(used),
            efficiency: 100.0 * used as f64 / size as f64,
        }
    }
}

/// Find aggregation opportunities, best efficiency first.
pub fn find_supernet_opportunities(blocks: &[Block]) -> Vec<SupernetSuggestion> {
    let mut suggestions = pairwise_suggestions(blocks);
    suggestions.extend(group_suggestions(blocks));
    suggestions.sort_by(|a, b| b.efficiency.total_cmp(&a.efficiency));

    log::debug!(
        "find_supernet_opportunities: {} block(s), {} suggestion(s)",
        blocks.len(),
        suggestions.len()
    );
    suggestions
}

fn pairwise_suggestions(blocks: &[Block]) -> Vec<SupernetSuggestion> {
    let mut suggestions = Vec::new();

    for (i, a) in blocks.iter().enumerate() {
        for b in &blocks[i + 1..] {
            if a.prefix_length != b.prefix_length || a.prefix_length <= 1 {
                continue;
            }
            if let Some(supernet) = combine_pair(a, b) {
                suggestions.push(SupernetSuggestion::new(&[a, b], supernet));
            }
        }
    }

    suggestions
}

/// Supernet of two equal-prefix blocks, if their union is one CIDR block.
fn combine_pair(a: &Block, b: &Block) -> Option<Cidr> {
    let prefix = a.prefix_length;
    let size = block_size(prefix).ok()?;
    let parent_mask = get_cidr_mask(prefix - 1).ok()?;

    let (a_start, b_start) = (a.network_start as u64, b.network_start as u64);
    let min_start = a_start.min(b_start);
    let max_end = (a.network_end as u64).max(b.network_end as u64);

    let siblings = a.network_start & parent_mask == b.network_start & parent_mask
        && a_start.abs_diff(b_start) == size;
    let adjacent = a.network_end as u64 + 1 == b_start || b.network_end as u64 + 1 == a_start;

    let total = max_end - min_start + 1;
    if !siblings {
        // touching is not enough, the union must also be an aligned block
        if !adjacent || !total.is_power_of_two() || min_start % total != 0 {
            return None;
        }
    }

    let supernet_prefix = prefix_for_size(total)?;
    Cidr::new(min_start as u32, supernet_prefix).ok()
}

fn group_suggestions(blocks: &[Block]) -> Vec<SupernetSuggestion> {
    let mut suggestions = Vec::new();

    let groups = blocks.iter().into_group_map_by(|b| b.prefix_length);
    for (prefix, mut members) in groups.into_iter().sorted_by_key(|(prefix, _)| *prefix) {
        if members.len() < 3 {
            continue;
        }
        members.sort_by_key(|b| b.network_start);

        let mut run: Vec<&Block> = vec![members[0]];
        for &block in &members[1..] {
            let touches = run
                .last()
                .is_some_and(|prev| prev.network_end as u64 + 1 == block.network_start as u64);
            if touches {
                run.push(block);
            } else {
                suggestions.extend(combine_run(prefix, &run));
                run = vec![block];
            }
        }
        suggestions.extend(combine_run(prefix, &run));
    }

    suggestions
}

/// One suggestion covering a whole run of touching `/prefix` blocks.
fn combine_run(prefix: u8, run: &[&Block]) -> Option<SupernetSuggestion> {
    let len = run.len();
    if len < 2 || !len.is_power_of_two() {
        return None;
    }
    let levels = len.trailing_zeros() as u8;
    if levels > prefix {
        return None;
    }
    let supernet = Cidr::new(run[0].network_start, prefix - levels).ok()?;
    if supernet.network != run[0].network_start {
        log::debug!(
            "run of {len} /{prefix} starting at {} is not aligned to {supernet}",
            run[0].cidr
        );
        return None;
    }
    Some(SupernetSuggestion::new(run, supernet))
}
