//! The owning collection of declared blocks.

use crate::models::{color_for, compute_block, validate_cidr, Block, BlockId, CidrError};
use crate::processing::{
    add_cidr_lines, address_coverage, detect_conflicts, find_supernet_opportunities,
    find_unused_ranges, log_conflicts, AddressCoverage, BatchOutcome, Conflict,
    SupernetSuggestion, UnusedRange,
};
use serde::Serialize;
use std::fmt;

/// Everything derived from a block collection at one point in time.
#[derive(Serialize, Debug, Clone)]
pub struct Analysis {
    pub blocks: Vec<Block>,
    pub conflicts: Vec<Conflict>,
    pub unused_ranges: Vec<UnusedRange>,
    pub suggestions: Vec<SupernetSuggestion>,
    pub coverage: AddressCoverage,
}

/// Blocks in the order they were added.
#[derive(Debug, Default, Clone)]
pub struct SubnetPlan {
    blocks: Vec<Block>,
}

impl SubnetPlan {
    pub fn new() -> SubnetPlan {
        SubnetPlan { blocks: Vec::new() }
    }

    /// Validate and add one CIDR, colouring it with the next palette entry.
    pub fn add(&mut self, cidr: &str) -> Result<BlockId, CidrError> {
        validate_cidr(cidr)?;
        let block = compute_block(cidr, color_for(self.blocks.len()))?;
        let id = block.id;
        self.blocks.push(block);
        Ok(id)
    }

    /// Add newline-separated CIDRs; valid lines are kept even if others fail.
    pub fn add_lines(&mut self, input: &str) -> BatchOutcome {
        let outcome = add_cidr_lines(input, self.blocks.len());
        self.blocks.extend(outcome.blocks.iter().cloned());
        outcome
    }

    /// Remove a block, returning it if it was present.
    pub fn remove(&mut self, id: BlockId) -> Option<Block> {
        let index = self.blocks.iter().position(|b| b.id == id)?;
        Some(self.blocks.remove(index))
    }

    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Recompute every derived view from scratch.
    pub fn analyze(&self) -> Analysis {
        let conflicts = detect_conflicts(&self.blocks);
        log_conflicts(&self.blocks, &conflicts);

        let analysis = Analysis {
            blocks: self.blocks.clone(),
            conflicts,
            unused_ranges: find_unused_ranges(&self.blocks),
            suggestions: find_supernet_opportunities(&self.blocks),
            coverage: address_coverage(&self.blocks),
        };
        log::info!(
            "analyze: {} block(s), {} conflict(s), {} unused range(s), {} suggestion(s)",
            analysis.blocks.len(),
            analysis.conflicts.len(),
            analysis.unused_ranges.len(),
            analysis.suggestions.len()
        );
        analysis
    }
}

impl fmt::Display for SubnetPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SubnetPlan ({} blocks):", self.blocks.len())?;
        for block in &self.blocks {
            writeln!(f, "  - {block}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PALETTE;
    use crate::processing::ConflictKind;

    #[test]
    fn test_add_and_remove() {
        let mut plan = SubnetPlan::new();
        let a = plan.add("10.0.0.0/24").unwrap();
        let b = plan.add("10.0.1.0/24").unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.get(b).unwrap().color, PALETTE[1]);

        let removed = plan.remove(a).unwrap();
        assert_eq!(removed.cidr, "10.0.0.0/24");
        assert_eq!(plan.len(), 1);
        assert!(plan.remove(a).is_none());
        assert!(plan.get(a).is_none());
    }

    #[test]
    fn test_add_rejects_invalid() {
        let mut plan = SubnetPlan::new();
        assert_eq!(plan.add("10.0.0.0/40"), Err(CidrError::PrefixOutOfRange));
        assert!(plan.is_empty());
    }

    #[test]
    fn test_add_lines_keeps_valid() {
        let mut plan = SubnetPlan::new();
        plan.add("192.168.0.0/24").unwrap();
        let outcome = plan.add_lines("192.168.1.0/24\nbogus\n192.168.3.0/24");
        assert_eq!(outcome.valid_count(), 2);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(plan.len(), 3);
        assert_eq!(plan.blocks()[1].color, PALETTE[1]);
    }

    #[test]
    fn test_analyze_recomputes_after_removal() {
        let mut plan = SubnetPlan::new();
        plan.add("10.0.0.0/24").unwrap();
        let dup = plan.add("10.0.0.0/24").unwrap();
        plan.add("10.0.2.0/24").unwrap();

        let analysis = plan.analyze();
        assert_eq!(analysis.conflicts.len(), 1);
        assert_eq!(analysis.conflicts[0].kind, ConflictKind::Identical);
        assert_eq!(analysis.unused_ranges.len(), 1);

        plan.remove(dup);
        let analysis = plan.analyze();
        assert!(analysis.conflicts.is_empty());
        assert_eq!(analysis.coverage.used_addresses, 512);
    }
}
