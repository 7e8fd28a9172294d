//! Overlapping and duplicate block detection.

use crate::models::{Block, BlockId};
use serde::Serialize;

/// How two blocks collide.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConflictKind {
    /// Both blocks cover exactly the same range.
    Identical,
    /// The ranges intersect but differ.
    Overlap,
}

/// A pair of conflicting blocks.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub first: BlockId,
    pub second: BlockId,
    pub kind: ConflictKind,
}

impl Conflict {
    pub fn involves(&self, id: BlockId) -> bool {
        self.first == id || self.second == id
    }
}

/// Find every conflicting unordered pair of blocks.
///
/// Pairs are reported once, in input order, `first` preceding `second`.
pub fn detect_conflicts(blocks: &[Block]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for (i, a) in blocks.iter().enumerate() {
        for b in &blocks[i + 1..] {
            let kind = if a.same_range(b) {
                ConflictKind::Identical
            } else if a.overlaps(b) {
                ConflictKind::Overlap
            } else {
                continue;
            };
            conflicts.push(Conflict {
                first: a.id,
                second: b.id,
                kind,
            });
        }
    }

    conflicts
}

/// Log conflicts as warnings.
pub fn log_conflicts(blocks: &[Block], conflicts: &[Conflict]) {
    if conflicts.is_empty() {
        log::info!("No overlapping blocks found.");
        return;
    }

    log::warn!("Found {} conflicting block pair(s):", conflicts.len());

    let cidr_of = |id: BlockId| {
        blocks
            .iter()
            .find(|b| b.id == id)
            .map(|b| b.cidr.as_str())
            .unwrap_or("?")
    };
    for conflict in conflicts {
        log::warn!(
            "  {:?}: {} and {}",
            conflict.kind,
            cidr_of(conflict.first),
            cidr_of(conflict.second)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::compute_block;

    fn block(cidr: &str) -> Block {
        compute_block(cidr, "#000000").unwrap()
    }

    #[test]
    fn test_identical() {
        let blocks = vec![block("192.168.1.0/24"), block("192.168.1.0/24")];
        let conflicts = detect_conflicts(&blocks);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::Identical);
        assert_eq!(conflicts[0].first, blocks[0].id);
        assert_eq!(conflicts[0].second, blocks[1].id);
    }

    #[test]
    fn test_identical_via_unaligned_text() {
        let blocks = vec![block("192.168.1.0/24"), block("192.168.1.9/24")];
        assert_eq!(detect_conflicts(&blocks)[0].kind, ConflictKind::Identical);
    }

    #[test]
    fn test_overlap() {
        let blocks = vec![block("10.0.0.0/8"), block("10.0.10.0/24")];
        let conflicts = detect_conflicts(&blocks);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::Overlap);
    }

    #[test]
    fn test_disjoint_and_touching() {
        let blocks = vec![
            block("192.168.1.0/24"),
            block("192.168.2.0/24"),
            block("192.168.4.0/24"),
        ];
        assert!(detect_conflicts(&blocks).is_empty());
    }

    #[test]
    fn test_every_pair_once() {
        let blocks = vec![
            block("10.0.0.0/16"),
            block("10.0.1.0/24"),
            block("10.0.1.0/24"),
        ];
        let conflicts = detect_conflicts(&blocks);
        assert_eq!(conflicts.len(), 3);
        assert_eq!(
            conflicts
                .iter()
                .filter(|c| c.kind == ConflictKind::Identical)
                .count(),
            1
        );
        assert!(conflicts.iter().all(|c| c.first != c.second));
        assert!(conflicts[0].involves(blocks[0].id));
    }

    #[test]
    fn test_empty_and_single() {
        assert!(detect_conflicts(&[]).is_empty());
        assert!(detect_conflicts(&[block("10.0.0.0/8")]).is_empty());
    }
}
