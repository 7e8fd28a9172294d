//! IPv4 subnet planning engine.
//!
//! Computes block details from CIDR text, flags overlapping blocks, lists
//! the unused space between blocks and suggests supernet aggregation.
//! Every analysis is a pure function of the blocks passed in.

pub mod models;
pub mod output;
mod plan;
pub mod processing;

pub use models::{
    compute_block, format_address, parse_address, validate, validate_cidr, Block, BlockId,
    CidrError, ValidationResult,
};
pub use plan::{Analysis, SubnetPlan};
pub use processing::{
    detect_conflicts, find_supernet_opportunities, find_unused_ranges, Conflict, ConflictKind,
    SupernetSuggestion, UnusedRange,
};

/// Split `[start, end]` into the minimal list of CIDR blocks, as text.
pub fn partition_range(start: u32, end: u32) -> Vec<String> {
    processing::partition_range_text(start, end)
}

/// Dotted-quad text to its 32-bit value.
pub fn ip_to_number(ip: &str) -> Result<u32, CidrError> {
    parse_address(ip)
}

/// 32-bit value to dotted-quad text.
pub fn number_to_ip(addr: u32) -> String {
    format_address(addr)
}
