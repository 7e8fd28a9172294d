//! Block collection analysis.
//!
//! Everything here is derived fresh from the current blocks:
//! - [`partition`] - Range to minimal CIDR list
//! - [`overlap`] - Identical and overlapping block pairs
//! - [`gap_finder`] - Unused ranges between blocks
//! - [`supernet`] - Aggregation suggestions
//! - [`coverage`] - Address space totals
//! - [`batch`] - Multi-line entry

mod batch;
mod coverage;
mod gap_finder;
mod overlap;
mod partition;
mod supernet;

// Re-export public functions
pub use batch::{add_cidr_lines, BatchOutcome, LineError};
pub use coverage::{address_coverage, total_unused, AddressCoverage};
pub use gap_finder::{find_uncovered_ranges, find_unused_ranges, UnusedRange};
pub use overlap::{detect_conflicts, log_conflicts, Conflict, ConflictKind};
pub use partition::{partition_range, partition_range_text};
pub use supernet::{find_supernet_opportunities, SupernetSuggestion};
