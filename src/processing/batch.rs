//! Multi-line CIDR entry.
//!
//! Every line is handled on its own: bad lines are reported, good lines are
//! still turned into blocks.

use crate::models::{color_for, compute_block, validate_cidr, Block, CidrError};
use std::fmt;

/// A rejected input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    /// 1-based position among the non-empty lines.
    pub line: usize,
    pub error: CidrError,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.error)
    }
}

/// Result of a batch entry.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub blocks: Vec<Block>,
    pub errors: Vec<LineError>,
    /// Number of non-empty lines seen.
    pub total_count: usize,
}

impl BatchOutcome {
    pub fn valid_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Turn newline-separated CIDR text into blocks.
///
/// `existing_count` is the size of the collection the blocks will join, so
/// palette colours continue where it left off.
pub fn add_cidr_lines(input: &str, existing_count: usize) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    let lines = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty());

    for (index, line) in lines.enumerate() {
        outcome.total_count += 1;
        let result = validate_cidr(line).and_then(|()| {
            let color = color_for(existing_count + outcome.blocks.len());
            compute_block(line, color).map_err(|e| CidrError::CalculationFailure(e.to_string()))
        });
        match result {
            Ok(block) => outcome.blocks.push(block),
            Err(error) => {
                let line_error = LineError {
                    line: index + 1,
                    error,
                };
                log::warn!("Rejected {line:?}: {line_error}");
                outcome.errors.push(line_error);
            }
        }
    }

    log::info!(
        "add_cidr_lines: {} of {} line(s) accepted",
        outcome.valid_count(),
        outcome.total_count
    );
    outcome
}
