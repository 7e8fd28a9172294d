//! Output formatting for an analysis.
//!
//! This module handles formatting and outputting analysis results:
//! - [`report`] - Coloured text report
//! - [`terminal`] - Field and number formatting helpers

mod report;
mod terminal;

pub use report::render_report;
pub use terminal::{format_count, format_field};
