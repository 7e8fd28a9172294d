//! Text report of an [`Analysis`].

use super::terminal::{format_count, format_field};
use crate::models::{Block, BlockId};
use crate::plan::Analysis;
use crate::processing::{total_unused, ConflictKind};
use colored::Colorize;
use std::fmt::Write;

/// Render the analysis as a coloured, column-aligned text report.
pub fn render_report(analysis: &Analysis) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    write_report(&mut out, analysis)?;
    Ok(out)
}

fn write_report(out: &mut String, analysis: &Analysis) -> std::fmt::Result {
    writeln!(
        out,
        r#" "id",        "cidr",       "network",     "broadcast",          "mask",   "hosts""#
    )?;
    for block in &analysis.blocks {
        writeln!(
            out,
            "{id},{cidr},{network},{broadcast},{mask},{hosts}",
            id = format_field(block.id, 5),
            cidr = format_field(&block.cidr, 20),
            network = format_field(block.network_address(), 16),
            broadcast = format_field(block.broadcast_address(), 16),
            mask = format_field(block.subnet_mask(), 18),
            hosts = format_field(format_count(block.available_hosts), 10),
        )?;
    }

    let coverage = &analysis.coverage;
    writeln!(
        out,
        "#Coverage: {} used of {} ({} available)",
        format_count(coverage.used_addresses),
        format_count(coverage.total_addresses),
        format_count(coverage.available_addresses)
    )?;

    if !analysis.conflicts.is_empty() {
        writeln!(
            out,
            "#{}# {} conflict(s)",
            "CONFLICT".on_red(),
            analysis.conflicts.len()
        )?;
        for conflict in &analysis.conflicts {
            let kind = match conflict.kind {
                ConflictKind::Identical => "identical".red(),
                ConflictKind::Overlap => "overlap".yellow(),
            };
            writeln!(
                out,
                "  {kind}: {} <-> {}",
                cidr_of(&analysis.blocks, conflict.first),
                cidr_of(&analysis.blocks, conflict.second)
            )?;
        }
    }

    if !analysis.unused_ranges.is_empty() {
        writeln!(
            out,
            "#{}# {} range(s)",
            "UNUSED".on_blue(),
            analysis.unused_ranges.len()
        )?;
        for range in &analysis.unused_ranges {
            writeln!(
                out,
                "  {} - {} ({} addresses): {}",
                range.start_text(),
                range.end_text(),
                format_count(range.size),
                range.covering_blocks.join(", ")
            )?;
        }
        writeln!(
            out,
            "  Total unused addresses: {}",
            format_count(total_unused(&analysis.unused_ranges))
        )?;
    }

    if !analysis.suggestions.is_empty() {
        writeln!(
            out,
            "#{}# {} opportunit(ies)",
            "SUPERNET".on_green(),
            analysis.suggestions.len()
        )?;
        for suggestion in &analysis.suggestions {
            let members: Vec<&str> = suggestion
                .original_blocks
                .iter()
                .map(|id| cidr_of(&analysis.blocks, *id))
                .collect();
            writeln!(
                out,
                "  {} <= {} ({:.1}% efficient, +{} addresses)",
                suggestion.suggested_supernet.green(),
                members.join(" + "),
                suggestion.efficiency,
                format_count(suggestion.saved_addresses)
            )?;
        }
        writeln!(
            out,
            "  Total optimization potential: {} supernet(s) can be formed",
            analysis.suggestions.len()
        )?;
    }

    Ok(())
}

fn cidr_of(blocks: &[Block], id: BlockId) -> &str {
    blocks
        .iter()
        .find(|b| b.id == id)
        .map(|b| b.cidr.as_str())
        .unwrap_or("?")
}
