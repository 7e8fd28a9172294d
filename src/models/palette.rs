//! Round-robin display colours handed out to new blocks.

/// Fixed palette, cycled in order.
pub const PALETTE: [&str; 10] = [
    "#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#8B5CF6", "#EC4899", "#06B6D4", "#84CC16",
    "#F97316", "#6366F1",
];

/// Colour for the block at position `index` in a collection.
pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// First `count` palette entries, wrapping around.
pub fn generate_colors(count: usize) -> Vec<&'static str> {
    (0..count).map(color_for).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_colors_wraps() {
        let colors = generate_colors(12);
        assert_eq!(colors.len(), 12);
        assert_eq!(colors[0], "#3B82F6");
        assert_eq!(colors[10], "#3B82F6");
        assert_eq!(colors[11], "#EF4444");
    }

    #[test]
    fn test_generate_colors_empty() {
        assert!(generate_colors(0).is_empty());
    }
}
