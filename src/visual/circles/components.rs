use bevy::prelude::*;

/// Z distance between consecutive circles in the paint stack
pub const LAYER_STEP: f32 = 0.1;

/// Z offset of the glyph disc above its circle's background
pub const GLYPH_LIFT: f32 = 0.01;

/// One circle of the train; `index` 0 is the draggable root
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainCircle {
    pub index: usize,
}

/// Brand-colored disc drawn inside a circle in place of its icon
#[derive(Component, Debug)]
pub struct GlyphDisc;

/// Paint depth for circle `index` out of `count`: the root on top, the tail at the bottom
pub fn paint_depth(index: usize, count: usize) -> f32 {
    count.saturating_sub(index + 1) as f32 * LAYER_STEP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_paints_on_top() {
        let depths: Vec<f32> = (0..5).map(|i| paint_depth(i, 5)).collect();

        assert_eq!(depths[4], 0.0);
        for pair in depths.windows(2) {
            assert!(pair[0] > pair[1], "depths not descending: {:?}", depths);
        }
        // Glyphs never poke through the circle above
        assert!(GLYPH_LIFT < LAYER_STEP);
    }
}
