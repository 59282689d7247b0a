use bevy::math::Vec2;
use std::fmt;

/// Gap kept between the two snap targets when the screen width has to be clamped
const MIN_SNAP_GAP: f32 = 1.0;

/// Screen edge the root element lands on after a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapEdge {
    Left,
    Right,
}

/// Error types for snap rule construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapBoundsError {
    NonFiniteWidth(f32),
    InvalidElementSize(f32),
    TooNarrow { screen_width: f32, element_size: f32 },
}

impl fmt::Display for SnapBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapBoundsError::NonFiniteWidth(w) => write!(f, "Screen width {} is not finite", w),
            SnapBoundsError::InvalidElementSize(s) => {
                write!(f, "Element size {} must be positive and finite", s)
            }
            SnapBoundsError::TooNarrow {
                screen_width,
                element_size,
            } => write!(
                f,
                "Screen width {} leaves no room for two edges of a {} element",
                screen_width, element_size
            ),
        }
    }
}

impl std::error::Error for SnapBoundsError {}

/// Horizontal edge snap applied to the root position when a drag ends
///
/// Positions are offsets of the element's top-left corner from the screen's
/// top-left corner, so the right edge target is `screen_width - element_size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapRule {
    screen_width: f32,
    element_size: f32,
}

impl SnapRule {
    /// Build a rule for a screen of `screen_width` holding an element of `element_size`
    ///
    /// The width must exceed twice the element size, otherwise the right-edge target
    /// would sit at or left of the threshold and snapping would not be idempotent.
    pub fn new(screen_width: f32, element_size: f32) -> Result<Self, SnapBoundsError> {
        if !(element_size.is_finite() && element_size > 0.0) {
            return Err(SnapBoundsError::InvalidElementSize(element_size));
        }
        if !screen_width.is_finite() {
            return Err(SnapBoundsError::NonFiniteWidth(screen_width));
        }
        if screen_width <= 2.0 * element_size {
            return Err(SnapBoundsError::TooNarrow {
                screen_width,
                element_size,
            });
        }

        Ok(SnapRule {
            screen_width,
            element_size,
        })
    }

    /// Like [`SnapRule::new`], but raises a degenerate width to the smallest usable one
    ///
    /// `element_size` is expected to be valid (it comes from validated configuration);
    /// an invalid size falls back to 1.0.
    pub fn clamped(screen_width: f32, element_size: f32) -> Self {
        let element_size = if element_size.is_finite() && element_size > 0.0 {
            element_size
        } else {
            1.0
        };
        let min_width = 2.0 * element_size + MIN_SNAP_GAP;
        let screen_width = if screen_width.is_finite() {
            screen_width.max(min_width)
        } else {
            min_width
        };

        SnapRule {
            screen_width,
            element_size,
        }
    }

    pub fn screen_width(&self) -> f32 {
        self.screen_width
    }

    /// Positions strictly right of this snap to the right edge
    pub fn threshold(&self) -> f32 {
        self.screen_width / 2.0
    }

    pub fn edge_for(&self, x: f32) -> SnapEdge {
        if x > self.threshold() {
            SnapEdge::Right
        } else {
            SnapEdge::Left
        }
    }

    pub fn target(&self, edge: SnapEdge) -> f32 {
        match edge {
            SnapEdge::Left => 0.0,
            SnapEdge::Right => self.screen_width - self.element_size,
        }
    }

    /// Snap `position` horizontally; y passes through untouched
    pub fn apply(&self, position: Vec2) -> (Vec2, SnapEdge) {
        let edge = self.edge_for(position.x);
        (Vec2::new(self.target(edge), position.y), edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> SnapRule {
        SnapRule::new(400.0, 80.0).unwrap()
    }

    #[test]
    fn test_snaps_right_past_half_width() {
        let (snapped, edge) = rule().apply(Vec2::new(250.0, 10.0));
        assert_eq!(edge, SnapEdge::Right);
        assert_eq!(snapped.x, 320.0);
    }

    #[test]
    fn test_snaps_left_at_or_below_half_width() {
        let (snapped, edge) = rule().apply(Vec2::new(150.0, 10.0));
        assert_eq!(edge, SnapEdge::Left);
        assert_eq!(snapped.x, 0.0);

        // Exactly on the threshold goes left
        let (snapped, edge) = rule().apply(Vec2::new(200.0, 10.0));
        assert_eq!(edge, SnapEdge::Left);
        assert_eq!(snapped.x, 0.0);

        // Off-screen to the left still lands on the left edge
        let (snapped, _) = rule().apply(Vec2::new(-500.0, 10.0));
        assert_eq!(snapped.x, 0.0);
    }

    #[test]
    fn test_y_is_never_modified() {
        for y in [-1000.0, -3.5, 0.0, 42.0, 9000.0] {
            for x in [-100.0, 0.0, 199.0, 201.0, 800.0] {
                let (snapped, _) = rule().apply(Vec2::new(x, y));
                assert_eq!(snapped.y, y);
            }
        }
    }

    #[test]
    fn test_snap_is_idempotent() {
        let rule = rule();
        for x in [-250.0, 0.0, 120.0, 200.0, 200.01, 320.0, 399.0, 1200.0] {
            let (once, edge_once) = rule.apply(Vec2::new(x, 7.0));
            let (twice, edge_twice) = rule.apply(once);
            assert_eq!(once, twice, "not idempotent for x={}", x);
            assert_eq!(edge_once, edge_twice);
        }
    }

    #[test]
    fn test_rejects_degenerate_bounds() {
        assert!(matches!(
            SnapRule::new(f32::NAN, 80.0),
            Err(SnapBoundsError::NonFiniteWidth(_))
        ));
        assert_eq!(
            SnapRule::new(400.0, 0.0),
            Err(SnapBoundsError::InvalidElementSize(0.0))
        );
        assert_eq!(
            SnapRule::new(160.0, 80.0),
            Err(SnapBoundsError::TooNarrow {
                screen_width: 160.0,
                element_size: 80.0
            })
        );
        assert!(SnapRule::new(0.0, 80.0).is_err());
        assert!(SnapRule::new(-400.0, 80.0).is_err());
    }

    #[test]
    fn test_clamped_keeps_valid_width() {
        assert_eq!(SnapRule::clamped(400.0, 80.0), rule());
    }

    #[test]
    fn test_clamped_degenerate_width_stays_idempotent() {
        for width in [0.0, -50.0, 100.0, f32::INFINITY, f32::NAN] {
            let rule = SnapRule::clamped(width, 80.0);
            assert_eq!(rule.screen_width(), 161.0);

            for x in [-10.0, 0.0, 80.0, 81.0, 500.0] {
                let (once, _) = rule.apply(Vec2::new(x, 0.0));
                let (twice, _) = rule.apply(once);
                assert_eq!(once, twice);
                assert!(once.x >= 0.0);
            }
        }
    }
}
