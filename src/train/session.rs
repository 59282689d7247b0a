// train/session.rs

use crate::chain::*;
use crate::train::config::ChainConfig;
use bevy::prelude::*;

/// Live state of the screen: the dragged root and its followers
#[derive(Debug, Clone, Resource)]
pub struct TrainSession {
    /// Sole writer of the root position
    tracker: DragTracker,
    /// Sole writer of every follower position
    chain: FollowerChain,
    circle_size: f32,
}

impl TrainSession {
    pub fn new(config: &ChainConfig) -> Self {
        TrainSession {
            tracker: DragTracker::new(config.cancel_policy),
            chain: FollowerChain::new(config.follower_count(), config.spring),
            circle_size: config.circle_size,
        }
    }

    // === Query Methods ===

    pub fn root_position(&self) -> Vec2 {
        self.tracker.position()
    }

    /// Root first, then each follower in chain order
    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        std::iter::once(self.root_position()).chain(self.chain.positions())
    }

    /// Position of circle `index` (0 = root)
    pub fn position(&self, index: usize) -> Option<Vec2> {
        match index {
            0 => Some(self.root_position()),
            i => self.chain.position(i - 1),
        }
    }

    pub fn circle_count(&self) -> usize {
        self.chain.len() + 1
    }

    pub fn circle_size(&self) -> f32 {
        self.circle_size
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// Nothing is moving and no drag is in progress
    pub fn is_at_rest(&self) -> bool {
        !self.is_dragging() && self.chain.is_settled(self.root_position())
    }

    /// Is `point` (window coordinates) inside the root circle?
    pub fn hit_test(&self, point: Vec2) -> bool {
        let radius = self.circle_size * 0.5;
        let center = self.root_position() + Vec2::splat(radius);
        point.distance(center) <= radius
    }

    // === Mutation Methods ===

    /// Feed one gesture event; `screen_width` is the current logical window width
    pub fn handle_gesture(&mut self, event: GestureEvent, screen_width: f32) -> DragOutcome {
        let snap = SnapRule::new(screen_width, self.circle_size).unwrap_or_else(|err| {
            warn!("{} - clamping snap bounds", err);
            SnapRule::clamped(screen_width, self.circle_size)
        });
        self.tracker.handle(event, &snap)
    }

    /// Advance the follower chain by one frame
    pub fn tick(&mut self, dt: f32) {
        self.chain.tick(self.tracker.position(), dt);
    }
}
