use super::spring::{SpringConfig, SpringFollower};
use bevy::math::Vec2;

/// Ordered followers, each chasing the one before it (the first chases the root)
///
/// Stepping runs in chain order, so follower `i` always reacts to the value
/// follower `i - 1` reached this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FollowerChain {
    followers: Vec<SpringFollower>,
    spring: SpringConfig,
}

impl FollowerChain {
    /// Create `len` followers resting at the origin
    pub fn new(len: usize, spring: SpringConfig) -> Self {
        FollowerChain {
            followers: vec![SpringFollower::default(); len],
            spring,
        }
    }

    pub fn len(&self) -> usize {
        self.followers.len()
    }

    /// Position of follower `index` (0 = the one right behind the root)
    pub fn position(&self, index: usize) -> Option<Vec2> {
        self.followers.get(index).map(SpringFollower::position)
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.followers.iter().map(SpringFollower::position)
    }

    /// Advance every follower by `dt` seconds toward its upstream value
    pub fn tick(&mut self, root: Vec2, dt: f32) {
        let mut target = root;
        for follower in &mut self.followers {
            follower.step(target, dt, &self.spring);
            target = follower.position();
        }
    }

    /// Every follower rests exactly on its upstream value
    pub fn is_settled(&self, root: Vec2) -> bool {
        let mut target = root;
        for follower in &self.followers {
            if !follower.is_settled(target) {
                return false;
            }
            target = follower.position();
        }
        true
    }
}
