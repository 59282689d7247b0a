//! Follower chain engine: a dragged root, spring-damped followers and the edge snap.
//!
//! Nothing in here touches the ECS; `train::session` owns these types and the
//! systems in `visual` feed them input once per frame.

pub mod drag;
pub mod follower;
pub mod snap;
pub mod spring;

pub use drag::{CancelPolicy, DragOutcome, DragTracker, GestureEvent};
pub use follower::FollowerChain;
pub use snap::{SnapEdge, SnapRule};
pub use spring::{SpringConfig, presets};
