use super::snap::{SnapEdge, SnapRule};
use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

/// What happens to the root when a gesture is cancelled instead of ended
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CancelPolicy {
    /// Treat the cancel like a normal release and snap to an edge
    #[default]
    Snap,
    /// Put the root back where the drag started
    Revert,
}

/// Discrete events from a pan gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Start,
    /// Cumulative translation since `Start`
    Update { translation: Vec2 },
    End,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragPhase {
    Idle,
    Dragging {
        /// Root position captured when the gesture started
        origin: Vec2,
    },
}

/// Result of feeding one gesture event to the tracker
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    Started { origin: Vec2 },
    Moved(Vec2),
    Snapped { from: Vec2, to: Vec2, edge: SnapEdge },
    Reverted(Vec2),
    /// Event arrived while idle
    Ignored(GestureEvent),
}

/// Turns a pan gesture stream into root position updates
///
/// The tracker is the only writer of the root position.
#[derive(Debug, Clone, PartialEq)]
pub struct DragTracker {
    position: Vec2,
    phase: DragPhase,
    cancel_policy: CancelPolicy,
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(CancelPolicy::default())
    }
}

impl DragTracker {
    pub fn new(cancel_policy: CancelPolicy) -> Self {
        DragTracker {
            position: Vec2::ZERO,
            phase: DragPhase::Idle,
            cancel_policy,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    pub fn handle(&mut self, event: GestureEvent, snap: &SnapRule) -> DragOutcome {
        match (event, self.phase) {
            // A fresh start while dragging re-captures the origin
            (GestureEvent::Start, phase) => {
                if let DragPhase::Dragging { origin } = phase {
                    log::debug!("Gesture restarted mid-drag (previous origin {:?})", origin);
                }
                let origin = self.position;
                self.phase = DragPhase::Dragging { origin };
                DragOutcome::Started { origin }
            }

            (GestureEvent::Update { translation }, DragPhase::Dragging { origin }) => {
                self.position = origin + translation;
                DragOutcome::Moved(self.position)
            }

            (GestureEvent::End, DragPhase::Dragging { .. }) => self.release(snap),

            (GestureEvent::Cancel, DragPhase::Dragging { origin }) => match self.cancel_policy {
                CancelPolicy::Snap => self.release(snap),
                CancelPolicy::Revert => {
                    self.position = origin;
                    self.phase = DragPhase::Idle;
                    DragOutcome::Reverted(origin)
                }
            },

            (_, DragPhase::Idle) => DragOutcome::Ignored(event),
        }
    }

    fn release(&mut self, snap: &SnapRule) -> DragOutcome {
        let from = self.position;
        let (to, edge) = snap.apply(from);
        self.position = to;
        self.phase = DragPhase::Idle;
        DragOutcome::Snapped { from, to, edge }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap() -> SnapRule {
        SnapRule::new(400.0, 80.0).unwrap()
    }

    fn drag_by(tracker: &mut DragTracker, translation: Vec2) -> DragOutcome {
        tracker.handle(GestureEvent::Start, &snap());
        tracker.handle(GestureEvent::Update { translation }, &snap())
    }

    #[test]
    fn test_starts_idle_at_origin() {
        let tracker = DragTracker::default();
        assert_eq!(tracker.position(), Vec2::ZERO);
        assert_eq!(tracker.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_update_adds_translation_to_origin() {
        let mut tracker = DragTracker::default();
        let outcome = drag_by(&mut tracker, Vec2::new(50.0, 30.0));

        assert_eq!(outcome, DragOutcome::Moved(Vec2::new(50.0, 30.0)));
        assert_eq!(tracker.position(), Vec2::new(50.0, 30.0));
        assert!(tracker.is_dragging());
    }

    #[test]
    fn test_updates_are_cumulative_not_incremental() {
        let mut tracker = DragTracker::default();
        tracker.handle(GestureEvent::Start, &snap());

        for translation in [Vec2::new(10.0, 0.0), Vec2::new(20.0, 5.0), Vec2::new(15.0, -5.0)] {
            tracker.handle(GestureEvent::Update { translation }, &snap());
        }

        assert_eq!(tracker.position(), Vec2::new(15.0, -5.0));
    }

    #[test]
    fn test_no_clamping_during_drag() {
        let mut tracker = DragTracker::default();
        drag_by(&mut tracker, Vec2::new(-900.0, 5000.0));
        assert_eq!(tracker.position(), Vec2::new(-900.0, 5000.0));
    }

    #[test]
    fn test_end_snaps_right() {
        let mut tracker = DragTracker::default();
        drag_by(&mut tracker, Vec2::new(250.0, 40.0));

        let outcome = tracker.handle(GestureEvent::End, &snap());

        assert_eq!(
            outcome,
            DragOutcome::Snapped {
                from: Vec2::new(250.0, 40.0),
                to: Vec2::new(320.0, 40.0),
                edge: SnapEdge::Right,
            }
        );
        assert_eq!(tracker.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_end_snaps_left() {
        let mut tracker = DragTracker::default();
        drag_by(&mut tracker, Vec2::new(150.0, 40.0));
        tracker.handle(GestureEvent::End, &snap());

        assert_eq!(tracker.position(), Vec2::new(0.0, 40.0));
    }

    #[test]
    fn test_second_drag_starts_from_snapped_position() {
        let mut tracker = DragTracker::default();
        drag_by(&mut tracker, Vec2::new(250.0, 40.0));
        tracker.handle(GestureEvent::End, &snap());

        let outcome = tracker.handle(GestureEvent::Start, &snap());
        assert_eq!(
            outcome,
            DragOutcome::Started {
                origin: Vec2::new(320.0, 40.0)
            }
        );

        tracker.handle(
            GestureEvent::Update {
                translation: Vec2::new(-10.0, 10.0),
            },
            &snap(),
        );
        assert_eq!(tracker.position(), Vec2::new(310.0, 50.0));
    }

    #[test]
    fn test_events_while_idle_are_ignored() {
        let mut tracker = DragTracker::default();
        let update = GestureEvent::Update {
            translation: Vec2::new(99.0, 99.0),
        };

        assert_eq!(tracker.handle(update, &snap()), DragOutcome::Ignored(update));
        assert_eq!(
            tracker.handle(GestureEvent::End, &snap()),
            DragOutcome::Ignored(GestureEvent::End)
        );
        assert_eq!(
            tracker.handle(GestureEvent::Cancel, &snap()),
            DragOutcome::Ignored(GestureEvent::Cancel)
        );
        assert_eq!(tracker.position(), Vec2::ZERO);
    }

    #[test]
    fn test_restart_recaptures_origin() {
        let mut tracker = DragTracker::default();
        drag_by(&mut tracker, Vec2::new(30.0, 30.0));

        // A second start mid-drag begins from wherever the root is now
        drag_by(&mut tracker, Vec2::new(5.0, 5.0));
        assert_eq!(tracker.position(), Vec2::new(35.0, 35.0));
    }

    #[test]
    fn test_cancel_snaps_by_default() {
        let mut tracker = DragTracker::default();
        drag_by(&mut tracker, Vec2::new(260.0, 12.0));

        let outcome = tracker.handle(GestureEvent::Cancel, &snap());

        assert!(matches!(outcome, DragOutcome::Snapped { edge: SnapEdge::Right, .. }));
        assert_eq!(tracker.position(), Vec2::new(320.0, 12.0));
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn test_cancel_can_revert() {
        let mut tracker = DragTracker::new(CancelPolicy::Revert);
        drag_by(&mut tracker, Vec2::new(250.0, 0.0));
        tracker.handle(GestureEvent::End, &snap());

        drag_by(&mut tracker, Vec2::new(-100.0, 75.0));
        let outcome = tracker.handle(GestureEvent::Cancel, &snap());

        assert_eq!(outcome, DragOutcome::Reverted(Vec2::new(320.0, 0.0)));
        assert_eq!(tracker.position(), Vec2::new(320.0, 0.0));
        assert_eq!(tracker.phase(), DragPhase::Idle);
    }
}
