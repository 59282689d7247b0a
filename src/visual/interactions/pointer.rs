use bevy::prelude::*;

use crate::{
    camera::ScreenMetrics,
    chain::{DragOutcome, GestureEvent},
    input::{PointerEvent, PointerEventType, PointerId},
    train::TrainSession,
};

/// The pointer currently dragging the root
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveDrag {
    pub pointer: PointerId,
    /// Window position where the pointer went down
    pub press_position: Vec2,
}

#[derive(Resource, Default, Debug)]
pub struct DragState {
    pub active: Option<ActiveDrag>,
}

impl DragState {
    /// Turn a raw pointer event into a pan gesture event for the root
    ///
    /// Only a press that lands on the root (`hits_root`) starts a gesture, and
    /// only the pointer that started it can move or release it.
    pub fn gesture_for(
        &mut self,
        event: &PointerEvent,
        hits_root: impl Fn(Vec2) -> bool,
    ) -> Option<GestureEvent> {
        match (event.event_type, self.active) {
            (PointerEventType::Down, None) if hits_root(event.position) => {
                self.active = Some(ActiveDrag {
                    pointer: event.id,
                    press_position: event.position,
                });
                Some(GestureEvent::Start)
            }
            (PointerEventType::Move, Some(drag)) if drag.pointer == event.id => {
                Some(GestureEvent::Update {
                    translation: event.position - drag.press_position,
                })
            }
            (PointerEventType::Up, Some(drag)) if drag.pointer == event.id => {
                self.active = None;
                Some(GestureEvent::End)
            }
            (PointerEventType::Cancel, Some(drag)) if drag.pointer == event.id => {
                self.active = None;
                Some(GestureEvent::Cancel)
            }
            _ => None,
        }
    }
}

/// System: Drive the drag tracker from pointer input
pub fn handle_pointer_input(
    mut pointer_events: MessageReader<PointerEvent>,
    screen: Res<ScreenMetrics>,
    mut session: ResMut<TrainSession>,
    mut drag_state: ResMut<DragState>,
) {
    for event in pointer_events.read() {
        let Some(gesture) = drag_state.gesture_for(event, |p| session.hit_test(p)) else {
            continue;
        };

        match session.handle_gesture(gesture, screen.width) {
            DragOutcome::Started { origin } => {
                info!("Drag started from ({:.1}, {:.1})", origin.x, origin.y);
            }
            DragOutcome::Moved(position) => {
                debug!("Root at ({:.1}, {:.1})", position.x, position.y);
            }
            DragOutcome::Snapped { from, to, edge } => {
                info!(
                    "Released at x={:.1} - snapped to {:?} edge x={:.1}",
                    from.x, edge, to.x
                );
            }
            DragOutcome::Reverted(origin) => {
                info!(
                    "Drag cancelled - reverted to ({:.1}, {:.1})",
                    origin.x, origin.y
                );
            }
            DragOutcome::Ignored(event) => {
                debug!("Ignored {:?} while idle", event);
            }
        }
    }
}
