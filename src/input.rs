use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::CursorMoved;

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorPos>()
            .add_message::<PointerEvent>()
            .add_systems(
                Update,
                (track_cursor_pos, collect_pointer_events)
                    .chain()
                    .in_set(PointerInputSet),
            );
    }
}

/// Systems that publish [`PointerEvent`]s; consumers run after this set
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PointerInputSet;

/// Which device produced a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerId {
    Mouse,
    Touch(u64),
}

#[derive(Message, Debug, Clone)]
pub struct PointerEvent {
    /// Window (logical) coordinates: pixels from top-left, y down
    pub position: Vec2,
    pub event_type: PointerEventType,
    pub id: PointerId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventType {
    Down,
    Move,
    Up,
    /// The platform took the pointer away (e.g. a system gesture)
    Cancel,
}

impl From<TouchPhase> for PointerEventType {
    fn from(phase: TouchPhase) -> Self {
        match phase {
            TouchPhase::Started => PointerEventType::Down,
            TouchPhase::Moved => PointerEventType::Move,
            TouchPhase::Ended => PointerEventType::Up,
            TouchPhase::Canceled => PointerEventType::Cancel,
        }
    }
}

#[derive(Resource, Default, Debug, Clone, Copy)]
struct CursorPos(pub Option<Vec2>);

fn track_cursor_pos(mut ev_cursor: MessageReader<CursorMoved>, mut pos: ResMut<CursorPos>) {
    for e in ev_cursor.read() {
        // last event wins
        pos.0 = Some(e.position);
    }
}

fn collect_pointer_events(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    cursor: Res<CursorPos>,
    mut touch_events: MessageReader<TouchInput>,
    mut out: MessageWriter<PointerEvent>,
) {
    if let Some(p) = cursor.0 {
        let mouse_event = |event_type| PointerEvent {
            position: p,
            event_type,
            id: PointerId::Mouse,
        };

        if mouse_buttons.just_pressed(MouseButton::Left) {
            out.write(mouse_event(PointerEventType::Down));
        }
        if mouse_buttons.pressed(MouseButton::Left) {
            out.write(mouse_event(PointerEventType::Move));
        }
        if mouse_buttons.just_released(MouseButton::Left) {
            out.write(mouse_event(PointerEventType::Up));
        }
    }

    for ev in touch_events.read() {
        out.write(PointerEvent {
            position: ev.position,
            event_type: ev.phase.into(),
            id: PointerId::Touch(ev.id),
        });
    }
}
