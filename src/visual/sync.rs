use bevy::prelude::*;

use crate::{
    camera::ScreenMetrics,
    train::TrainSession,
    visual::circles::{ChainCircle, paint_depth},
};

/// World translation for a circle whose top-left corner sits at `offset` (screen px, y down)
pub fn circle_translation(
    offset: Vec2,
    circle_size: f32,
    depth: f32,
    screen: &ScreenMetrics,
) -> Vec3 {
    let center = offset + Vec2::splat(circle_size * 0.5);
    screen.screen_to_world(center).extend(depth)
}

/// System: Project every session position onto its circle's transform
pub fn sync_circle_transforms(
    session: Res<TrainSession>,
    screen: Res<ScreenMetrics>,
    mut circles: Query<(&ChainCircle, &mut Transform)>,
) {
    let count = session.circle_count();
    let size = session.circle_size();

    for (circle, mut transform) in &mut circles {
        let Some(offset) = session.position(circle.index) else {
            continue;
        };
        transform.translation =
            circle_translation(offset, size, paint_depth(circle.index, count), &screen);
    }
}
