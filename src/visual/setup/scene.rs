use bevy::prelude::*;

use crate::{
    camera::ScreenMetrics,
    train::{ChainConfig, TrainSession},
    visual::{
        circles::{ChainCircle, GlyphDisc, components::GLYPH_LIFT, paint_depth},
        sync::circle_translation,
    },
};

/// System: Create the session from the loaded config
pub fn setup_session(mut commands: Commands, config: Res<ChainConfig>) {
    let session = TrainSession::new(&config);
    info!(
        "Train session ready: root + {} followers",
        session.circle_count() - 1
    );

    commands.insert_resource(session);
}

/// System: Spawn one circle per configured style, root first
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<ChainConfig>,
    session: Res<TrainSession>,
    screen: Res<ScreenMetrics>,
) {
    let radius = config.circle_size * 0.5;
    let count = session.circle_count();

    let background_mesh = meshes.add(Circle::new(radius));
    let background_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    for (index, style) in config.circles.iter().enumerate() {
        let Some(offset) = session.position(index) else {
            continue;
        };
        let translation =
            circle_translation(offset, config.circle_size, paint_depth(index, count), &screen);

        let glyph_mesh = meshes.add(Circle::new(radius * style.glyph_scale));
        let glyph_material = materials.add(StandardMaterial {
            base_color: style.color,
            unlit: true,
            ..default()
        });

        commands
            .spawn((
                Name::new(style.name.clone()),
                ChainCircle { index },
                Mesh3d(background_mesh.clone()),
                MeshMaterial3d(background_material.clone()),
                Transform::from_translation(translation),
            ))
            .with_children(|parent| {
                parent.spawn((
                    GlyphDisc,
                    Mesh3d(glyph_mesh),
                    MeshMaterial3d(glyph_material),
                    Transform::from_xyz(0.0, 0.0, GLYPH_LIFT),
                ));
            });

        info!("Circle {} '{}' spawned", index, style.name);
    }
}
