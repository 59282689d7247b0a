use bevy::camera::ScalingMode;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Logical window size used before the first window query succeeds
pub const DEFAULT_SCREEN_SIZE: Vec2 = Vec2::new(412.0, 915.0);

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScreenMetrics>()
            .insert_resource(ClearColor(Color::WHITE))
            .add_systems(Startup, setup_camera)
            .add_systems(PreUpdate, update_screen_metrics);
    }
}

/// Current logical size of the primary window
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ScreenMetrics {
    pub width: f32,
    pub height: f32,
}

impl Default for ScreenMetrics {
    fn default() -> Self {
        Self::new(DEFAULT_SCREEN_SIZE.x, DEFAULT_SCREEN_SIZE.y)
    }
}

impl ScreenMetrics {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Map a top-left screen offset (y down) to a world point on the camera plane
    ///
    /// ```text
    ///   (0,0) ────→ x        world:   Y
    ///     │                           ↑
    ///     ↓ y                     ────+───→ X   (origin = screen center)
    /// ```
    pub fn screen_to_world(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x - self.width * 0.5, self.height * 0.5 - point.y)
    }
}

#[derive(Component)]
pub struct MainCamera;

/// Setup an orthographic camera where one world unit is one logical pixel
///
/// The camera sits on +Z looking down -Z, so the XY plane is the screen and
/// larger Z values paint on top.
fn setup_camera(mut commands: Commands) {
    let projection = Projection::Orthographic(OrthographicProjection {
        scaling_mode: ScalingMode::WindowSize,
        near: 0.0,
        far: 1000.0,
        ..OrthographicProjection::default_3d()
    });
    commands.spawn((
        Camera3d::default(),
        projection,
        // Flat brand colors, no filmic curve
        Tonemapping::None,
        Transform::from_xyz(0.0, 0.0, 100.0).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}

/// Track the window size so snapping uses the current width
fn update_screen_metrics(
    mut metrics: ResMut<ScreenMetrics>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let size = Vec2::new(window.width(), window.height());
    if (size - metrics.size()).abs().max_element() > 0.5 {
        *metrics = ScreenMetrics::new(size.x, size.y);
        info!("Screen size updated: {}x{}", size.x, size.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_world_corners() {
        let metrics = ScreenMetrics::new(400.0, 800.0);

        assert_eq!(metrics.screen_to_world(Vec2::ZERO), Vec2::new(-200.0, 400.0));
        assert_eq!(
            metrics.screen_to_world(Vec2::new(400.0, 800.0)),
            Vec2::new(200.0, -400.0)
        );
        assert_eq!(metrics.screen_to_world(Vec2::new(200.0, 400.0)), Vec2::ZERO);
    }
}
