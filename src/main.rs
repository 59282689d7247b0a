use bevy::prelude::*;

mod camera;
mod chain;
mod input;
mod train;
mod visual;

use bevy::window::WindowResolution;
use camera::CameraPlugin;
use input::InputPlugin;

use crate::visual::plugin::TrainPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Follow Chain".into(),
            resolution: WindowResolution::new(412, 915),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(CameraPlugin)
    .add_plugins(InputPlugin)
    .add_plugins(TrainPlugin);

    app.run();
}
