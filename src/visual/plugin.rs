use crate::input::PointerInputSet;
use crate::train::setup_chain_config;
use crate::visual::interactions::{DragState, handle_pointer_input};
use crate::visual::motion::{advance_follower_chain, announce_train_rest};
use crate::visual::setup::{setup_scene, setup_session};
use crate::visual::sync::sync_circle_transforms;
use bevy::prelude::*;

pub struct TrainPlugin;

impl Plugin for TrainPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DragState>()
            // Config first, then the session it describes, then the circles
            .add_systems(
                Startup,
                (setup_chain_config, setup_session, setup_scene).chain(),
            )
            .add_systems(
                Update,
                (
                    // Root moves first
                    handle_pointer_input,
                    // Followers chase it in chain order
                    advance_follower_chain,
                    // Visual updates
                    sync_circle_transforms,
                    announce_train_rest,
                )
                    .chain()
                    .after(PointerInputSet),
            );
    }
}
