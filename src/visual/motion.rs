use bevy::prelude::*;

use crate::train::TrainSession;

/// System: Step the follower chain once per frame, drag or not, so it can settle after release
pub fn advance_follower_chain(time: Res<Time>, mut session: ResMut<TrainSession>) {
    session.tick(time.delta_secs());
}

/// System: Log when the train comes to rest or starts moving again
pub fn announce_train_rest(session: Res<TrainSession>, mut was_at_rest: Local<bool>) {
    let at_rest = session.is_at_rest();
    if at_rest == *was_at_rest {
        return;
    }
    *was_at_rest = at_rest;

    let root = session.root_position();
    if at_rest {
        info!("Train settled at ({:.1}, {:.1})", root.x, root.y);
    } else {
        debug!("Train in motion");
    }
}
