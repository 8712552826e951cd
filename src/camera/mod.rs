//! Camera domain: orbit-follow rig around the player.

mod orbit;
mod systems;

pub use orbit::{OrbitCamera, OrbitTuning, orbit_eye};

use bevy::prelude::*;

use crate::movement::MovementStep;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitTuning>()
            .add_systems(Startup, systems::spawn_camera)
            .add_systems(
                Update,
                (systems::orbit_input, systems::follow_player)
                    .chain()
                    .after(MovementStep),
            );
    }
}
