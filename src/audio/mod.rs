//! Audio domain: collision and ambient-music triggers.

mod resources;
mod systems;

pub use resources::{MusicStarted, SoundAssets};

use bevy::prelude::*;

use crate::movement::MovementStep;

pub struct AudioPlugin;

impl Plugin for AudioPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MusicStarted>()
            .add_systems(Startup, systems::load_sounds)
            .add_systems(
                Update,
                (
                    systems::play_collision_sound.after(MovementStep),
                    systems::start_music_on_interaction,
                ),
            );
    }
}
