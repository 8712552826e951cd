//! Movement domain: the player's movement-and-collision step.

mod bootstrap;
mod collision;
mod components;
mod events;
mod resources;
mod systems;

pub use collision::{Aabb, StepOutcome, step};
pub use components::{Player, PlayerBody};
pub use events::CollisionEvent;
pub use resources::{LastStep, MoveInput, MovementTuning};

use bevy::prelude::*;

use crate::content::DemoSettings;

/// Set label for the input-then-step pair, so the camera and audio systems
/// can order themselves after the frame's position update.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MovementStep;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MoveInput>()
            .init_resource::<MovementTuning>()
            .init_resource::<LastStep>()
            .add_message::<CollisionEvent>()
            .add_systems(Startup, (configure_tuning, bootstrap::spawn_player))
            .add_systems(
                Update,
                (systems::read_input, systems::apply_movement)
                    .chain()
                    .in_set(MovementStep),
            );
    }
}

/// Copy the settings file's speed into the live tuning resource.
fn configure_tuning(settings: Res<DemoSettings>, mut tuning: ResMut<MovementTuning>) {
    tuning.move_speed = settings.move_speed;
}
