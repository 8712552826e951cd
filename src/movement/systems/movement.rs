//! Movement domain: applying the step outcome to the player.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::collision::step;
use crate::movement::{CollisionEvent, LastStep, MoveInput, MovementTuning, Player, PlayerBody};
use crate::scene::ObstacleField;

pub(crate) fn apply_movement(
    input: Res<MoveInput>,
    tuning: Res<MovementTuning>,
    obstacles: Res<ObstacleField>,
    mut last_step: ResMut<LastStep>,
    mut collisions: MessageWriter<CollisionEvent>,
    mut query: Query<(&mut Transform, &PlayerBody), With<Player>>,
) {
    for (mut transform, body) in &mut query {
        let outcome = step(
            transform.translation,
            &input,
            tuning.move_speed,
            body.half_extents,
            &obstacles.0,
        );

        transform.translation = outcome.position;
        last_step.collided = outcome.collided;

        if outcome.collided {
            collisions.write(CollisionEvent);
        }
    }
}
