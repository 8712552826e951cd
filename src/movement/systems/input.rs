//! Movement domain: input sampling.

use bevy::prelude::*;

use crate::movement::MoveInput;

/// Sample the four recognized keys into the input record. All other keys
/// are ignored.
pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MoveInput>) {
    input.forward = keyboard.pressed(KeyCode::KeyW);
    input.left = keyboard.pressed(KeyCode::KeyA);
    input.back = keyboard.pressed(KeyCode::KeyS);
    input.right = keyboard.pressed(KeyCode::KeyD);
}
