//! Movement domain: input and tuning resources.

use bevy::prelude::*;

/// Sampled state of the four movement keys. Written once per frame by the
/// input system and read by the step; nothing else mutates it.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MoveInput {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    /// Units moved per frame per pressed axis. Per frame, not per second:
    /// the original demo never scaled by elapsed time.
    pub move_speed: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self { move_speed: 0.1 }
    }
}

/// Outcome flag of the most recent step, kept for the debug overlay.
#[derive(Resource, Debug, Default)]
pub struct LastStep {
    pub collided: bool,
}
