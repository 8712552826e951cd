//! Camera domain: orbit rig state and eye placement.

use bevy::prelude::*;

/// Orbit rig state. Yaw/pitch/distance place the eye on a sphere around the
/// damped target point.
#[derive(Component, Debug)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub target: Vec3,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // Starts behind and above the player, matching an eye near (0, 5, 15).
        Self {
            yaw: 0.0,
            pitch: 0.26,
            distance: 15.5,
            target: Vec3::new(0.0, 1.0, 0.0),
        }
    }
}

/// Tuning for drag, zoom, and target damping.
#[derive(Resource, Debug, Clone)]
pub struct OrbitTuning {
    /// Radians per pixel of mouse drag.
    pub drag_sensitivity: f32,
    /// Distance units per scroll step.
    pub zoom_step: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Pitch clamp keeps the rig off the poles and above the ground.
    pub min_pitch: f32,
    pub max_pitch: f32,
    /// Exponential rate at which the target tracks the player.
    pub follow_rate: f32,
}

impl Default for OrbitTuning {
    fn default() -> Self {
        Self {
            drag_sensitivity: 0.005,
            zoom_step: 1.0,
            min_distance: 3.0,
            max_distance: 40.0,
            min_pitch: 0.05,
            max_pitch: 1.45,
            follow_rate: 8.0,
        }
    }
}

/// Eye position for the given orbit state. Yaw 0 looks down -Z (the eye
/// sits on +Z of the target); up never rolls off +Y.
pub fn orbit_eye(yaw: f32, pitch: f32, distance: f32, target: Vec3) -> Vec3 {
    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    let (sin_pitch, cos_pitch) = pitch.sin_cos();
    target + distance * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
}
