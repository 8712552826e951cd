//! Camera domain: orbit input and follow systems.

use bevy::ecs::message::MessageReader;
use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

use crate::camera::orbit::{OrbitCamera, OrbitTuning, orbit_eye};
use crate::movement::Player;

pub(crate) fn spawn_camera(mut commands: Commands) {
    let rig = OrbitCamera::default();
    let eye = orbit_eye(rig.yaw, rig.pitch, rig.distance, rig.target);
    let target = rig.target;

    commands.spawn((
        rig,
        Camera3d::default(),
        Transform::from_translation(eye).looking_at(target, Vec3::Y),
    ));
}

/// Left-drag orbits, wheel zooms.
pub(crate) fn orbit_input(
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: MessageReader<MouseMotion>,
    mut wheel: MessageReader<MouseWheel>,
    tuning: Res<OrbitTuning>,
    mut query: Query<&mut OrbitCamera>,
) {
    let mut drag = Vec2::ZERO;
    if buttons.pressed(MouseButton::Left) {
        for ev in motion.read() {
            drag += ev.delta;
        }
    } else {
        motion.clear();
    }

    let mut scroll = 0.0;
    for ev in wheel.read() {
        scroll += ev.y;
    }

    if drag == Vec2::ZERO && scroll == 0.0 {
        return;
    }

    for mut rig in &mut query {
        rig.yaw -= drag.x * tuning.drag_sensitivity;
        rig.pitch = (rig.pitch + drag.y * tuning.drag_sensitivity)
            .clamp(tuning.min_pitch, tuning.max_pitch);
        rig.distance = (rig.distance - scroll * tuning.zoom_step)
            .clamp(tuning.min_distance, tuning.max_distance);
    }
}

/// Damp the orbit target toward the player, then place the eye.
pub(crate) fn follow_player(
    time: Res<Time>,
    tuning: Res<OrbitTuning>,
    player: Query<&Transform, (With<Player>, Without<OrbitCamera>)>,
    mut query: Query<(&mut OrbitCamera, &mut Transform), Without<Player>>,
) {
    let Ok(player_transform) = player.single() else {
        return;
    };

    let alpha = 1.0 - (-tuning.follow_rate * time.delta_secs()).exp();
    for (mut rig, mut transform) in &mut query {
        rig.target = rig.target.lerp(player_transform.translation, alpha);
        let target = rig.target;

        transform.translation = orbit_eye(rig.yaw, rig.pitch, rig.distance, target);
        transform.look_at(target, Vec3::Y);
    }
}
