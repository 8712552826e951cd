//! Debug overlay for inspecting the demo while it runs.
//!
//! Compiled only with the `dev-tools` feature. F1 toggles an overlay with
//! the player position, the active seed, and the last step's collision
//! flag.

mod state;
mod ui;

pub use state::DebugState;

use bevy::prelude::*;

use crate::content::DemoSettings;
use crate::core::DemoConfig;
use crate::debug::ui::{DebugOverlay, DebugOverlayText, spawn_overlay};
use crate::movement::{LastStep, MovementStep, Player};
use crate::scene::ObstacleField;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, setup_overlay)
            .add_systems(
                Update,
                (toggle_overlay, update_overlay.after(MovementStep)),
            );
    }
}

fn setup_overlay(mut commands: Commands) {
    spawn_overlay(&mut commands);
}

fn toggle_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<DebugState>,
    mut query: Query<&mut Visibility, With<DebugOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }

    state.overlay_visible = !state.overlay_visible;
    for mut visibility in &mut query {
        *visibility = if state.overlay_visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

fn update_overlay(
    state: Res<DebugState>,
    config: Res<DemoConfig>,
    settings: Res<DemoSettings>,
    last_step: Res<LastStep>,
    field: Res<ObstacleField>,
    player: Query<&Transform, With<Player>>,
    mut text: Query<&mut Text, With<DebugOverlayText>>,
) {
    if !state.overlay_visible {
        return;
    }
    let Ok(transform) = player.single() else {
        return;
    };
    let p = transform.translation;

    for mut t in &mut text {
        t.0 = format!(
            "pos: ({:.2}, {:.2}, {:.2})\nseed: {}\nobstacles: {} | speed: {}\nblocked: {}",
            p.x,
            p.y,
            p.z,
            config.seed,
            field.0.len(),
            settings.move_speed,
            last_step.collided,
        );
    }
}
