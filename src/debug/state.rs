//! Debug domain: overlay state.

use bevy::prelude::*;

/// Resource tracking debug overlay visibility.
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub overlay_visible: bool,
}
