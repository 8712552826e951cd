//! Movement domain: player markers and collision volume.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Player;

/// Half-extents of the player's collision box. The visual cuboid is built
/// from the same values so the volume and the mesh agree.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlayerBody {
    pub half_extents: Vec3,
}

impl Default for PlayerBody {
    fn default() -> Self {
        Self {
            half_extents: Vec3::new(0.5, 1.0, 0.5),
        }
    }
}
