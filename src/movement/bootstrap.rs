//! Movement domain: player spawn.

use bevy::prelude::*;

use crate::movement::{Player, PlayerBody};

pub(crate) fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let body = PlayerBody::default();
    let size = body.half_extents * 2.0;

    commands.spawn((
        Player,
        body,
        Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.0, 0.0),
            ..default()
        })),
        // Centered above the ground so the box sits on the plane.
        Transform::from_xyz(0.0, 1.0, 0.0),
    ));
}
