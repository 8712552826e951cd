//! Scene domain: ground, lighting, and the seeded obstacle field.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::content::DemoSettings;
use crate::core::DemoConfig;
use crate::movement::Aabb;
use crate::scene::ObstacleField;
use crate::scene::components::{GroundPlane, Obstacle};

/// Center height of every obstacle cuboid.
const OBSTACLE_HEIGHT: f32 = 1.0;
/// Obstacle cuboids are 2 units on a side.
const OBSTACLE_HALF_EXTENT: f32 = 1.0;

/// Draw obstacle centers from a seeded generator. The returned order is the
/// scan order the movement step sees, so it must stay deterministic.
pub(crate) fn obstacle_positions(seed: u64, count: usize, range: f32) -> Vec<Vec3> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.random_range(-range..range),
                OBSTACLE_HEIGHT,
                rng.random_range(-range..range),
            )
        })
        .collect()
}

pub(crate) fn spawn_world(
    mut commands: Commands,
    config: Res<DemoConfig>,
    settings: Res<DemoSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Sky blue clear color, soft white ambient plus one directional light.
    commands.insert_resource(ClearColor(Color::srgb_u8(0x87, 0xce, 0xeb)));
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Forest green ground plane.
    commands.spawn((
        GroundPlane,
        Mesh3d(meshes.add(Plane3d::default().mesh().size(100.0, 100.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x22, 0x8b, 0x22),
            ..default()
        })),
        Transform::default(),
    ));

    // One mesh and material shared by every obstacle.
    let side = OBSTACLE_HALF_EXTENT * 2.0;
    let obstacle_mesh = meshes.add(Cuboid::new(side, side, side));
    let obstacle_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x8b, 0x45, 0x13),
        ..default()
    });

    let positions = obstacle_positions(
        config.seed,
        settings.obstacle_count,
        settings.obstacle_spawn_range,
    );

    // Obstacle volumes are computed once here; they never move.
    let mut field = Vec::with_capacity(positions.len());
    for position in positions {
        field.push(Aabb::from_center_half_extents(
            position,
            Vec3::splat(OBSTACLE_HALF_EXTENT),
        ));
        commands.spawn((
            Obstacle,
            Mesh3d(obstacle_mesh.clone()),
            MeshMaterial3d(obstacle_material.clone()),
            Transform::from_translation(position),
        ));
    }

    info!("Spawned {} obstacles (seed {})", field.len(), config.seed);
    commands.insert_resource(ObstacleField(field));
}
