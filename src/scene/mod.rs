//! Scene domain: static world setup and the obstacle field.

mod components;
mod spawn;
#[cfg(test)]
mod tests;

pub use components::{GroundPlane, Obstacle};

use bevy::prelude::*;

use crate::movement::Aabb;

/// Obstacle bounding boxes in creation order. Built once at spawn; the
/// movement step scans this sequence every frame.
#[derive(Resource, Debug, Default)]
pub struct ObstacleField(pub Vec<Aabb>);

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ObstacleField>()
            .add_systems(Startup, spawn::spawn_world);
    }
}
