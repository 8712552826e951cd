//! Scene domain: world markers.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Obstacle;

#[derive(Component, Debug)]
pub struct GroundPlane;
