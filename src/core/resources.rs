//! Core domain: run configuration resources.

use bevy::prelude::*;
use rand::Rng;

/// Seed driving obstacle placement. Fixed before the world spawns and never
/// re-drawn afterwards; the settings file may pin it for reproducible layouts.
#[derive(Resource, Debug)]
pub struct DemoConfig {
    pub seed: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
        }
    }
}
