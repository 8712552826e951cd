//! Data definitions for the RON settings file.
//!
//! `SettingsDef` mirrors the structure in assets/settings.ron; validated
//! values land in the `DemoSettings` resource.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SettingsDef {
    pub schema_version: u32,
    /// Pins obstacle placement when set; a fresh seed is drawn otherwise.
    pub seed: Option<u64>,
    /// Units moved per frame per pressed axis.
    pub move_speed: f32,
    pub obstacle_count: usize,
    /// Half-extent of the square region obstacles spawn in.
    pub obstacle_spawn_range: f32,
}

impl Default for SettingsDef {
    fn default() -> Self {
        Self {
            schema_version: 1,
            seed: None,
            move_speed: 0.1,
            obstacle_count: 5,
            obstacle_spawn_range: 20.0,
        }
    }
}

impl SettingsDef {
    /// Check value ranges. Returns the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != 1 {
            return Err(format!(
                "unsupported schema_version {}",
                self.schema_version
            ));
        }
        if !self.move_speed.is_finite() || self.move_speed <= 0.0 {
            return Err(format!("move_speed must be positive, got {}", self.move_speed));
        }
        if !self.obstacle_spawn_range.is_finite() || self.obstacle_spawn_range <= 0.0 {
            return Err(format!(
                "obstacle_spawn_range must be positive, got {}",
                self.obstacle_spawn_range
            ));
        }
        Ok(())
    }
}

/// Validated settings as applied at startup.
#[derive(Resource, Debug, Clone)]
pub struct DemoSettings {
    pub move_speed: f32,
    pub obstacle_count: usize,
    pub obstacle_spawn_range: f32,
}

impl From<&SettingsDef> for DemoSettings {
    fn from(def: &SettingsDef) -> Self {
        Self {
            move_speed: def.move_speed,
            obstacle_count: def.obstacle_count,
            obstacle_spawn_range: def.obstacle_spawn_range,
        }
    }
}
