//! Content domain: settings file loading and the applied settings resource.

mod data;
mod loader;
#[cfg(test)]
mod tests;

pub use data::{DemoSettings, SettingsDef};
pub use loader::{SettingsLoadError, load_settings};

use bevy::prelude::*;
use std::path::Path;

use crate::core::DemoConfig;

const SETTINGS_PATH: &str = "assets/settings.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, apply_settings);
    }
}

/// Load assets/settings.ron, falling back to defaults on any failure.
/// Runs before world spawn so a pinned seed lands in `DemoConfig` in time.
fn apply_settings(mut commands: Commands, mut config: ResMut<DemoConfig>) {
    let def = match load_settings(Path::new(SETTINGS_PATH)) {
        Ok(def) => def,
        Err(e) => {
            warn!("{}; using default settings", e);
            SettingsDef::default()
        }
    };

    if let Some(seed) = def.seed {
        config.seed = seed;
        info!("Seed pinned by settings file: {}", seed);
    }

    commands.insert_resource(DemoSettings::from(&def));
}
