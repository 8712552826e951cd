//! Core domain: run configuration shared by the rest of the demo.

mod resources;

pub use resources::DemoConfig;

use bevy::prelude::*;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DemoConfig>()
            .add_systems(Startup, log_run_config);
    }
}

fn log_run_config(config: Res<DemoConfig>) {
    info!("Starting demo with seed: {}", config.seed);
}
