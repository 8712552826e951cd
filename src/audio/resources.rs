//! Audio domain: sound handles and playback state.

use bevy::prelude::*;

/// Handles for the demo's two sounds. A file that fails to load leaves its
/// handle unresolved and playback silently does nothing; the step is never
/// affected.
#[derive(Resource, Debug)]
pub struct SoundAssets {
    pub collision: Handle<AudioSource>,
    pub music: Handle<AudioSource>,
}

/// Whether the looping ambient music has been started.
#[derive(Resource, Debug, Default)]
pub struct MusicStarted(pub bool);
