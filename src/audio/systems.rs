//! Audio domain: trigger systems.

use bevy::audio::Volume;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::audio::{MusicStarted, SoundAssets};
use crate::movement::CollisionEvent;

pub(crate) fn load_sounds(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(SoundAssets {
        collision: asset_server.load("sounds/collision.ogg"),
        music: asset_server.load("sounds/music.ogg"),
    });
}

/// One play request per collision message. Messages arrive on every frame
/// the step stays blocked, so the sound re-triggers while the player holds
/// into an obstacle.
pub(crate) fn play_collision_sound(
    mut commands: Commands,
    mut collisions: MessageReader<CollisionEvent>,
    sounds: Res<SoundAssets>,
) {
    for _ in collisions.read() {
        commands.spawn((
            AudioPlayer::new(sounds.collision.clone()),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(0.8)),
        ));
    }
}

/// Start the looping ambient music on the first key or mouse press.
pub(crate) fn start_music_on_interaction(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    buttons: Res<ButtonInput<MouseButton>>,
    sounds: Res<SoundAssets>,
    mut started: ResMut<MusicStarted>,
) {
    if started.0 {
        return;
    }

    let interacted = keys.get_just_pressed().next().is_some()
        || buttons.get_just_pressed().next().is_some();
    if !interacted {
        return;
    }

    commands.spawn((
        AudioPlayer::new(sounds.music.clone()),
        PlaybackSettings::LOOP.with_volume(Volume::Linear(0.3)),
    ));
    started.0 = true;
    info!("Ambient music started");
}
