//! Movement domain: collision message.

use bevy::ecs::message::Message;

/// Written on every frame whose candidate movement was rejected, including
/// repeated frames while the player is held against an obstacle.
#[derive(Debug)]
pub struct CollisionEvent;

impl Message for CollisionEvent {}
