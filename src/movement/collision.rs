//! Movement domain: the per-frame movement-and-collision step.
//!
//! Pure logic with no ECS access. Systems feed it the sampled input and the
//! fixed obstacle volumes and apply the outcome.

use bevy::prelude::*;

use crate::movement::resources::MoveInput;

/// Axis-aligned bounding box, min/max corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Corners from a center point and non-negative half-extents, so
    /// `min <= max` holds component-wise.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Overlap test, inclusive on all six faces: boxes sharing a face count
    /// as intersecting.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

/// Result of one movement step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub position: Vec3,
    pub collided: bool,
}

/// Advance `position` by one frame of input-driven displacement, rejecting
/// the whole displacement if the moved volume would overlap any obstacle.
///
/// Forward is -Z, right is +X. Displacement is per frame, and diagonals are
/// not normalized, so two held axes move the player sqrt(2) faster.
/// Obstacles are scanned in creation order and the scan stops at the first
/// hit; only the fact of a collision is reported, not which obstacle.
pub fn step(
    position: Vec3,
    input: &MoveInput,
    move_speed: f32,
    half_extents: Vec3,
    obstacles: &[Aabb],
) -> StepOutcome {
    let mut dx = 0.0;
    if input.left {
        dx -= move_speed;
    }
    if input.right {
        dx += move_speed;
    }
    let mut dz = 0.0;
    if input.forward {
        dz -= move_speed;
    }
    if input.back {
        dz += move_speed;
    }

    let candidate = position + Vec3::new(dx, 0.0, dz);
    let volume = Aabb::from_center_half_extents(candidate, half_extents);

    for obstacle in obstacles {
        if volume.intersects(obstacle) {
            // Reject the whole displacement: no sliding along the free axis.
            return StepOutcome {
                position,
                collided: true,
            };
        }
    }

    StepOutcome {
        position: candidate,
        collided: false,
    }
}
