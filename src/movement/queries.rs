//! Movement domain: the physics seams the controller depends on, and the
//! per-tick contact sampling built on top of them.

use bevy::prelude::*;

use crate::movement::MovementTuning;

/// Height above the feet where wall contact is probed.
pub const WALL_PROBE_HEIGHT: f32 = 1.0;

/// Extra radius of the wall probe over the ground probe.
pub const WALL_PROBE_MARGIN: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    pub normal: Vec3,
    pub distance: f32,
}

/// Geometry queries against ground-tagged colliders. Trigger volumes never
/// count. A miss is an ordinary answer, not an error.
pub trait GroundQueries {
    fn overlap_sphere(&self, center: Vec3, radius: f32) -> bool;

    fn cast_sphere(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Dir3,
        max_distance: f32,
    ) -> Option<SurfaceHit>;

    fn cast_ray(&self, origin: Vec3, direction: Dir3, max_distance: f32) -> Option<SurfaceHit>;
}

/// Consumes the combined displacement of one tick.
pub trait BodyMover {
    fn move_by(&mut self, displacement: Vec3);
}

/// What the body reported at the start of the tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySnapshot {
    pub position: Vec3,
    pub rotation: Quat,
    pub velocity: Vec3,
}

impl Default for BodySnapshot {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
        }
    }
}

impl BodySnapshot {
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    pub fn horizontal_speed(&self) -> f32 {
        Vec3::new(self.velocity.x, 0.0, self.velocity.z).length()
    }

    /// Move axis in the character's right/forward basis.
    pub fn local_direction(&self, axis: Vec2) -> Vec3 {
        self.right() * axis.x + self.forward() * axis.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnvironmentSample {
    pub is_grounded: bool,
    pub is_walled: bool,
}

pub fn sample_environment(
    queries: &impl GroundQueries,
    position: Vec3,
    tuning: &MovementTuning,
) -> EnvironmentSample {
    let ground_center = position - Vec3::new(0.0, tuning.grounded_offset, 0.0);
    let is_grounded = queries.overlap_sphere(ground_center, tuning.grounded_radius);

    // Grounded wins ties, so the wall probe is only consulted when airborne.
    let is_walled = !is_grounded
        && queries.overlap_sphere(
            position + Vec3::Y * WALL_PROBE_HEIGHT,
            tuning.grounded_radius + WALL_PROBE_MARGIN,
        );

    EnvironmentSample {
        is_grounded,
        is_walled,
    }
}
