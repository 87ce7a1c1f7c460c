//! Movement domain: avian3d spatial queries and body integration behind the
//! controller's physics seams.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{BodyMover, GameLayer, GroundQueries, SurfaceHit};

/// Ground-layer queries over the avian spatial query pipeline. Sensor
/// colliders are excluded so trigger volumes never count as contact.
pub(crate) struct AvianGroundQueries<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> AvianGroundQueries<'a, 'w, 's> {
    pub(crate) fn new(
        spatial_query: &'a SpatialQuery<'w, 's>,
        sensors: impl IntoIterator<Item = Entity>,
    ) -> Self {
        Self {
            spatial_query,
            filter: SpatialQueryFilter::from_mask(GameLayer::Ground)
                .with_excluded_entities(sensors),
        }
    }
}

impl GroundQueries for AvianGroundQueries<'_, '_, '_> {
    fn overlap_sphere(&self, center: Vec3, radius: f32) -> bool {
        !self
            .spatial_query
            .shape_intersections(
                &Collider::sphere(radius),
                center,
                Quat::IDENTITY,
                &self.filter,
            )
            .is_empty()
    }

    fn cast_sphere(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Dir3,
        max_distance: f32,
    ) -> Option<SurfaceHit> {
        self.spatial_query
            .cast_shape(
                &Collider::sphere(radius),
                origin,
                Quat::IDENTITY,
                direction,
                &ShapeCastConfig::from_max_distance(max_distance),
                &self.filter,
            )
            .map(|hit| SurfaceHit {
                normal: hit.normal1,
                distance: hit.distance,
            })
    }

    fn cast_ray(&self, origin: Vec3, direction: Dir3, max_distance: f32) -> Option<SurfaceHit> {
        self.spatial_query
            .cast_ray(origin, direction, max_distance, true, &self.filter)
            .map(|hit| SurfaceHit {
                normal: hit.normal,
                distance: hit.distance,
            })
    }
}

/// Applies a tick's displacement as the velocity that covers it in `dt`;
/// the physics step then resolves it against the world.
pub(crate) struct VelocityMover<'a> {
    pub velocity: &'a mut LinearVelocity,
    pub dt: f32,
}

impl BodyMover for VelocityMover<'_> {
    fn move_by(&mut self, displacement: Vec3) {
        self.velocity.0 = displacement / self.dt;
    }
}
