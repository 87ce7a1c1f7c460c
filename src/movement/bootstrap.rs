//! Movement domain: player bootstrap.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    CameraTarget, GameLayer, MovementController, MovementTelemetry, MovementTuning, Player,
};

/// Standing height of the player capsule in meters
pub(crate) const PLAYER_HEIGHT: f32 = 1.8;
/// Camera pivot height above the feet
pub(crate) const EYE_HEIGHT: f32 = 1.6;
/// Gap between the ground probe radius and the body, so a wall the body
/// touches does not also register as ground
pub(crate) const BODY_SKIN: f32 = 0.05;

pub(crate) fn spawn_player(mut commands: Commands, tuning: Res<MovementTuning>) {
    let radius = tuning.grounded_radius + BODY_SKIN;
    let segment = (PLAYER_HEIGHT - 2.0 * radius).max(0.0);

    info!(
        "Spawning player: radius={}, height={}, move_speed={}, jump_velocity={}",
        radius,
        PLAYER_HEIGHT,
        tuning.move_speed,
        tuning.jump_velocity()
    );

    commands
        .spawn((
            (
                Player,
                MovementController::new(&tuning),
                MovementTelemetry::default(),
            ),
            // Origin sits at the feet; the capsule is lifted onto it.
            Transform::from_xyz(0.0, 1.0, 0.0),
            (
                RigidBody::Dynamic,
                Collider::compound(vec![(
                    Vec3::Y * PLAYER_HEIGHT * 0.5,
                    Quat::IDENTITY,
                    Collider::capsule(radius, segment),
                )]),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(0.0), // The controller integrates gravity itself
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Sensor]),
            ),
        ))
        .with_children(|parent| {
            parent
                .spawn((CameraTarget, Transform::from_xyz(0.0, EYE_HEIGHT, 0.0)))
                .with_children(|pivot| {
                    pivot.spawn((Camera3d::default(), Transform::default()));
                });
        });
}
