//! Movement domain: components and physics layers for locomotion.

use avian3d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable and climbable level geometry (floors, walls, ledges)
    Ground,
    /// Player character
    Player,
    /// Trigger volumes, never stand on them
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for level colliders the controller can stand on or run along
#[derive(Component, Debug)]
pub struct Ground;

/// Pitch pivot of the first-person camera. Child of the player, receives
/// only local pitch rotations.
#[derive(Component, Debug)]
pub struct CameraTarget;

/// Outputs of the last controller tick, for anything that wants to react
/// to movement without re-deriving it.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct MovementTelemetry {
    pub displacement: Vec3,
    pub is_grounded: bool,
    pub is_walled: bool,
    pub free_fall: bool,
}
