//! Movement domain: first-person locomotion, from input to displacement.
//!
//! The controller core ([`step`]) is plain data in, plain data out and only
//! talks to physics through [`GroundQueries`] and [`BodyMover`]. The systems
//! module adapts it to avian3d and Bevy input.

mod bootstrap;
pub mod camera;
mod components;
pub mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
pub mod kinematics;
pub mod queries;
mod resources;
pub mod state;
mod systems;


use bevy::prelude::*;
use bevy::transform::TransformSystems;

pub use camera::{CameraOrientation, LookState, clamp_angle, orient_camera};
pub use components::{CameraTarget, GameLayer, Ground, MovementTelemetry, Player};
pub use controller::{MovementController, MovementOutput, StepOutput, step, step_movement};
pub use queries::{
    BodyMover, BodySnapshot, EnvironmentSample, GroundQueries, SurfaceHit, sample_environment,
};
pub use resources::{
    GROUNDED_VERTICAL_VELOCITY, LOOK_THRESHOLD, LookDevice, MovementInput, MovementTuning,
};
pub use state::{Kinematics, MovementKind, MovementState, Timers, WallBudget, WallJumpCarry};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, bootstrap::spawn_player)
            .add_systems(
                Update,
                (systems::read_input, systems::drive_controller).chain(),
            )
            .add_systems(
                PostUpdate,
                systems::aim_camera.before(TransformSystems::Propagate),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room);
    }
}
