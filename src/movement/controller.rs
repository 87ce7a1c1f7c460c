//! Movement domain: the per-tick controller pipeline.
//!
//! A tick runs, in order: cooldown clock, environment sampling, state
//! resolution, vertical kinematics, the horizontal handler of the resolved
//! state, displacement composition, and finally camera orientation.
//! Reordering these introduces a one-frame lag between contact and response.

use bevy::prelude::*;

use crate::movement::camera::{CameraOrientation, LookState, orient_camera};
use crate::movement::kinematics::{
    DASH_RATE_SCALE, WallContext, apply_gravity, apply_jump, steer, steer_walling,
};
use crate::movement::queries::{
    BodyMover, BodySnapshot, EnvironmentSample, GroundQueries, sample_environment,
};
use crate::movement::state::{Kinematics, MovementState, Timers};
use crate::movement::{GROUNDED_VERTICAL_VELOCITY, MovementInput, MovementTuning};

/// Slack on the dash duration check, so summing `dt` in f32 does not cost
/// the dash its last tick.
pub const DASH_TIME_EPSILON: f32 = 1e-4;

#[derive(Component, Debug, Clone, PartialEq)]
pub struct MovementController {
    pub state: MovementState,
    pub kinematics: Kinematics,
    pub timers: Timers,
    pub look: LookState,
}

impl MovementController {
    pub fn new(tuning: &MovementTuning) -> Self {
        Self {
            state: MovementState::Grounded,
            kinematics: Kinematics::default(),
            timers: Timers::new(tuning),
            look: LookState::default(),
        }
    }

    /// Runs [`step_movement`] and hands the displacement to `mover`, once.
    /// Camera orientation is left to its own phase.
    pub fn tick(
        &mut self,
        input: &mut MovementInput,
        body: &BodySnapshot,
        queries: &impl GroundQueries,
        mover: &mut impl BodyMover,
        tuning: &MovementTuning,
        dt: f32,
    ) -> MovementOutput {
        let output = step_movement(self, input, body, queries, tuning, dt);
        mover.move_by(output.displacement);
        output
    }
}

/// Result of the movement phase of a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementOutput {
    /// Horizontal and vertical motion for this tick, already scaled by dt
    pub displacement: Vec3,
    pub env: EnvironmentSample,
    /// Airborne for longer than `fall_timeout`
    pub free_fall: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutput {
    pub displacement: Vec3,
    pub env: EnvironmentSample,
    pub free_fall: bool,
    pub camera: Option<CameraOrientation>,
}

/// Full tick: movement followed by camera orientation.
pub fn step(
    controller: &mut MovementController,
    input: &mut MovementInput,
    body: &BodySnapshot,
    queries: &impl GroundQueries,
    tuning: &MovementTuning,
    dt: f32,
) -> StepOutput {
    let movement = step_movement(controller, input, body, queries, tuning, dt);
    let camera = orient_camera(&mut controller.look, input, tuning, dt);

    StepOutput {
        displacement: movement.displacement,
        env: movement.env,
        free_fall: movement.free_fall,
        camera,
    }
}

pub fn step_movement(
    controller: &mut MovementController,
    input: &mut MovementInput,
    body: &BodySnapshot,
    queries: &impl GroundQueries,
    tuning: &MovementTuning,
    dt: f32,
) -> MovementOutput {
    let MovementController {
        state,
        kinematics,
        timers,
        ..
    } = controller;

    tick_cooldowns(state, timers, dt);

    let env = sample_environment(queries, body.position, tuning);
    *state = resolve_state(*state, env, input, timers, kinematics, tuning);

    // Gravity integrates first; every impulse (ground jump, wall jump,
    // wall-run boost) then overwrites the result for its tick.
    apply_gravity(kinematics, env, tuning, dt);
    apply_jump(kinematics, timers, input, env, tuning, dt);

    let rate = tuning.speed_change_rate;
    match state {
        MovementState::Grounded => steer(kinematics, input, body, tuning.move_speed, rate, dt),
        MovementState::Falling { .. } => {
            let target = tuning.air_speed(kinematics.vertical_velocity);
            steer(kinematics, input, body, target, rate, dt);
        }
        MovementState::Dashing { .. } => steer(
            kinematics,
            input,
            body,
            tuning.dash_speed(),
            rate * DASH_RATE_SCALE,
            dt,
        ),
        MovementState::Walling { wall, wall_jump } => {
            let ctx = WallContext {
                body,
                queries,
                timers,
                tuning,
                dt,
            };
            steer_walling(kinematics, wall, wall_jump, input, &ctx);
        }
    }

    MovementOutput {
        displacement: compose_displacement(kinematics, dt),
        env,
        free_fall: !env.is_grounded && timers.fall_timeout < 0.0,
    }
}

pub fn tick_cooldowns(state: &mut MovementState, timers: &mut Timers, dt: f32) {
    timers.jump_timeout -= dt;
    timers.dash_cooldown -= dt;

    if let MovementState::Dashing { elapsed, .. } = state {
        *elapsed += dt;
    }
}

/// Picks the state for this tick. A running dash is kept until its duration
/// has passed; otherwise priority is grounded, walled, dash, falling.
pub fn resolve_state(
    current: MovementState,
    env: EnvironmentSample,
    input: &mut MovementInput,
    timers: &mut Timers,
    kinematics: &mut Kinematics,
    tuning: &MovementTuning,
) -> MovementState {
    if let MovementState::Dashing { elapsed, .. } = current {
        if elapsed <= tuning.dash_duration + DASH_TIME_EPSILON {
            return current;
        }
    }

    let wall = current.wall_budget(tuning);
    let next = if env.is_grounded {
        // A dash press stays latched on the ground and fires on the first
        // airborne tick.
        MovementState::Grounded
    } else if env.is_walled {
        match current {
            MovementState::Walling { .. } => current,
            _ => MovementState::Walling {
                wall,
                wall_jump: None,
            },
        }
    } else if input.dash && timers.dash_ready() {
        input.dash = false;
        timers.dash_cooldown = tuning.dash_cooldown;
        debug!("Dash: speed={}", tuning.dash_speed());
        MovementState::Dashing { elapsed: 0.0, wall }
    } else {
        MovementState::Falling { wall }
    };

    if next.kind() == current.kind() {
        return next;
    }

    debug!("Movement state: {:?} -> {:?}", current.kind(), next.kind());

    if next == MovementState::Grounded {
        timers.fall_timeout = tuning.fall_timeout;
        if kinematics.vertical_velocity < 0.0 {
            kinematics.vertical_velocity = GROUNDED_VERTICAL_VELOCITY;
        }
    }

    next
}

pub fn compose_displacement(kinematics: &Kinematics, dt: f32) -> Vec3 {
    let horizontal = kinematics.direction.normalize_or_zero() * kinematics.speed;
    (horizontal + Vec3::Y * kinematics.vertical_velocity) * dt
}
