//! Movement domain: vertical (jump and gravity) and horizontal (per-state
//! speed and heading) integration.

use bevy::prelude::*;

use crate::movement::queries::{BodySnapshot, EnvironmentSample, GroundQueries, WALL_PROBE_HEIGHT};
use crate::movement::state::{Kinematics, Timers, WallBudget, WallJumpCarry};
use crate::movement::{GROUNDED_VERTICAL_VELOCITY, MovementInput, MovementTuning};

/// Speeds closer than this to the target snap onto it.
pub const SPEED_OFFSET: f32 = 0.1;

/// Dash acceleration relative to `speed_change_rate`.
pub const DASH_RATE_SCALE: f32 = 100.0;

/// Keeps float noise from feeding back into next tick's comparison.
pub fn round_to_millis(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}

/// Jump, timeout and landing bookkeeping, driven by the raw contact sample
/// rather than the movement state. Runs after [`apply_gravity`].
pub fn apply_jump(
    kinematics: &mut Kinematics,
    timers: &mut Timers,
    input: &mut MovementInput,
    env: EnvironmentSample,
    tuning: &MovementTuning,
    dt: f32,
) {
    if env.is_grounded {
        timers.fall_timeout = tuning.fall_timeout;

        if kinematics.vertical_velocity < 0.0 {
            kinematics.vertical_velocity = GROUNDED_VERTICAL_VELOCITY;
        }

        if input.jump && timers.jump_ready() {
            kinematics.vertical_velocity = tuning.jump_velocity();
            input.jump = false;
            debug!("Jump: vertical_velocity={}", kinematics.vertical_velocity);
        }
    } else if !env.is_walled {
        timers.jump_timeout = tuning.jump_timeout;
        timers.fall_timeout -= dt;
        // Jumping in mid-air is only possible off a wall.
        input.jump = false;
    }
}

pub fn apply_gravity(
    kinematics: &mut Kinematics,
    env: EnvironmentSample,
    tuning: &MovementTuning,
    dt: f32,
) {
    let floor = -tuning.terminal_velocity;
    if kinematics.vertical_velocity <= floor {
        return;
    }

    let scale = if env.is_walled {
        tuning.wall_slide_multiplier
    } else {
        1.0
    };
    kinematics.vertical_velocity =
        (kinematics.vertical_velocity + tuning.gravity * scale * dt).max(floor);
}

/// Eases speed toward `target` and updates the heading from the move input.
/// Without input the target drops to zero and the previous heading is kept.
pub fn steer(
    kinematics: &mut Kinematics,
    input: &MovementInput,
    body: &BodySnapshot,
    target: f32,
    rate: f32,
    dt: f32,
) {
    let target = if input.has_move() { target } else { 0.0 };
    let current = body.horizontal_speed();

    kinematics.speed = if (current - target).abs() > SPEED_OFFSET {
        let goal = target * input.input_magnitude();
        let t = (rate * dt).clamp(0.0, 1.0);
        round_to_millis(current + (goal - current) * t)
    } else {
        target
    };

    if input.has_move() {
        kinematics.direction = body.local_direction(input.axis).normalize_or_zero();
    }
}

/// Surface normal of the wall next to the body. Probes forward then right,
/// negative side first; the first hit wins.
pub fn find_wall_normal(
    queries: &impl GroundQueries,
    body: &BodySnapshot,
    tuning: &MovementTuning,
) -> Option<Vec3> {
    let origin = body.position + Vec3::Y * WALL_PROBE_HEIGHT;

    for axis in [body.forward(), body.right()] {
        for sign in [-1.0, 1.0] {
            let Ok(direction) = Dir3::new(axis * sign) else {
                continue;
            };
            if let Some(hit) = queries.cast_sphere(
                origin,
                tuning.grounded_radius,
                direction,
                tuning.wall_probe_distance,
            ) {
                return Some(Vec3::new(hit.normal.x, 0.0, hit.normal.z).normalize_or_zero());
            }
        }
    }

    None
}

/// Everything the walling handler needs beyond the kinematics it writes.
pub struct WallContext<'a, Q: GroundQueries> {
    pub body: &'a BodySnapshot,
    pub queries: &'a Q,
    pub timers: &'a Timers,
    pub tuning: &'a MovementTuning,
    pub dt: f32,
}

pub fn steer_walling<Q: GroundQueries>(
    kinematics: &mut Kinematics,
    wall: &mut WallBudget,
    wall_jump: &mut Option<WallJumpCarry>,
    input: &mut MovementInput,
    ctx: &WallContext<'_, Q>,
) {
    let tuning = ctx.tuning;

    if let Some(carry) = wall_jump {
        kinematics.direction = carry.direction;
        kinematics.speed = carry.speed;
        return;
    }

    if input.jump && ctx.timers.jump_ready() && wall.can_wall_jump(tuning) {
        let normal = find_wall_normal(ctx.queries, ctx.body, tuning).unwrap_or(Vec3::ZERO);

        kinematics.vertical_velocity = tuning.jump_velocity();
        kinematics.direction = normal;
        kinematics.speed = tuning.move_speed;
        wall.wall_jumps_used += 1;
        input.jump = false;
        *wall_jump = Some(WallJumpCarry {
            direction: normal,
            speed: tuning.move_speed,
        });

        debug!(
            "Wall jump {}/{}: normal={:?}",
            wall.wall_jumps_used, tuning.max_wall_jumps, normal
        );
        return;
    }

    if input.has_move() && wall.can_wall_run() {
        steer(
            kinematics,
            input,
            ctx.body,
            tuning.move_speed,
            tuning.speed_change_rate,
            ctx.dt,
        );

        if let Ok(direction) = Dir3::new(kinematics.direction) {
            let origin = ctx.body.position + Vec3::Y * WALL_PROBE_HEIGHT;
            if ctx
                .queries
                .cast_ray(origin, direction, tuning.wall_run_reach())
                .is_some()
            {
                kinematics.vertical_velocity = tuning.wall_run_velocity();
                debug!(
                    "Wall run: vertical_velocity={}, remaining={}",
                    kinematics.vertical_velocity, wall.wall_run_remaining
                );
            }
        }

        wall.wall_run_remaining -= ctx.dt;
        return;
    }

    // Out of wall-run time or no input: hold position against the wall.
    steer(
        kinematics,
        input,
        ctx.body,
        tuning.move_speed,
        tuning.speed_change_rate,
        ctx.dt,
    );
    kinematics.direction = Vec3::ZERO;
}
