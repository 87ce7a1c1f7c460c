//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Vertical velocity a grounded character settles to instead of accumulating fall speed.
pub const GROUNDED_VERTICAL_VELOCITY: f32 = -2.0;

/// Look input below this squared magnitude is ignored.
pub const LOOK_THRESHOLD: f32 = 0.01;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Base horizontal speed in m/s
    pub move_speed: f32,
    /// Applied to `move_speed` while falling
    pub air_speed_multiplier: f32,
    /// Applied to `move_speed` while dashing
    pub dash_speed_multiplier: f32,
    /// Seconds a dash lasts once started
    pub dash_duration: f32,
    /// Seconds between dashes
    pub dash_cooldown: f32,
    /// Look sensitivity
    pub rotation_speed: f32,
    /// How fast horizontal speed approaches its target
    pub speed_change_rate: f32,
    /// Peak height of a grounded jump in meters
    pub jump_height: f32,
    /// Vertical acceleration, negative is down
    pub gravity: f32,
    /// Fall speed cap in m/s
    pub terminal_velocity: f32,
    /// Gravity scale while touching a wall
    pub wall_slide_multiplier: f32,
    /// Wall jumps available between two landings
    pub max_wall_jumps: u32,
    /// Seconds of wall-running available between two landings
    pub wall_run_duration: f32,
    /// Reach of the sphere casts that look for a wall to jump off
    pub wall_probe_distance: f32,
    /// Seconds on the ground before another jump is allowed
    pub jump_timeout: f32,
    /// Seconds airborne before the character counts as free-falling
    pub fall_timeout: f32,
    /// Vertical offset of the ground probe, negative raises it
    pub grounded_offset: f32,
    /// Radius of the ground probe, should match the body radius
    pub grounded_radius: f32,
    /// Highest camera pitch in degrees
    pub top_clamp: f32,
    /// Lowest camera pitch in degrees
    pub bottom_clamp: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 4.0,
            air_speed_multiplier: 0.8,
            dash_speed_multiplier: 3.0,
            dash_duration: 0.2,
            dash_cooldown: 1.0,
            rotation_speed: 1.0,
            speed_change_rate: 10.0,
            jump_height: 1.2,
            gravity: -15.0,
            terminal_velocity: 53.0,
            wall_slide_multiplier: 0.3,
            max_wall_jumps: 2,
            wall_run_duration: 1.0,
            wall_probe_distance: 0.5,
            jump_timeout: 0.1,
            fall_timeout: 0.15,
            grounded_offset: -0.14,
            grounded_radius: 0.5,
            top_clamp: 90.0,
            bottom_clamp: -90.0,
        }
    }
}

impl MovementTuning {
    /// Upward velocity that peaks at `jump_height`: v = sqrt(2gh).
    pub fn jump_velocity(&self) -> f32 {
        (self.jump_height * -2.0 * self.gravity).sqrt()
    }

    /// Boost granted each tick a wall-run finds climbable geometry ahead.
    pub fn wall_run_velocity(&self) -> f32 {
        (self.jump_height * -self.gravity).sqrt()
    }

    /// Target speed while airborne, full speed while still rising.
    pub fn air_speed(&self, vertical_velocity: f32) -> f32 {
        if vertical_velocity <= 0.0 {
            self.move_speed * self.air_speed_multiplier
        } else {
            self.move_speed
        }
    }

    pub fn dash_speed(&self) -> f32 {
        self.move_speed * self.dash_speed_multiplier
    }

    /// Length of the wall-run ray: reaches a wall leaning up to 30 degrees away.
    pub fn wall_run_reach(&self) -> f32 {
        self.grounded_radius / 30f32.to_radians().cos()
    }
}

/// Which kind of device produced the look delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookDevice {
    /// Mouse-class devices report per-frame deltas already
    #[default]
    Pointer,
    /// Sticks report a rate that must be scaled by frame time
    Stick,
}

/// Per-frame input snapshot. Jump and dash are latched: they stay set until
/// the controller acts on them.
#[derive(Resource, Debug, Clone, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub look: Vec2,
    pub jump: bool,
    pub dash: bool,
    pub analog_movement: bool,
    pub look_device: LookDevice,
}

impl MovementInput {
    pub fn has_move(&self) -> bool {
        self.axis != Vec2::ZERO
    }

    /// Analog sticks keep partial deflection, digital keys always count as full.
    pub fn input_magnitude(&self) -> f32 {
        if self.analog_movement {
            self.axis.length()
        } else {
            1.0
        }
    }
}
