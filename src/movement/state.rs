//! Movement domain: controller state, timers and kinematic values.

use bevy::prelude::*;

use crate::movement::MovementTuning;

/// Wall interaction allowance. Only exists while airborne, so landing
/// always starts the next airborne stretch with a full budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallBudget {
    pub wall_jumps_used: u32,
    pub wall_run_remaining: f32,
}

impl WallBudget {
    pub fn fresh(tuning: &MovementTuning) -> Self {
        Self {
            wall_jumps_used: 0,
            wall_run_remaining: tuning.wall_run_duration,
        }
    }

    pub fn can_wall_jump(&self, tuning: &MovementTuning) -> bool {
        self.wall_jumps_used < tuning.max_wall_jumps
    }

    pub fn can_wall_run(&self) -> bool {
        self.wall_run_remaining > 0.0
    }
}

/// Push-off of an issued wall jump, replayed until the state changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallJumpCarry {
    pub direction: Vec3,
    pub speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MovementState {
    #[default]
    Grounded,
    Falling {
        wall: WallBudget,
    },
    Walling {
        wall: WallBudget,
        wall_jump: Option<WallJumpCarry>,
    },
    Dashing {
        elapsed: f32,
        wall: WallBudget,
    },
}

impl MovementState {
    /// Budget carried by an airborne state; grounded states get a fresh one.
    pub fn wall_budget(&self, tuning: &MovementTuning) -> WallBudget {
        match self {
            Self::Grounded => WallBudget::fresh(tuning),
            Self::Falling { wall } | Self::Walling { wall, .. } | Self::Dashing { wall, .. } => {
                *wall
            }
        }
    }

    pub fn kind(&self) -> MovementKind {
        match self {
            Self::Grounded => MovementKind::Grounded,
            Self::Falling { .. } => MovementKind::Falling,
            Self::Walling { .. } => MovementKind::Walling,
            Self::Dashing { .. } => MovementKind::Dashing,
        }
    }
}

/// Payload-free view of [`MovementState`] for logging and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    Grounded,
    Falling,
    Walling,
    Dashing,
}

/// Countdowns that gate jumps and dashes. They are compared, never clamped,
/// so running below zero is normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timers {
    pub jump_timeout: f32,
    pub fall_timeout: f32,
    pub dash_cooldown: f32,
}

impl Timers {
    pub fn new(tuning: &MovementTuning) -> Self {
        Self {
            jump_timeout: tuning.jump_timeout,
            fall_timeout: tuning.fall_timeout,
            dash_cooldown: tuning.dash_cooldown,
        }
    }

    pub fn jump_ready(&self) -> bool {
        self.jump_timeout <= 0.0
    }

    pub fn dash_ready(&self) -> bool {
        self.dash_cooldown <= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Kinematics {
    /// Horizontal speed in m/s, quantized to three decimals while changing
    pub speed: f32,
    /// Vertical velocity in m/s, positive is up
    pub vertical_velocity: f32,
    /// Last horizontal heading, kept while there is no move input
    pub direction: Vec3,
}
