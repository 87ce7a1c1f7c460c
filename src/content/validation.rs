//! Validation for movement tuning values.

use crate::movement::MovementTuning;

/// A tuning field holding a value the controller cannot work with.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MovementTuning.{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Helper macro for range checks on a tuning field
macro_rules! check {
    ($errors:expr, $tuning:expr, $field:ident, $ok:expr, $expected:expr) => {
        let value = $tuning.$field;
        if !value.is_finite() || !$ok(value) {
            $errors.push(ValidationError {
                field: stringify!($field),
                message: format!("expected {}, got {}", $expected, value),
            });
        }
    };
}

/// Validate every tuning field.
/// Returns a list of validation errors, empty if the tuning is usable.
pub fn validate_tuning(tuning: &MovementTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let positive = |v: f32| v > 0.0;
    let non_negative = |v: f32| v >= 0.0;

    // Speeds and rates
    check!(errors, tuning, move_speed, positive, "> 0");
    check!(errors, tuning, speed_change_rate, positive, "> 0");
    check!(errors, tuning, rotation_speed, positive, "> 0");
    check!(errors, tuning, air_speed_multiplier, non_negative, ">= 0");
    check!(errors, tuning, dash_speed_multiplier, non_negative, ">= 0");
    check!(errors, tuning, wall_slide_multiplier, non_negative, ">= 0");

    // Vertical
    check!(errors, tuning, jump_height, positive, "> 0");
    check!(errors, tuning, gravity, |v: f32| v < 0.0, "< 0");
    check!(errors, tuning, terminal_velocity, positive, "> 0");

    // Timings
    check!(errors, tuning, dash_duration, non_negative, ">= 0");
    check!(errors, tuning, dash_cooldown, non_negative, ">= 0");
    check!(errors, tuning, wall_run_duration, non_negative, ">= 0");
    check!(errors, tuning, jump_timeout, non_negative, ">= 0");
    check!(errors, tuning, fall_timeout, non_negative, ">= 0");

    // Probes
    check!(errors, tuning, grounded_radius, positive, "> 0");
    check!(errors, tuning, wall_probe_distance, positive, "> 0");
    check!(errors, tuning, grounded_offset, |_| true, "a finite value");

    // Camera
    let in_turn = |v: f32| (-360.0..=360.0).contains(&v);
    check!(errors, tuning, top_clamp, in_turn, "within [-360, 360]");
    check!(errors, tuning, bottom_clamp, in_turn, "within [-360, 360]");
    if tuning.bottom_clamp > tuning.top_clamp {
        errors.push(ValidationError {
            field: "bottom_clamp",
            message: format!(
                "must not exceed top_clamp ({} > {})",
                tuning.bottom_clamp, tuning.top_clamp
            ),
        });
    }

    errors
}
