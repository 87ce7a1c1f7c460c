//! Movement domain: look input integration for the first-person camera.

use bevy::prelude::*;

use crate::movement::{LOOK_THRESHOLD, LookDevice, MovementInput, MovementTuning};

/// Accumulated camera pitch in degrees, positive looks down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LookState {
    pub pitch: f32,
}

/// Rotations produced by one tick of look input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraOrientation {
    /// Local rotation for the camera target, pitch only
    pub pitch: Quat,
    /// Rotation to apply to the character around world up
    pub yaw: Quat,
}

impl Default for CameraOrientation {
    fn default() -> Self {
        Self {
            pitch: Quat::IDENTITY,
            yaw: Quat::IDENTITY,
        }
    }
}

/// Wraps angles past a full turn once, then clamps into `[min, max]`.
pub fn clamp_angle(mut angle: f32, min: f32, max: f32) -> f32 {
    if angle < -360.0 {
        angle += 360.0;
    }
    if angle > 360.0 {
        angle -= 360.0;
    }
    angle.clamp(min, max)
}

/// Returns `None` when the look input is below the dead zone; the camera
/// keeps its last rotation in that case.
pub fn orient_camera(
    look: &mut LookState,
    input: &MovementInput,
    tuning: &MovementTuning,
    dt: f32,
) -> Option<CameraOrientation> {
    if input.look.length_squared() < LOOK_THRESHOLD {
        return None;
    }

    // Pointer deltas are already per frame.
    let multiplier = match input.look_device {
        LookDevice::Pointer => tuning.rotation_speed,
        LookDevice::Stick => tuning.rotation_speed * dt,
    };

    look.pitch = clamp_angle(
        look.pitch + input.look.y * multiplier,
        tuning.bottom_clamp,
        tuning.top_clamp,
    );
    let yaw = input.look.x * multiplier;

    Some(CameraOrientation {
        pitch: Quat::from_rotation_x(-look.pitch.to_radians()),
        yaw: Quat::from_rotation_y(-yaw.to_radians()),
    })
}
