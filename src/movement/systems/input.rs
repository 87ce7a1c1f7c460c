//! Movement domain: input sampling for locomotion.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::movement::{LookDevice, MovementInput};

/// Mouse deltas arrive in pixels; this brings them to degrees.
const POINTER_LOOK_SCALE: f32 = 0.1;

/// Right stick deflection to degrees per second.
const STICK_LOOK_SCALE: f32 = 300.0;

/// Stick deflection below this is treated as resting.
const STICK_DEAD_ZONE: f32 = 0.1;

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    gamepads: Query<&Gamepad>,
    mut input: ResMut<MovementInput>,
) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    let keys = Vec2::new(x, y).normalize_or_zero();
    let left_stick = gamepads
        .iter()
        .map(|gamepad| gamepad.left_stick())
        .find(|stick| stick.length() > STICK_DEAD_ZONE);

    (input.axis, input.analog_movement) = match (keys, left_stick) {
        (keys, _) if keys != Vec2::ZERO => (keys, false),
        (_, Some(stick)) => (stick.clamp_length_max(1.0), true),
        _ => (Vec2::ZERO, false),
    };

    let right_stick = gamepads
        .iter()
        .map(|gamepad| gamepad.right_stick())
        .find(|stick| stick.length() > STICK_DEAD_ZONE);

    (input.look, input.look_device) = if mouse_motion.delta != Vec2::ZERO {
        (mouse_motion.delta * POINTER_LOOK_SCALE, LookDevice::Pointer)
    } else if let Some(stick) = right_stick {
        // Stick up looks up, which is negative pitch.
        (
            Vec2::new(stick.x, -stick.y) * STICK_LOOK_SCALE,
            LookDevice::Stick,
        )
    } else {
        (Vec2::ZERO, input.look_device)
    };

    // Latched until the controller consumes them.
    if keyboard.just_pressed(KeyCode::Space)
        || gamepads
            .iter()
            .any(|gamepad| gamepad.just_pressed(GamepadButton::South))
    {
        input.jump = true;
    }
    if keyboard.just_pressed(KeyCode::ShiftLeft)
        || gamepads
            .iter()
            .any(|gamepad| gamepad.just_pressed(GamepadButton::East))
    {
        input.dash = true;
    }
}
