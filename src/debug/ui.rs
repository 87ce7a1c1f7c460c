//! Debug domain: overlay layout and readout text.

use bevy::prelude::*;

use crate::movement::{MovementController, MovementTelemetry, MovementTuning};

/// Marker for the movement readout overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub(crate) fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            top: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

pub(crate) fn format_readout(
    controller: &MovementController,
    telemetry: &MovementTelemetry,
    tuning: &MovementTuning,
) -> String {
    let wall = controller.state.wall_budget(tuning);
    let step = telemetry.displacement;
    format!(
        "State: {:?}\nSpeed: {:.2}\nVertical: {:.2}\nStep: ({:.3}, {:.3}, {:.3})\nGrounded: {} | Walled: {}\nWall jumps: {}/{}\nWall run: {:.2}s\nDash cooldown: {:.2}s\nPitch: {:.1}",
        controller.state.kind(),
        controller.kinematics.speed,
        controller.kinematics.vertical_velocity,
        step.x,
        step.y,
        step.z,
        telemetry.is_grounded,
        telemetry.is_walled,
        wall.wall_jumps_used,
        tuning.max_wall_jumps,
        wall.wall_run_remaining.max(0.0),
        controller.timers.dash_cooldown.max(0.0),
        controller.look.pitch,
    )
}
