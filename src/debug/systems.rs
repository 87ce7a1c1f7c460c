//! Debug domain: systems for the movement readout.

use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, format_readout, spawn_debug_info_overlay};
use crate::movement::{MovementController, MovementTelemetry, MovementTuning, Player};

/// Toggle the readout with F3
pub(crate) fn toggle_debug_info(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    if debug_state.toggle_info() {
        spawn_debug_info_overlay(&mut commands);
        info!("[DEBUG] Movement readout ON");
    } else {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        info!("[DEBUG] Movement readout OFF");
    }
}

/// Update the readout with the player's controller state
pub(crate) fn update_debug_info_overlay(
    tuning: Res<MovementTuning>,
    player_query: Query<(&MovementController, &MovementTelemetry), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    if let (Some((controller, telemetry)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        **text = format_readout(controller, telemetry, &tuning);
    }
}
