//! Debug tooling for tuning movement by feel.
//!
//! F3 toggles an overlay with the controller state, speeds, wall budget and
//! cooldowns of the player.

mod state;
mod systems;
mod ui;


use bevy::prelude::*;

pub use state::DebugState;
pub use ui::DebugInfoOverlay;

use systems::{toggle_debug_info, update_debug_info_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                toggle_debug_info,
                update_debug_info_overlay.run_if(|state: Res<DebugState>| state.show_info),
            )
                .chain(),
        );
    }
}
