//! Debug domain: state for the movement readout.

use bevy::prelude::*;

/// Resource tracking debug overlay visibility
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the movement readout is shown
    pub show_info: bool,
}

impl DebugState {
    pub fn toggle_info(&mut self) -> bool {
        self.show_info = !self.show_info;
        self.show_info
    }
}
