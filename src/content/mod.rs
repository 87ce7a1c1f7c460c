//! Content domain: data-driven movement tuning.
//!
//! Tuning lives in `assets/data/movement.ron`. A missing or broken file is
//! not fatal: the built-in defaults stay in place and the problem is logged.

mod loader;
mod validation;


use bevy::prelude::*;
use std::path::{Path, PathBuf};

pub use loader::{TuningLoadError, load_tuning, parse_tuning};
pub use validation::{ValidationError, validate_tuning};

use crate::movement::MovementTuning;

/// Where the tuning file is read from.
#[derive(Resource, Debug, Clone)]
pub struct TuningSource {
    pub path: PathBuf,
}

impl Default for TuningSource {
    fn default() -> Self {
        Self {
            path: Path::new("assets").join("data").join("movement.ron"),
        }
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TuningSource>()
            .init_resource::<MovementTuning>()
            .add_systems(PreStartup, load_movement_tuning);
    }
}

/// Load tuning before anything spawns, so the player starts with it.
fn load_movement_tuning(source: Res<TuningSource>, mut tuning: ResMut<MovementTuning>) {
    let loaded = match load_tuning(&source.path) {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!("{}; using default movement tuning", e);
            return;
        }
    };

    let errors = validate_tuning(&loaded);
    if !errors.is_empty() {
        for error in &errors {
            error!("{}", error);
        }
        warn!(
            "{} invalid tuning value(s) in {}; using default movement tuning",
            errors.len(),
            source.path.display()
        );
        return;
    }

    info!("Loaded movement tuning from {}", source.path.display());
    *tuning = loaded;
}
