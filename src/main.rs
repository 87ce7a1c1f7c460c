use avian3d::prelude::*;
use bevy::prelude::*;

use wallrunner::{content, movement};

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Wallrunner".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((content::ContentPlugin, movement::MovementPlugin));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(wallrunner::debug::DebugPlugin);

    app.run();
}
