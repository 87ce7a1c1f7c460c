//! Movement domain: applies look input to the player and its camera pivot.

use bevy::prelude::*;

use crate::movement::{
    CameraTarget, MovementController, MovementInput, MovementTuning, Player, orient_camera,
};

/// Runs after movement so the view reflects this frame's input. A player
/// without a camera pivot is a setup error and fails the system.
pub(crate) fn aim_camera(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    input: Res<MovementInput>,
    mut players: Query<
        (&mut Transform, &mut MovementController),
        (With<Player>, Without<CameraTarget>),
    >,
    mut targets: Query<&mut Transform, (With<CameraTarget>, Without<Player>)>,
) -> Result {
    let Ok((mut transform, mut controller)) = players.single_mut() else {
        return Ok(());
    };
    let mut target = targets.single_mut()?;

    let dt = time.delta_secs();
    if let Some(orientation) = orient_camera(&mut controller.look, &input, &tuning, dt) {
        target.rotation = orientation.pitch;
        transform.rotation = orientation.yaw * transform.rotation;
    }

    Ok(())
}
