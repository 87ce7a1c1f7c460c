//! Movement domain: drives the controller once per frame.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::systems::collisions::{AvianGroundQueries, VelocityMover};
use crate::movement::{
    BodySnapshot, MovementController, MovementInput, MovementTelemetry, MovementTuning, Player,
};

pub(crate) fn drive_controller(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut input: ResMut<MovementInput>,
    spatial_query: SpatialQuery,
    sensors: Query<Entity, With<Sensor>>,
    mut query: Query<
        (
            &Transform,
            &mut LinearVelocity,
            &mut MovementController,
            &mut MovementTelemetry,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    let queries = AvianGroundQueries::new(&spatial_query, &sensors);

    for (transform, mut velocity, mut controller, mut telemetry) in &mut query {
        let body = BodySnapshot {
            position: transform.translation,
            rotation: transform.rotation,
            velocity: velocity.0,
        };

        let mut mover = VelocityMover {
            velocity: &mut velocity,
            dt,
        };
        let output = controller.tick(&mut input, &body, &queries, &mut mover, &tuning, dt);

        *telemetry = MovementTelemetry {
            displacement: output.displacement,
            is_grounded: output.env.is_grounded,
            is_walled: output.env.is_walled,
            free_fall: output.free_fall,
        };
    }
}
