//! Movement domain: debug-only test room for trying out the controller.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground};

pub(crate) fn spawn_test_room(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_color = materials.add(Color::srgb(0.4, 0.5, 0.4));
    let wall_color = materials.add(Color::srgb(0.3, 0.3, 0.4));
    let block_color = materials.add(Color::srgb(0.5, 0.4, 0.3));
    let sensor_color = materials.add(Color::srgba(0.9, 0.8, 0.2, 0.3));

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    let mut solid = |commands: &mut Commands,
                     size: Vec3,
                     position: Vec3,
                     material: Handle<StandardMaterial>| {
        commands.spawn((
            Ground,
            Mesh3d(meshes.add(Cuboid::from_size(size))),
            MeshMaterial3d(material),
            Transform::from_translation(position),
            RigidBody::Static,
            Collider::cuboid(size.x, size.y, size.z),
            ground_layers,
        ));
    };

    // Floor
    solid(
        &mut commands,
        Vec3::new(60.0, 1.0, 60.0),
        Vec3::new(0.0, -0.5, 0.0),
        ground_color.clone(),
    );

    // Two parallel walls for wall jumping between them
    solid(
        &mut commands,
        Vec3::new(1.0, 12.0, 30.0),
        Vec3::new(-3.0, 6.0, -20.0),
        wall_color.clone(),
    );
    solid(
        &mut commands,
        Vec3::new(1.0, 12.0, 30.0),
        Vec3::new(3.0, 6.0, -20.0),
        wall_color.clone(),
    );

    // Long wall for wall-running along
    solid(
        &mut commands,
        Vec3::new(1.0, 6.0, 40.0),
        Vec3::new(15.0, 3.0, 0.0),
        wall_color,
    );

    // Block to climb by running into it
    solid(
        &mut commands,
        Vec3::new(4.0, 3.0, 4.0),
        Vec3::new(-12.0, 1.5, 8.0),
        block_color,
    );

    // Trigger volume that must never count as ground
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::from_size(Vec3::splat(4.0)))),
        MeshMaterial3d(sensor_color),
        Transform::from_xyz(8.0, 2.0, 10.0),
        RigidBody::Static,
        Collider::cuboid(4.0, 4.0, 4.0),
        Sensor,
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 20.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
