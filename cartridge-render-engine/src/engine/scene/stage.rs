use crate::settings::render_settings::*;
use bevy::picking::Pickable;
use bevy::prelude::*;

/// Decorative geometry around the cartridges. Never pickable.
#[derive(Component)]
pub struct StageProp;

pub fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(ClearColor(BACKGROUND_COLOUR));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: DIRECTIONAL_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    for (position, colour) in [
        (Vec3::new(-10.0, -10.0, -5.0), MAGENTA),
        (Vec3::new(10.0, -5.0, 10.0), CYAN),
    ] {
        commands.spawn((
            PointLight {
                color: colour,
                intensity: POINT_LIGHT_INTENSITY,
                range: 40.0,
                ..default()
            },
            Transform::from_translation(position),
        ));
    }
}

pub fn spawn_stage(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    commands.spawn((
        StageProp,
        Pickable::IGNORE,
        Mesh3d(meshes.add(ConicalFrustum {
            radius_top: PLATFORM_TOP_RADIUS,
            radius_bottom: PLATFORM_BOTTOM_RADIUS,
            height: PLATFORM_HEIGHT,
        })),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: PLATFORM_COLOUR,
            metallic: 0.9,
            perceptual_roughness: 0.1,
            emissive: PLATFORM_EMISSIVE.to_linear() * 0.2,
            ..default()
        })),
        Transform::from_xyz(0.0, PLATFORM_Y, 0.0),
    ));

    commands.spawn((
        StageProp,
        Pickable::IGNORE,
        Mesh3d(meshes.add(Torus {
            minor_radius: FLOOR_RING_MINOR_RADIUS,
            major_radius: FLOOR_RING_MAJOR_RADIUS,
        })),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: CYAN,
            emissive: CYAN.to_linear(),
            ..default()
        })),
        Transform::from_xyz(0.0, FLOOR_RING_Y, 0.0),
    ));

    commands.spawn((
        StageProp,
        Pickable::IGNORE,
        Mesh3d(meshes.add(Cylinder::new(PILLAR_RADIUS, PILLAR_HEIGHT))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: MAGENTA.with_alpha(0.5),
            emissive: MAGENTA.to_linear() * 2.0,
            alpha_mode: AlphaMode::Blend,
            ..default()
        })),
        Transform::from_xyz(0.0, PILLAR_Y, 0.0),
    ));
}
