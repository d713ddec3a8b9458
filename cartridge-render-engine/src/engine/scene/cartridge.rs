use crate::engine::assets::scene_config::AnimationSettings;
use crate::engine::scene::layout::PositionedItem;
use crate::engine::systems::glow::{emissive_for, glow_intensity};
use crate::market::{Catalog, DerivedMetrics, ItemId, RingTier};
use crate::settings::render_settings::*;
use bevy::picking::Pickable;
use bevy::prelude::*;

/// Links a scene entity to the catalog item it renders.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntity(pub ItemId);

/// Positioned parent of a cartridge. Floats around `home`, never scales.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CartridgeRoot {
    pub home: Vec3,
}

/// The pickable cartridge body. Scale and sway are applied here; its child meshes ignore picking.
#[derive(Component)]
pub struct CartridgeBody;

#[derive(Component)]
pub struct UndervalueRing(pub RingTier);

/// Mesh and material handles shared by every cartridge.
struct CartridgeParts {
    body: Handle<Mesh>,
    notch: Handle<Mesh>,
    label: Handle<Mesh>,
    ring: Handle<Mesh>,
    notch_material: Handle<StandardMaterial>,
    label_material: Handle<StandardMaterial>,
    high_ring_material: Handle<StandardMaterial>,
    moderate_ring_material: Handle<StandardMaterial>,
}

impl CartridgeParts {
    fn new(meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) -> Self {
        Self {
            body: meshes.add(Cuboid::from_size(CARTRIDGE_BODY_SIZE)),
            notch: meshes.add(Cuboid::from_size(NOTCH_SIZE)),
            label: meshes.add(Cuboid::from_size(LABEL_SIZE)),
            ring: meshes.add(Torus {
                minor_radius: RING_MINOR_RADIUS,
                major_radius: RING_MAJOR_RADIUS,
            }),
            notch_material: materials.add(StandardMaterial {
                base_color: NOTCH_COLOUR,
                metallic: 0.5,
                perceptual_roughness: 0.3,
                ..default()
            }),
            label_material: materials.add(StandardMaterial {
                base_color: LABEL_COLOUR,
                metallic: 0.1,
                perceptual_roughness: 0.8,
                ..default()
            }),
            high_ring_material: materials.add(ring_material(RING_HIGH_COLOUR)),
            moderate_ring_material: materials.add(ring_material(RING_MODERATE_COLOUR)),
        }
    }

    fn ring_material(&self, tier: RingTier) -> Handle<StandardMaterial> {
        match tier {
            RingTier::High => self.high_ring_material.clone(),
            RingTier::Moderate => self.moderate_ring_material.clone(),
        }
    }
}

fn ring_material(colour: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: colour.with_alpha(RING_OPACITY),
        emissive: colour.to_linear() * RING_EMISSIVE_INTENSITY,
        alpha_mode: AlphaMode::Blend,
        ..default()
    }
}

/// Spawn one cartridge per positioned item. Items missing from the catalog are skipped.
pub fn spawn_cartridges(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    catalog: &Catalog,
    placed: &[PositionedItem],
    animation: &AnimationSettings,
) -> usize {
    let parts = CartridgeParts::new(meshes, materials);
    let mut spawned = 0;

    for positioned in placed {
        let Some(item) = catalog.get(positioned.id) else {
            warn!("No catalog entry for {}, skipping", positioned.id);
            continue;
        };

        let metrics = DerivedMetrics::of(item);
        let body_material = materials.add(StandardMaterial {
            base_color: item.colour,
            metallic: CARTRIDGE_METALLIC,
            perceptual_roughness: CARTRIDGE_ROUGHNESS,
            emissive: emissive_for(item.colour, glow_intensity(false, &metrics, animation)),
            ..default()
        });

        commands
            .spawn((
                Name::new(item.name.clone()),
                CatalogEntity(item.id),
                CartridgeRoot {
                    home: positioned.position,
                },
                Transform::from_translation(positioned.position),
                Visibility::default(),
            ))
            .with_children(|root| {
                root.spawn((
                    CatalogEntity(item.id),
                    CartridgeBody,
                    Mesh3d(parts.body.clone()),
                    MeshMaterial3d(body_material),
                    Transform::from_scale(Vec3::splat(animation.baseline_scale)),
                ))
                .with_children(|body| {
                    body.spawn((
                        Mesh3d(parts.notch.clone()),
                        MeshMaterial3d(parts.notch_material.clone()),
                        Transform::from_translation(NOTCH_OFFSET),
                        Pickable::IGNORE,
                    ));
                    body.spawn((
                        Mesh3d(parts.label.clone()),
                        MeshMaterial3d(parts.label_material.clone()),
                        Transform::from_translation(LABEL_OFFSET),
                        Pickable::IGNORE,
                    ));
                });
                if let Some(tier) = metrics.ring() {
                    root.spawn((
                        UndervalueRing(tier),
                        Mesh3d(parts.ring.clone()),
                        MeshMaterial3d(parts.ring_material(tier)),
                        Transform::default(),
                        Pickable::IGNORE,
                    ));
                }
            });

        spawned += 1;
    }

    spawned
}
