//! Scene assembly: deterministic cartridge layout, cartridge meshes and stage decor.
//!
//! Positions are computed once, when the app enters `Running`, from the catalog
//! order and kept in [`SceneLayout`] for the lifetime of the scene.

/// Cartridge entity components and spawning.
pub mod cartridge;

/// Ring layout of catalog items.
///
/// Pure and index-aligned: the same catalog order always yields the same positions.
pub mod layout;

/// Lighting, platform, floor ring and pillar.
pub mod stage;

use crate::engine::assets::scene_config::SceneConfig;
use crate::market::{Catalog, ItemId};
use crate::rpc::web_rpc::WebRpcInterface;
use bevy::prelude::*;
use layout::PositionedItem;

/// Positions computed at scene assembly, in catalog order.
#[derive(Resource, Debug, Default, Clone)]
pub struct SceneLayout {
    pub items: Vec<PositionedItem>,
}

pub fn assemble_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    catalog: Res<Catalog>,
    config: Res<SceneConfig>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let ids: Vec<ItemId> = catalog.items().iter().map(|item| item.id).collect();
    let placed = layout::layout(&ids, &config.layout);

    stage::spawn_lighting(&mut commands);
    stage::spawn_stage(&mut commands, &mut meshes, &mut materials);
    let spawned = cartridge::spawn_cartridges(
        &mut commands,
        &mut meshes,
        &mut materials,
        &catalog,
        &placed,
        &config.animation,
    );
    info!("Scene assembled with {spawned} cartridges");

    let top_deals = crate::market::top_deals(catalog.items(), config.leaderboard_size);
    rpc_interface.send_notification(
        "scene_ready",
        serde_json::json!({
            "item_count": spawned,
            "top_deals": top_deals,
        }),
    );

    commands.insert_resource(SceneLayout { items: placed });
}
