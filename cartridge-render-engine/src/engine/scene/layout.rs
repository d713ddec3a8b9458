use crate::engine::assets::scene_config::LayoutSettings;
use crate::market::ItemId;
use bevy::prelude::*;
use std::f32::consts::TAU;

/// A catalog item paired with its placement, computed once at scene assembly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedItem {
    pub id: ItemId,
    pub position: Vec3,
}

/// Position of the item at `index` out of `count`.
///
/// Items are spread evenly around the circle and dealt across concentric rings
/// by index, with a vertical undulation that depends on index alone.
pub fn position_for_index(index: usize, count: usize, settings: &LayoutSettings) -> Vec3 {
    let angle = index as f32 / count as f32 * TAU;
    let ring = index % settings.ring_count.max(1);
    let radius = settings.base_radius + ring as f32 * settings.radius_step;
    let y = (index as f32 * settings.vertical_frequency).sin() * settings.vertical_amplitude;

    Vec3::new(angle.cos() * radius, y, angle.sin() * radius)
}

/// Lay out an ordered id list. Output is index-aligned with the input.
pub fn layout(ids: &[ItemId], settings: &LayoutSettings) -> Vec<PositionedItem> {
    let count = ids.len();
    ids.iter()
        .enumerate()
        .map(|(index, &id)| PositionedItem {
            id,
            position: position_for_index(index, count, settings),
        })
        .collect()
}
