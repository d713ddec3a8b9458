use crate::engine::assets::scene_config::{AnimationSettings, SceneConfig};
use crate::engine::scene::cartridge::{CartridgeBody, CatalogEntity};
use crate::interaction::hover::HoverSet;
use crate::interaction::selection::Selection;
use crate::market::{Catalog, DerivedMetrics};
use bevy::prelude::*;

/// Emissive strength of a cartridge body.
///
/// Engaged (hovered or selected) items glow at a fixed intensity, the rest glow
/// in proportion to how undervalued they are. Overpriced items stay dark.
pub fn glow_intensity(engaged: bool, metrics: &DerivedMetrics, settings: &AnimationSettings) -> f32 {
    if engaged {
        return settings.engaged_glow;
    }
    let idle = metrics.undervalue_fraction() as f32 * settings.idle_glow_scale;
    if idle.is_finite() { idle.max(0.0) } else { 0.0 }
}

pub fn emissive_for(colour: Color, intensity: f32) -> LinearRgba {
    let linear = colour.to_linear();
    LinearRgba::new(
        linear.red * intensity,
        linear.green * intensity,
        linear.blue * intensity,
        1.0,
    )
}

/// Recompute body emissives. Only does work on frames where hover or selection changed.
pub fn update_cartridge_glow(
    selection: Res<Selection>,
    hover: Res<HoverSet>,
    catalog: Res<Catalog>,
    config: Res<SceneConfig>,
    bodies: Query<(&CatalogEntity, &MeshMaterial3d<StandardMaterial>), With<CartridgeBody>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !selection.is_changed() && !hover.is_changed() {
        return;
    }

    for (entity, material) in &bodies {
        let Some(item) = catalog.get(entity.0) else {
            continue;
        };
        let Some(material) = materials.get_mut(&material.0) else {
            continue;
        };

        let engaged = selection.is_selected(item.id) || hover.is_hovered(item.id);
        let intensity = glow_intensity(engaged, &DerivedMetrics::of(item), &config.animation);
        material.emissive = emissive_for(item.colour, intensity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::metrics::{savings, undervalue_percent};

    fn metrics(price: f64, market_value: f64) -> DerivedMetrics {
        DerivedMetrics {
            undervalue_percent: undervalue_percent(price, market_value),
            savings: savings(price, market_value),
        }
    }

    #[test]
    fn engaged_items_glow_at_fixed_intensity() {
        let settings = AnimationSettings::default();
        assert_eq!(glow_intensity(true, &metrics(180.0, 350.0), &settings), 0.5);
        assert_eq!(glow_intensity(true, &metrics(500.0, 100.0), &settings), 0.5);
    }

    #[test]
    fn idle_glow_tracks_undervalue() {
        let settings = AnimationSettings::default();
        let glow = glow_intensity(false, &metrics(50.0, 100.0), &settings);
        assert!((glow - 0.15).abs() < 1e-6);
    }

    #[test]
    fn overpriced_and_degenerate_items_stay_dark() {
        let settings = AnimationSettings::default();
        assert_eq!(glow_intensity(false, &metrics(150.0, 100.0), &settings), 0.0);
        assert_eq!(glow_intensity(false, &metrics(10.0, 0.0), &settings), 0.0);
    }

    #[test]
    fn emissive_scales_colour_and_keeps_alpha_opaque() {
        let emissive = emissive_for(Color::WHITE, 0.5);
        assert_eq!(emissive, LinearRgba::new(0.5, 0.5, 0.5, 1.0));
        assert_eq!(emissive_for(Color::WHITE, 0.0), LinearRgba::new(0.0, 0.0, 0.0, 1.0));
    }
}
