use crate::engine::assets::scene_config::{AnimationSettings, SceneConfig, SmoothingMode};
use crate::engine::scene::cartridge::{CartridgeBody, CartridgeRoot, CatalogEntity};
use crate::interaction::hover::HoverSet;
use crate::interaction::selection::Selection;
use crate::market::ItemId;
use bevy::prelude::*;
use std::collections::HashMap;

/// Per-item animated state, advanced once per rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualTransform {
    pub current_scale: f32,
    pub target_scale: f32,
    pub rotation_phase: f32,
}

impl VisualTransform {
    pub fn at_rest(settings: &AnimationSettings) -> Self {
        Self {
            current_scale: settings.baseline_scale,
            target_scale: settings.baseline_scale,
            rotation_phase: 0.0,
        }
    }
}

/// Visual records keyed by item. Items without a record animate from baseline.
#[derive(Resource, Default, Debug)]
pub struct VisualStates {
    records: HashMap<ItemId, VisualTransform>,
}

impl VisualStates {
    pub fn get(&self, id: ItemId) -> Option<&VisualTransform> {
        self.records.get(&id)
    }

    fn record_mut(&mut self, id: ItemId, settings: &AnimationSettings) -> &mut VisualTransform {
        self.records
            .entry(id)
            .or_insert_with(|| VisualTransform::at_rest(settings))
    }
}

pub fn target_scale(engaged: bool, settings: &AnimationSettings) -> f32 {
    if engaged {
        settings.enlarged_scale
    } else {
        settings.baseline_scale
    }
}

/// Fraction of the remaining gap to close this frame.
pub fn effective_factor(settings: &AnimationSettings, delta_secs: f32) -> f32 {
    match settings.smoothing_mode {
        SmoothingMode::PerFrame => settings.smoothing_factor,
        SmoothingMode::FrameRateIndependent { reference_fps } => {
            let frames = (delta_secs * reference_fps).max(0.0);
            (1.0 - (1.0 - settings.smoothing_factor).powf(frames)).clamp(0.0, 1.0)
        }
    }
}

/// One smoothing step. The result always lies between `current` and `target`.
pub fn smoothing_step(current: f32, target: f32, factor: f32) -> f32 {
    let next = current + (target - current) * factor;
    next.clamp(current.min(target), current.max(target))
}

/// Idle sway angle around Y. The id-derived offset keeps neighbours out of phase.
pub fn idle_rotation(elapsed_secs: f32, id: ItemId, settings: &AnimationSettings) -> f32 {
    (elapsed_secs * settings.idle_rotation_speed + id.0 as f32 * settings.idle_phase_per_id).sin()
        * settings.idle_rotation_amplitude
}

/// Bob and tilt layered over a cartridge root's layout position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatOffset {
    pub lift: f32,
    /// Euler angles in radians, applied XYZ.
    pub tilt: Vec3,
}

impl FloatOffset {
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.tilt.x, self.tilt.y, self.tilt.z)
    }
}

/// Continuous float of a cartridge root. Lift stays within a tenth of `float_intensity`.
pub fn float_offset(elapsed_secs: f32, id: ItemId, settings: &AnimationSettings) -> FloatOffset {
    let t = elapsed_secs + id.0 as f32 * settings.float_phase_per_id;
    let (sin, cos) = (t / 4.0 * settings.float_speed).sin_cos();
    let intensity = settings.float_rotation_intensity;

    FloatOffset {
        lift: sin / 10.0 * settings.float_intensity,
        tilt: Vec3::new(cos / 8.0 * intensity, sin / 8.0 * intensity, sin / 20.0 * intensity),
    }
}

pub fn float_cartridges(
    time: Res<Time>,
    config: Res<SceneConfig>,
    mut roots: Query<(&CatalogEntity, &CartridgeRoot, &mut Transform)>,
) {
    let elapsed = time.elapsed_secs();
    for (entity, root, mut transform) in &mut roots {
        let offset = float_offset(elapsed, entity.0, &config.animation);
        transform.translation = root.home + Vec3::Y * offset.lift;
        transform.rotation = offset.rotation();
    }
}

pub fn animate_cartridges(
    time: Res<Time>,
    config: Res<SceneConfig>,
    selection: Res<Selection>,
    hover: Res<HoverSet>,
    mut states: ResMut<VisualStates>,
    mut bodies: Query<(&CatalogEntity, &mut Transform), With<CartridgeBody>>,
) {
    let settings = &config.animation;
    let factor = effective_factor(settings, time.delta_secs());
    let elapsed = time.elapsed_secs();

    for (entity, mut transform) in &mut bodies {
        let id = entity.0;
        let engaged = hover.is_hovered(id) || selection.is_selected(id);
        let state = states.record_mut(id, settings);

        state.target_scale = target_scale(engaged, settings);
        state.current_scale = smoothing_step(state.current_scale, state.target_scale, factor);
        state.rotation_phase = idle_rotation(elapsed, id, settings);

        transform.scale = Vec3::splat(state.current_scale);
        transform.rotation = Quat::from_rotation_y(state.rotation_phase);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn target_follows_engagement() {
        let settings = AnimationSettings::default();
        assert_eq!(target_scale(true, &settings), 1.2);
        assert_eq!(target_scale(false, &settings), 1.0);
    }

    #[test]
    fn per_frame_factor_ignores_frame_time() {
        let settings = AnimationSettings::default();
        assert_eq!(effective_factor(&settings, 1.0 / 30.0), 0.1);
        assert_eq!(effective_factor(&settings, 1.0 / 144.0), 0.1);
    }

    #[test]
    fn frame_rate_independent_factor_matches_at_reference_rate() {
        let settings = AnimationSettings {
            smoothing_mode: SmoothingMode::FrameRateIndependent { reference_fps: 60.0 },
            ..default()
        };
        assert!((effective_factor(&settings, 1.0 / 60.0) - 0.1).abs() < 1e-5);
        // Two reference frames squashed into one close the same total gap.
        assert!((effective_factor(&settings, 2.0 / 60.0) - 0.19).abs() < 1e-5);
        assert_eq!(effective_factor(&settings, 0.0), 0.0);
    }

    #[test]
    fn full_factor_lands_on_target() {
        assert_eq!(smoothing_step(1.0, 1.2, 1.0), 1.2);
    }

    #[test]
    fn ten_frames_close_most_of_the_gap() {
        let mut scale = 1.0;
        for _ in 0..10 {
            scale = smoothing_step(scale, 1.2, 0.1);
        }
        let expected = 1.2 - 0.2 * 0.9f32.powi(10);
        assert!((scale - expected).abs() < 1e-5);
    }

    #[test]
    fn neighbouring_ids_sway_out_of_phase() {
        let settings = AnimationSettings::default();
        let phases: Vec<f32> = (1..=18)
            .map(|id| idle_rotation(3.7, ItemId(id), &settings))
            .collect();

        for (i, a) in phases.iter().enumerate() {
            for b in &phases[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(phases.iter().all(|phase| phase.abs() <= 0.1));
    }

    #[test]
    fn float_differs_between_neighbours() {
        let settings = AnimationSettings::default();
        let offsets: Vec<FloatOffset> = (1..=18)
            .map(|id| float_offset(1.3, ItemId(id), &settings))
            .collect();

        for (i, a) in offsets.iter().enumerate() {
            for b in &offsets[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    proptest! {
        #[test]
        fn float_stays_bounded(elapsed in 0.0f32..10_000.0, id in 1u32..=18) {
            let settings = AnimationSettings::default();
            let offset = float_offset(elapsed, ItemId(id), &settings);
            let tilt_limit = settings.float_rotation_intensity / 8.0 + 1e-6;

            prop_assert!(offset.lift.abs() <= settings.float_intensity / 10.0 + 1e-6);
            prop_assert!(offset.tilt.x.abs() <= tilt_limit);
            prop_assert!(offset.tilt.y.abs() <= tilt_limit);
            prop_assert!(offset.tilt.z.abs() <= settings.float_rotation_intensity / 20.0 + 1e-6);
        }

        #[test]
        fn smoothing_never_overshoots(
            current in 0.1f32..3.0,
            target in 0.1f32..3.0,
            factor in 0.001f32..=1.0,
        ) {
            let next = smoothing_step(current, target, factor);
            let (low, high) = (current.min(target), current.max(target));
            prop_assert!(next >= low && next <= high);
            prop_assert!((target - next).abs() <= (target - current).abs());
        }

        #[test]
        fn gap_strictly_shrinks_while_visible(
            current in 0.5f32..2.0,
            target in 0.5f32..2.0,
            factor in 0.01f32..=1.0,
        ) {
            prop_assume!((target - current).abs() > 1e-3);
            let next = smoothing_step(current, target, factor);
            prop_assert!((target - next).abs() < (target - current).abs());
        }
    }

    fn headless_app() -> App {
        let mut app = App::new();
        app.init_resource::<Time>()
            .insert_resource(SceneConfig::default())
            .init_resource::<Selection>()
            .init_resource::<HoverSet>()
            .init_resource::<VisualStates>()
            .add_systems(Update, animate_cartridges);
        app
    }

    fn spawn_body(app: &mut App, id: u32) -> Entity {
        app.world_mut()
            .spawn((CatalogEntity(ItemId(id)), CartridgeBody, Transform::default()))
            .id()
    }

    #[test]
    fn hovered_item_grows_without_overshooting() {
        let mut app = headless_app();
        let hovered = spawn_body(&mut app, 3);
        let idle = spawn_body(&mut app, 4);
        app.world_mut().resource_mut::<HoverSet>().enter(ItemId(3));

        let mut previous = 1.0;
        for _ in 0..30 {
            app.update();
            let scale = app.world().get::<Transform>(hovered).unwrap().scale.x;
            assert!(scale > previous && scale <= 1.2);
            previous = scale;
        }

        let idle_scale = app.world().get::<Transform>(idle).unwrap().scale;
        assert_eq!(idle_scale, Vec3::ONE);
        assert_eq!(
            app.world().resource::<VisualStates>().get(ItemId(3)).unwrap().target_scale,
            1.2
        );
    }

    #[test]
    fn selected_item_settles_back_after_deselect() {
        let mut app = headless_app();
        let body = spawn_body(&mut app, 5);

        app.world_mut().resource_mut::<Selection>().select(ItemId(5));
        for _ in 0..20 {
            app.update();
        }
        let grown = app.world().get::<Transform>(body).unwrap().scale.x;
        assert!(grown > 1.1);

        app.world_mut().resource_mut::<Selection>().select(ItemId(5));
        app.update();
        let shrinking = app.world().get::<Transform>(body).unwrap().scale.x;
        assert!(shrinking < grown && shrinking >= 1.0);
    }

    #[test]
    fn roots_float_around_home_while_bodies_keep_their_scale() {
        let mut app = headless_app();
        app.add_systems(Update, float_cartridges);
        let home = Vec3::new(4.0, 0.5, -2.0);
        let root = app
            .world_mut()
            .spawn((
                CatalogEntity(ItemId(7)),
                CartridgeRoot { home },
                Transform::from_translation(home),
            ))
            .id();
        let body = spawn_body(&mut app, 7);

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(std::time::Duration::from_secs_f32(0.75));
        app.update();

        let expected = float_offset(0.75, ItemId(7), &AnimationSettings::default());
        let transform = *app.world().get::<Transform>(root).unwrap();
        assert_eq!(transform.translation.x, home.x);
        assert_eq!(transform.translation.z, home.z);
        assert!((transform.translation.y - (home.y + expected.lift)).abs() < 1e-6);
        assert!(transform.rotation.abs_diff_eq(expected.rotation(), 1e-6));
        assert_eq!(transform.scale, Vec3::ONE);

        assert_eq!(app.world().get::<Transform>(body).unwrap().scale, Vec3::ONE);
    }

    #[test]
    fn missing_records_start_at_baseline() {
        let mut app = headless_app();
        spawn_body(&mut app, 9);
        assert!(app.world().resource::<VisualStates>().get(ItemId(9)).is_none());

        app.update();

        let record = *app.world().resource::<VisualStates>().get(ItemId(9)).unwrap();
        assert_eq!(record.current_scale, 1.0);
        assert_eq!(record.target_scale, 1.0);
    }
}
