use bevy::prelude::*;
use constants::{animation, camera, pricing, scene_layout};
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneConfigError {
    #[error("smoothing factor must be in (0, 1], got {0}")]
    SmoothingFactorOutOfRange(f32),
    #[error("reference frame rate must be positive, got {0}")]
    NonPositiveReferenceFps(f32),
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("ring count must be at least 1")]
    NoRings,
    #[error("max polar angle must be in ({min}, π], got {value}")]
    PolarLimitOutOfRange { min: f32, value: f32 },
    #[error("zoom sensitivity must be in (0, 1), got {0}")]
    ZoomSensitivityOutOfRange(f32),
    #[error("zoom range is inverted: min {min} > max {max}")]
    InvertedZoomRange { min: f32, max: f32 },
    #[error("leaderboard must show at least one entry")]
    EmptyLeaderboard,
}

/// Ring layout tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub base_radius: f32,
    pub radius_step: f32,
    pub ring_count: usize,
    pub vertical_amplitude: f32,
    pub vertical_frequency: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            base_radius: scene_layout::BASE_RADIUS,
            radius_step: scene_layout::RADIUS_STEP,
            ring_count: scene_layout::RING_COUNT,
            vertical_amplitude: scene_layout::VERTICAL_AMPLITUDE,
            vertical_frequency: scene_layout::VERTICAL_FREQUENCY,
        }
    }
}

/// How the per-frame scale smoothing relates to frame timing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SmoothingMode {
    /// Close a fixed fraction of the gap every rendered frame. Convergence speed follows frame rate.
    PerFrame,
    /// Scale the fraction by frame time so convergence matches `PerFrame` at `reference_fps`.
    FrameRateIndependent {
        #[serde(default = "default_reference_fps")]
        reference_fps: f32,
    },
}

fn default_reference_fps() -> f32 {
    animation::SMOOTHING_REFERENCE_FPS
}

impl SmoothingMode {
    /// Frame-rate-independent smoothing tuned at the default reference rate.
    pub fn frame_rate_independent() -> Self {
        Self::FrameRateIndependent {
            reference_fps: default_reference_fps(),
        }
    }
}

impl Default for SmoothingMode {
    fn default() -> Self {
        Self::PerFrame
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub baseline_scale: f32,
    pub enlarged_scale: f32,
    pub smoothing_factor: f32,
    pub smoothing_mode: SmoothingMode,
    pub idle_rotation_speed: f32,
    pub idle_rotation_amplitude: f32,
    pub idle_phase_per_id: f32,
    pub engaged_glow: f32,
    pub idle_glow_scale: f32,
    pub float_speed: f32,
    pub float_rotation_intensity: f32,
    pub float_intensity: f32,
    pub float_phase_per_id: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            baseline_scale: animation::BASELINE_SCALE,
            enlarged_scale: animation::ENLARGED_SCALE,
            smoothing_factor: animation::SMOOTHING_FACTOR,
            smoothing_mode: SmoothingMode::default(),
            idle_rotation_speed: animation::IDLE_ROTATION_SPEED,
            idle_rotation_amplitude: animation::IDLE_ROTATION_AMPLITUDE,
            idle_phase_per_id: animation::IDLE_PHASE_PER_ID,
            engaged_glow: animation::ENGAGED_GLOW_INTENSITY,
            idle_glow_scale: animation::IDLE_GLOW_SCALE,
            float_speed: animation::FLOAT_SPEED,
            float_rotation_intensity: animation::FLOAT_ROTATION_INTENSITY,
            float_intensity: animation::FLOAT_INTENSITY,
            float_phase_per_id: animation::FLOAT_PHASE_PER_ID,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitSettings {
    pub start_position: [f32; 3],
    pub fov_degrees: f32,
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub max_polar_angle: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    pub rotate_sensitivity: f32,
    pub zoom_sensitivity: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            start_position: camera::CAMERA_START_POSITION,
            fov_degrees: camera::CAMERA_FOV_DEGREES,
            damping_factor: camera::ORBIT_DAMPING_FACTOR,
            min_distance: camera::ORBIT_MIN_DISTANCE,
            max_distance: camera::ORBIT_MAX_DISTANCE,
            max_polar_angle: camera::ORBIT_MAX_POLAR_ANGLE,
            auto_rotate: true,
            auto_rotate_speed: camera::ORBIT_AUTO_ROTATE_SPEED,
            rotate_sensitivity: camera::ORBIT_ROTATE_SENSITIVITY,
            zoom_sensitivity: camera::ORBIT_ZOOM_SENSITIVITY,
        }
    }
}

/// Scene tuning as a Bevy asset. Mirrors `assets/config/scene.json`; missing fields take defaults.
#[derive(Asset, TypePath, Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub layout: LayoutSettings,
    pub animation: AnimationSettings,
    pub camera: OrbitSettings,
    pub leaderboard_size: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            layout: LayoutSettings::default(),
            animation: AnimationSettings::default(),
            camera: OrbitSettings::default(),
            leaderboard_size: pricing::TOP_DEALS_COUNT,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), SceneConfigError> {
        let anim = &self.animation;
        if !(anim.smoothing_factor > 0.0 && anim.smoothing_factor <= 1.0) {
            return Err(SceneConfigError::SmoothingFactorOutOfRange(
                anim.smoothing_factor,
            ));
        }
        if let SmoothingMode::FrameRateIndependent { reference_fps } = anim.smoothing_mode {
            if !(reference_fps > 0.0) {
                return Err(SceneConfigError::NonPositiveReferenceFps(reference_fps));
            }
        }

        require_positive("layout.base_radius", self.layout.base_radius)?;
        require_positive("animation.baseline_scale", anim.baseline_scale)?;
        require_positive("animation.enlarged_scale", anim.enlarged_scale)?;
        require_positive("camera.min_distance", self.camera.min_distance)?;
        require_positive("camera.fov_degrees", self.camera.fov_degrees)?;

        if self.layout.ring_count == 0 {
            return Err(SceneConfigError::NoRings);
        }
        let polar = self.camera.max_polar_angle;
        if !(polar > camera::ORBIT_MIN_POLAR_ANGLE && polar <= PI) {
            return Err(SceneConfigError::PolarLimitOutOfRange {
                min: camera::ORBIT_MIN_POLAR_ANGLE,
                value: polar,
            });
        }
        let zoom = self.camera.zoom_sensitivity;
        if !(zoom > 0.0 && zoom < 1.0) {
            return Err(SceneConfigError::ZoomSensitivityOutOfRange(zoom));
        }
        if self.camera.min_distance > self.camera.max_distance {
            return Err(SceneConfigError::InvertedZoomRange {
                min: self.camera.min_distance,
                max: self.camera.max_distance,
            });
        }
        if self.leaderboard_size == 0 {
            return Err(SceneConfigError::EmptyLeaderboard);
        }
        Ok(())
    }
}

fn require_positive(field: &'static str, value: f32) -> Result<(), SceneConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(SceneConfigError::NonPositive { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty_json_yields_defaults() {
        let config: SceneConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SceneConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config: SceneConfig = serde_json::from_str(
            r#"{
                "layout": { "base_radius": 6.0 },
                "animation": { "smoothing_mode": { "mode": "frame_rate_independent", "reference_fps": 60.0 } },
                "leaderboard_size": 3
            }"#,
        )
        .unwrap();

        assert_eq!(config.layout.base_radius, 6.0);
        assert_eq!(config.layout.radius_step, scene_layout::RADIUS_STEP);
        assert_eq!(
            config.animation.smoothing_mode,
            SmoothingMode::FrameRateIndependent { reference_fps: 60.0 }
        );
        assert_eq!(config.animation.smoothing_factor, animation::SMOOTHING_FACTOR);
        assert_eq!(config.leaderboard_size, 3);
    }

    #[test]
    fn shipped_config_matches_defaults() {
        let shipped = include_str!("../../../assets/config/scene.json");
        let config: SceneConfig = serde_json::from_str(shipped).unwrap();
        assert_eq!(config, SceneConfig::default());
    }

    #[rstest]
    #[case::zero_smoothing(|c: &mut SceneConfig| c.animation.smoothing_factor = 0.0)]
    #[case::overshooting_smoothing(|c: &mut SceneConfig| c.animation.smoothing_factor = 1.5)]
    #[case::nan_smoothing(|c: &mut SceneConfig| c.animation.smoothing_factor = f32::NAN)]
    #[case::zero_reference_fps(|c: &mut SceneConfig| {
        c.animation.smoothing_mode = SmoothingMode::FrameRateIndependent { reference_fps: 0.0 }
    })]
    #[case::negative_radius(|c: &mut SceneConfig| c.layout.base_radius = -1.0)]
    #[case::no_rings(|c: &mut SceneConfig| c.layout.ring_count = 0)]
    #[case::flat_polar_limit(|c: &mut SceneConfig| c.camera.max_polar_angle = 0.0)]
    #[case::polar_limit_past_the_pole(|c: &mut SceneConfig| c.camera.max_polar_angle = 4.0)]
    #[case::nan_polar_limit(|c: &mut SceneConfig| c.camera.max_polar_angle = f32::NAN)]
    #[case::zero_zoom_sensitivity(|c: &mut SceneConfig| c.camera.zoom_sensitivity = 0.0)]
    #[case::negative_zoom_sensitivity(|c: &mut SceneConfig| c.camera.zoom_sensitivity = -0.5)]
    #[case::inverting_zoom_sensitivity(|c: &mut SceneConfig| c.camera.zoom_sensitivity = 1.5)]
    #[case::inverted_zoom(|c: &mut SceneConfig| c.camera.min_distance = 30.0)]
    #[case::empty_board(|c: &mut SceneConfig| c.leaderboard_size = 0)]
    fn invalid_values_are_rejected(#[case] corrupt: fn(&mut SceneConfig)) {
        let mut config = SceneConfig::default();
        corrupt(&mut config);
        assert!(config.validate().is_err());
    }

    #[test]
    fn reference_fps_defaults_when_omitted() {
        let config: SceneConfig = serde_json::from_str(
            r#"{ "animation": { "smoothing_mode": { "mode": "frame_rate_independent" } } }"#,
        )
        .unwrap();
        assert_eq!(
            config.animation.smoothing_mode,
            SmoothingMode::frame_rate_independent()
        );
        assert_eq!(
            SmoothingMode::frame_rate_independent(),
            SmoothingMode::FrameRateIndependent { reference_fps: 60.0 }
        );
    }

    #[test]
    fn polar_limit_up_to_the_pole_is_allowed() {
        let mut config = SceneConfig::default();
        config.camera.max_polar_angle = PI;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn full_smoothing_is_allowed() {
        let mut config = SceneConfig::default();
        config.animation.smoothing_factor = 1.0;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn errors_name_the_offending_field() {
        let mut config = SceneConfig::default();
        config.animation.enlarged_scale = 0.0;
        let message = config.validate().unwrap_err().to_string();
        assert_eq!(message, "animation.enlarged_scale must be positive, got 0");
    }
}
