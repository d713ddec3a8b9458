use crate::engine::assets::scene_config::{OrbitSettings, SceneConfig};
use crate::interaction::hover::PointerCapture;
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use constants::camera::ORBIT_MIN_POLAR_ANGLE as MIN_POLAR_ANGLE;
use std::f32::consts::TAU;

/// Spherical orbit around a focus point.
///
/// `yaw` is measured around +Y starting from +Z toward +X, `pitch` is the polar
/// angle down from +Y. Drag input accumulates into pending deltas that are
/// released a fixed fraction per frame, which gives the damped glide.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub is_dragging: bool,
    pending_yaw: f32,
    pending_pitch: f32,
}

impl OrbitCamera {
    pub fn from_settings(settings: &OrbitSettings) -> Self {
        let start = Vec3::from_array(settings.start_position);
        let distance = start
            .length()
            .clamp(settings.min_distance, settings.max_distance);
        let pitch = if start.length() > 0.0 {
            (start.y / start.length()).clamp(-1.0, 1.0).acos()
        } else {
            settings.max_polar_angle
        };

        Self {
            focus: Vec3::ZERO,
            yaw: start.x.atan2(start.z),
            pitch: pitch.clamp(MIN_POLAR_ANGLE, settings.max_polar_angle),
            distance,
            is_dragging: false,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
        }
    }

    pub fn position(&self) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        self.focus + self.distance * Vec3::new(sin_pitch * sin_yaw, cos_pitch, sin_pitch * cos_yaw)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(self.focus, Vec3::Y)
    }

    /// Queue a drag of `delta` pixels. Dragging right swings the camera left around the focus.
    pub fn apply_drag(&mut self, delta: Vec2, settings: &OrbitSettings) {
        self.pending_yaw -= delta.x * settings.rotate_sensitivity;
        self.pending_pitch -= delta.y * settings.rotate_sensitivity;
    }

    /// Positive scroll zooms in.
    pub fn apply_zoom(&mut self, scroll: f32, settings: &OrbitSettings) {
        let scale = settings.zoom_sensitivity.powf(scroll);
        self.distance =
            (self.distance * scale).clamp(settings.min_distance, settings.max_distance);
    }

    /// Advance one frame: release damped drag, auto-rotate while idle, clamp the pitch.
    pub fn step(&mut self, delta_secs: f32, settings: &OrbitSettings) {
        let damping = settings.damping_factor.clamp(0.0, 1.0);
        self.yaw += self.pending_yaw * damping;
        self.pitch += self.pending_pitch * damping;
        self.pending_yaw *= 1.0 - damping;
        self.pending_pitch *= 1.0 - damping;

        if settings.auto_rotate && !self.is_dragging {
            self.yaw -= TAU / 60.0 * settings.auto_rotate_speed * delta_secs;
        }

        self.yaw = self.yaw.rem_euclid(TAU);
        self.pitch = self.pitch.clamp(MIN_POLAR_ANGLE, settings.max_polar_angle);
    }
}

/// Spawn the scene camera at the compiled default position.
pub fn spawn_orbit_camera(commands: &mut Commands) {
    let settings = OrbitSettings::default();
    commands.spawn((
        Name::new("OrbitCamera"),
        Camera3d::default(),
        perspective(&settings),
        OrbitCamera::from_settings(&settings).transform(),
    ));
}

fn perspective(settings: &OrbitSettings) -> Projection {
    Projection::Perspective(PerspectiveProjection {
        fov: settings.fov_degrees.to_radians(),
        ..default()
    })
}

/// Apply the loaded camera settings and start orbiting.
pub fn configure_orbit_camera(
    mut commands: Commands,
    config: Res<SceneConfig>,
    mut cameras: Query<(&mut Transform, &mut Projection), With<Camera3d>>,
) {
    let orbit = OrbitCamera::from_settings(&config.camera);
    for (mut transform, mut projection) in &mut cameras {
        *transform = orbit.transform();
        *projection = perspective(&config.camera);
    }
    commands.insert_resource(orbit);
}

pub fn orbit_camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    config: Res<SceneConfig>,
    capture: Res<PointerCapture>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let settings = &config.camera;
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    // A press that landed on a cartridge belongs to the selection, not the orbit.
    orbit.is_dragging = mouse_button.pressed(MouseButton::Left) && !capture.claimed;
    if orbit.is_dragging && mouse_delta != Vec2::ZERO {
        orbit.apply_drag(mouse_delta, settings);
    }

    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }
    if scroll_accum.abs() > f32::EPSILON {
        orbit.apply_zoom(scroll_accum, settings);
    }

    orbit.step(time.delta_secs(), settings);

    if let Ok(mut camera_transform) = camera_query.single_mut() {
        *camera_transform = orbit.transform();
    }
}
