use std::f32::consts::PI;

pub const CAMERA_START_POSITION: [f32; 3] = [0.0, 3.0, 12.0];
pub const CAMERA_FOV_DEGREES: f32 = 60.0;

pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;
pub const ORBIT_MIN_DISTANCE: f32 = 5.0;
pub const ORBIT_MAX_DISTANCE: f32 = 20.0;

/// Keeps the camera off the pole so `looking_at` stays well defined.
pub const ORBIT_MIN_POLAR_ANGLE: f32 = 1e-3;

/// Polar angle is measured from +Y, so this keeps the camera from dipping far below the platform.
pub const ORBIT_MAX_POLAR_ANGLE: f32 = PI / 1.5;

/// One full orbit takes `60 / speed` seconds.
pub const ORBIT_AUTO_ROTATE_SPEED: f32 = 0.5;

pub const ORBIT_ROTATE_SENSITIVITY: f32 = 0.005;
pub const ORBIT_ZOOM_SENSITIVITY: f32 = 0.95;
