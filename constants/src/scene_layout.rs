/// Radius of the innermost ring of cartridges.
pub const BASE_RADIUS: f32 = 4.0;

/// Distance between consecutive rings.
pub const RADIUS_STEP: f32 = 1.5;

/// Number of concentric rings items are dealt across.
pub const RING_COUNT: usize = 3;

/// Peak vertical offset of the undulation.
pub const VERTICAL_AMPLITUDE: f32 = 1.5;

/// Undulation advance per item index, in radians.
pub const VERTICAL_FREQUENCY: f32 = 0.5;
