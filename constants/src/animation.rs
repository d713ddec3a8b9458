/// Resting scale of a cartridge.
pub const BASELINE_SCALE: f32 = 1.0;

/// Scale a cartridge grows to while hovered or selected.
pub const ENLARGED_SCALE: f32 = 1.2;

/// Fraction of the remaining scale gap closed per frame.
pub const SMOOTHING_FACTOR: f32 = 0.1;

/// Frame rate the smoothing factor was tuned at, used by frame-rate-independent smoothing.
pub const SMOOTHING_REFERENCE_FPS: f32 = 60.0;

/// Idle sway speed in radians of phase per second.
pub const IDLE_ROTATION_SPEED: f32 = 0.5;

/// Peak idle sway around the Y axis in radians.
pub const IDLE_ROTATION_AMPLITUDE: f32 = 0.1;

/// Phase offset applied per unit of item id.
pub const IDLE_PHASE_PER_ID: f32 = 1.0;

/// Emissive intensity while hovered or selected.
pub const ENGAGED_GLOW_INTENSITY: f32 = 0.5;

/// Emissive intensity per unit undervalue fraction while idle.
pub const IDLE_GLOW_SCALE: f32 = 0.3;

/// Float bob speed. One full bob takes `8π / speed` seconds.
pub const FLOAT_SPEED: f32 = 2.0;

/// Scales the float tilt around each axis.
pub const FLOAT_ROTATION_INTENSITY: f32 = 0.2;

/// Scales the float bob height. Peak lift is a tenth of this.
pub const FLOAT_INTENSITY: f32 = 0.5;

/// Seconds of float phase offset per unit of item id.
pub const FLOAT_PHASE_PER_ID: f32 = 2.5;
