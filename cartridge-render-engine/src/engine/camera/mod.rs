//! Orbit camera host for the cartridge scene.
//!
//! Provides damped drag rotation, clamped wheel zoom, and idle auto-rotation
//! around the origin. Drags that start on a cartridge are ignored.

/// Orbit camera resource, spawn/configure helpers and controller system.
pub mod orbit_camera;
