//! Per-frame runtime systems for the cartridge scene.
//!
//! Scale smoothing and idle sway, emissive glow feedback, and FPS reporting
//! to the frontend and native overlay.

/// Per-item scale smoothing toward the hover/selection target plus idle sway.
///
/// Visual records are keyed by item id and created on first use at baseline.
pub mod animation;

/// FPS tracking and notification systems for performance monitoring.
///
/// Sends frame rate updates to frontend via RPC and updates native UI overlays.
pub mod fps_tracking;

/// Emissive glow driven by engagement and undervalue.
pub mod glow;
