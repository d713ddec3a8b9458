//! Compile-time data shared across the workspace.
//!
//! The catalog snapshot and the tuning defaults that the render engine falls
//! back to when no scene config asset overrides them.

/// Animation tuning for hover/selection feedback and idle motion.
pub mod animation;

/// Orbit camera defaults.
pub mod camera;

/// The fixed catalog of collectible cartridges.
pub mod catalog;

/// Thresholds for the undervalue ring and leaderboard.
pub mod pricing;

/// Ring layout tuning.
pub mod scene_layout;
