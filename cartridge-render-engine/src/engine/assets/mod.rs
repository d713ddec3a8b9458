//! Runtime-loadable scene assets.
//!
//! The scene config is a JSON asset registered through `bevy_common_assets`;
//! every field is optional and falls back to the `constants` crate defaults.

/// Scene tuning overrides: layout, animation, camera and leaderboard size.
pub mod scene_config;
