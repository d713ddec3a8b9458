//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with mesh picking, the scene config asset loader,
/// interaction and RPC plugins, and platform-specific overlays.
pub mod app_setup;

/// Application state machine: `Loading` until the scene config resolves, then `Running`.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
