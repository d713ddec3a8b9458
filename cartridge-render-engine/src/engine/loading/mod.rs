//! Startup loading for the scene.
//!
//! The only asset awaited is the scene config; once it resolves (loaded,
//! rejected or missing) the app can enter `Running`.

/// Scene config loading with validation and default fallback.
pub mod config_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;
