/// Asset paths relative to the Bevy asset root.
pub mod path;

/// Geometry, material and colour constants for the rendered scene.
pub mod render_settings;
