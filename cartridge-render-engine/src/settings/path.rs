/// Scene tuning overrides. Missing or invalid files fall back to compiled defaults.
pub const SCENE_CONFIG_PATH: &str = "config/scene.json";
