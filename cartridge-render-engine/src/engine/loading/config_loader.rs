use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::loading::progress::LoadingProgress;
use crate::settings::path::SCENE_CONFIG_PATH;
use bevy::asset::LoadState;
use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct ConfigLoader {
    handle: Option<Handle<SceneConfig>>,
}

// Start the loading process
pub fn start_loading(mut config_loader: ResMut<ConfigLoader>, asset_server: Res<AssetServer>) {
    info!("Loading scene config from {SCENE_CONFIG_PATH}");
    config_loader.handle = Some(asset_server.load(SCENE_CONFIG_PATH));
}

/// Keep a loaded config only if it validates.
pub fn validated_or_default(config: &SceneConfig) -> SceneConfig {
    match config.validate() {
        Ok(()) => config.clone(),
        Err(err) => {
            warn!("Scene config rejected ({err}), using defaults");
            SceneConfig::default()
        }
    }
}

/// Resolve the config asset into a resource. A missing or unreadable file falls back to defaults.
pub fn load_scene_config(
    mut loading_progress: ResMut<LoadingProgress>,
    config_loader: Res<ConfigLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    configs: Res<Assets<SceneConfig>>,
) {
    if loading_progress.config_resolved {
        return;
    }

    let Some(ref handle) = config_loader.handle else {
        return;
    };

    if let Some(config) = configs.get(handle) {
        info!("✓ Scene config loaded");
        commands.insert_resource(validated_or_default(config));
        loading_progress.config_resolved = true;
        return;
    }

    if let LoadState::Failed(err) = asset_server.load_state(handle) {
        warn!("Scene config unavailable ({err}), using defaults");
        commands.insert_resource(SceneConfig::default());
        loading_progress.config_resolved = true;
    }
}
