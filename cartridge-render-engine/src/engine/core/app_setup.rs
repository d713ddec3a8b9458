use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
// Crate engine modules
use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::camera::orbit_camera::{
    configure_orbit_camera, orbit_camera_controller, spawn_orbit_camera,
};
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::config_loader::{ConfigLoader, load_scene_config, start_loading};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::assemble_scene;
use crate::engine::systems::animation::{VisualStates, animate_cartridges, float_cartridges};
use crate::engine::systems::fps_tracking::fps_notification_system;
use crate::engine::systems::glow::update_cartridge_glow;
use crate::interaction::InteractionPlugin;
use crate::market::Catalog;
// Create Web RPC modules
use crate::rpc::web_rpc::WebRpcPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::fps_text_update_system;
#[cfg(not(target_arch = "wasm32"))]
use crate::ui::panels::{
    create_native_overlays, refresh_region_buttons, region_button_interaction,
    update_details_panel, update_price_tags,
};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(MeshPickingPlugin)
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SceneConfig as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SceneConfig>::new(&["json"]))
        .add_plugins(WebRpcPlugin)
        .add_plugins(InteractionPlugin);

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ConfigLoader>()
        .init_resource::<VisualStates>()
        .insert_resource(Catalog::builtin());

    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (load_scene_config, transition_to_running)
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            OnEnter(AppState::Running),
            (configure_orbit_camera, assemble_scene),
        );

    app.add_systems(
        Update,
        (
            orbit_camera_controller,
            animate_cartridges,
            float_cartridges,
            update_cartridge_glow,
            fps_notification_system,
        )
            .run_if(in_state(AppState::Running)),
    );

    // Native overlays mirror what the web frontend renders from RPC notifications.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(OnEnter(AppState::Running), create_native_overlays)
            .add_systems(
                Update,
                (
                    fps_text_update_system,
                    update_details_panel,
                    update_price_tags,
                    region_button_interaction.before(orbit_camera_controller),
                    refresh_region_buttons,
                )
                    .run_if(in_state(AppState::Running)),
            );
    }

    app
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    spawn_orbit_camera(&mut commands);
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
