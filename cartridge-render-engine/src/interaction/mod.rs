//! Pointer interaction with the cartridges, plus the region filter control.
//!
//! ## Event Flow
//!
//! ```text
//! Picking observer (Over / Out / Click on a cartridge body)
//!   └─> CartridgePointerEvent
//!       └─> apply_pointer_events()
//!           ├─> HoverSet / Selection
//!           ├─> CursorRequest ──> apply_cursor_requests()
//!           └─> HoverChanged / SelectionChanged ──> RPC notifications
//! ```
//!
//! Every observer stops propagation, and a primary press on a cartridge sets
//! [`hover::PointerCapture`] so the orbit camera never turns a click into a drag.
//!
//! The region filter is a display-only control: it is logged and broadcast but
//! the layout and rendering never consult it.

pub mod cursor;
pub mod filter;
pub mod hover;
pub mod selection;

use bevy::prelude::*;
use cursor::{CursorRequest, HostCursor, apply_cursor_requests};
use filter::{
    RegionFilter, RegionSelectionEvent, handle_region_keyboard_shortcuts,
    handle_region_selection_events,
};
use hover::{
    CartridgePointerEvent, HoverChanged, HoverSet, PointerCapture, apply_pointer_events,
    attach_pointer_observers, release_pointer_capture,
};
use selection::{Selection, SelectionChanged};

use crate::engine::camera::orbit_camera::orbit_camera_controller;
use crate::engine::core::app_state::AppState;

/// Registers hover, selection, cursor and region filter state and systems.
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoverSet>()
            .init_resource::<Selection>()
            .init_resource::<PointerCapture>()
            .init_resource::<HostCursor>()
            .init_resource::<RegionFilter>()
            .add_event::<CartridgePointerEvent>()
            .add_event::<HoverChanged>()
            .add_event::<SelectionChanged>()
            .add_event::<CursorRequest>()
            .add_event::<RegionSelectionEvent>()
            .add_systems(
                Update,
                (
                    (
                        attach_pointer_observers,
                        apply_pointer_events,
                        apply_cursor_requests,
                    )
                        .chain(),
                    release_pointer_capture.after(orbit_camera_controller),
                    (
                        handle_region_keyboard_shortcuts,
                        handle_region_selection_events,
                    )
                        .chain(),
                )
                    .run_if(in_state(AppState::Running)),
            );
    }
}
