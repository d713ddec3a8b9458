use crate::rpc::web_rpc::WebRpcInterface;
use bevy::prelude::*;
use constants::catalog::Region;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Region choices offered by the filter control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RegionChoice {
    #[default]
    All,
    Jp,
    Us,
    Eu,
}

impl RegionChoice {
    pub const OPTIONS: [RegionChoice; 4] = [Self::All, Self::Jp, Self::Us, Self::Eu];

    /// Convert string identifier to a region choice for RPC compatibility.
    pub fn from_code(code: &str) -> Option<Self> {
        if code.eq_ignore_ascii_case("ALL") {
            return Some(Self::All);
        }
        Region::from_code(code).map(Self::from)
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Jp => "JP",
            Self::Us => "US",
            Self::Eu => "EU",
        }
    }

    /// The concrete region, or `None` for ALL.
    pub fn region(&self) -> Option<Region> {
        match self {
            Self::All => None,
            Self::Jp => Some(Region::Jp),
            Self::Us => Some(Region::Us),
            Self::Eu => Some(Region::Eu),
        }
    }
}

impl From<Region> for RegionChoice {
    fn from(region: Region) -> Self {
        match region {
            Region::Jp => Self::Jp,
            Region::Us => Self::Us,
            Region::Eu => Self::Eu,
        }
    }
}

impl fmt::Display for RegionChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Active region filter. Displayed and broadcast, but nothing in the scene reads it.
#[derive(Resource, Debug, Default)]
pub struct RegionFilter {
    active: RegionChoice,
}

impl RegionFilter {
    /// Returns true if the choice changed.
    pub fn set_region(&mut self, choice: RegionChoice) -> bool {
        if self.active == choice {
            return false;
        }
        self.active = choice;
        true
    }

    pub fn active(&self) -> RegionChoice {
        self.active
    }
}

/// Source of a region change for debugging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionSelectionSource {
    Rpc,
    Keyboard,
    Button,
}

/// Event fired when a region is picked via RPC, a region button or a keyboard shortcut.
#[derive(Event, Debug, Clone, Copy)]
pub struct RegionSelectionEvent {
    pub region: RegionChoice,
    pub source: RegionSelectionSource,
}

pub fn handle_region_selection_events(
    mut events: EventReader<RegionSelectionEvent>,
    mut filter: ResMut<RegionFilter>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for event in events.read() {
        if !filter.set_region(event.region) {
            continue;
        }

        info!("Region filter set to {} via {:?}", event.region, event.source);
        rpc_interface.send_notification(
            "region_changed",
            serde_json::json!({ "region": event.region }),
        );
    }
}

/// Keys 1 to 4 pick ALL, JP, US, EU (native builds only).
#[cfg(not(target_arch = "wasm32"))]
pub fn handle_region_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut region_events: EventWriter<RegionSelectionEvent>,
) {
    const KEYS: [KeyCode; 4] = [
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
    ];

    for (key, region) in KEYS.into_iter().zip(RegionChoice::OPTIONS) {
        if keyboard.just_pressed(key) {
            region_events.write(RegionSelectionEvent {
                region,
                source: RegionSelectionSource::Keyboard,
            });
        }
    }
}

/// Placeholder for WASM builds where the region is driven over RPC.
#[cfg(target_arch = "wasm32")]
pub fn handle_region_keyboard_shortcuts() {}
