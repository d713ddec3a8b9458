use crate::market::ItemId;
use bevy::prelude::*;

/// Exclusive single-slot selection.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    current: Option<ItemId>,
}

impl Selection {
    /// Toggle `id`: selecting the current item clears the slot, anything else replaces it.
    pub fn select(&mut self, id: ItemId) -> SelectionChanged {
        let previous = self.current;
        self.current = if previous == Some(id) { None } else { Some(id) };
        SelectionChanged {
            previous,
            current: self.current,
        }
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.current == Some(id)
    }

    pub fn current(&self) -> Option<ItemId> {
        self.current
    }
}

/// Fired whenever a click toggles the selection.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChanged {
    pub previous: Option<ItemId>,
    pub current: Option<ItemId>,
}
