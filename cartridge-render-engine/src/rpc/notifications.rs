use super::web_rpc::WebRpcInterface;
use crate::interaction::hover::HoverChanged;
use crate::interaction::selection::SelectionChanged;
use crate::market::{Catalog, ItemDetails};
use bevy::prelude::*;

/// Push hover and selection changes to the frontend.
pub fn broadcast_interaction_changes(
    mut selection_events: EventReader<SelectionChanged>,
    mut hover_events: EventReader<HoverChanged>,
    catalog: Res<Catalog>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for change in selection_events.read() {
        let selected = change
            .current
            .and_then(|id| catalog.get(id))
            .map(ItemDetails::of);

        rpc_interface.send_notification(
            "selection_changed",
            serde_json::json!({
                "selected": selected,
                "previous": change.previous,
            }),
        );
    }

    for change in hover_events.read() {
        rpc_interface.send_notification(
            "hover_changed",
            serde_json::json!({
                "id": change.id,
                "hovered": change.hovered,
            }),
        );
    }
}
