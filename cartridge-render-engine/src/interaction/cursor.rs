use bevy::prelude::*;
use bevy::window::{PrimaryWindow, SystemCursorIcon};
use bevy::winit::cursor::CursorIcon;

/// Cursor shape requested from the host window.
#[derive(Event, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorRequest {
    #[default]
    Default,
    Pointer,
}

/// Last cursor shape applied to the window.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HostCursor(pub CursorRequest);

impl From<CursorRequest> for SystemCursorIcon {
    fn from(request: CursorRequest) -> Self {
        match request {
            CursorRequest::Default => SystemCursorIcon::Default,
            CursorRequest::Pointer => SystemCursorIcon::Pointer,
        }
    }
}

/// Apply the last cursor request of the frame. Repeating the current shape is a no-op.
pub fn apply_cursor_requests(
    mut requests: EventReader<CursorRequest>,
    mut host: ResMut<HostCursor>,
    windows: Query<Entity, With<PrimaryWindow>>,
    mut commands: Commands,
) {
    let Some(&request) = requests.read().last() else {
        return;
    };
    if host.0 == request {
        return;
    }
    host.0 = request;

    for window in &windows {
        commands
            .entity(window)
            .insert(CursorIcon::from(SystemCursorIcon::from(request)));
    }
}
