use super::cursor::CursorRequest;
use super::selection::{Selection, SelectionChanged};
use crate::engine::scene::cartridge::{CartridgeBody, CatalogEntity};
use crate::market::ItemId;
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;
use std::collections::HashSet;

/// Items the pointer is currently over. Membership is the hover flag.
#[derive(Resource, Debug, Default, Clone)]
pub struct HoverSet {
    hovered: HashSet<ItemId>,
}

impl HoverSet {
    /// Returns true if the item was not already hovered.
    pub fn enter(&mut self, id: ItemId) -> bool {
        self.hovered.insert(id)
    }

    /// Returns true if the item was hovered.
    pub fn exit(&mut self, id: ItemId) -> bool {
        self.hovered.remove(&id)
    }

    pub fn is_hovered(&self, id: ItemId) -> bool {
        self.hovered.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.hovered.is_empty()
    }
}

/// Set while a press that started on a cartridge is held, so the orbit camera
/// does not treat the same gesture as a drag.
#[derive(Resource, Debug, Default)]
pub struct PointerCapture {
    pub claimed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Enter,
    Exit,
    Click,
}

/// Pointer hit on a cartridge, forwarded from the picking observers.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartridgePointerEvent {
    pub id: ItemId,
    pub action: PointerAction,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverChanged {
    pub id: ItemId,
    pub hovered: bool,
}

/// Hook picking observers onto freshly spawned cartridge bodies.
pub fn attach_pointer_observers(
    mut commands: Commands,
    bodies: Query<Entity, Added<CartridgeBody>>,
) {
    for entity in &bodies {
        commands
            .entity(entity)
            .observe(on_pointer_over)
            .observe(on_pointer_out)
            .observe(on_pointer_pressed)
            .observe(on_pointer_click);
    }
}

fn forward(
    target: Entity,
    action: PointerAction,
    items: &Query<&CatalogEntity>,
    events: &mut EventWriter<CartridgePointerEvent>,
) {
    if let Ok(item) = items.get(target) {
        events.write(CartridgePointerEvent { id: item.0, action });
    }
}

fn on_pointer_over(
    mut trigger: Trigger<Pointer<Over>>,
    items: Query<&CatalogEntity>,
    mut events: EventWriter<CartridgePointerEvent>,
) {
    trigger.propagate(false);
    forward(trigger.target(), PointerAction::Enter, &items, &mut events);
}

fn on_pointer_out(
    mut trigger: Trigger<Pointer<Out>>,
    items: Query<&CatalogEntity>,
    mut events: EventWriter<CartridgePointerEvent>,
) {
    trigger.propagate(false);
    forward(trigger.target(), PointerAction::Exit, &items, &mut events);
}

fn on_pointer_pressed(mut trigger: Trigger<Pointer<Pressed>>, mut capture: ResMut<PointerCapture>) {
    trigger.propagate(false);
    if trigger.button == PointerButton::Primary {
        capture.claimed = true;
    }
}

fn on_pointer_click(
    mut trigger: Trigger<Pointer<Click>>,
    items: Query<&CatalogEntity>,
    mut events: EventWriter<CartridgePointerEvent>,
) {
    trigger.propagate(false);
    if trigger.button == PointerButton::Primary {
        forward(trigger.target(), PointerAction::Click, &items, &mut events);
    }
}

/// Fold pointer hits into hover flags and selection, and request cursor changes.
pub fn apply_pointer_events(
    mut events: EventReader<CartridgePointerEvent>,
    mut hover: ResMut<HoverSet>,
    mut selection: ResMut<Selection>,
    mut cursor: EventWriter<CursorRequest>,
    mut hover_changed: EventWriter<HoverChanged>,
    mut selection_changed: EventWriter<SelectionChanged>,
) {
    for event in events.read() {
        match event.action {
            PointerAction::Enter => {
                cursor.write(CursorRequest::Pointer);
                if hover.enter(event.id) {
                    debug!("Hover enter {}", event.id);
                    hover_changed.write(HoverChanged { id: event.id, hovered: true });
                }
            }
            PointerAction::Exit => {
                cursor.write(CursorRequest::Default);
                if hover.exit(event.id) {
                    debug!("Hover exit {}", event.id);
                    hover_changed.write(HoverChanged { id: event.id, hovered: false });
                }
            }
            PointerAction::Click => {
                let change = selection.select(event.id);
                match change.current {
                    Some(id) => info!("Selected {id}"),
                    None => info!("Cleared selection"),
                }
                selection_changed.write(change);
            }
        }
    }
}

/// Drop the capture once the primary button is up.
pub fn release_pointer_capture(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut capture: ResMut<PointerCapture>,
) {
    if capture.claimed && !mouse_button.pressed(MouseButton::Left) {
        capture.claimed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut app = App::new();
        app.init_resource::<HoverSet>()
            .init_resource::<Selection>()
            .add_event::<CartridgePointerEvent>()
            .add_event::<CursorRequest>()
            .add_event::<HoverChanged>()
            .add_event::<SelectionChanged>()
            .add_systems(Update, apply_pointer_events);
        app
    }

    fn send(app: &mut App, id: u32, action: PointerAction) {
        app.world_mut().send_event(CartridgePointerEvent { id: ItemId(id), action });
    }

    fn drain<E: Event + Copy>(app: &mut App) -> Vec<E> {
        app.world_mut().resource_mut::<Events<E>>().drain().collect()
    }

    #[test]
    fn enter_and_exit_toggle_hover_and_cursor() {
        let mut app = app();
        send(&mut app, 4, PointerAction::Enter);
        app.update();

        assert!(app.world().resource::<HoverSet>().is_hovered(ItemId(4)));
        assert_eq!(drain::<CursorRequest>(&mut app), vec![CursorRequest::Pointer]);
        assert_eq!(
            drain::<HoverChanged>(&mut app),
            vec![HoverChanged { id: ItemId(4), hovered: true }]
        );

        send(&mut app, 4, PointerAction::Exit);
        app.update();

        assert!(app.world().resource::<HoverSet>().is_empty());
        assert_eq!(drain::<CursorRequest>(&mut app), vec![CursorRequest::Default]);
    }

    #[test]
    fn repeated_enter_reports_hover_once() {
        let mut app = app();
        send(&mut app, 2, PointerAction::Enter);
        send(&mut app, 2, PointerAction::Enter);
        app.update();

        assert_eq!(drain::<HoverChanged>(&mut app).len(), 1);
        assert_eq!(drain::<CursorRequest>(&mut app).len(), 2);
    }

    #[test]
    fn clicks_toggle_the_selection() {
        let mut app = app();
        send(&mut app, 1, PointerAction::Click);
        app.update();
        assert_eq!(app.world().resource::<Selection>().current(), Some(ItemId(1)));

        send(&mut app, 2, PointerAction::Click);
        app.update();
        assert_eq!(app.world().resource::<Selection>().current(), Some(ItemId(2)));

        send(&mut app, 2, PointerAction::Click);
        app.update();
        assert_eq!(app.world().resource::<Selection>().current(), None);

        let changes = drain::<SelectionChanged>(&mut app);
        assert_eq!(changes.last().map(|c| c.previous), Some(Some(ItemId(2))));
    }

    #[test]
    fn hovering_leaves_selection_untouched() {
        let mut app = app();
        send(&mut app, 1, PointerAction::Click);
        send(&mut app, 3, PointerAction::Enter);
        app.update();

        let world = app.world();
        assert!(world.resource::<Selection>().is_selected(ItemId(1)));
        assert!(!world.resource::<Selection>().is_selected(ItemId(3)));
        assert!(world.resource::<HoverSet>().is_hovered(ItemId(3)));
    }

    #[test]
    fn capture_is_released_with_the_button() {
        let mut app = App::new();
        app.init_resource::<ButtonInput<MouseButton>>()
            .insert_resource(PointerCapture { claimed: true })
            .add_systems(Update, release_pointer_capture);

        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();
        assert!(app.world().resource::<PointerCapture>().claimed);

        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .release(MouseButton::Left);
        app.update();
        assert!(!app.world().resource::<PointerCapture>().claimed);
    }
}
