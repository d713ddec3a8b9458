use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::scene::cartridge::{CartridgeBody, CatalogEntity};
use crate::interaction::filter::{
    RegionChoice, RegionFilter, RegionSelectionEvent, RegionSelectionSource,
};
use crate::interaction::hover::{HoverSet, PointerCapture};
use crate::interaction::selection::Selection;
use crate::market::{Catalog, ItemDetails, ItemId, RankedDeal, top_deals};
use bevy::prelude::*;
use std::collections::HashMap;

const PANEL_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.7);
const TAG_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.9);
const ACCENT: Color = Color::srgb(0.0, 1.0, 1.0);
const TEXT: Color = Color::srgb(0.9, 0.9, 0.9);

const BUTTON_IDLE: Color = Color::srgb(0.22, 0.24, 0.28);
const BUTTON_HOVERED: Color = Color::srgb(0.26, 0.28, 0.32);
const BUTTON_PRESSED: Color = Color::srgb(0.18, 0.20, 0.24);
const BUTTON_ACTIVE: Color = Color::srgb(0.0, 0.55, 0.6);

/// Tags sit this far above the cartridge centre, in world units.
const TAG_LIFT: f32 = 1.2;
/// Rough half extents of a tag in pixels, used to centre it on its anchor.
const TAG_HALF_SIZE: Vec2 = Vec2::new(70.0, 38.0);

#[derive(Component)]
pub struct FpsText;

#[derive(Component)]
pub struct LeaderboardText;

#[derive(Component)]
pub struct DetailsPanel;

#[derive(Component)]
pub struct DetailsText;

/// One clickable entry of the region filter row.
#[derive(Component, Debug, Clone, Copy)]
pub struct RegionButton(pub RegionChoice);

/// Floating price tag for one cartridge. Hidden unless the item is hovered or selected.
#[derive(Component, Debug, Clone, Copy)]
pub struct PriceTag(pub ItemId);

/// One line per deal, undervalue rounded to whole percent.
pub fn leaderboard_lines(deals: &[RankedDeal]) -> String {
    deals
        .iter()
        .map(|deal| {
            format!(
                "#{} {} ({})  {:.0}%  save ${}",
                deal.rank,
                deal.name,
                deal.region,
                deal.metrics.undervalue_percent,
                deal.metrics.savings,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn region_button_colour(choice: RegionChoice, active: RegionChoice) -> Color {
    if choice == active {
        BUTTON_ACTIVE
    } else {
        BUTTON_IDLE
    }
}

fn text_bundle(value: impl Into<String>, size: f32, colour: Color) -> (Text, TextFont, TextColor) {
    (
        Text::new(value),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(colour),
    )
}

fn panel_node() -> Node {
    Node {
        position_type: PositionType::Absolute,
        display: Display::Flex,
        flex_direction: FlexDirection::Column,
        row_gap: Val::Px(6.0),
        padding: UiRect::all(Val::Px(12.0)),
        ..default()
    }
}

pub fn create_native_overlays(
    mut commands: Commands,
    catalog: Res<Catalog>,
    config: Res<SceneConfig>,
    filter: Res<RegionFilter>,
) {
    let deals = top_deals(catalog.items(), config.leaderboard_size);

    commands
        .spawn((
            Name::new("Overlays"),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                text_bundle("POKEMON PRICE SCANNER", 28.0, ACCENT),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(16.0),
                    left: Val::Px(16.0),
                    ..default()
                },
            ));

            parent
                .spawn((
                    Name::new("Leaderboard"),
                    BackgroundColor(PANEL_BACKGROUND),
                    Node {
                        top: Val::Px(64.0),
                        left: Val::Px(16.0),
                        ..panel_node()
                    },
                ))
                .with_children(|panel| {
                    panel.spawn(text_bundle("TOP DEALS", 18.0, ACCENT));
                    panel.spawn((text_bundle(leaderboard_lines(&deals), 14.0, TEXT), LeaderboardText));
                });

            parent
                .spawn((
                    Name::new("Details"),
                    DetailsPanel,
                    BackgroundColor(PANEL_BACKGROUND),
                    Node {
                        top: Val::Px(16.0),
                        right: Val::Px(16.0),
                        display: Display::None,
                        ..panel_node()
                    },
                ))
                .with_children(|panel| {
                    panel.spawn((text_bundle("", 15.0, TEXT), DetailsText));
                });

            parent
                .spawn((
                    Name::new("RegionFilter"),
                    Node {
                        position_type: PositionType::Absolute,
                        bottom: Val::Px(40.0),
                        left: Val::Px(16.0),
                        column_gap: Val::Px(6.0),
                        align_items: AlignItems::Center,
                        ..default()
                    },
                ))
                .with_children(|row| {
                    row.spawn(text_bundle("Region", 14.0, TEXT));
                    for choice in RegionChoice::OPTIONS {
                        row.spawn((
                            Button,
                            RegionButton(choice),
                            Node {
                                padding: UiRect::axes(Val::Px(10.0), Val::Px(4.0)),
                                ..default()
                            },
                            BackgroundColor(region_button_colour(choice, filter.active())),
                        ))
                        .with_children(|button| {
                            button.spawn(text_bundle(choice.code(), 14.0, TEXT));
                        });
                    }
                });

            for item in catalog.items() {
                parent.spawn((
                    Name::new(format!("PriceTag {}", item.id)),
                    PriceTag(item.id),
                    text_bundle(ItemDetails::of(item).tag_text(), 12.0, TEXT),
                    BackgroundColor(TAG_BACKGROUND),
                    Node {
                        position_type: PositionType::Absolute,
                        display: Display::None,
                        padding: UiRect::axes(Val::Px(10.0), Val::Px(6.0)),
                        ..default()
                    },
                ));
            }

            parent.spawn((
                text_bundle(
                    "Drag to rotate | Scroll to zoom | Click a cartridge for details | Click a region or press 1-4",
                    13.0,
                    TEXT,
                ),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    left: Val::Px(16.0),
                    ..default()
                },
            ));

            parent.spawn((
                text_bundle("FPS: ", 16.0, Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

/// Show the selected cartridge's details, or hide the panel when nothing is selected.
pub fn update_details_panel(
    selection: Res<Selection>,
    catalog: Res<Catalog>,
    mut panels: Query<&mut Node, With<DetailsPanel>>,
    mut texts: Query<&mut Text, With<DetailsText>>,
) {
    if !selection.is_changed() {
        return;
    }

    let details = selection
        .current()
        .and_then(|id| catalog.get(id))
        .map(ItemDetails::of);

    for mut node in &mut panels {
        node.display = if details.is_some() {
            Display::Flex
        } else {
            Display::None
        };
    }
    if let Some(details) = details {
        for mut text in &mut texts {
            text.0 = details.panel_text();
        }
    }
}

/// Region buttons pick the filter. A press is claimed so the same gesture never orbits the camera.
pub fn region_button_interaction(
    mut q: Query<(&Interaction, &RegionButton, &mut BackgroundColor), (Changed<Interaction>, With<Button>)>,
    filter: Res<RegionFilter>,
    mut capture: ResMut<PointerCapture>,
    mut region_events: EventWriter<RegionSelectionEvent>,
) {
    for (interaction, button, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                capture.claimed = true;
                region_events.write(RegionSelectionEvent {
                    region: button.0,
                    source: RegionSelectionSource::Button,
                });
                *bg = BackgroundColor(BUTTON_PRESSED);
            }
            Interaction::Hovered => *bg = BackgroundColor(BUTTON_HOVERED),
            Interaction::None => *bg = BackgroundColor(region_button_colour(button.0, filter.active())),
        }
    }
}

/// Repaint resting buttons once the active region moves.
pub fn refresh_region_buttons(
    filter: Res<RegionFilter>,
    mut q: Query<(&Interaction, &RegionButton, &mut BackgroundColor)>,
) {
    if !filter.is_changed() {
        return;
    }
    for (interaction, button, mut bg) in &mut q {
        if *interaction == Interaction::None {
            *bg = BackgroundColor(region_button_colour(button.0, filter.active()));
        }
    }
}

/// Show a tag over every hovered or selected cartridge and pin it above the body on screen.
pub fn update_price_tags(
    selection: Res<Selection>,
    hover: Res<HoverSet>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    bodies: Query<(&CatalogEntity, &GlobalTransform), With<CartridgeBody>>,
    mut tags: Query<(&PriceTag, &mut Node)>,
) {
    let camera = cameras.single().ok();
    let anchors: HashMap<ItemId, Vec3> = bodies
        .iter()
        .map(|(entity, transform)| (entity.0, transform.translation() + Vec3::Y * TAG_LIFT))
        .collect();

    for (tag, mut node) in &mut tags {
        let engaged = hover.is_hovered(tag.0) || selection.is_selected(tag.0);
        if !engaged {
            if node.display != Display::None {
                node.display = Display::None;
            }
            continue;
        }

        node.display = Display::Flex;
        let screen = camera.zip(anchors.get(&tag.0)).and_then(|((camera, view), anchor)| {
            camera.world_to_viewport(view, *anchor).ok()
        });
        if let Some(screen) = screen {
            node.left = Val::Px(screen.x - TAG_HALF_SIZE.x);
            node.top = Val::Px(screen.y - TAG_HALF_SIZE.y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaderboard_rounds_to_whole_percent() {
        let deals = top_deals(Catalog::builtin().items(), 2);
        let lines = leaderboard_lines(&deals);
        assert_eq!(
            lines,
            "#1 Pokemon Gold (JP)  59%  save $50\n#2 Pokemon Sapphire (JP)  52%  save $27"
        );
    }

    #[test]
    fn active_region_button_is_highlighted() {
        assert_eq!(region_button_colour(RegionChoice::Us, RegionChoice::Us), BUTTON_ACTIVE);
        assert_eq!(region_button_colour(RegionChoice::Jp, RegionChoice::Us), BUTTON_IDLE);
    }

    #[test]
    fn pressing_a_region_button_picks_the_region_and_claims_the_pointer() {
        let mut app = App::new();
        app.init_resource::<RegionFilter>()
            .init_resource::<PointerCapture>()
            .add_event::<RegionSelectionEvent>()
            .add_systems(Update, region_button_interaction);
        let button = app
            .world_mut()
            .spawn((Button, RegionButton(RegionChoice::Eu), Interaction::Pressed, BackgroundColor(BUTTON_IDLE)))
            .id();
        app.update();

        let picked: Vec<RegionSelectionEvent> = app
            .world_mut()
            .resource_mut::<Events<RegionSelectionEvent>>()
            .drain()
            .collect();
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].region, RegionChoice::Eu);
        assert_eq!(picked[0].source, RegionSelectionSource::Button);
        assert!(app.world().resource::<PointerCapture>().claimed);
        assert_eq!(app.world().get::<BackgroundColor>(button).unwrap().0, BUTTON_PRESSED);
    }

    #[test]
    fn resting_buttons_repaint_when_the_region_changes() {
        let mut app = App::new();
        app.init_resource::<RegionFilter>()
            .add_systems(Update, refresh_region_buttons);
        let jp = app
            .world_mut()
            .spawn((RegionButton(RegionChoice::Jp), Interaction::None, BackgroundColor(BUTTON_IDLE)))
            .id();
        let all = app
            .world_mut()
            .spawn((RegionButton(RegionChoice::All), Interaction::None, BackgroundColor(BUTTON_ACTIVE)))
            .id();

        app.world_mut().resource_mut::<RegionFilter>().set_region(RegionChoice::Jp);
        app.update();

        assert_eq!(app.world().get::<BackgroundColor>(jp).unwrap().0, BUTTON_ACTIVE);
        assert_eq!(app.world().get::<BackgroundColor>(all).unwrap().0, BUTTON_IDLE);
    }

    #[test]
    fn price_tags_follow_hover_and_selection() {
        let mut app = App::new();
        app.init_resource::<Selection>()
            .init_resource::<HoverSet>()
            .add_systems(Update, update_price_tags);
        let hidden = || Node { display: Display::None, ..default() };
        let hovered = app.world_mut().spawn((PriceTag(ItemId(2)), hidden())).id();
        let selected = app.world_mut().spawn((PriceTag(ItemId(5)), hidden())).id();
        let idle = app.world_mut().spawn((PriceTag(ItemId(9)), hidden())).id();

        app.world_mut().resource_mut::<HoverSet>().enter(ItemId(2));
        app.world_mut().resource_mut::<Selection>().select(ItemId(5));
        app.update();

        let display = |app: &App, tag: Entity| app.world().get::<Node>(tag).unwrap().display;
        assert_eq!(display(&app, hovered), Display::Flex);
        assert_eq!(display(&app, selected), Display::Flex);
        assert_eq!(display(&app, idle), Display::None);

        app.world_mut().resource_mut::<HoverSet>().exit(ItemId(2));
        app.update();
        assert_eq!(display(&app, hovered), Display::None);
        assert_eq!(display(&app, selected), Display::Flex);
    }

    #[test]
    fn details_panel_follows_selection() {
        let mut app = App::new();
        app.insert_resource(Catalog::builtin())
            .init_resource::<Selection>()
            .add_systems(Update, update_details_panel);
        let panel = app
            .world_mut()
            .spawn((DetailsPanel, Node { display: Display::None, ..default() }))
            .id();
        let text = app.world_mut().spawn((DetailsText, Text::new(""))).id();

        app.world_mut().resource_mut::<Selection>().select(ItemId(6));
        app.update();
        assert_eq!(app.world().get::<Node>(panel).unwrap().display, Display::Flex);
        assert!(app.world().get::<Text>(text).unwrap().0.starts_with("Pokemon Crystal"));

        app.world_mut().resource_mut::<Selection>().select(ItemId(6));
        app.update();
        assert_eq!(app.world().get::<Node>(panel).unwrap().display, Display::None);
    }
}
