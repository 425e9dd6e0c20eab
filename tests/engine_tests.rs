use std::cell::RefCell;
use std::rc::Rc;

use snaptile::Config;
use snaptile::engine::TilingEngine;
use snaptile::errors::{ConfigError, EngineError};
use snaptile::geometry::{Margin, Point, Rect};
use snaptile::layout::{Layout, Tile};
use snaptile::window_menu::MenuAction;

fn engine() -> TilingEngine {
    TilingEngine::new(Config::default()).expect("default config must be valid")
}

fn work_area() -> Rect {
    Rect::new(0, 0, 1000, 1000)
}

#[test]
fn default_selection_uses_the_configured_default_layout() {
    let engine = engine();
    assert_eq!(engine.selected_layout(0, 0).name, "halves");
}

#[test]
fn selections_are_independent_per_monitor_and_workspace() {
    let mut engine = engine();

    engine
        .select_layout(0, 0, "quarters")
        .expect("quarters is a built-in");
    engine
        .select_layout(0, 1, "monocle")
        .expect("monocle is a built-in");

    assert_eq!(engine.selected_layout(0, 0).name, "quarters");
    assert_eq!(engine.selected_layout(0, 1).name, "monocle");
    assert_eq!(engine.selected_layout(1, 0).name, "halves");
}

#[test]
fn selecting_an_unknown_layout_fails() {
    let mut engine = engine();
    assert!(matches!(
        engine.select_layout(0, 0, "spiral"),
        Err(EngineError::Config(ConfigError::UnknownLayout(_)))
    ));
}

#[test]
fn cycling_wraps_around_the_layout_list() {
    let mut engine = engine();
    let layout_count = engine.layouts().len();

    for _ in 0..layout_count {
        engine.cycle_layout(0, 0);
    }

    assert_eq!(engine.selected_layout(0, 0).name, "halves");
}

#[test]
fn rejects_an_empty_layout_set() {
    let config = Config {
        layouts: Vec::new(),
        ..Config::default()
    };
    assert!(matches!(
        TilingEngine::new(config),
        Err(EngineError::Config(ConfigError::NoLayouts))
    ));
}

#[test]
fn rejects_an_invalid_layout_at_construction() {
    let config = Config {
        layouts: vec![Layout::new("bad", vec![Tile::new(0.0, 0.0, 1.5, 1.0)])],
        default_layout: "bad".to_string(),
        ..Config::default()
    };
    assert!(matches!(
        TilingEngine::new(config),
        Err(EngineError::Layout(_))
    ));
}

#[test]
fn disabled_gaps_produce_flush_previews() {
    let config = Config {
        gaps_enabled: false,
        inner_gaps: Margin::uniform(8),
        outer_gaps: Margin::uniform(4),
        ..Config::default()
    };
    let engine = TilingEngine::new(config).expect("valid config");

    let previews = engine.previews_for(0, 0, work_area(), 1.0);
    assert_eq!(previews[0].rect, Rect::new(0, 0, 500, 1000));
    assert_eq!(previews[1].rect, Rect::new(500, 0, 500, 1000));
}

#[test]
fn replacing_layouts_resets_dangling_selections() {
    let mut engine = engine();
    engine
        .select_layout(0, 0, "monocle")
        .expect("monocle is a built-in");

    engine
        .replace_layouts(vec![Layout::new(
            "single",
            vec![Tile::new(0.0, 0.0, 1.0, 1.0)],
        )])
        .expect("replacement layout is valid");

    assert_eq!(engine.selected_layout(0, 0).name, "single");
}

#[test]
fn replacing_with_an_invalid_set_is_refused() {
    let mut engine = engine();
    let result = engine.replace_layouts(vec![Layout::new(
        "bad",
        vec![
            Tile::new(0.0, 0.0, 0.8, 1.0),
            Tile::new(0.5, 0.0, 0.5, 1.0),
        ],
    )]);

    assert!(matches!(result, Err(EngineError::Layout(_))));
    // The previous set stays active.
    assert_eq!(engine.selected_layout(0, 0).name, "halves");
}

#[test]
fn window_menu_offers_all_three_entries_when_two_tiles_are_vacant() {
    let engine = engine();
    let menu = engine.window_menu_for(0, 0, work_area(), &[]);

    let actions: Vec<MenuAction> = menu.entries.iter().map(|entry| entry.action).collect();
    assert_eq!(
        actions,
        vec![
            MenuAction::BestTile,
            MenuAction::LeftmostTile,
            MenuAction::RightmostTile
        ]
    );
    assert_eq!(menu.layout_buttons.len(), engine.layouts().len());
}

#[test]
fn window_menu_offers_only_the_best_entry_for_a_single_vacancy() {
    let engine = engine();
    let occupied = vec![Rect::new(0, 0, 500, 1000)];

    let menu = engine.window_menu_for(0, 0, work_area(), &occupied);

    assert_eq!(menu.entries.len(), 1);
    assert_eq!(menu.entries[0].action, MenuAction::BestTile);
    assert_eq!(menu.entries[0].tile.x, 0.5);
}

#[test]
fn window_menu_has_no_entries_when_everything_is_occupied() {
    let engine = engine();
    let occupied = vec![Rect::new(0, 0, 1000, 1000)];

    let menu = engine.window_menu_for(0, 0, work_area(), &occupied);

    assert!(menu.entries.is_empty());
    // The layout picker is still offered.
    assert_eq!(menu.layout_buttons.len(), engine.layouts().len());
}

#[test]
fn tile_chosen_handlers_receive_the_resolved_pair() {
    let mut engine = engine();
    let chosen: Rc<RefCell<Vec<(f64, u64)>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&chosen);
    engine.on_tile_chosen(Box::new(move |tile, window| {
        sink.borrow_mut().push((tile.x, window));
    }));

    let tile = Tile::new(0.5, 0.0, 0.5, 1.0);
    engine.notify_tile_chosen(&tile, 42);

    assert_eq!(chosen.borrow().as_slice(), &[(0.5, 42)]);
}

#[test]
fn snap_assist_scales_with_the_monitor_factor() {
    let engine = engine();

    let strip = engine.snap_assist_for(0, 0, 1.0);
    assert_eq!(strip.container(), Rect::new(0, 0, 120, 68));

    let scaled = engine.snap_assist_for(0, 0, 2.0);
    assert_eq!(scaled.container(), Rect::new(0, 0, 240, 136));
}

#[test]
fn snap_assist_resolves_the_tile_below_the_cursor() {
    let engine = engine();
    let strip = engine.snap_assist_for(0, 0, 1.0);
    let origin = Point::new(900, 10);

    let hovered = strip
        .tile_below(Point::new(920, 40), origin)
        .expect("cursor over the left miniature");
    assert_eq!(hovered.tile.x, 0.0);

    let hovered_right = strip
        .tile_below(Point::new(1010, 40), origin)
        .expect("cursor over the right miniature");
    assert_eq!(hovered_right.tile.x, 0.5);

    assert!(strip.tile_below(Point::new(880, 40), origin).is_none());
}
