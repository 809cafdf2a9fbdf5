//! Integration tests for GestureController
//!
//! These tests verify the full gesture workflow including:
//! - Commit and revert around the threshold
//! - Taps, controllers and closers
//! - Shared buddies and the opened-by ledger
//! - Mouse drags with and without pointer drag support
//! - Settling through transition end and the fallback deadline

use bip_gesture::{
    BipConfig, BipEventKind, DragDirection, ElementDecl, ElementId, GestureController, GestureResult,
    Host, IgnoreReason, Matrix2d, MemoryHost, Phase, Point, PointerSource, StyleRule, TransitionLists,
    ZoneHit,
};

const TOUCH: PointerSource = PointerSource::Touch;
const MOUSE: PointerSource = PointerSource::Mouse;

fn panel_rules(closed: Matrix2d) -> Vec<StyleRule> {
    vec![
        StyleRule::base()
            .transform(closed)
            .css("opacity", "0")
            .transition(TransitionLists::from_entries(&[
                ("transform", 0.0, 300.0),
                ("opacity", 0.0, 300.0),
            ])),
        StyleRule::when("is-open")
            .transform(Matrix2d::IDENTITY)
            .css("opacity", "1"),
    ]
}

fn overlay_rules() -> Vec<StyleRule> {
    vec![
        StyleRule::base()
            .css("opacity", "0")
            .transition(TransitionLists::from_entries(&[("opacity", 0.0, 300.0)])),
        StyleRule::when("is-open").css("opacity", "1"),
    ]
}

/// Two 300px drawers sharing an overlay, a menu button and an overlay closer
fn setup_with(config: BipConfig) -> (GestureController, MemoryHost) {
    let mut host = MemoryHost::new();
    host.insert("menu", panel_rules(Matrix2d::translate(-300.0, 0.0)));
    host.insert("cart", panel_rules(Matrix2d::translate(300.0, 0.0)));
    host.insert("overlay", overlay_rules());
    host.insert("menu-button", vec![StyleRule::base()]);
    host.insert("overlay-closer", vec![StyleRule::base()]);

    let decls = vec![
        ElementDecl::panel("menu").with_buddies(["overlay"]),
        ElementDecl::panel("cart").with_buddies(["overlay"]),
        ElementDecl::follower("overlay"),
        ElementDecl::controller("menu-button", "menu"),
        ElementDecl::closer("overlay-closer", ["menu", "cart"]),
    ];
    let controller = GestureController::new(config, decls, &mut host).unwrap();
    (controller, host)
}

fn setup() -> (GestureController, MemoryHost) {
    setup_with(BipConfig::default())
}

fn id(s: &str) -> ElementId {
    ElementId::from(s)
}

/// Drag along x from 10 to 10 + dx in one move
fn drag_x(
    controller: &mut GestureController,
    host: &mut MemoryHost,
    zone: &str,
    dx: f64,
    source: PointerSource,
    now_ms: f64,
) -> GestureResult {
    let start = Point::new(10.0, 200.0);
    let end = Point::new(10.0 + dx, 200.0);
    controller.pointer_down(host, Some(ZoneHit::new(zone)), start, source);
    controller.pointer_move(host, end, source);
    controller.pointer_up(host, end, source, now_ms)
}

fn finish_transitions(controller: &mut GestureController, host: &mut MemoryHost, ids: &[&str]) {
    for element in ids {
        controller.transition_end(host, &id(element));
    }
}

// =============================================================================
// Threshold Tests
// =============================================================================

#[test]
fn test_drag_past_threshold_commits() {
    let (mut controller, mut host) = setup();

    let result = drag_x(&mut controller, &mut host, "menu", 61.0, TOUCH, 0.0);
    assert_eq!(result, GestureResult::Settled { committed: true });

    assert!(host.has_class(&id("menu"), "is-open"));
    assert!(host.has_class(&id("overlay"), "is-open"));
    assert!(host.has_class(&id("menu"), "is-transitioning"));
    assert!(!host.has_class(&id("menu"), "is-touchmove"));
    assert!(!host.scroll_locked());
    assert_eq!(host.expanded(&id("menu-button")), Some(true));
    assert_eq!(controller.phase(), Phase::Settling);

    finish_transitions(&mut controller, &mut host, &["menu", "overlay"]);
    assert!(!host.has_class(&id("menu"), "is-transitioning"));
    assert!(!host.has_inline_style(&id("menu")));
    assert!(!host.has_inline_style(&id("overlay")));
    assert_eq!(controller.phase(), Phase::Idle);
}

#[test]
fn test_drag_below_threshold_reverts() {
    let (mut controller, mut host) = setup();

    let result = drag_x(&mut controller, &mut host, "menu", 59.0, TOUCH, 0.0);
    assert_eq!(result, GestureResult::Settled { committed: false });

    assert!(!host.has_class(&id("menu"), "is-open"));
    assert!(!host.has_class(&id("overlay"), "is-open"));
    assert_eq!(host.expanded(&id("menu-button")), Some(false));

    finish_transitions(&mut controller, &mut host, &["menu", "overlay"]);
    assert!(!host.has_inline_style(&id("menu")));
    assert!(!host.has_inline_style(&id("overlay")));
    assert!(!host.has_class(&id("menu"), "is-transitioning"));
}

#[test]
fn test_drag_exactly_at_threshold_commits() {
    let (mut controller, mut host) = setup();
    let result = drag_x(&mut controller, &mut host, "menu", 60.0, TOUCH, 0.0);
    assert!(result.is_committed());
}

#[test]
fn test_custom_threshold() {
    let config = BipConfig {
        threshold_fraction: 0.5,
        ..Default::default()
    };
    let (mut controller, mut host) = setup_with(config);

    let result = drag_x(&mut controller, &mut host, "menu", 149.0, TOUCH, 0.0);
    assert!(!result.is_committed());
}

#[test]
fn test_backward_release_reverts() {
    let (mut controller, mut host) = setup();

    controller.pointer_down(&mut host, Some(ZoneHit::new("menu")), Point::new(10.0, 200.0), TOUCH);
    controller.pointer_move(&mut host, Point::new(110.0, 200.0), TOUCH);
    controller.pointer_move(&mut host, Point::new(80.0, 200.0), TOUCH);
    assert_eq!(controller.session().unwrap().direction, DragDirection::Backward);

    let result = controller.pointer_up(&mut host, Point::new(80.0, 200.0), TOUCH, 0.0);
    assert_eq!(result, GestureResult::Settled { committed: false });
    assert!(!host.has_class(&id("menu"), "is-open"));
}

#[test]
fn test_jitter_keeps_forward_direction() {
    let (mut controller, mut host) = setup();

    controller.pointer_down(&mut host, Some(ZoneHit::new("menu")), Point::new(10.0, 200.0), TOUCH);
    controller.pointer_move(&mut host, Point::new(110.0, 200.0), TOUCH);
    controller.pointer_move(&mut host, Point::new(104.0, 200.0), TOUCH);
    assert_eq!(controller.session().unwrap().direction, DragDirection::Forward);

    let result = controller.pointer_up(&mut host, Point::new(104.0, 200.0), TOUCH, 0.0);
    assert!(result.is_committed());
}

// =============================================================================
// Live Styling Tests
// =============================================================================

#[test]
fn test_drag_styles_target_and_buddy() {
    let (mut controller, mut host) = setup();

    let armed = controller.pointer_down(&mut host, Some(ZoneHit::new("menu")), Point::new(10.0, 200.0), TOUCH);
    assert_eq!(armed, GestureResult::Handled);
    assert_eq!(controller.phase(), Phase::Armed);
    assert!(host.scroll_locked());
    assert!(host.has_class(&id("menu"), "is-touchmove"));

    controller.pointer_move(&mut host, Point::new(160.0, 200.0), TOUCH);
    assert_eq!(controller.phase(), Phase::Dragging);
    assert_eq!(host.inline_style(&id("menu"), "transform"), Some("translate(-150px, 0px)"));
    assert_eq!(host.inline_style(&id("menu"), "opacity"), Some("0.5"));
    assert_eq!(host.inline_style(&id("menu"), "transition"), Some("none"));
    assert_eq!(host.inline_style(&id("overlay"), "opacity"), Some("0.5"));
}

#[test]
fn test_move_recomputes_from_absolute_position() {
    let (mut controller, mut host) = setup();

    controller.pointer_down(&mut host, Some(ZoneHit::new("menu")), Point::new(10.0, 200.0), TOUCH);
    controller.pointer_move(&mut host, Point::new(160.0, 200.0), TOUCH);
    controller.pointer_move(&mut host, Point::new(160.0, 200.0), TOUCH);
    controller.pointer_move(&mut host, Point::new(160.0, 200.0), TOUCH);

    assert_eq!(host.inline_style(&id("menu"), "transform"), Some("translate(-150px, 0px)"));
}

#[test]
fn test_move_out_of_range_keeps_last_styling() {
    let (mut controller, mut host) = setup();

    controller.pointer_down(&mut host, Some(ZoneHit::new("menu")), Point::new(10.0, 200.0), TOUCH);
    controller.pointer_move(&mut host, Point::new(160.0, 200.0), TOUCH);
    controller.pointer_move(&mut host, Point::new(500.0, 200.0), TOUCH);

    assert_eq!(host.inline_style(&id("menu"), "transform"), Some("translate(-150px, 0px)"));
    assert!((controller.session().unwrap().moved - 150.0).abs() < 0.001);
}

#[test]
fn test_closing_drag_moves_toward_closed_state() {
    let (mut controller, mut host) = setup();
    controller.toggle(&mut host, &id("menu"));

    controller.pointer_down(&mut host, Some(ZoneHit::new("menu")), Point::new(300.0, 200.0), TOUCH);
    controller.pointer_move(&mut host, Point::new(150.0, 200.0), TOUCH);
    assert_eq!(host.inline_style(&id("menu"), "transform"), Some("translate(-150px, 0px)"));

    let result = controller.pointer_up(&mut host, Point::new(150.0, 200.0), TOUCH, 0.0);
    assert!(result.is_committed());
    assert!(!host.has_class(&id("menu"), "is-open"));
    assert_eq!(host.expanded(&id("menu-button")), Some(false));
}

#[test]
fn test_vertical_sheet() {
    let mut host = MemoryHost::new();
    host.insert(
        "sheet",
        vec![
            StyleRule::base()
                .transform(Matrix2d::translate(0.0, 480.0))
                .transition(TransitionLists::from_entries(&[("transform", 0.0, 250.0)])),
            StyleRule::when("is-open").transform(Matrix2d::translate(0.0, 80.0)),
        ],
    );
    let mut controller =
        GestureController::new(BipConfig::default(), vec![ElementDecl::panel("sheet")], &mut host).unwrap();

    controller.pointer_down(&mut host, Some(ZoneHit::new("sheet")), Point::new(50.0, 600.0), TOUCH);
    controller.pointer_move(&mut host, Point::new(50.0, 400.0), TOUCH);
    assert_eq!(host.inline_style(&id("sheet"), "transform"), Some("translate(0px, 280px)"));

    let result = controller.pointer_up(&mut host, Point::new(50.0, 400.0), TOUCH, 0.0);
    assert!(result.is_committed());
}

// =============================================================================
// Tap Tests
// =============================================================================

#[test]
fn test_tap_on_controller_commits() {
    let (mut controller, mut host) = setup();

    let point = Point::new(20.0, 20.0);
    controller.pointer_down(&mut host, Some(ZoneHit::new("menu-button")), point, TOUCH);
    let result = controller.pointer_up(&mut host, point, TOUCH, 0.0);

    assert_eq!(result, GestureResult::Settled { committed: true });
    assert!(host.has_class(&id("menu"), "is-open"));
    assert_eq!(host.expanded(&id("menu-button")), Some(true));
}

#[test]
fn test_tap_settles_over_full_duration() {
    let (mut controller, mut host) = setup();

    let point = Point::new(20.0, 20.0);
    controller.pointer_down(&mut host, Some(ZoneHit::new("menu-button")), point, TOUCH);
    controller.pointer_up(&mut host, point, TOUCH, 0.0);

    assert_eq!(host.inline_style(&id("menu"), "transition-property"), Some("transform, opacity"));
    assert_eq!(host.inline_style(&id("menu"), "transition-duration"), Some("300ms, 300ms"));
}

#[test]
fn test_tap_on_open_panel_closes_it() {
    let (mut controller, mut host) = setup();
    controller.toggle(&mut host, &id("menu"));

    let point = Point::new(20.0, 20.0);
    controller.pointer_down(&mut host, Some(ZoneHit::new("menu-button")), point, TOUCH);
    let result = controller.pointer_up(&mut host, point, TOUCH, 0.0);

    assert!(result.is_committed());
    assert!(!host.has_class(&id("menu"), "is-open"));
    assert!(!host.has_class(&id("overlay"), "is-open"));
}

// =============================================================================
// Closer Tests
// =============================================================================

#[test]
fn test_closer_targets_single_open_panel() {
    let (mut controller, mut host) = setup();
    controller.toggle(&mut host, &id("cart"));

    let point = Point::new(5.0, 5.0);
    let armed = controller.pointer_down(&mut host, Some(ZoneHit::new("overlay-closer")), point, TOUCH);
    assert_eq!(armed, GestureResult::Handled);
    assert_eq!(controller.session().unwrap().target, id("cart"));

    controller.pointer_up(&mut host, point, TOUCH, 0.0);
    assert!(!host.has_class(&id("cart"), "is-open"));
}

#[test]
fn test_closer_with_several_open_panels_aborts() {
    let (mut controller, mut host) = setup();
    controller.toggle(&mut host, &id("menu"));
    controller.toggle(&mut host, &id("cart"));
    host.take_events();

    let result = controller.pointer_down(
        &mut host,
        Some(ZoneHit::new("overlay-closer")),
        Point::new(5.0, 5.0),
        TOUCH,
    );

    assert_eq!(result.ignore_reason(), Some(IgnoreReason::Unresolved));
    assert!(controller.session().is_none());
    assert!(!host.scroll_locked());
    assert!(!host.has_inline_style(&id("menu")));
    assert!(!host.has_inline_style(&id("cart")));
    assert!(host.events().is_empty());
}

#[test]
fn test_closer_with_nothing_open_aborts() {
    let (mut controller, mut host) = setup();
    let result = controller.pointer_down(
        &mut host,
        Some(ZoneHit::new("overlay-closer")),
        Point::new(5.0, 5.0),
        TOUCH,
    );
    assert_eq!(result.ignore_reason(), Some(IgnoreReason::Unresolved));
}

// =============================================================================
// Shared Buddy Tests
// =============================================================================

#[test]
fn test_shared_buddy_closes_with_last_opener() {
    let (mut controller, mut host) = setup();
    let overlay = id("overlay");

    controller.toggle(&mut host, &id("menu"));
    controller.toggle(&mut host, &id("cart"));
    assert_eq!(controller.opened_by().count(&overlay), 2);

    controller.toggle(&mut host, &id("menu"));
    assert!(!host.has_class(&id("menu"), "is-open"));
    assert!(host.has_class(&overlay, "is-open"));
    assert_eq!(controller.opened_by().count(&overlay), 1);

    controller.toggle(&mut host, &id("cart"));
    assert!(!host.has_class(&overlay, "is-open"));
    assert_eq!(controller.opened_by().count(&overlay), 0);
}

#[test]
fn test_shared_buddy_held_open_does_not_follow_drag() {
    let (mut controller, mut host) = setup();
    controller.toggle(&mut host, &id("menu"));
    controller.toggle(&mut host, &id("cart"));

    controller.pointer_down(&mut host, Some(ZoneHit::new("menu")), Point::new(300.0, 200.0), TOUCH);
    controller.pointer_move(&mut host, Point::new(200.0, 200.0), TOUCH);

    assert!(host.inline_style(&id("menu"), "transform").is_some());
    assert!(host.inline_style(&id("overlay"), "opacity").is_none());

    let result = controller.pointer_up(&mut host, Point::new(200.0, 200.0), TOUCH, 0.0);
    assert!(result.is_committed());
    assert!(host.has_class(&id("overlay"), "is-open"));
    assert!(!host.has_inline_style(&id("overlay")));
}

// =============================================================================
// Pointer Source Tests
// =============================================================================

#[test]
fn test_mouse_drag_follows_when_allowed() {
    let (mut controller, mut host) = setup();

    controller.pointer_down(&mut host, Some(ZoneHit::new("menu")), Point::new(10.0, 200.0), MOUSE);
    let moved = controller.pointer_move(&mut host, Point::new(160.0, 200.0), MOUSE);
    assert_eq!(moved, GestureResult::Handled);
    assert_eq!(host.inline_style(&id("menu"), "transform"), Some("translate(-150px, 0px)"));

    let result = controller.pointer_up(&mut host, Point::new(160.0, 200.0), MOUSE, 0.0);
    assert!(result.is_committed());
}

#[test]
fn test_mouse_drag_ignored_when_disabled() {
    let config = BipConfig {
        allow_pointer_drag: false,
        ..Default::default()
    };
    let (mut controller, mut host) = setup_with(config);

    controller.pointer_down(&mut host, Some(ZoneHit::new("menu")), Point::new(10.0, 200.0), MOUSE);
    let moved = controller.pointer_move(&mut host, Point::new(110.0, 200.0), MOUSE);
    assert_eq!(moved.ignore_reason(), Some(IgnoreReason::PointerDragDisabled));
    assert!(host.inline_style(&id("menu"), "transform").is_none());

    let result = controller.pointer_up(&mut host, Point::new(110.0, 200.0), MOUSE, 0.0);
    assert_eq!(result, GestureResult::Settled { committed: false });
    assert!(!host.has_class(&id("menu"), "is-open"));
}

#[test]
fn test_mouse_click_toggles_when_drag_disabled() {
    let config = BipConfig {
        allow_pointer_drag: false,
        ..Default::default()
    };
    let (mut controller, mut host) = setup_with(config);

    let point = Point::new(20.0, 20.0);
    controller.pointer_down(&mut host, Some(ZoneHit::new("menu-button")), point, MOUSE);
    let result = controller.pointer_up(&mut host, point, MOUSE, 0.0);
    assert!(result.is_committed());
}

#[test]
fn test_touch_drag_unaffected_when_mouse_drag_disabled() {
    let config = BipConfig {
        allow_pointer_drag: false,
        ..Default::default()
    };
    let (mut controller, mut host) = setup_with(config);

    let result = drag_x(&mut controller, &mut host, "menu", 100.0, TOUCH, 0.0);
    assert!(result.is_committed());
}

#[test]
fn test_source_mismatch_is_ignored() {
    let (mut controller, mut host) = setup();

    controller.pointer_down(&mut host, Some(ZoneHit::new("menu")), Point::new(10.0, 200.0), TOUCH);
    let moved = controller.pointer_move(&mut host, Point::new(110.0, 200.0), MOUSE);
    assert_eq!(moved.ignore_reason(), Some(IgnoreReason::SourceMismatch));

    let up = controller.pointer_up(&mut host, Point::new(110.0, 200.0), MOUSE, 0.0);
    assert_eq!(up.ignore_reason(), Some(IgnoreReason::SourceMismatch));
    assert!(controller.session().is_some());
}

// =============================================================================
// Guard Tests
// =============================================================================

#[test]
fn test_outside_and_ignore_zones() {
    let (mut controller, mut host) = setup();

    let outside = controller.pointer_down(&mut host, None, Point::new(0.0, 0.0), TOUCH);
    assert_eq!(outside.ignore_reason(), Some(IgnoreReason::OutsideZone));

    let ignored = controller.pointer_down(&mut host, Some(ZoneHit::ignored("menu")), Point::new(0.0, 0.0), TOUCH);
    assert_eq!(ignored.ignore_reason(), Some(IgnoreReason::IgnoreZone));

    assert!(!host.scroll_locked());
    assert!(!host.has_inline_style(&id("menu")));
}

#[test]
fn test_transitioning_target_is_guarded() {
    let (mut controller, mut host) = setup();
    drag_x(&mut controller, &mut host, "menu", 100.0, TOUCH, 0.0);

    let result = controller.pointer_down(&mut host, Some(ZoneHit::new("menu")), Point::new(10.0, 200.0), TOUCH);
    assert_eq!(result.ignore_reason(), Some(IgnoreReason::Transitioning));

    let toggled = controller.toggle(&mut host, &id("menu"));
    assert_eq!(toggled.ignore_reason(), Some(IgnoreReason::Transitioning));

    controller.transition_end(&mut host, &id("menu"));
    let result = controller.pointer_down(&mut host, Some(ZoneHit::new("menu")), Point::new(10.0, 200.0), TOUCH);
    assert_eq!(result, GestureResult::Handled);
}

#[test]
fn test_move_and_up_without_session() {
    let (mut controller, mut host) = setup();
    let moved = controller.pointer_move(&mut host, Point::new(1.0, 1.0), TOUCH);
    let up = controller.pointer_up(&mut host, Point::new(1.0, 1.0), TOUCH, 0.0);
    assert_eq!(moved.ignore_reason(), Some(IgnoreReason::NoSession));
    assert_eq!(up.ignore_reason(), Some(IgnoreReason::NoSession));
}

#[test]
fn test_target_without_travel_is_ignored() {
    let mut host = MemoryHost::new();
    host.insert(
        "fade",
        vec![
            StyleRule::base().css("opacity", "0"),
            StyleRule::when("is-open").css("opacity", "1"),
        ],
    );
    let mut controller =
        GestureController::new(BipConfig::default(), vec![ElementDecl::panel("fade")], &mut host).unwrap();

    let result = controller.pointer_down(&mut host, Some(ZoneHit::new("fade")), Point::new(0.0, 0.0), TOUCH);
    assert_eq!(result.ignore_reason(), Some(IgnoreReason::NoGeometry));
    assert!(!host.scroll_locked());

    assert_eq!(controller.toggle(&mut host, &id("fade")), GestureResult::Toggled);
    assert!(host.has_class(&id("fade"), "is-open"));
}

#[test]
fn test_new_pointer_down_aborts_stale_session() {
    let (mut controller, mut host) = setup();

    controller.pointer_down(&mut host, Some(ZoneHit::new("menu")), Point::new(10.0, 200.0), TOUCH);
    controller.pointer_move(&mut host, Point::new(110.0, 200.0), TOUCH);

    controller.pointer_down(&mut host, Some(ZoneHit::new("cart")), Point::new(400.0, 200.0), TOUCH);
    assert_eq!(controller.session().unwrap().target, id("cart"));
    assert!(!host.has_inline_style(&id("menu")));
    assert!(!host.has_class(&id("menu"), "is-touchmove"));
    assert!(host.scroll_locked());
}

// =============================================================================
// Settling Tests
// =============================================================================

#[test]
fn test_fallback_deadline_finishes_settle() {
    let (mut controller, mut host) = setup();
    drag_x(&mut controller, &mut host, "menu", 100.0, TOUCH, 1000.0);

    assert!(!controller.tick(&mut host, 1200.0));
    assert!(host.has_class(&id("menu"), "is-transitioning"));

    assert!(controller.tick(&mut host, 1300.0));
    assert!(!host.has_class(&id("menu"), "is-transitioning"));
    assert!(!host.has_inline_style(&id("menu")));
    assert!(!host.has_inline_style(&id("overlay")));
    assert_eq!(controller.phase(), Phase::Idle);

    // Transition end arriving late finds nothing left to do
    assert!(!controller.transition_end(&mut host, &id("menu")));
}

#[test]
fn test_transition_end_cancels_fallback() {
    let (mut controller, mut host) = setup();
    drag_x(&mut controller, &mut host, "menu", 100.0, TOUCH, 1000.0);

    assert!(controller.transition_end(&mut host, &id("menu")));
    assert!(controller.transition_end(&mut host, &id("overlay")));
    assert!(controller.settling().is_empty());
    assert!(!controller.tick(&mut host, 5000.0));
}

#[test]
fn test_fallback_clears_buddies_after_target_ended() {
    let (mut controller, mut host) = setup();
    drag_x(&mut controller, &mut host, "menu", 100.0, TOUCH, 0.0);

    controller.transition_end(&mut host, &id("menu"));
    assert!(host.has_inline_style(&id("overlay")));

    assert!(controller.tick(&mut host, 300.0));
    assert!(!host.has_inline_style(&id("overlay")));
}

#[test]
fn test_fallback_finishes_after_target_left_document() {
    let (mut controller, mut host) = setup();
    drag_x(&mut controller, &mut host, "menu", 100.0, TOUCH, 0.0);

    host.remove(&id("menu"));
    assert!(!host.contains(&id("menu")));

    assert!(controller.tick(&mut host, 300.0));
    assert!(controller.settling().is_empty());
    assert!(!host.has_inline_style(&id("overlay")));
    assert_eq!(controller.phase(), Phase::Idle);
}

#[test]
fn test_zero_duration_settles_immediately() {
    let mut host = MemoryHost::new();
    host.insert(
        "snap",
        vec![
            StyleRule::base().transform(Matrix2d::translate(-200.0, 0.0)),
            StyleRule::when("is-open").transform(Matrix2d::IDENTITY),
        ],
    );
    let mut controller =
        GestureController::new(BipConfig::default(), vec![ElementDecl::panel("snap")], &mut host).unwrap();

    let result = drag_x(&mut controller, &mut host, "snap", 100.0, TOUCH, 0.0);
    assert!(result.is_committed());
    assert_eq!(controller.phase(), Phase::Idle);
    assert!(!host.has_class(&id("snap"), "is-transitioning"));
    assert!(!host.has_inline_style(&id("snap")));
}

// =============================================================================
// Programmatic Control Tests
// =============================================================================

#[test]
fn test_toggle_undeclared_element() {
    let (mut controller, mut host) = setup();
    let result = controller.toggle(&mut host, &id("nowhere"));
    assert_eq!(result.ignore_reason(), Some(IgnoreReason::Unresolved));
}

#[test]
fn test_close_all() {
    let (mut controller, mut host) = setup();
    controller.toggle(&mut host, &id("menu"));
    controller.toggle(&mut host, &id("cart"));

    assert_eq!(controller.close_all(&mut host), 2);
    assert!(!host.has_class(&id("menu"), "is-open"));
    assert!(!host.has_class(&id("cart"), "is-open"));
    assert!(!host.has_class(&id("overlay"), "is-open"));
    assert_eq!(controller.close_all(&mut host), 0);
}

// =============================================================================
// Event Tests
// =============================================================================

#[test]
fn test_gesture_event_sequence() {
    let (mut controller, mut host) = setup();
    drag_x(&mut controller, &mut host, "menu", 100.0, TOUCH, 0.0);

    let kinds: Vec<_> = host.events().iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            BipEventKind::DragStart,
            BipEventKind::ToggleCommitted,
            BipEventKind::DragMoveSettled,
        ]
    );
    assert!(host.events().iter().all(|e| e.target == id("menu")));
}

#[test]
fn test_revert_emits_no_toggle() {
    let (mut controller, mut host) = setup();
    drag_x(&mut controller, &mut host, "menu", 10.0, TOUCH, 0.0);

    let kinds: Vec<_> = host.events().iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![BipEventKind::DragStart, BipEventKind::DragMoveSettled]);
}

#[test]
fn test_events_disabled() {
    let config = BipConfig {
        emit_events: false,
        ..Default::default()
    };
    let (mut controller, mut host) = setup_with(config);
    drag_x(&mut controller, &mut host, "menu", 100.0, TOUCH, 0.0);
    controller.toggle(&mut host, &id("cart"));

    assert!(host.events().is_empty());
}
