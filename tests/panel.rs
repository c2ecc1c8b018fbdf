//! Floating panel gestures driven through the update loop

mod common;

use common::*;
use easel::messages::{Msg, PanelMsg};
use easel::model::{PanelMode, PanelOptions, Vec2};
use easel::update::update;
use easel::view::{hit_test_ui, HitTarget};

fn handles(model: &easel::AppModel) -> easel::model::PanelHandles {
    model.panels()[0].geometry().handles()
}

// ============================================================================
// Resize
// ============================================================================

#[test]
fn test_resize_grows_from_anchor() {
    let mut model = test_model_with_panel(scenario_panel());
    let resize = handles(&model).resize;

    pointer_down(&mut model, 200.0, 224.0, Some(resize));
    assert_eq!(
        model.panels()[0].geometry().resize_anchor(),
        Vec2::new(200.0, 0.0)
    );

    pointer_move(&mut model, 500.0, 300.0);
    let (size, position) = output_geometry(&model);
    assert_eq!(size, Vec2::new(600.0, 276.0));
    assert_eq!(position, Vec2::new(100.0, 24.0));
}

#[test]
fn test_resize_small_height_alone_does_not_collapse() {
    let mut model = test_model_with_panel(scenario_panel());
    let resize = handles(&model).resize;

    pointer_down(&mut model, 200.0, 224.0, Some(resize));
    pointer_move(&mut model, 150.0, 60.0);

    let (size, _) = output_geometry(&model);
    assert_eq!(size, Vec2::new(250.0, 36.0));
    assert!(!model.panels()[0].geometry().is_minimized());
}

#[test]
fn test_resize_below_both_thresholds_collapses() {
    let mut model = test_model_with_panel(scenario_panel());
    let resize = handles(&model).resize;

    pointer_down(&mut model, 400.0, 224.0, Some(resize));
    pointer_move(&mut model, 260.0, 70.0);

    let geometry = model.panels()[0].geometry();
    assert_eq!(geometry.size(), Vec2::new(160.0, 46.0));
    assert!(geometry.is_minimized());
    // Expanding afterwards returns to the configured start size
    assert_eq!(geometry.restore_size(), Vec2::new(300.0, 200.0));
}

#[test]
fn test_resize_respects_minimum_and_maximum() {
    let options = scenario_panel().with_max_size(Some(500.0), None);
    let mut model = test_model_with_panel(options);
    let resize = handles(&model).resize;

    pointer_down(&mut model, 400.0, 224.0, Some(resize));

    pointer_move(&mut model, -500.0, -500.0);
    assert_eq!(output_geometry(&model).0, Vec2::new(150.0, 24.0));

    pointer_move(&mut model, 5000.0, 5000.0);
    assert_eq!(output_geometry(&model).0, Vec2::new(500.0, 800.0));
}

// ============================================================================
// Drag
// ============================================================================

#[test]
fn test_drag_keeps_grab_offset() {
    let mut model = test_model_with_panel(scenario_panel());
    let drag = handles(&model).drag;

    pointer_down(&mut model, 150.0, 30.0, Some(drag));
    assert_eq!(model.panels()[0].geometry().mode(), PanelMode::Dragging);

    pointer_move(&mut model, 350.0, 130.0);
    assert_eq!(output_geometry(&model).1, Vec2::new(300.0, 124.0));
}

#[test]
fn test_drag_is_clamped_to_viewport() {
    let mut model = test_model_with_panel(scenario_panel());
    let drag = handles(&model).drag;

    pointer_down(&mut model, 150.0, 30.0, Some(drag));

    for (x, y) in [(-400.0, -400.0), (5000.0, 5000.0), (999.0, 1.0)] {
        pointer_move(&mut model, x, y);
        let (size, position) = output_geometry(&model);
        assert!(position.x >= 0.0 && position.x <= VIEWPORT.x - size.x);
        assert!(position.y >= 0.0 && position.y <= VIEWPORT.y - size.y);
    }

    pointer_move(&mut model, 5000.0, 5000.0);
    assert_eq!(output_geometry(&model).1, Vec2::new(700.0, 600.0));
}

#[test]
fn test_release_ends_gesture_and_moves_are_ignored() {
    let mut model = test_model_with_panel(scenario_panel());
    let drag = handles(&model).drag;

    pointer_down(&mut model, 150.0, 30.0, Some(drag));
    pointer_move(&mut model, 250.0, 30.0);
    pointer_up(&mut model);
    assert_eq!(model.panels()[0].geometry().mode(), PanelMode::Idle);

    let before = output_geometry(&model);
    pointer_move(&mut model, 600.0, 600.0);
    assert_eq!(output_geometry(&model), before);
}

#[test]
fn test_pointer_down_elsewhere_is_ignored() {
    let mut model = test_model_with_panel(scenario_panel());
    let before = output_geometry(&model);

    pointer_down(&mut model, 150.0, 30.0, None);
    pointer_move(&mut model, 600.0, 600.0);

    assert_eq!(model.panels()[0].geometry().mode(), PanelMode::Idle);
    assert_eq!(output_geometry(&model), before);
}

#[test]
fn test_each_panel_only_answers_its_own_handles() {
    let mut model = test_model_with_panel(scenario_panel());
    let second = model.mount_panel(PanelOptions::named("second").with_start_position(400.0, 400.0));
    let second_drag = model.panel(second).map(|p| p.geometry().handles().drag);

    pointer_down(&mut model, 410.0, 410.0, second_drag);
    pointer_move(&mut model, 510.0, 420.0);

    assert_eq!(output_geometry(&model).1, Vec2::new(100.0, 24.0));
    let moved = model.panel(second).map(|p| p.geometry().position());
    assert_eq!(moved, Some(Vec2::new(500.0, 410.0)));
}

// ============================================================================
// Viewport resize
// ============================================================================

#[test]
fn test_viewport_shrink_follows_right_edge() {
    let options = scenario_panel().with_start_position(700.0, 24.0);
    let mut model = test_model_with_panel(options);

    resize_viewport(&mut model, 800.0, 800.0);
    assert_eq!(output_geometry(&model).1, Vec2::new(500.0, 24.0));
}

#[test]
fn test_viewport_resize_only_clamps_vertical_position() {
    let options = scenario_panel().with_start_position(100.0, 500.0);
    let mut model = test_model_with_panel(options);

    resize_viewport(&mut model, 1000.0, 600.0);
    assert_eq!(output_geometry(&model).1, Vec2::new(100.0, 400.0));

    // Growing back does not restore the old y
    resize_viewport(&mut model, 1000.0, 800.0);
    assert_eq!(output_geometry(&model).1, Vec2::new(100.0, 400.0));
}

#[test]
fn test_same_viewport_twice_is_idempotent() {
    let options = scenario_panel().with_start_position(700.0, 24.0);
    let mut model = test_model_with_panel(options);

    resize_viewport(&mut model, 900.0, 700.0);
    let once = output_geometry(&model);
    resize_viewport(&mut model, 900.0, 700.0);
    assert_eq!(output_geometry(&model), once);
}

#[test]
fn test_empty_viewport_keeps_panel_in_place() {
    let mut model = test_model();
    let before = output_geometry(&model);

    // A minimized window reports 0×0
    resize_viewport(&mut model, 0.0, 0.0);
    assert_eq!(output_geometry(&model), before);
    assert_eq!(model.viewport(), VIEWPORT);

    resize_viewport(&mut model, 1000.0, 800.0);
    assert_eq!(output_geometry(&model), before);
}

// ============================================================================
// Minimize
// ============================================================================

#[test]
fn test_minimize_round_trip() {
    let mut model = test_model_with_panel(scenario_panel());
    let button = handles(&model).minimize;

    update(&mut model, Msg::Panel(PanelMsg::ToggleMinimize(button)));
    assert_eq!(output_geometry(&model).0, Vec2::new(150.0, 24.0));
    assert!(model.panels()[0].geometry().is_minimized());

    update(&mut model, Msg::Panel(PanelMsg::ToggleMinimize(button)));
    assert_eq!(output_geometry(&model).0, Vec2::new(300.0, 200.0));
    assert!(!model.panels()[0].geometry().is_minimized());
}

#[test]
fn test_expand_is_cut_at_viewport_edge() {
    let mut model = test_model_with_panel(scenario_panel());
    let button = handles(&model).minimize;
    let drag = handles(&model).drag;

    update(&mut model, Msg::Panel(PanelMsg::ToggleMinimize(button)));

    // Drag the 150×24 bar into the bottom-right corner
    pointer_down(&mut model, 100.0, 24.0, Some(drag));
    pointer_move(&mut model, 900.0, 700.0);
    pointer_up(&mut model);
    assert_eq!(output_geometry(&model).1, Vec2::new(850.0, 700.0));

    update(&mut model, Msg::Panel(PanelMsg::ToggleMinimize(button)));
    assert_eq!(output_geometry(&model).0, Vec2::new(150.0, 100.0));
}

#[test]
fn test_unknown_minimize_button_is_ignored() {
    let mut model = test_model_with_panel(scenario_panel());
    let drag = handles(&model).drag;

    let cmd = update(&mut model, Msg::Panel(PanelMsg::ToggleMinimize(drag)));
    assert!(cmd.is_none());
    assert!(!model.panels()[0].geometry().is_minimized());
}

#[test]
fn test_collapsed_panel_can_be_resized_open_again() {
    let mut model = test_model_with_panel(scenario_panel());
    let resize = handles(&model).resize;

    // Collapse to 160×46 and let go
    pointer_down(&mut model, 200.0, 224.0, Some(resize));
    pointer_move(&mut model, 60.0, 70.0);
    pointer_up(&mut model);
    assert_eq!(output_geometry(&model).0, Vec2::new(160.0, 46.0));
    assert!(model.panels()[0].geometry().is_minimized());

    // The grip in the bottom-right corner is still a resize handle
    let grip = Vec2::new(257.0, 67.0);
    let hit = hit_test_ui(&model, grip);
    assert!(matches!(hit, Some(HitTarget::PanelResize { .. })));

    pointer_down(&mut model, grip.x, grip.y, hit.and_then(|h| h.origin()));
    assert_eq!(model.panels()[0].geometry().mode(), PanelMode::Resizing);

    pointer_move(&mut model, 400.0, 300.0);
    pointer_up(&mut model);
    assert_eq!(output_geometry(&model).0, Vec2::new(303.0, 279.0));
    assert!(!model.panels()[0].geometry().is_minimized());
}
