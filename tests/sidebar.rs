//! Sidebar edge resizing and the editor width that follows it

mod common;

use common::*;
use easel::model::ResizeMode;

fn strip(model: &easel::AppModel) -> Option<easel::model::HandleId> {
    Some(model.sidebar().drag_handle())
}

#[test]
fn test_drag_left_past_threshold_snaps_closed() {
    let mut model = test_model_with_sidebar(304.0);
    let handle = strip(&model);

    pointer_down(&mut model, 320.0, 400.0, handle);
    assert_eq!(model.sidebar().resize_anchor(), 16.0);

    pointer_move(&mut model, 150.0, 400.0);
    assert_eq!(model.sidebar_width(), 4.0);
    assert!(model.sidebar().is_collapsed());
}

#[test]
fn test_drag_open_from_collapsed() {
    let mut model = test_model();
    let handle = strip(&model);

    // Anchor is 2 - 4 = -2
    pointer_down(&mut model, 2.0, 400.0, handle);
    assert_eq!(model.sidebar().mode(), ResizeMode::Resizing);

    // Past the threshold but narrower than the open minimum
    pointer_move(&mut model, 200.0, 400.0);
    assert_eq!(model.sidebar_width(), 304.0);

    pointer_move(&mut model, 348.0, 400.0);
    assert_eq!(model.sidebar_width(), 350.0);

    pointer_move(&mut model, 900.0, 400.0);
    assert_eq!(model.sidebar_width(), 400.0);

    pointer_up(&mut model);
    assert_eq!(model.sidebar().mode(), ResizeMode::Idle);
}

#[test]
fn test_width_is_always_collapsed_or_open_range() {
    let mut model = test_model_with_sidebar(320.0);
    let handle = strip(&model);
    pointer_down(&mut model, 320.0, 10.0, handle);

    for x in (-100..1200).step_by(37) {
        pointer_move(&mut model, x as f32, 10.0);
        let width = model.sidebar_width();
        assert!(
            width == 4.0 || (304.0..=400.0).contains(&width),
            "width {} at x {}",
            width,
            x
        );
    }
}

#[test]
fn test_moves_without_gesture_leave_width_alone() {
    let mut model = test_model_with_sidebar(320.0);
    pointer_move(&mut model, 10.0, 10.0);
    assert_eq!(model.sidebar_width(), 320.0);

    // Pointer-down elsewhere does not start a resize
    pointer_down(&mut model, 320.0, 10.0, None);
    pointer_move(&mut model, 10.0, 10.0);
    assert_eq!(model.sidebar_width(), 320.0);
}

#[test]
fn test_editor_width_tracks_sidebar() {
    let mut model = test_model();
    assert_eq!(model.editor_width(), 996.0);

    let handle = strip(&model);
    pointer_down(&mut model, 2.0, 400.0, handle);
    pointer_move(&mut model, 358.0, 400.0);
    pointer_up(&mut model);

    assert_eq!(model.sidebar_width(), 360.0);
    assert_eq!(model.editor_width(), 640.0);
}

#[test]
fn test_editor_width_never_negative() {
    let mut model = test_model_with_sidebar(400.0);
    resize_viewport(&mut model, 300.0, 800.0);
    assert_eq!(model.editor_width(), 0.0);
}

#[test]
fn test_viewport_resize_keeps_sidebar_width() {
    let mut model = test_model_with_sidebar(320.0);
    resize_viewport(&mut model, 640.0, 480.0);
    assert_eq!(model.sidebar_width(), 320.0);
}
