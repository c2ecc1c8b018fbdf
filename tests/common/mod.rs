//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use easel::config::PlaygroundConfig;
use easel::messages::{AppMsg, Msg, PointerMsg};
use easel::model::{AppModel, HandleId, PanelOptions, Vec2};
use easel::update::update;

/// Viewport used by most scenarios
pub const VIEWPORT: Vec2 = Vec2::new(1000.0, 800.0);

/// Model with the default config at a 1000×800 viewport
pub fn test_model() -> AppModel {
    AppModel::with_viewport(PlaygroundConfig::default(), VIEWPORT)
}

/// Model whose output panel starts with the given options
pub fn test_model_with_panel(options: PanelOptions) -> AppModel {
    let mut config = PlaygroundConfig::default();
    config.panel = options;
    AppModel::with_viewport(config, VIEWPORT)
}

/// Model whose sidebar starts at `width`
pub fn test_model_with_sidebar(width: f32) -> AppModel {
    let mut config = PlaygroundConfig::default();
    config.sidebar.initial_width = width;
    AppModel::with_viewport(config, VIEWPORT)
}

/// 300×200 panel at (100, 24)
pub fn scenario_panel() -> PanelOptions {
    PanelOptions::named("output")
        .with_start_size(300.0, 200.0)
        .with_start_position(100.0, 24.0)
}

pub fn pointer_down(model: &mut AppModel, x: f32, y: f32, origin: Option<HandleId>) {
    update(model, Msg::Pointer(PointerMsg::Down { x, y, origin }));
}

pub fn pointer_move(model: &mut AppModel, x: f32, y: f32) {
    update(model, Msg::Pointer(PointerMsg::Move { x, y }));
}

pub fn pointer_up(model: &mut AppModel) {
    update(model, Msg::Pointer(PointerMsg::Up));
}

pub fn resize_viewport(model: &mut AppModel, width: f32, height: f32) {
    update(model, Msg::App(AppMsg::Resize(width, height)));
}

/// Size and position of the output panel
pub fn output_geometry(model: &AppModel) -> (Vec2, Vec2) {
    let panel = model
        .panel(model.output_panel())
        .expect("output panel is mounted");
    let geometry = panel.geometry();
    (geometry.size(), geometry.position())
}
