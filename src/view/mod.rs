//! View module - painting the model into a pixel buffer
//!
//! `paint()` is a pure function of the model and is what tests exercise;
//! `Renderer` owns the softbuffer surface and presents what `paint()` drew.

pub mod frame;
pub mod geometry;

pub use frame::Frame;
pub use geometry::{panel_layout, shell_layout, PanelLayout, Rect, ShellLayout};
pub use hit_test::{cursor_style, hit_test_ui, CursorStyle, HitTarget};

use anyhow::Result;
use softbuffer::Surface;
use std::num::NonZeroU32;
use std::rc::Rc;
use winit::window::Window;

use crate::model::{AppModel, PanelContent, PanelGeometry, PanelMode, ResizeMode};
use crate::theme::Theme;

use geometry::canvas_rect;

/// Thickness of panel borders and the error outline (logical pixels)
const BORDER: f32 = 1.0;
/// Height of the strip drawn under the title bar while the body shows a hint
const HINT_BAR_HEIGHT: f32 = 2.0;

/// Paint the whole model. `scale` converts logical to physical pixels.
pub fn paint(model: &AppModel, frame: &mut Frame, scale: f32) {
    let theme = &model.theme;
    frame.clear(theme.background.0);

    let shell = shell_layout(model);
    frame.fill_rect(shell.editor.scaled(scale), theme.editor_background.0);
    frame.fill_rect(shell.sidebar.scaled(scale), theme.sidebar_background.0);

    let strip = if model.sidebar().mode() == ResizeMode::Resizing {
        theme.sidebar_strip_active
    } else {
        theme.sidebar_strip
    };
    frame.fill_rect(shell.sidebar_drag_area.scaled(scale), strip.0);

    for mounted in model.panels() {
        paint_panel(frame, theme, &mounted.geometry(), &mounted.content(), scale);
    }
}

fn paint_panel(
    frame: &mut Frame,
    theme: &Theme,
    panel: &PanelGeometry,
    content: &PanelContent,
    scale: f32,
) {
    let layout = panel_layout(panel);

    frame.fill_rect(layout.frame.scaled(scale), theme.panel_background.0);

    let title = if panel.mode() == PanelMode::Dragging {
        theme.title_bar_active
    } else {
        theme.title_bar
    };
    frame.fill_rect(layout.title_bar.scaled(scale), title.0);

    if !panel.is_minimized() && !layout.body.is_empty() {
        frame.set_clip(layout.body.scaled(scale));
        match content {
            PanelContent::Hint(_) => {
                let bar = Rect::new(
                    layout.body.x,
                    layout.body.y,
                    layout.body.width,
                    HINT_BAR_HEIGHT,
                );
                frame.blend_rect(bar.scaled(scale), theme.hint.0);
            }
            PanelContent::Canvas { width, height } => {
                let canvas = canvas_rect(&layout.body, *width, *height);
                frame.fill_rect(canvas.scaled(scale), theme.canvas.0);
            }
            PanelContent::Error(_) => {
                frame.stroke_rect(layout.body.scaled(scale), BORDER * scale, theme.error.0);
            }
        }
        frame.clear_clip();
    }

    // The grip stays grabbable on a collapsed panel; the button covers it
    // on a minimized bar
    frame.fill_rect(layout.resize_zone.scaled(scale), theme.resize_grip.0);
    frame.fill_rect(
        layout.minimize_button.scaled(scale),
        theme.minimize_button.0,
    );

    frame.stroke_rect(layout.frame.scaled(scale), BORDER * scale, theme.panel_border.0);
}

/// Owns the window surface
pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    width: u32,
    height: u32,
    scale_factor: f64,
}

impl Renderer {
    pub fn new(window: Rc<Window>, context: &softbuffer::Context<Rc<Window>>) -> Result<Self> {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();

        let surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;

        let mut renderer = Self {
            surface,
            width: 0,
            height: 0,
            scale_factor,
        };
        renderer.resize(size.width, size.height)?;
        Ok(renderer)
    }

    /// Resize the surface to the window's physical size
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let width = width.max(1);
        let height = height.max(1);
        if width == self.width && height == self.height {
            return Ok(());
        }

        self.surface
            .resize(
                NonZeroU32::new(width).unwrap_or(NonZeroU32::MIN),
                NonZeroU32::new(height).unwrap_or(NonZeroU32::MIN),
            )
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;

        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    /// Paint the model and present it
    pub fn render(&mut self, model: &AppModel) -> Result<()> {
        let (width, height) = (self.width as usize, self.height as usize);
        let scale = self.scale_factor as f32;

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;

        {
            let mut frame = Frame::new(&mut buffer, width, height);
            paint(model, &mut frame, scale);
        }

        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlaygroundConfig;
    use crate::model::Vec2;

    fn painted(model: &AppModel, scale: f32) -> (Vec<u32>, usize) {
        let width = (model.viewport().x * scale) as usize;
        let height = (model.viewport().y * scale) as usize;
        let mut buffer = vec![0u32; width * height];
        let mut frame = Frame::new(&mut buffer, width, height);
        paint(model, &mut frame, scale);
        (buffer, width)
    }

    fn model() -> AppModel {
        AppModel::with_viewport(PlaygroundConfig::default(), Vec2::new(400.0, 300.0))
    }

    #[test]
    fn test_paint_panel_chrome() {
        let model = AppModel::with_viewport(PlaygroundConfig::default(), Vec2::new(800.0, 600.0));
        let theme = model.theme.clone();
        let pos = model.panels()[0].geometry().position();
        let (buffer, width) = painted(&model, 1.0);
        let at = |x: f32, y: f32| buffer[y as usize * width + x as usize];

        assert_eq!(at(pos.x + 50.0, pos.y + 10.0), theme.title_bar.0);
        assert_eq!(at(pos.x + 290.0, pos.y + 10.0), theme.minimize_button.0);
        assert_eq!(at(pos.x + 295.0, pos.y + 195.0), theme.resize_grip.0);
        assert_eq!(at(pos.x + 150.0, pos.y + 100.0), theme.panel_background.0);
        assert_eq!(at(pos.x, pos.y + 100.0), theme.panel_border.0);
    }

    #[test]
    fn test_paint_sidebar_and_editor() {
        let mut model = model();
        let theme = model.theme.clone();
        let button = model.panels()[0].geometry().handles().minimize;
        model.toggle_minimize(button);
        model.sidebar_width_handle().set(320.0);

        let (buffer, width) = painted(&model, 1.0);
        let at = |x: usize, y: usize| buffer[y * width + x];

        assert_eq!(at(100, 150), theme.sidebar_background.0);
        assert_eq!(at(318, 150), theme.sidebar_strip.0);
        assert_eq!(at(350, 150), theme.editor_background.0);
    }

    #[test]
    fn test_paint_canvas_content_scaled() {
        let model = AppModel::with_viewport(PlaygroundConfig::default(), Vec2::new(800.0, 600.0));
        let theme = model.theme.clone();
        model.set_output(PanelContent::Canvas {
            width: 100,
            height: 50,
        });

        let (buffer, width) = painted(&model, 2.0);
        let pos = model.panels()[0].geometry().position();
        // Canvas origin: body (title bar below) + padding, in physical pixels
        let x = ((pos.x + 8.0 + 10.0) * 2.0) as usize;
        let y = ((pos.y + 24.0 + 8.0 + 10.0) * 2.0) as usize;
        assert_eq!(buffer[y * width + x], theme.canvas.0);
    }

    #[test]
    fn test_minimized_panel_hides_body() {
        let mut model = AppModel::with_viewport(PlaygroundConfig::default(), Vec2::new(800.0, 600.0));
        let theme = model.theme.clone();
        let button = model.panels()[0].geometry().handles().minimize;
        let pos = model.panels()[0].geometry().position();
        model.toggle_minimize(button);

        let (buffer, width) = painted(&model, 1.0);
        let below = buffer[(pos.y as usize + 100) * width + pos.x as usize + 50];
        assert_eq!(below, theme.editor_background.0);
    }
}
