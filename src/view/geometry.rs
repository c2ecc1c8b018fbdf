//! Layout rectangles for the playground chrome
//!
//! Everything here is in logical pixels and derived from the model on
//! demand; nothing is cached. The renderer scales the rectangles by the
//! window's scale factor, hit-testing uses them as-is.

use crate::model::{AppModel, PanelGeometry, Vec2};

/// Height of a panel's title bar (and of a minimized panel)
pub const TITLE_BAR_HEIGHT: f32 = 24.0;
/// Square minimize/expand button at the right end of the title bar
pub const MINIMIZE_BUTTON_SIZE: f32 = 24.0;
/// Square resize grip in a panel's bottom-right corner
pub const RESIZE_ZONE_SIZE: f32 = 12.0;
/// Width of the sidebar's drag strip along its right edge
pub const SIDEBAR_DRAG_WIDTH: f32 = 4.0;
/// Inset of a canvas inside the panel body
pub const BODY_PADDING: f32 = 8.0;

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        self.contains(point.x, point.y)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Multiply every component by `factor` (logical → physical pixels)
    pub fn scaled(&self, factor: f32) -> Rect {
        Rect::new(
            self.x * factor,
            self.y * factor,
            self.width * factor,
            self.height * factor,
        )
    }

    /// Overlap of two rectangles (empty if disjoint)
    pub fn intersect(&self, other: &Rect) -> Rect {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = (self.x + self.width).min(other.x + other.width);
        let y1 = (self.y + self.height).min(other.y + other.height);
        Rect::new(x0, y0, (x1 - x0).max(0.0), (y1 - y0).max(0.0))
    }
}

/// Sidebar, its drag strip and the editor surface next to it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellLayout {
    pub sidebar: Rect,
    pub sidebar_drag_area: Rect,
    pub editor: Rect,
}

/// Compute the sidebar/editor split for the current sidebar width
pub fn shell_layout(model: &AppModel) -> ShellLayout {
    let viewport = model.viewport();
    let width = model.sidebar_width().min(viewport.x);
    let strip = SIDEBAR_DRAG_WIDTH.min(width);

    ShellLayout {
        sidebar: Rect::new(0.0, 0.0, width, viewport.y),
        sidebar_drag_area: Rect::new(width - strip, 0.0, strip, viewport.y),
        editor: Rect::new(width, 0.0, model.editor_width(), viewport.y),
    }
}

/// Sub-rectangles of one floating panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub frame: Rect,
    pub title_bar: Rect,
    pub minimize_button: Rect,
    pub body: Rect,
    pub resize_zone: Rect,
}

pub fn panel_layout(panel: &PanelGeometry) -> PanelLayout {
    let frame = Rect::from_origin_size(panel.position(), panel.size());
    let title_height = TITLE_BAR_HEIGHT.min(frame.height);
    let button = MINIMIZE_BUTTON_SIZE.min(frame.width).min(title_height);
    let grip = RESIZE_ZONE_SIZE.min(frame.width).min(frame.height);

    PanelLayout {
        frame,
        title_bar: Rect::new(frame.x, frame.y, frame.width, title_height),
        minimize_button: Rect::new(frame.x + frame.width - button, frame.y, button, button),
        body: Rect::new(
            frame.x,
            frame.y + title_height,
            frame.width,
            frame.height - title_height,
        ),
        resize_zone: Rect::new(
            frame.x + frame.width - grip,
            frame.y + frame.height - grip,
            grip,
            grip,
        ),
    }
}

/// Where a canvas of the given size is drawn inside a panel body (clipped to it)
pub fn canvas_rect(body: &Rect, width: u32, height: u32) -> Rect {
    let canvas = Rect::new(
        body.x + BODY_PADDING,
        body.y + BODY_PADDING,
        width as f32,
        height as f32,
    );
    canvas.intersect(body)
}
