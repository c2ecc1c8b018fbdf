//! Floating panel geometry - drag, resize and minimize state
//!
//! A `PanelGeometry` owns the size and top-left position of one floating
//! panel and reacts to global pointer and viewport events. All inputs are
//! clamped; nothing here can fail.
//!
//! ## Invariants
//!
//! - While dragging, `0 <= position <= viewport - size` on both axes.
//! - While resizing, `size >= (150, 24)` and `size <= max` (the configured
//!   maximum, or the viewport when none is set).
//! - `mode` is exactly one of idle, dragging or resizing.

use serde::{Deserialize, Serialize};

use crate::events::{EventResult, InputEvent, InputListener};

use super::handle::HandleId;
use super::vector::{clamp, Vec2};

/// Smallest width a resize gesture can produce
pub const MIN_WIDTH: f32 = 150.0;
/// Smallest height a resize gesture can produce
pub const MIN_HEIGHT: f32 = 24.0;
/// A resize gesture ending below both of these counts as collapsed
pub const COLLAPSE_WIDTH: f32 = 180.0;
/// Height paired with `COLLAPSE_WIDTH` for the collapse check
pub const COLLAPSE_HEIGHT: f32 = 54.0;
/// Footprint of a panel minimized through its button
pub const MINIMIZED_SIZE: Vec2 = Vec2::new(150.0, 24.0);
/// Size used when no start size is configured
pub const DEFAULT_SIZE: Vec2 = Vec2::new(300.0, 200.0);
/// Default gap between the panel's right edge and the viewport's right edge
pub const DEFAULT_RIGHT_MARGIN: f32 = 120.0;
/// Default distance from the top of the viewport
pub const DEFAULT_TOP: f32 = 24.0;

/// Interaction state of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelMode {
    #[default]
    Idle,
    Dragging,
    Resizing,
}

/// Creation-time configuration for a panel. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelOptions {
    /// Title shown in the drag bar
    pub name: Option<String>,
    /// Initial `[width, height]`, defaults to 300x200
    pub start_size: Option<[f32; 2]>,
    /// Initial `[x, y]`, defaults to the top-right corner inset by 120/24
    pub start_position: Option<[f32; 2]>,
    /// Upper bound for the width while resizing, defaults to the viewport width
    pub max_width: Option<f32>,
    /// Upper bound for the height while resizing, defaults to the viewport height
    pub max_height: Option<f32>,
}

impl PanelOptions {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_start_size(mut self, width: f32, height: f32) -> Self {
        self.start_size = Some([width, height]);
        self
    }

    pub fn with_start_position(mut self, x: f32, y: f32) -> Self {
        self.start_position = Some([x, y]);
        self
    }

    pub fn with_max_size(mut self, width: Option<f32>, height: Option<f32>) -> Self {
        self.max_width = width;
        self.max_height = height;
        self
    }

    /// Configured start size or the default
    pub fn start_size(&self) -> Vec2 {
        self.start_size
            .map(|[w, h]| Vec2::new(w, h))
            .unwrap_or(DEFAULT_SIZE)
    }
}

/// The interactive zones of one panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelHandles {
    /// Title bar; pressing it starts a drag
    pub drag: HandleId,
    /// Bottom-right grip; pressing it starts a resize
    pub resize: HandleId,
    /// Minimize/expand button in the title bar
    pub minimize: HandleId,
}

/// Size, position and interaction state of a floating panel
#[derive(Debug, Clone)]
pub struct PanelGeometry {
    options: PanelOptions,
    handles: PanelHandles,
    size: Vec2,
    position: Vec2,
    mode: PanelMode,
    /// `pointer - position` at drag start
    drag_anchor: Vec2,
    /// `size - (pointer - position)` at resize start
    resize_anchor: Vec2,
    /// Viewport size as of the last resize event
    viewport_snapshot: Vec2,
    minimized: bool,
    restore_size: Vec2,
}

impl PanelGeometry {
    /// Create a panel for a viewport of the given size
    pub fn new(options: PanelOptions, viewport: Vec2, handles: PanelHandles) -> Self {
        let size = options.start_size();
        let position = Vec2::new(
            options
                .start_position
                .map(|[x, _]| x)
                .unwrap_or(viewport.x - size.x - DEFAULT_RIGHT_MARGIN),
            options.start_position.map(|[_, y]| y).unwrap_or(DEFAULT_TOP),
        );

        Self {
            options,
            handles,
            size,
            position,
            mode: PanelMode::Idle,
            drag_anchor: Vec2::ZERO,
            resize_anchor: Vec2::ZERO,
            viewport_snapshot: viewport,
            minimized: false,
            restore_size: size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn mode(&self) -> PanelMode {
        self.mode
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn handles(&self) -> PanelHandles {
        self.handles
    }

    pub fn options(&self) -> &PanelOptions {
        &self.options
    }

    /// Title for the drag bar, upper-cased, `---` when unnamed
    pub fn title(&self) -> String {
        self.options
            .name
            .as_deref()
            .unwrap_or("---")
            .to_uppercase()
    }

    /// Size the panel returns to when expanded
    pub fn restore_size(&self) -> Vec2 {
        self.restore_size
    }

    pub fn drag_anchor(&self) -> Vec2 {
        self.drag_anchor
    }

    pub fn resize_anchor(&self) -> Vec2 {
        self.resize_anchor
    }

    pub fn viewport_snapshot(&self) -> Vec2 {
        self.viewport_snapshot
    }

    /// Start a drag or resize gesture if `origin` is one of this panel's handles.
    ///
    /// Returns whether the pointer-down was claimed.
    pub fn on_pointer_down(&mut self, origin: Option<HandleId>, pointer: Vec2) -> bool {
        let Some(origin) = origin else {
            return false;
        };

        let is_drag = origin == self.handles.drag;
        let is_resize = origin == self.handles.resize;
        if !is_drag && !is_resize {
            return false;
        }

        let offset = pointer - self.position;
        if is_resize {
            self.resize_anchor = self.size - offset;
            self.mode = PanelMode::Resizing;
        } else {
            self.drag_anchor = offset;
            self.mode = PanelMode::Dragging;
        }

        tracing::debug!(
            mode = ?self.mode,
            x = pointer.x,
            y = pointer.y,
            "panel gesture started"
        );
        true
    }

    /// Continue the active gesture. Returns whether geometry changed.
    pub fn on_pointer_move(&mut self, pointer: Vec2, viewport: Vec2) -> bool {
        match self.mode {
            PanelMode::Idle => false,
            PanelMode::Dragging => {
                let target = pointer - self.drag_anchor;
                let next = target.clamp(Vec2::ZERO, viewport - self.size);
                let changed = next != self.position;
                self.position = next;
                changed
            }
            PanelMode::Resizing => {
                let max_width = self.options.max_width.unwrap_or(viewport.x);
                let max_height = self.options.max_height.unwrap_or(viewport.y);

                let width = clamp(
                    pointer.x - self.position.x + self.resize_anchor.x,
                    MIN_WIDTH,
                    max_width,
                );
                let height = clamp(
                    pointer.y - self.position.y + self.resize_anchor.y,
                    MIN_HEIGHT,
                    max_height,
                );

                if width < COLLAPSE_WIDTH && height < COLLAPSE_HEIGHT {
                    self.minimized = true;
                    self.restore_size = self.options.start_size();
                } else {
                    self.minimized = false;
                }

                let next = Vec2::new(width, height);
                tracing::trace!(width, height, minimized = self.minimized, "panel resized");
                let changed = next != self.size;
                self.size = next;
                changed
            }
        }
    }

    /// End any active gesture. Returns whether one was active.
    pub fn on_pointer_up(&mut self) -> bool {
        if self.mode == PanelMode::Idle {
            return false;
        }
        tracing::debug!(mode = ?self.mode, "panel gesture ended");
        self.mode = PanelMode::Idle;
        true
    }

    /// Keep the panel on screen after the window changed size.
    ///
    /// Horizontal position follows the right edge of the window (shifted by
    /// the width delta); vertical position is only clamped.
    pub fn on_viewport_resize(&mut self, viewport: Vec2) {
        let x_offset = self.viewport_snapshot.x - viewport.x;

        let x = clamp(self.position.x - x_offset, 0.0, viewport.x - self.size.x);
        let y = clamp(self.position.y, 0.0, viewport.y - self.size.y);

        self.position = Vec2::new(x, y);
        self.viewport_snapshot = viewport;
    }

    /// Minimize, or expand back to the cached size without crossing the viewport edge
    pub fn toggle_minimize(&mut self, viewport: Vec2) {
        if self.minimized {
            let width = if self.position.x + self.restore_size.x > viewport.x {
                viewport.x - self.position.x
            } else {
                self.restore_size.x
            };
            let height = if self.position.y + self.restore_size.y > viewport.y {
                viewport.y - self.position.y
            } else {
                self.restore_size.y
            };

            self.minimized = false;
            self.size = Vec2::new(width, height);
            tracing::debug!(width, height, "panel expanded");
            return;
        }

        self.restore_size = self.size;
        self.minimized = true;
        self.size = MINIMIZED_SIZE;
        tracing::debug!("panel minimized");
    }

    pub fn is_dragging(&self) -> bool {
        self.mode == PanelMode::Dragging
    }
}

impl InputListener for PanelGeometry {
    fn handle(&mut self, event: &InputEvent, viewport: Vec2) -> EventResult {
        match event {
            InputEvent::PointerDown { origin, pointer } => {
                if self.on_pointer_down(*origin, *pointer) {
                    EventResult::consumed_redraw()
                } else {
                    EventResult::Bubble
                }
            }
            InputEvent::PointerMove { pointer } => {
                if self.mode == PanelMode::Idle {
                    EventResult::Bubble
                } else {
                    EventResult::Consumed {
                        redraw: self.on_pointer_move(*pointer, viewport),
                    }
                }
            }
            InputEvent::PointerUp => {
                if self.on_pointer_up() {
                    EventResult::consumed_redraw()
                } else {
                    EventResult::Bubble
                }
            }
            InputEvent::ViewportResized { viewport } => {
                self.on_viewport_resize(*viewport);
                EventResult::consumed_redraw()
            }
        }
    }
}
