//! Sidebar width state and its one-axis edge resizer

use std::cell::Cell;
use std::rc::Rc;

use crate::events::{EventResult, InputEvent, InputListener};

use super::handle::HandleId;
use super::vector::{clamp, Vec2};

/// Width of a fully collapsed sidebar (just the drag strip)
pub const COLLAPSED_WIDTH: f32 = 4.0;
/// Dragging the edge left of this width snaps the sidebar closed
pub const SNAP_THRESHOLD: f32 = 160.0;
/// Narrowest open sidebar
pub const MIN_OPEN_WIDTH: f32 = 304.0;
/// Widest open sidebar
pub const MAX_OPEN_WIDTH: f32 = 400.0;

/// Sidebar width shared between the sidebar (writer) and the editor layout (reader)
///
/// Owned by the composition root; clones refer to the same value.
#[derive(Debug, Clone)]
pub struct SidebarWidth(Rc<Cell<f32>>);

impl SidebarWidth {
    pub fn new(width: f32) -> Self {
        Self(Rc::new(Cell::new(width)))
    }

    pub fn get(&self) -> f32 {
        self.0.get()
    }

    pub fn set(&self, width: f32) {
        self.0.set(width);
    }
}

impl Default for SidebarWidth {
    fn default() -> Self {
        Self::new(COLLAPSED_WIDTH)
    }
}

/// Interaction state of the edge resizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeMode {
    #[default]
    Idle,
    Resizing,
}

/// Horizontal resize of the sidebar by its right edge
#[derive(Debug, Clone)]
pub struct EdgeResizer {
    width: SidebarWidth,
    handle: HandleId,
    mode: ResizeMode,
    /// `pointer.x - width` at resize start
    resize_anchor: f32,
}

impl EdgeResizer {
    pub fn new(width: SidebarWidth, handle: HandleId) -> Self {
        Self {
            width,
            handle,
            mode: ResizeMode::Idle,
            resize_anchor: 0.0,
        }
    }

    pub fn width(&self) -> f32 {
        self.width.get()
    }

    pub fn drag_handle(&self) -> HandleId {
        self.handle
    }

    pub fn mode(&self) -> ResizeMode {
        self.mode
    }

    pub fn resize_anchor(&self) -> f32 {
        self.resize_anchor
    }

    pub fn is_collapsed(&self) -> bool {
        self.width() <= COLLAPSED_WIDTH
    }

    /// Start resizing if the press landed on the drag strip
    pub fn on_pointer_down(&mut self, origin: Option<HandleId>, pointer: Vec2) -> bool {
        if origin != Some(self.handle) {
            return false;
        }
        self.resize_anchor = pointer.x - self.width.get();
        self.mode = ResizeMode::Resizing;
        tracing::debug!(anchor = self.resize_anchor, "sidebar resize started");
        true
    }

    /// Track the pointer; returns whether the width changed
    pub fn on_pointer_move(&mut self, pointer: Vec2) -> bool {
        if self.mode == ResizeMode::Idle {
            return false;
        }

        let requested = pointer.x - self.resize_anchor;
        let next = if requested < SNAP_THRESHOLD {
            COLLAPSED_WIDTH
        } else {
            clamp(requested, MIN_OPEN_WIDTH, MAX_OPEN_WIDTH)
        };

        let changed = next != self.width.get();
        self.width.set(next);
        changed
    }

    pub fn on_pointer_up(&mut self) -> bool {
        if self.mode == ResizeMode::Idle {
            return false;
        }
        tracing::debug!(width = self.width.get(), "sidebar resize ended");
        self.mode = ResizeMode::Idle;
        true
    }
}

impl InputListener for EdgeResizer {
    fn handle(&mut self, event: &InputEvent, _viewport: Vec2) -> EventResult {
        match event {
            InputEvent::PointerDown { origin, pointer } => {
                if self.on_pointer_down(*origin, *pointer) {
                    EventResult::consumed_redraw()
                } else {
                    EventResult::Bubble
                }
            }
            InputEvent::PointerMove { pointer } => {
                if self.mode == ResizeMode::Idle {
                    EventResult::Bubble
                } else {
                    EventResult::Consumed {
                        redraw: self.on_pointer_move(*pointer),
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
            // The sidebar does not react to window size changes
            InputEvent::ViewportResized { .. } => EventResult::Bubble,
        }
    }
}
