//! Application model - the complete state of the playground
//!
//! `AppModel` is the composition root. It owns the input hub, the sidebar,
//! every mounted floating panel and the shared sidebar width that the editor
//! layout reads. Components never see each other; they only share the
//! events the hub fans out.

pub mod content;
pub mod handle;
pub mod panel;
pub mod sidebar;
pub mod vector;

pub use content::{ContentHandle, PanelContent, RUN_HINT};
pub use handle::{HandleAllocator, HandleId};
pub use panel::{PanelGeometry, PanelHandles, PanelMode, PanelOptions};
pub use sidebar::{EdgeResizer, ResizeMode, SidebarWidth};
pub use vector::Vec2;

use std::cell::Ref;

use crate::config::PlaygroundConfig;
use crate::events::{EventResult, InputEvent, InputHub, Mounted};
use crate::theme::Theme;

/// Identifies a mounted floating panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelId(pub u64);

/// A floating panel registered with the hub, plus its body content
#[derive(Debug)]
pub struct MountedPanel {
    id: PanelId,
    geometry: Mounted<PanelGeometry>,
    content: ContentHandle,
}

impl MountedPanel {
    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn geometry(&self) -> Ref<'_, PanelGeometry> {
        self.geometry.borrow()
    }

    pub fn content(&self) -> PanelContent {
        self.content.get()
    }
}

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Current window inner size in logical pixels
    viewport: Vec2,
    /// Persisted configuration the model was built from
    pub config: PlaygroundConfig,
    /// Colors for the renderer
    pub theme: Theme,
    hub: InputHub,
    handles: HandleAllocator,
    sidebar_width: SidebarWidth,
    sidebar: Mounted<EdgeResizer>,
    /// Mounted panels, bottom-most first
    panels: Vec<MountedPanel>,
    next_panel_id: u64,
    output_panel: PanelId,
    output: ContentHandle,
}

impl AppModel {
    /// Build the model using the configured window size as the viewport
    pub fn new(config: PlaygroundConfig) -> Self {
        let viewport = Vec2::new(config.window.width as f32, config.window.height as f32);
        Self::with_viewport(config, viewport)
    }

    /// Build the model for an explicit viewport size
    pub fn with_viewport(config: PlaygroundConfig, viewport: Vec2) -> Self {
        let hub = InputHub::new();
        let mut handles = HandleAllocator::new();

        let sidebar_width = SidebarWidth::new(config.sidebar.initial_width);
        let sidebar = Mounted::mount(
            &hub,
            EdgeResizer::new(sidebar_width.clone(), handles.allocate()),
        );

        let mut model = Self {
            viewport,
            theme: config.theme.clone(),
            hub,
            handles,
            sidebar_width,
            sidebar,
            panels: Vec::new(),
            next_panel_id: 0,
            output_panel: PanelId(0),
            output: ContentHandle::default(),
            config,
        };

        let options = model.config.panel.clone();
        let (output_panel, output) = model.mount_panel_with_content(options);
        model.output_panel = output_panel;
        model.output = output;
        model
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Current sidebar width (the shared value the sidebar writes)
    pub fn sidebar_width(&self) -> f32 {
        self.sidebar_width.get()
    }

    /// Reader handle for the shared sidebar width
    pub fn sidebar_width_handle(&self) -> SidebarWidth {
        self.sidebar_width.clone()
    }

    /// Width left for the editor surface next to the sidebar
    pub fn editor_width(&self) -> f32 {
        (self.viewport.x - self.sidebar_width()).max(0.0)
    }

    pub fn sidebar(&self) -> Ref<'_, EdgeResizer> {
        self.sidebar.borrow()
    }

    /// All mounted panels, bottom-most first
    pub fn panels(&self) -> &[MountedPanel] {
        &self.panels
    }

    pub fn panel(&self, id: PanelId) -> Option<&MountedPanel> {
        self.panels.iter().find(|p| p.id == id)
    }

    /// The panel created at startup that shows run output
    pub fn output_panel(&self) -> PanelId {
        self.output_panel
    }

    /// Handle to the output panel's body
    pub fn output(&self) -> &ContentHandle {
        &self.output
    }

    /// Number of live input subscriptions (sidebar + panels)
    pub fn listener_count(&self) -> usize {
        self.hub.len()
    }

    /// Mount a new floating panel on top of the others
    pub fn mount_panel(&mut self, options: PanelOptions) -> PanelId {
        self.mount_panel_with_content(options).0
    }

    /// Mount a panel and also hand out a handle to its body content
    pub fn mount_panel_with_content(&mut self, options: PanelOptions) -> (PanelId, ContentHandle) {
        let handles = PanelHandles {
            drag: self.handles.allocate(),
            resize: self.handles.allocate(),
            minimize: self.handles.allocate(),
        };
        let id = PanelId(self.next_panel_id);
        self.next_panel_id += 1;

        let geometry = Mounted::mount(
            &self.hub,
            PanelGeometry::new(options, self.viewport, handles),
        );
        let content = ContentHandle::default();

        tracing::debug!(panel = id.0, drag = handles.drag.raw(), "panel mounted");
        self.panels.push(MountedPanel {
            id,
            geometry,
            content: content.clone(),
        });

        (id, content)
    }

    /// Unmount a panel; its input subscription ends with it.
    ///
    /// The output panel stays mounted for the model's whole lifetime.
    pub fn unmount_panel(&mut self, id: PanelId) -> bool {
        if id == self.output_panel {
            tracing::debug!(panel = id.0, "refusing to unmount the output panel");
            return false;
        }
        let before = self.panels.len();
        self.panels.retain(|p| p.id != id);
        let removed = self.panels.len() != before;
        if removed {
            tracing::debug!(panel = id.0, "panel unmounted");
        }
        removed
    }

    /// Find the panel owning a given handle
    pub fn panel_by_handle(&self, handle: HandleId) -> Option<&MountedPanel> {
        self.panels.iter().find(|p| {
            let h = p.geometry().handles();
            h.drag == handle || h.resize == handle || h.minimize == handle
        })
    }

    /// Deliver an input event to every mounted component
    pub fn dispatch(&mut self, event: InputEvent) -> EventResult {
        if let InputEvent::ViewportResized { viewport } = event {
            self.viewport = viewport;
        }
        self.hub.dispatch(&event, self.viewport)
    }

    /// Minimize or expand the panel whose minimize button is `button`
    pub fn toggle_minimize(&mut self, button: HandleId) -> bool {
        let viewport = self.viewport;
        match self
            .panels
            .iter()
            .find(|p| p.geometry().handles().minimize == button)
        {
            Some(panel) => {
                panel.geometry.borrow_mut().toggle_minimize(viewport);
                true
            }
            None => false,
        }
    }

    /// Replace what the output panel shows
    pub fn set_output(&self, content: PanelContent) {
        self.output.replace(content);
    }
}
