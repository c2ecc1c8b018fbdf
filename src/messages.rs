//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::{HandleId, PanelId, PanelOptions};

/// Pointer input, already hit-tested, in logical pixels
#[derive(Debug, Clone, PartialEq)]
pub enum PointerMsg {
    /// Primary button pressed over `origin` (None = no interactive zone)
    Down {
        x: f32,
        y: f32,
        origin: Option<HandleId>,
    },
    /// Pointer moved
    Move { x: f32, y: f32 },
    /// Primary button released
    Up,
}

/// Application lifecycle messages
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Window inner size changed (logical pixels)
    Resize(f32, f32),
}

/// Panel management messages
#[derive(Debug, Clone, PartialEq)]
pub enum PanelMsg {
    /// A minimize/expand button was clicked
    ToggleMinimize(HandleId),
    /// Mount an additional floating panel
    Mount(PanelOptions),
    /// Remove a floating panel
    Unmount(PanelId),
}

/// Results reported by whatever runs user code, shown in the output panel
#[derive(Debug, Clone, PartialEq)]
pub enum OutputMsg {
    /// The program created a canvas of this size
    ShowCanvas { width: u32, height: u32 },
    /// Transpiling or running the program failed
    ShowError(String),
    /// Back to the run hint
    Clear,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Pointer(PointerMsg),
    App(AppMsg),
    Panel(PanelMsg),
    Output(OutputMsg),
}
