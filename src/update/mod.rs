//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod output;
mod panel;
mod pointer;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::messages::PointerMsg;
#[cfg(debug_assertions)]
use crate::tracing::LayoutSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use output::update_output;
pub use panel::update_panel;
pub use pointer::update_pointer;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Pointer(m) => update_pointer(model, m),
        Msg::App(m) => update_app(model, m),
        Msg::Panel(m) => update_panel(model, m),
        Msg::Output(m) => update_output(model, m),
    }
}

/// Update with tracing instrumentation (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    // Pointer moves arrive at input rate; keep them out of the message log
    let is_noisy = matches!(&msg, Msg::Pointer(PointerMsg::Move { .. }));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = LayoutSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = LayoutSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        if is_noisy {
            tracing::trace!(target: "layout", %diff, "state changed");
        } else {
            debug!(target: "layout", %diff, "state changed");
        }
    }

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Pointer::Up`
/// - `App::Resize(800.0, 600.0)`
pub fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Pointer(m) => format!("Pointer::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
        Msg::Panel(m) => format!("Panel::{:?}", m),
        Msg::Output(m) => format!("Output::{:?}", m),
    }
}
