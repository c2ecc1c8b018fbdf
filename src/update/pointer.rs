//! Pointer input handlers
//!
//! Pointer messages are translated into hub events and fanned out to every
//! mounted component. Each component decides for itself whether the event
//! concerns it.

use crate::commands::Cmd;
use crate::events::InputEvent;
use crate::messages::PointerMsg;
use crate::model::{AppModel, Vec2};

pub fn update_pointer(model: &mut AppModel, msg: PointerMsg) -> Option<Cmd> {
    let event = match msg {
        PointerMsg::Down { x, y, origin } => InputEvent::PointerDown {
            origin,
            pointer: Vec2::new(x, y),
        },
        PointerMsg::Move { x, y } => InputEvent::PointerMove {
            pointer: Vec2::new(x, y),
        },
        PointerMsg::Up => InputEvent::PointerUp,
    };

    let result = model.dispatch(event);
    Cmd::redraw_if(result.needs_redraw())
}
