//! App-level message handlers (window resize)

use crate::commands::Cmd;
use crate::events::InputEvent;
use crate::messages::AppMsg;
use crate::model::{AppModel, Vec2};

pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            // A minimized window reports a zero size; keep the last layout
            if width <= 0.0 || height <= 0.0 {
                tracing::debug!(width, height, "ignoring empty viewport");
                return None;
            }
            let viewport = Vec2::new(width, height);
            if viewport == model.viewport() {
                return None;
            }
            tracing::debug!(width, height, "viewport resized");
            model.dispatch(InputEvent::ViewportResized { viewport });
            // The editor width depends on the viewport even without listeners
            Some(Cmd::Redraw)
        }
    }
}
