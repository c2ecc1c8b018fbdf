//! Output panel handlers
//!
//! Whoever runs user programs reports back through these messages; the
//! result replaces the output panel's previous content.

use crate::commands::Cmd;
use crate::messages::OutputMsg;
use crate::model::{AppModel, PanelContent};

pub fn update_output(model: &mut AppModel, msg: OutputMsg) -> Option<Cmd> {
    let content = match msg {
        OutputMsg::ShowCanvas { width, height } => PanelContent::Canvas { width, height },
        OutputMsg::ShowError(message) => {
            tracing::error!(%message, "run failed");
            PanelContent::Error(message)
        }
        OutputMsg::Clear => PanelContent::default(),
    };
    model.set_output(content);
    Some(Cmd::Redraw)
}
