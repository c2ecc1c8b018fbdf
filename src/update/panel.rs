//! Panel management handlers

use crate::commands::Cmd;
use crate::messages::PanelMsg;
use crate::model::AppModel;

pub fn update_panel(model: &mut AppModel, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::ToggleMinimize(button) => Cmd::redraw_if(model.toggle_minimize(button)),
        PanelMsg::Mount(options) => {
            model.mount_panel(options);
            Some(Cmd::Redraw)
        }
        PanelMsg::Unmount(id) => Cmd::redraw_if(model.unmount_panel(id)),
    }
}
