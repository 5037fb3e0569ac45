//! Help overlay handlers

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::{AppModel, FocusTarget};

/// Handle UI messages
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::ShowHelp => show_help(model),
        UiMsg::HideHelp => hide_help(model),
        UiMsg::ToggleHelp => {
            if model.ui.help_open {
                hide_help(model)
            } else {
                show_help(model)
            }
        }
    }
}

fn show_help(model: &mut AppModel) -> Option<Cmd> {
    if model.ui.help_open || model.session.is_completed() || model.session.is_editing() {
        return None;
    }
    model.ui.open_help();
    Some(Cmd::batch(vec![
        Cmd::Redraw,
        Cmd::Focus(FocusTarget::HelpOverlay),
    ]))
}

fn hide_help(model: &mut AppModel) -> Option<Cmd> {
    if !model.ui.help_open {
        return None;
    }
    let restored = model.ui.close_help();
    Some(Cmd::batch(vec![Cmd::Redraw, Cmd::Focus(restored)]))
}
