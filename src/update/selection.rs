//! Selection message handlers

use crate::commands::Cmd;
use crate::messages::SelectionMsg;
use crate::model::AppModel;

/// Handle selection messages
pub fn update_selection(model: &mut AppModel, msg: SelectionMsg) -> Option<Cmd> {
    let sentence = model.sentence_mut()?;

    let changed = match msg {
        SelectionMsg::Select(index) => sentence.select(index),
        SelectionMsg::Move(direction) => sentence.move_selection(direction),
    };

    if !changed {
        return None;
    }
    Some(Cmd::reveal(sentence.selection))
}
