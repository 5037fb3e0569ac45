//! Correction list handlers (token deletion)

use super::edit::return_focus;
use crate::commands::Cmd;
use crate::messages::CorrectionMsg;
use crate::model::AppModel;

/// Handle correction list messages
pub fn update_corrections(model: &mut AppModel, msg: CorrectionMsg) -> Option<Cmd> {
    let sentence = model.sentence_mut()?;

    let removed = match msg {
        CorrectionMsg::DeleteAt(index) => sentence.delete_at(index),
        CorrectionMsg::DeleteSelected => sentence.delete_selected(),
    };
    if !removed {
        return None;
    }

    tracing::debug!(
        remaining = sentence.corrections.len(),
        selection = ?sentence.selection,
        "token deleted"
    );
    Some(return_focus(model))
}
