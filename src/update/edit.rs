//! Inline word edit handlers
//!
//! Begin/commit/cancel move the session between Idle and Editing; the buffer
//! messages only touch the pending text.

use crate::commands::Cmd;
use crate::messages::{EditMsg, Msg};
use crate::model::{AppModel, CommitOutcome, EditSession, FocusTarget};

/// Handle inline edit messages
pub fn update_edit(model: &mut AppModel, msg: EditMsg) -> Option<Cmd> {
    match msg {
        EditMsg::Begin => begin(model),

        EditMsg::BeginAt(index) => {
            if model.session.is_editing() {
                return None;
            }
            model.sentence_mut()?.select(index);
            begin(model).or(Some(Cmd::reveal(model.session.selection())))
        }

        EditMsg::InsertChar(ch) => edit_buffer(model, |e| e.insert_char(ch)),
        EditMsg::DeleteBackward => edit_buffer(model, EditSession::delete_backward),
        EditMsg::DeleteForward => edit_buffer(model, EditSession::delete_forward),
        EditMsg::CaretLeft => edit_buffer(model, |e| {
            e.caret_left();
            true
        }),
        EditMsg::CaretRight => edit_buffer(model, |e| {
            e.caret_right();
            true
        }),
        EditMsg::CaretHome => edit_buffer(model, |e| {
            e.caret_home();
            true
        }),
        EditMsg::CaretEnd => edit_buffer(model, |e| {
            e.caret_end();
            true
        }),

        EditMsg::Commit => commit(model),

        EditMsg::Cancel => {
            model.sentence_mut()?.cancel_edit()?;
            tracing::debug!("edit cancelled");
            Some(return_focus(model))
        }

        EditMsg::FocusLost => {
            let id = model.session.edit_session()?.id;
            Some(Cmd::Defer(Box::new(Msg::Edit(EditMsg::CommitIfCurrent(id)))))
        }

        EditMsg::CommitIfCurrent(id) => {
            let current = model.session.edit_session()?.id;
            if current != id {
                tracing::debug!(stale = id, current, "dropping stale deferred commit");
                return None;
            }
            commit(model)
        }
    }
}

fn begin(model: &mut AppModel) -> Option<Cmd> {
    let id = model.session.begin_edit()?;
    tracing::debug!(id, index = ?model.session.selection(), "edit started");
    model.ui.focus = FocusTarget::InlineEditor;
    Some(Cmd::batch(vec![
        Cmd::Redraw,
        Cmd::Focus(FocusTarget::InlineEditor),
    ]))
}

fn commit(model: &mut AppModel) -> Option<Cmd> {
    let modified = model.session.edit_session()?.is_modified();
    let outcome = model.sentence_mut()?.commit_edit()?;
    match outcome {
        CommitOutcome::Replaced { index } => tracing::debug!(index, modified, "token replaced"),
        CommitOutcome::Removed { index } => tracing::debug!(index, "token removed by edit"),
    }
    Some(return_focus(model))
}

fn edit_buffer(model: &mut AppModel, op: impl FnOnce(&mut EditSession) -> bool) -> Option<Cmd> {
    let session = model.session.edit_session_mut()?;
    op(session).then_some(Cmd::Redraw)
}

/// Focus back on the chips with the selection in view
pub(super) fn return_focus(model: &mut AppModel) -> Cmd {
    model.ui.focus = FocusTarget::CorrectionArea;
    Cmd::batch(vec![
        Cmd::reveal(model.session.selection()),
        Cmd::Focus(FocusTarget::CorrectionArea),
    ])
}
