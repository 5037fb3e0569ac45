//! Session controller handlers (load, submit, reset)

use super::edit::return_focus;
use crate::commands::Cmd;
use crate::messages::SessionMsg;
use crate::model::AppModel;

/// Handle session messages
pub fn update_session(model: &mut AppModel, msg: SessionMsg) -> Option<Cmd> {
    match msg {
        SessionMsg::Load(index) => Some(load_sentence(model, index)),

        SessionMsg::Submit => {
            let submission = model.session.submission()?;
            let next = model.session.current_index()? + 1;
            tracing::info!(
                sentence = next,
                corrected = %submission.corrected_target,
                "sentence submitted"
            );
            Some(Cmd::batch(vec![
                Cmd::Submit(submission),
                load_sentence(model, next),
            ]))
        }

        SessionMsg::Reset => {
            let sentence = model.sentence_mut()?;
            if !sentence.reset() {
                return None;
            }
            tracing::debug!(index = sentence.index, "sentence reset");
            Some(return_focus(model))
        }
    }
}

/// Load pair `index`, completing the session when it is past the end
pub fn load_sentence(model: &mut AppModel, index: usize) -> Cmd {
    model.session.load(index);
    tracing::info!("{}", model.session.status_text());

    if model.session.is_completed() {
        if model.ui.help_open {
            model.ui.close_help();
        }
        model.ui.focus = Default::default();
        return Cmd::Redraw;
    }

    return_focus(model)
}
