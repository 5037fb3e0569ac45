//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use labelfast::commands::Cmd;
use labelfast::effects::{SubmissionSink, ViewPort};
use labelfast::messages::{EditMsg, Msg};
use labelfast::model::selection::as_signed;
use labelfast::model::{AppModel, FocusTarget, Submission};
use labelfast::update::update;
use labelfast::SentencePair;

/// Create a test model positioned on the first of `pairs`
pub fn test_model(pairs: &[(&str, &str)]) -> AppModel {
    AppModel::with_pairs(
        pairs
            .iter()
            .map(|(source, target)| SentencePair::new(*source, *target))
            .collect(),
    )
}

/// Create a test model with a single pair whose target is `target`
pub fn single(target: &str) -> AppModel {
    test_model(&[("source", target)])
}

/// Current tokens as owned strings
pub fn tokens(model: &AppModel) -> Vec<String> {
    model
        .sentence()
        .map(|s| s.corrections.tokens().to_vec())
        .unwrap_or_default()
}

/// Selection in signed form (-1 for none)
pub fn selection(model: &AppModel) -> isize {
    as_signed(model.session.selection())
}

/// Run a sequence of messages, returning the last command
pub fn run(model: &mut AppModel, msgs: impl IntoIterator<Item = Msg>) -> Option<Cmd> {
    let mut last = None;
    for msg in msgs {
        last = update(model, msg);
    }
    last
}

/// Begin editing the selected token and replace its text with `text`
pub fn edit_selected(model: &mut AppModel, text: &str) {
    update(model, Msg::Edit(EditMsg::Begin));
    // The whole word starts selected; backspace clears it
    update(model, Msg::Edit(EditMsg::DeleteBackward));
    for ch in text.chars() {
        update(model, Msg::Edit(EditMsg::InsertChar(ch)));
    }
}

/// ViewPort that records every request
#[derive(Debug, Default)]
pub struct RecordingView {
    pub renders: usize,
    pub focus: Vec<FocusTarget>,
    pub scrolled_to: Vec<usize>,
}

impl ViewPort for RecordingView {
    fn request_render(&mut self) {
        self.renders += 1;
    }

    fn focus(&mut self, target: FocusTarget) {
        self.focus.push(target);
    }

    fn scroll_into_view(&mut self, index: usize) {
        self.scrolled_to.push(index);
    }
}

/// SubmissionSink that keeps every submission
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub submissions: Vec<Submission>,
}

impl SubmissionSink for RecordingSink {
    fn submit(&mut self, submission: &Submission) {
        self.submissions.push(submission.clone());
    }
}
