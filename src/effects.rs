//! Command execution against the outside world
//!
//! `update` only describes side effects; the `Dispatcher` applies them to a
//! `ViewPort` and a `SubmissionSink`, and owns the queue of deferred
//! messages that run on the next scheduling tick.

use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, Sender};

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::{AppModel, FocusTarget, Submission};
use crate::update::update;

/// What the core needs from a view
pub trait ViewPort {
    /// Schedule a repaint
    fn request_render(&mut self);
    /// Move keyboard focus
    fn focus(&mut self, target: FocusTarget);
    /// Bring the chip for token `index` into view
    fn scroll_into_view(&mut self, index: usize);
}

/// Receiver of finished sentences
pub trait SubmissionSink {
    fn submit(&mut self, submission: &Submission);
}

/// Logs each submission as JSON; nothing is persisted
#[derive(Debug, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submit(&mut self, submission: &Submission) {
        match serde_json::to_string(submission) {
            Ok(json) => tracing::info!(target: "submission", "{}", json),
            Err(e) => tracing::warn!("Failed to encode submission: {}", e),
        }
    }
}

/// Discards submissions
#[derive(Debug, Default)]
pub struct NullSink;

impl SubmissionSink for NullSink {
    fn submit(&mut self, _submission: &Submission) {}
}

/// Whether the event loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs messages through `update` and applies the resulting commands
pub struct Dispatcher<S: SubmissionSink> {
    sink: S,
    deferred_tx: Sender<Msg>,
    deferred_rx: Receiver<Msg>,
    /// Messages already pulled off the channel, in arrival order
    backlog: VecDeque<Msg>,
}

impl<S: SubmissionSink> Dispatcher<S> {
    pub fn new(sink: S) -> Self {
        let (deferred_tx, deferred_rx) = mpsc::channel();
        Self {
            sink,
            deferred_tx,
            deferred_rx,
            backlog: VecDeque::new(),
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Handle for queueing messages from outside the update loop
    pub fn sender(&self) -> Sender<Msg> {
        self.deferred_tx.clone()
    }

    /// Update the model with `msg` and apply the command it returns
    pub fn dispatch(&mut self, model: &mut AppModel, msg: Msg, view: &mut dyn ViewPort) -> Flow {
        match update(model, msg) {
            Some(cmd) => self.process_cmd(cmd, view),
            None => Flow::Continue,
        }
    }

    /// Apply a command's effects
    pub fn process_cmd(&mut self, cmd: Cmd, view: &mut dyn ViewPort) -> Flow {
        let mut flow = Flow::Continue;
        for cmd in cmd.flatten() {
            match cmd {
                Cmd::None | Cmd::Batch(_) => {}
                Cmd::Redraw => view.request_render(),
                Cmd::Focus(target) => view.focus(target),
                Cmd::ScrollIntoView(index) => view.scroll_into_view(index),
                Cmd::Submit(submission) => self.sink.submit(&submission),
                Cmd::Defer(msg) => {
                    // The receiver lives as long as self, so send cannot fail
                    let _ = self.deferred_tx.send(*msg);
                }
                Cmd::Quit => flow = Flow::Quit,
            }
        }
        flow
    }

    fn pull_deferred(&mut self) {
        self.backlog.extend(self.deferred_rx.try_iter());
    }

    /// Whether any deferred messages are waiting
    pub fn has_deferred(&mut self) -> bool {
        self.pull_deferred();
        !self.backlog.is_empty()
    }

    /// Run everything queued before this call (one scheduling tick)
    ///
    /// Messages deferred while flushing wait for the next tick.
    pub fn flush_deferred(&mut self, model: &mut AppModel, view: &mut dyn ViewPort) -> Flow {
        self.pull_deferred();
        let pending = std::mem::take(&mut self.backlog);
        let mut flow = Flow::Continue;
        for msg in pending {
            if self.dispatch(model, msg, view) == Flow::Quit {
                flow = Flow::Quit;
            }
        }
        flow
    }
}
