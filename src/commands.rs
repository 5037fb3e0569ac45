//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::messages::Msg;
use crate::model::{FocusTarget, Submission};

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the window
    Redraw,
    /// Move keyboard focus
    Focus(FocusTarget),
    /// Bring the token at this index into view
    ScrollIntoView(usize),
    /// Hand a finished sentence to the submission sink
    Submit(Submission),
    /// Run a message on the next scheduling tick
    Defer(Box<Msg>),
    /// Request application exit
    Quit,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Redraw and bring a token into view, if there is one
    pub fn reveal(selection: Option<usize>) -> Self {
        match selection {
            Some(index) => Cmd::Batch(vec![Cmd::Redraw, Cmd::ScrollIntoView(index)]),
            None => Cmd::Redraw,
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None | Cmd::Defer(_) | Cmd::Quit => false,
            Cmd::Redraw | Cmd::Focus(_) | Cmd::ScrollIntoView(_) | Cmd::Submit(_) => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Flatten nested batches into a list, dropping `None`
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }
}
