//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::EditId;

/// Selection messages (choosing which token is active)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMsg {
    /// Select a token; out-of-range requests are clamped
    Select(isize),
    /// Step forward (+1) or backward (-1), wrapping at the ends
    Move(isize),
}

/// Inline word edit messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMsg {
    /// Begin editing the selected token (Enter/F2)
    Begin,
    /// Select a token, then begin editing it (double-click)
    BeginAt(isize),
    /// Type a character into the edit buffer
    InsertChar(char),
    /// Backspace in the edit buffer
    DeleteBackward,
    /// Delete in the edit buffer
    DeleteForward,
    CaretLeft,
    CaretRight,
    CaretHome,
    CaretEnd,
    /// Apply the edit (Enter in the editor)
    Commit,
    /// Discard the edit (Escape in the editor)
    Cancel,
    /// The editor lost focus; commits on the next tick
    FocusLost,
    /// Deferred commit for a specific session; no-op if it already ended
    CommitIfCurrent(EditId),
}

/// Correction list messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorrectionMsg {
    /// Delete the token at an index
    DeleteAt(isize),
    /// Delete the selected token (Delete/Backspace)
    DeleteSelected,
}

/// Session controller messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMsg {
    /// Load pair `n`; past the end completes the session
    Load(usize),
    /// Emit the corrected sentence and advance
    Submit,
    /// Restore the current sentence to its baseline
    Reset,
}

/// UI messages (help overlay)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMsg {
    ShowHelp,
    HideHelp,
    ToggleHelp,
}

/// Application-level messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    /// Window resized
    Resize(u32, u32),
    /// Request application exit
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Selection(SelectionMsg),
    Edit(EditMsg),
    Correction(CorrectionMsg),
    Session(SessionMsg),
    Ui(UiMsg),
    App(AppMsg),
}
