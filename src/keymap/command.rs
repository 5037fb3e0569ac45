//! Command enum representing every bindable action
//!
//! Commands are the bridge between keybindings and the message system.
//! Each command maps to zero or more `Msg` values for the update loop.

use std::str::FromStr;

use super::context::KeyContext;
use crate::messages::{AppMsg, CorrectionMsg, EditMsg, Msg, SelectionMsg, SessionMsg, UiMsg};

/// All actions that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // Word navigation
    SelectNext,
    SelectPrevious,

    // Word correction
    BeginEdit,
    DeleteSelected,
    ResetSentence,
    SubmitSentence,

    // Inline editor
    CommitEdit,
    CancelEdit,
    EditDeleteBackward,
    EditDeleteForward,
    EditCaretLeft,
    EditCaretRight,
    EditCaretHome,
    EditCaretEnd,

    // Help overlay
    ToggleHelp,
    CloseHelp,

    Quit,

    /// Removes default bindings on a keystroke (user keymaps only)
    Unbound,
}

impl Command {
    /// Every command, in help overlay order
    pub const ALL: [Command; 18] = [
        Command::SelectNext,
        Command::SelectPrevious,
        Command::BeginEdit,
        Command::CommitEdit,
        Command::CancelEdit,
        Command::DeleteSelected,
        Command::ResetSentence,
        Command::SubmitSentence,
        Command::EditDeleteBackward,
        Command::EditDeleteForward,
        Command::EditCaretLeft,
        Command::EditCaretRight,
        Command::EditCaretHome,
        Command::EditCaretEnd,
        Command::ToggleHelp,
        Command::CloseHelp,
        Command::Quit,
        Command::Unbound,
    ];

    /// Convert this command to messages for the update loop
    pub fn to_msgs(self) -> Vec<Msg> {
        use Command::*;

        match self {
            SelectNext => vec![Msg::Selection(SelectionMsg::Move(1))],
            SelectPrevious => vec![Msg::Selection(SelectionMsg::Move(-1))],

            BeginEdit => vec![Msg::Edit(EditMsg::Begin)],
            DeleteSelected => vec![Msg::Correction(CorrectionMsg::DeleteSelected)],
            ResetSentence => vec![Msg::Session(SessionMsg::Reset)],
            SubmitSentence => vec![Msg::Session(SessionMsg::Submit)],

            CommitEdit => vec![Msg::Edit(EditMsg::Commit)],
            CancelEdit => vec![Msg::Edit(EditMsg::Cancel)],
            EditDeleteBackward => vec![Msg::Edit(EditMsg::DeleteBackward)],
            EditDeleteForward => vec![Msg::Edit(EditMsg::DeleteForward)],
            EditCaretLeft => vec![Msg::Edit(EditMsg::CaretLeft)],
            EditCaretRight => vec![Msg::Edit(EditMsg::CaretRight)],
            EditCaretHome => vec![Msg::Edit(EditMsg::CaretHome)],
            EditCaretEnd => vec![Msg::Edit(EditMsg::CaretEnd)],

            ToggleHelp => vec![Msg::Ui(UiMsg::ToggleHelp)],
            CloseHelp => vec![Msg::Ui(UiMsg::HideHelp)],

            Quit => vec![Msg::App(AppMsg::Quit)],
            Unbound => vec![],
        }
    }

    /// Whether the command may run in this state
    ///
    /// Help open: only help and quit. Completed: only quit.
    pub fn is_available(self, ctx: &KeyContext) -> bool {
        match self {
            Command::Quit => true,
            _ if ctx.completed => false,
            Command::ToggleHelp | Command::CloseHelp => true,
            _ => !ctx.help_open,
        }
    }

    /// Name shown in the help overlay
    pub fn display_name(self) -> &'static str {
        use Command::*;

        match self {
            SelectNext => "Next word",
            SelectPrevious => "Previous word",
            BeginEdit => "Edit word",
            DeleteSelected => "Delete word",
            ResetSentence => "Reset sentence",
            SubmitSentence => "Submit sentence",
            CommitEdit => "Apply edit",
            CancelEdit => "Cancel edit",
            EditDeleteBackward => "Delete previous character",
            EditDeleteForward => "Delete next character",
            EditCaretLeft => "Caret left",
            EditCaretRight => "Caret right",
            EditCaretHome => "Caret to start",
            EditCaretEnd => "Caret to end",
            ToggleHelp => "Toggle help",
            CloseHelp => "Close help",
            Quit => "Quit",
            Unbound => "Unbound",
        }
    }
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Command::*;

        Ok(match s {
            "SelectNext" => SelectNext,
            "SelectPrevious" => SelectPrevious,
            "BeginEdit" => BeginEdit,
            "DeleteSelected" => DeleteSelected,
            "ResetSentence" => ResetSentence,
            "SubmitSentence" => SubmitSentence,
            "CommitEdit" => CommitEdit,
            "CancelEdit" => CancelEdit,
            "EditDeleteBackward" => EditDeleteBackward,
            "EditDeleteForward" => EditDeleteForward,
            "EditCaretLeft" => EditCaretLeft,
            "EditCaretRight" => EditCaretRight,
            "EditCaretHome" => EditCaretHome,
            "EditCaretEnd" => EditCaretEnd,
            "ToggleHelp" => ToggleHelp,
            "CloseHelp" => CloseHelp,
            "Quit" => Quit,
            "Unbound" => Unbound,
            _ => return Err(()),
        })
    }
}
