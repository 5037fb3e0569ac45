//! Keyboard and mouse input to messages
//!
//! Keys go through the keymap first. What the keymap doesn't claim is typed
//! into the inline editor when one is open. Clicks are resolved against the
//! last frame's layout.

use labelfast::geometry::Button;
use labelfast::keymap::{KeyAction, KeyContext, Keymap, Keystroke, Modifiers};
use labelfast::messages::{EditMsg, Msg, SelectionMsg, SessionMsg, UiMsg};
use labelfast::model::AppModel;

use crate::view::ViewState;

/// What a mouse press landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// A token chip
    Chip(usize),
    /// The chip currently being edited
    Editor,
    Button(Button),
    /// Anywhere else
    Background,
}

/// Resolve a window point against the last frame
pub fn pointer_target(model: &AppModel, view: &ViewState, x: f32, y: f32) -> PointerTarget {
    if let Some(button) = view.layout.button_at(x, y) {
        return PointerTarget::Button(button);
    }
    match view.chip_at(x, y) {
        Some(index) if model.session.edit_session().map(|e| e.target_index) == Some(index) => {
            PointerTarget::Editor
        }
        Some(index) => PointerTarget::Chip(index),
        None => PointerTarget::Background,
    }
}

/// Messages for a key press
///
/// `text` is what the platform produced for the press, if any. Some layouts
/// produce more than one character for a single key.
pub fn key_msgs(
    keymap: &Keymap,
    model: &AppModel,
    keystroke: Option<Keystroke>,
    mods: Modifiers,
    text: Option<&str>,
) -> Vec<Msg> {
    let ctx = KeyContext::from_model(model);

    if let Some(keystroke) = keystroke {
        match keymap.handle_keystroke(keystroke, &ctx) {
            KeyAction::Execute(command) => {
                tracing::debug!(%keystroke, ?command, "key");
                return command.to_msgs();
            }
            KeyAction::Swallowed => return Vec::new(),
            KeyAction::NoMatch => {}
        }
    }

    if !mods.is_text_entry() {
        return Vec::new();
    }
    text_msgs(model, text.unwrap_or_default())
}

/// Messages for text typed into the inline editor, from a key or an input method
pub fn text_msgs(model: &AppModel, text: &str) -> Vec<Msg> {
    if !model.session.is_editing() || model.ui.help_open {
        return Vec::new();
    }
    text.chars()
        .filter(|ch| !ch.is_control())
        .map(|ch| Msg::Edit(EditMsg::InsertChar(ch)))
        .collect()
}

/// Messages for a left click
///
/// While editing, any click outside the editor ends the edit on the next
/// tick; the click itself still goes through, so a button pressed while
/// editing acts on the editing state.
pub fn click_msgs(model: &AppModel, target: PointerTarget, double_click: bool) -> Vec<Msg> {
    if model.session.is_completed() {
        return Vec::new();
    }
    if model.ui.help_open {
        return vec![Msg::Ui(UiMsg::HideHelp)];
    }

    if model.session.is_editing() {
        return match target {
            PointerTarget::Editor => Vec::new(),
            PointerTarget::Button(button) => {
                vec![Msg::Edit(EditMsg::FocusLost), button_msg(button)]
            }
            PointerTarget::Chip(_) | PointerTarget::Background => {
                vec![Msg::Edit(EditMsg::FocusLost)]
            }
        };
    }

    match target {
        PointerTarget::Chip(index) if double_click => {
            vec![Msg::Edit(EditMsg::BeginAt(index as isize))]
        }
        PointerTarget::Chip(index) => vec![Msg::Selection(SelectionMsg::Select(index as isize))],
        PointerTarget::Button(button) => vec![button_msg(button)],
        PointerTarget::Editor | PointerTarget::Background => Vec::new(),
    }
}

fn button_msg(button: Button) -> Msg {
    match button {
        Button::Submit => Msg::Session(SessionMsg::Submit),
        Button::Reset => Msg::Session(SessionMsg::Reset),
        Button::Help => Msg::Ui(UiMsg::ToggleHelp),
    }
}
