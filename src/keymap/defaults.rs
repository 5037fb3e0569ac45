//! Default keybindings
//!
//! The shipped bindings live in `keymap.yaml` at the crate root and are
//! embedded at compile time; `default_bindings` is the hardcoded fallback.

use std::path::{Path, PathBuf};

use super::binding::Keybinding;
use super::command::Command;
use super::config::{load_keymap_file, parse_keymap_yaml};
use super::context::Condition;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Load and merge keymaps: defaults + overrides
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap
/// 2. keymap.yaml in the current directory
/// 3. User config at ~/.config/labelfast/keymap.yaml
pub fn load_default_keymap() -> Vec<Keybinding> {
    let mut overrides = vec![PathBuf::from("keymap.yaml")];
    overrides.extend(crate::config_paths::keymap_file());
    load_keymap_layers(&overrides)
}

/// Embedded defaults with each existing override file merged on top
pub fn load_keymap_layers(overrides: &[PathBuf]) -> Vec<Keybinding> {
    let mut bindings = match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::info!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    };

    for path in overrides {
        if let Some(layer) = load_override(path) {
            bindings = merge_bindings(bindings, layer);
        }
    }

    bindings
}

fn load_override(path: &Path) -> Option<Vec<Keybinding>> {
    if !path.exists() {
        return None;
    }
    match load_keymap_file(path) {
        Ok(layer) => {
            tracing::info!(
                "Merging keymap from {} ({} bindings)",
                path.display(),
                layer.len()
            );
            Some(layer)
        }
        Err(e) => {
            tracing::warn!("Failed to load keymap from {}: {}", path.display(), e);
            None
        }
    }
}

/// Merge override bindings into base bindings
///
/// - same keystroke + conditions → replaces the base binding
/// - command `Unbound` → removes every base binding on that keystroke
/// - otherwise → added
pub fn merge_bindings(base: Vec<Keybinding>, overrides: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for binding in overrides {
        if binding.command == Command::Unbound {
            result.retain(|b| b.keystroke != binding.keystroke);
            continue;
        }

        match result
            .iter()
            .position(|b| b.keystroke == binding.keystroke && b.when == binding.when)
        {
            Some(idx) => result[idx] = binding,
            None => result.push(binding),
        }
    }

    result
}

/// Hardcoded copy of the shipped keymap
pub fn default_bindings() -> Vec<Keybinding> {
    use Condition::*;

    let none = Modifiers::NONE;
    let shift = Modifiers::SHIFT;

    vec![
        bind(KeyCode::Space, none, Command::SelectNext).when(vec![NotEditing]),
        bind(KeyCode::Right, none, Command::SelectNext).when(vec![NotEditing]),
        bind(KeyCode::Space, shift, Command::SelectPrevious).when(vec![NotEditing]),
        bind(KeyCode::Left, none, Command::SelectPrevious).when(vec![NotEditing]),
        bind(KeyCode::Enter, none, Command::BeginEdit).when(vec![NotEditing]),
        bind(KeyCode::F(2), none, Command::BeginEdit).when(vec![NotEditing]),
        bind(KeyCode::Delete, none, Command::DeleteSelected).when(vec![NotEditing]),
        bind(KeyCode::Backspace, none, Command::DeleteSelected).when(vec![NotEditing]),
        bind(KeyCode::Escape, none, Command::ResetSentence).when(vec![NotEditing, HelpClosed]),
        bind(KeyCode::Enter, Modifiers::CTRL, Command::SubmitSentence),
        bind(KeyCode::Enter, none, Command::CommitEdit).when(vec![Editing]),
        bind(KeyCode::Escape, none, Command::CancelEdit).when(vec![Editing]),
        bind(KeyCode::Backspace, none, Command::EditDeleteBackward).when(vec![Editing]),
        bind(KeyCode::Delete, none, Command::EditDeleteForward).when(vec![Editing]),
        bind(KeyCode::Left, none, Command::EditCaretLeft).when(vec![Editing]),
        bind(KeyCode::Right, none, Command::EditCaretRight).when(vec![Editing]),
        bind(KeyCode::Home, none, Command::EditCaretHome).when(vec![Editing]),
        bind(KeyCode::End, none, Command::EditCaretEnd).when(vec![Editing]),
        bind(KeyCode::F(1), none, Command::ToggleHelp),
        bind(KeyCode::Char('?'), none, Command::ToggleHelp).when(vec![NotEditing]),
        bind(KeyCode::Char('?'), shift, Command::ToggleHelp).when(vec![NotEditing]),
        bind(KeyCode::Escape, none, Command::CloseHelp).when(vec![HelpOpen]),
        bind(KeyCode::Char('q'), Modifiers::cmd(), Command::Quit),
    ]
}

fn bind(key: KeyCode, mods: Modifiers, command: Command) -> Keybinding {
    Keybinding::new(Keystroke::new(key, mods), command)
}
