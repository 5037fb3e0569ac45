//! Configurable keyboard mapping
//!
//! Keystrokes resolve to commands through a data-driven binding table:
//! - platform-aware modifiers (Cmd on macOS, Ctrl elsewhere)
//! - bindings gated on state (editing, help open, completed)
//! - user overrides via YAML
//!
//! ```text
//! winit::KeyEvent → Keystroke → Keymap::handle_keystroke() → Command → Vec<Msg>
//! ```

mod binding;
mod command;
mod config;
mod context;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;
mod winit_adapter;

pub use binding::Keybinding;
pub use command::Command;
pub use config::{load_keymap_file, parse_key_string, parse_keymap_yaml, KeymapError};
pub use context::{Condition, KeyContext};
pub use defaults::{
    default_bindings, get_default_keymap_yaml, load_default_keymap, load_keymap_layers,
    merge_bindings,
};
pub use keymap::{KeyAction, Keymap};
pub use types::{KeyCode, Keystroke, Modifiers};
pub use winit_adapter::keystroke_from_winit;

#[cfg(test)]
mod tests;
