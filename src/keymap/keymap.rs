//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::context::{Condition, KeyContext};
use super::types::Keystroke;

/// Result of handling a keystroke
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Execute this command
    Execute(Command),
    /// A binding matched, but its command is blocked in this state
    Swallowed,
    /// No binding matches this keystroke
    NoMatch,
}

/// All keybindings, indexed by keystroke
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<Keybinding>,
    /// Indices into `bindings`; several bindings may share a keystroke
    /// with different conditions
    lookup: HashMap<Keystroke, Vec<usize>>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    pub fn add_binding(&mut self, binding: Keybinding) {
        let idx = self.bindings.len();
        self.lookup.entry(binding.keystroke).or_default().push(idx);
        self.bindings.push(binding);
    }

    /// Resolve a keystroke in the given context
    ///
    /// While help is open only the help and quit commands get through;
    /// once completed only quit does.
    pub fn handle_keystroke(&self, keystroke: Keystroke, ctx: &KeyContext) -> KeyAction {
        match self.lookup_with_context(&keystroke, Some(ctx)) {
            Some(command) if command.is_available(ctx) => KeyAction::Execute(command),
            Some(command) => {
                tracing::trace!(%keystroke, ?command, "keystroke swallowed");
                KeyAction::Swallowed
            }
            None => KeyAction::NoMatch,
        }
    }

    /// Look up a keystroke ignoring conditional bindings
    pub fn lookup(&self, keystroke: &Keystroke) -> Option<Command> {
        self.lookup_with_context(keystroke, None)
    }

    /// Look up a keystroke, preferring conditional bindings that match
    ///
    /// Without a context, conditional bindings are skipped.
    pub fn lookup_with_context(
        &self,
        keystroke: &Keystroke,
        context: Option<&KeyContext>,
    ) -> Option<Command> {
        let indices = self.lookup.get(keystroke)?;

        let conditional = context.and_then(|ctx| {
            indices.iter().map(|&i| &self.bindings[i]).find(|b| {
                b.when
                    .as_deref()
                    .is_some_and(|conds| Condition::evaluate_all(conds, ctx))
            })
        });

        conditional
            .or_else(|| {
                indices
                    .iter()
                    .map(|&i| &self.bindings[i])
                    .find(|b| b.when.is_none())
            })
            .map(|b| b.command)
    }

    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }

    /// All key labels bound to a command, e.g. "Space / →"
    pub fn display_for(&self, command: Command) -> Option<String> {
        let mut labels: Vec<String> = Vec::new();
        for binding in self.bindings.iter().filter(|b| b.command == command) {
            let label = binding.display_string();
            if !labels.contains(&label) {
                labels.push(label);
            }
        }
        if labels.is_empty() {
            None
        } else {
            Some(labels.join(" / "))
        }
    }
}
