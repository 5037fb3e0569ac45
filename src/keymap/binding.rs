//! A keystroke bound to a command

use super::command::Command;
use super::context::Condition;
use super::types::Keystroke;

/// Maps one keystroke to a command, optionally gated by conditions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub keystroke: Keystroke,
    pub command: Command,
    /// All must hold for the binding to fire
    pub when: Option<Vec<Condition>>,
}

impl Keybinding {
    pub fn new(keystroke: Keystroke, command: Command) -> Self {
        Self {
            keystroke,
            command,
            when: None,
        }
    }

    /// Gate this binding on conditions (builder pattern)
    pub fn when(mut self, conditions: Vec<Condition>) -> Self {
        self.when = if conditions.is_empty() {
            None
        } else {
            Some(conditions)
        };
        self
    }

    pub fn is_conditional(&self) -> bool {
        self.when.is_some()
    }

    pub fn display_string(&self) -> String {
        self.keystroke.display_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::types::{KeyCode, Modifiers};

    #[test]
    fn test_empty_conditions_are_unconditional() {
        let stroke = Keystroke::new(KeyCode::Enter, Modifiers::CTRL);
        let binding = Keybinding::new(stroke, Command::SubmitSentence).when(vec![]);
        assert!(!binding.is_conditional());

        let gated = Keybinding::new(stroke, Command::SubmitSentence)
            .when(vec![Condition::NotEditing]);
        assert!(gated.is_conditional());
        assert_eq!(gated.display_string(), "Ctrl+Enter");
    }
}
