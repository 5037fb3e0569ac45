//! Context system for conditional keybindings
//!
//! The same key can mean different things depending on state: Escape
//! cancels an edit, closes help, or resets the sentence.

use serde::Deserialize;

use crate::model::AppModel;

/// Snapshot of the model state that bindings can be gated on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyContext {
    /// A word is being edited inline
    pub editing: bool,
    /// The help overlay is visible
    pub help_open: bool,
    /// A token is selected
    pub has_selection: bool,
    /// Every sentence has been processed
    pub completed: bool,
}

impl KeyContext {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            editing: model.session.is_editing(),
            help_open: model.ui.help_open,
            has_selection: model.session.selection().is_some(),
            completed: model.session.is_completed(),
        }
    }
}

/// Conditions that can be attached to keybindings
///
/// Multiple conditions on a binding are ANDed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Editing,
    NotEditing,
    HelpOpen,
    HelpClosed,
    HasSelection,
    NoSelection,
    Completed,
    Active,
}

impl Condition {
    /// Evaluate this condition against the current context
    pub fn evaluate(self, ctx: &KeyContext) -> bool {
        match self {
            Condition::Editing => ctx.editing,
            Condition::NotEditing => !ctx.editing,
            Condition::HelpOpen => ctx.help_open,
            Condition::HelpClosed => !ctx.help_open,
            Condition::HasSelection => ctx.has_selection,
            Condition::NoSelection => !ctx.has_selection,
            Condition::Completed => ctx.completed,
            Condition::Active => !ctx.completed,
        }
    }

    /// Evaluate all conditions (AND logic)
    pub fn evaluate_all(conditions: &[Condition], ctx: &KeyContext) -> bool {
        conditions.iter().all(|c| c.evaluate(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SentencePair;

    #[test]
    fn test_context_from_model() {
        let mut model = AppModel::with_pairs(vec![SentencePair::new("s", "a b")]);
        let ctx = KeyContext::from_model(&model);
        assert!(ctx.has_selection);
        assert!(!ctx.editing);
        assert!(!ctx.completed);

        model.session.begin_edit();
        assert!(KeyContext::from_model(&model).editing);

        model.session.load(5);
        let ctx = KeyContext::from_model(&model);
        assert!(ctx.completed);
        assert!(!ctx.has_selection);
    }

    #[test]
    fn test_condition_pairs_are_complementary() {
        let ctx = KeyContext {
            editing: true,
            help_open: false,
            has_selection: true,
            completed: false,
        };
        assert!(Condition::Editing.evaluate(&ctx));
        assert!(!Condition::NotEditing.evaluate(&ctx));
        assert!(Condition::HelpClosed.evaluate(&ctx));
        assert!(!Condition::HelpOpen.evaluate(&ctx));
        assert!(Condition::HasSelection.evaluate(&ctx));
        assert!(Condition::Active.evaluate(&ctx));
        assert!(!Condition::Completed.evaluate(&ctx));
    }

    #[test]
    fn test_evaluate_all_and_logic() {
        let ctx = KeyContext::default();
        assert!(Condition::evaluate_all(&[], &ctx));
        assert!(Condition::evaluate_all(
            &[Condition::NotEditing, Condition::HelpClosed],
            &ctx
        ));
        assert!(!Condition::evaluate_all(
            &[Condition::NotEditing, Condition::HelpOpen],
            &ctx
        ));
    }
}
