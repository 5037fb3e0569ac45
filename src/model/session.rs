//! Sentence session state machine
//!
//! `SessionState` walks through the sentence pairs; `SentenceState` holds the
//! per-sentence correction list, selection and edit session. Every operation
//! here is total: invalid requests are clamps or no-ops, never errors.

use serde::Serialize;

use super::corrections::CorrectionList;
use super::edit::{EditId, EditSession, EditState};
use super::selection::{clamp_index, wrap_index};
use crate::data::SentencePair;

/// What a submit hands to the submission sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub original_source: String,
    pub original_target: String,
    pub corrected_target: String,
}

/// How a commit changed the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The token at `index` was replaced
    Replaced { index: usize },
    /// The edit emptied the token, so it was removed
    Removed { index: usize },
}

/// State of the sentence currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceState {
    /// Index into the pair list
    pub index: usize,
    /// Target sentence as loaded, restored by reset
    pub baseline: String,
    pub corrections: CorrectionList,
    pub selection: Option<usize>,
    pub edit: EditState,
}

impl SentenceState {
    /// Tokenize `baseline` and select the first token
    pub fn fresh(index: usize, baseline: &str) -> Self {
        let corrections = CorrectionList::from_sentence(baseline);
        let selection = if corrections.is_empty() { None } else { Some(0) };
        Self {
            index,
            baseline: baseline.to_string(),
            corrections,
            selection,
            edit: EditState::Idle,
        }
    }

    #[inline]
    pub fn is_editing(&self) -> bool {
        self.edit.is_editing()
    }

    /// Select a token, clamping the request into range
    ///
    /// Returns false (and changes nothing) while editing.
    pub fn select(&mut self, requested: isize) -> bool {
        if self.is_editing() {
            return false;
        }
        self.selection = clamp_index(requested, self.corrections.len());
        true
    }

    /// Step the selection by `direction`, wrapping at the ends
    pub fn move_selection(&mut self, direction: isize) -> bool {
        if self.is_editing() || self.corrections.is_empty() {
            return false;
        }
        let next = wrap_index(self.selection, direction, self.corrections.len());
        self.selection = next;
        true
    }

    /// Begin editing the selected token
    pub fn begin_edit(&mut self, id: EditId) -> bool {
        if self.is_editing() {
            return false;
        }
        let Some(index) = self.selection else {
            return false;
        };
        let Some(value) = self.corrections.get(index) else {
            return false;
        };
        self.edit = EditState::Editing(EditSession::new(id, index, value));
        true
    }

    /// Apply the pending edit and move the selection on
    ///
    /// A non-empty value replaces the token and selects the next one (or
    /// stays on the last). An empty value removes the token.
    pub fn commit_edit(&mut self) -> Option<CommitOutcome> {
        let session = self.edit.take()?;
        let index = session.target_index;
        let value = session.committed_value();

        if !value.is_empty() {
            self.corrections.replace(index, value.to_string());
            let next = if index + 1 < self.corrections.len() {
                index + 1
            } else {
                index
            };
            self.selection = clamp_index(next as isize, self.corrections.len());
            return Some(CommitOutcome::Replaced { index });
        }

        self.corrections.remove(index);
        self.selection = if self.corrections.is_empty() {
            None
        } else if self.corrections.contains_index(index) {
            Some(index)
        } else {
            self.corrections.last_index()
        };
        Some(CommitOutcome::Removed { index })
    }

    /// Discard the pending edit, returning the edited index
    pub fn cancel_edit(&mut self) -> Option<usize> {
        let session = self.edit.take()?;
        self.selection = clamp_index(session.target_index as isize, self.corrections.len());
        Some(session.target_index)
    }

    /// Remove the token at `index`
    ///
    /// No-op while editing or when `index` is out of range.
    pub fn delete_at(&mut self, index: isize) -> bool {
        if self.is_editing() || index < 0 {
            return false;
        }
        let index = index as usize;
        if self.corrections.remove(index).is_none() {
            return false;
        }
        self.selection = if self.corrections.is_empty() {
            None
        } else if index >= self.corrections.len() {
            self.corrections.last_index()
        } else {
            Some(index)
        };
        true
    }

    /// Remove the selected token
    pub fn delete_selected(&mut self) -> bool {
        match self.selection {
            Some(index) => self.delete_at(index as isize),
            None => false,
        }
    }

    /// Re-tokenize the baseline, discarding all corrections
    pub fn reset(&mut self) -> bool {
        if self.is_editing() {
            return false;
        }
        let index = self.index;
        let baseline = std::mem::take(&mut self.baseline);
        *self = Self::fresh(index, &baseline);
        true
    }

    /// Check the selection/edit invariants, describing the first violation
    pub fn check_invariants(&self) -> Result<(), String> {
        let len = self.corrections.len();
        match self.selection {
            Some(i) if i >= len => {
                return Err(format!("selection {} out of range (len {})", i, len));
            }
            None if len > 0 => {
                return Err(format!("no selection with {} tokens", len));
            }
            _ => {}
        }
        if let Some(session) = self.edit.session() {
            if session.target_index >= len {
                return Err(format!(
                    "edit target {} out of range (len {})",
                    session.target_index, len
                ));
            }
        }
        if let Some(token) = self
            .corrections
            .tokens()
            .iter()
            .find(|t| t.is_empty() || t.chars().any(char::is_whitespace))
        {
            return Err(format!("invalid token {:?}", token));
        }
        Ok(())
    }
}

/// Whether there is a sentence to work on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Active(SentenceState),
    /// Every pair has been processed; terminal
    Completed,
}

/// The walk through all sentence pairs
#[derive(Debug, Clone)]
pub struct SessionState {
    pairs: Vec<SentencePair>,
    pub phase: Phase,
    next_edit_id: EditId,
}

impl SessionState {
    /// Create a session positioned on the first pair
    pub fn new(pairs: Vec<SentencePair>) -> Self {
        Self::starting_at(pairs, 0)
    }

    /// Create a session positioned on pair `index`
    pub fn starting_at(pairs: Vec<SentencePair>, index: usize) -> Self {
        let phase = Self::phase_for(&pairs, index);
        Self {
            pairs,
            phase,
            next_edit_id: 1,
        }
    }

    /// Load pair `index`, or complete when past the end
    ///
    /// Completed is terminal: once reached, loading does nothing.
    pub fn load(&mut self, index: usize) {
        if self.is_completed() {
            return;
        }
        self.phase = Self::phase_for(&self.pairs, index);
    }

    fn phase_for(pairs: &[SentencePair], index: usize) -> Phase {
        match pairs.get(index) {
            Some(pair) => Phase::Active(SentenceState::fresh(index, &pair.target)),
            None => Phase::Completed,
        }
    }

    pub fn pairs(&self) -> &[SentencePair] {
        &self.pairs
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        matches!(self.phase, Phase::Completed)
    }

    pub fn sentence(&self) -> Option<&SentenceState> {
        match &self.phase {
            Phase::Active(sentence) => Some(sentence),
            Phase::Completed => None,
        }
    }

    pub fn sentence_mut(&mut self) -> Option<&mut SentenceState> {
        match &mut self.phase {
            Phase::Active(sentence) => Some(sentence),
            Phase::Completed => None,
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.sentence().map(|s| s.index)
    }

    pub fn current_pair(&self) -> Option<&SentencePair> {
        self.current_index().and_then(|i| self.pairs.get(i))
    }

    pub fn is_editing(&self) -> bool {
        self.sentence().is_some_and(SentenceState::is_editing)
    }

    pub fn selection(&self) -> Option<usize> {
        self.sentence().and_then(|s| s.selection)
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.sentence().and_then(|s| s.edit.session())
    }

    pub fn edit_session_mut(&mut self) -> Option<&mut EditSession> {
        self.sentence_mut().and_then(|s| s.edit.session_mut())
    }

    /// Begin editing the selected token with a fresh session id
    pub fn begin_edit(&mut self) -> Option<EditId> {
        let id = self.next_edit_id;
        let sentence = self.sentence_mut()?;
        if !sentence.begin_edit(id) {
            return None;
        }
        self.next_edit_id += 1;
        Some(id)
    }

    /// Build the submission for the current sentence
    ///
    /// None when completed or while editing.
    pub fn submission(&self) -> Option<Submission> {
        let sentence = self.sentence()?;
        if sentence.is_editing() {
            return None;
        }
        let pair = self.pairs.get(sentence.index)?;
        Some(Submission {
            original_source: pair.source.clone(),
            original_target: pair.target.clone(),
            corrected_target: sentence.corrections.joined(),
        })
    }

    /// Status line text, e.g. "Sentence 2 of 7"
    pub fn status_text(&self) -> String {
        match self.current_index() {
            Some(i) => format!("Sentence {} of {}", i + 1, self.pairs.len()),
            None => "All sentences have been processed.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(text: &str) -> SentenceState {
        SentenceState::fresh(0, text)
    }

    #[test]
    fn test_fresh_selects_first() {
        assert_eq!(sentence("a b").selection, Some(0));
        assert_eq!(sentence("   ").selection, None);
    }

    #[test]
    fn test_commit_replaced_moves_next() {
        let mut s = sentence("a b c");
        s.select(1);
        s.begin_edit(1);
        s.edit.session_mut().unwrap().insert_char('X');
        assert_eq!(s.commit_edit(), Some(CommitOutcome::Replaced { index: 1 }));
        assert_eq!(s.corrections.tokens(), &["a", "X", "c"]);
        assert_eq!(s.selection, Some(2));
    }

    #[test]
    fn test_commit_replaced_last_stays() {
        let mut s = sentence("a b");
        s.select(1);
        s.begin_edit(1);
        assert_eq!(s.commit_edit(), Some(CommitOutcome::Replaced { index: 1 }));
        assert_eq!(s.selection, Some(1));
    }

    #[test]
    fn test_commit_empty_removes() {
        let mut s = sentence("a b c");
        s.select(1);
        s.begin_edit(1);
        s.edit.session_mut().unwrap().delete_backward();
        assert_eq!(s.commit_edit(), Some(CommitOutcome::Removed { index: 1 }));
        assert_eq!(s.corrections.tokens(), &["a", "c"]);
        assert_eq!(s.selection, Some(1));
    }

    #[test]
    fn test_invariants_hold_after_operations() {
        let mut s = sentence("a b c");
        s.delete_at(2);
        s.move_selection(1);
        s.begin_edit(1);
        s.commit_edit();
        assert!(s.check_invariants().is_ok());
    }

    #[test]
    fn test_invariant_violation_reported() {
        let mut s = sentence("a");
        s.selection = Some(4);
        assert!(s.check_invariants().is_err());
    }

    #[test]
    fn test_session_edit_ids_increase() {
        let mut session = SessionState::new(vec![SentencePair::new("s", "a b")]);
        let first = session.begin_edit().unwrap();
        session.sentence_mut().unwrap().cancel_edit();
        let second = session.begin_edit().unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_status_text() {
        let pairs = vec![SentencePair::new("s1", "t1"), SentencePair::new("s2", "t2")];
        let mut session = SessionState::new(pairs);
        assert_eq!(session.status_text(), "Sentence 1 of 2");
        session.load(1);
        assert_eq!(session.status_text(), "Sentence 2 of 2");
        session.load(2);
        assert!(session.is_completed());
    }

    #[test]
    fn test_load_after_completion_stays_completed() {
        let mut session = SessionState::new(vec![SentencePair::new("A", "w1")]);
        session.load(1);
        assert!(session.is_completed());

        session.load(0);
        assert!(session.is_completed());
        assert_eq!(session.sentence(), None);
    }

    #[test]
    fn test_start_past_end_is_completed() {
        let session = SessionState::starting_at(vec![SentencePair::new("A", "w1")], 3);
        assert!(session.is_completed());
        assert_eq!(session.status_text(), "All sentences have been processed.");
    }

    #[test]
    fn test_submission_serializes_camel_case() {
        let session = SessionState::new(vec![SentencePair::new("A", "w1 w2")]);
        let json = serde_json::to_string(&session.submission().unwrap()).unwrap();
        assert!(json.contains("\"originalSource\":\"A\""));
        assert!(json.contains("\"correctedTarget\":\"w1 w2\""));
    }
}
