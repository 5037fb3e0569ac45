//! Inline word edit state
//!
//! While a word is being edited, the pending text lives here and the
//! correction list is left untouched until commit or cancel.

/// Generation number identifying one edit session
pub type EditId = u64;

/// The pending edit of a single token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    /// Generation number, unique per session
    pub id: EditId,
    /// Index of the token being edited
    pub target_index: usize,
    /// Token value when the edit began
    pub original: String,
    text: String,
    /// Caret position in chars
    caret: usize,
    /// Whole text is selected; the next insertion replaces it
    replace_all: bool,
}

impl EditSession {
    /// Start editing `value`, with the whole text selected
    pub fn new(id: EditId, target_index: usize, value: &str) -> Self {
        Self {
            id,
            target_index,
            original: value.to_string(),
            text: value.to_string(),
            caret: value.chars().count(),
            replace_all: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn is_all_selected(&self) -> bool {
        self.replace_all && !self.text.is_empty()
    }

    pub fn is_modified(&self) -> bool {
        self.text != self.original
    }

    /// The value a commit would store (trimmed)
    pub fn committed_value(&self) -> &str {
        self.text.trim()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Drop the selected text if everything is selected
    fn take_selection(&mut self) -> bool {
        if self.replace_all {
            self.replace_all = false;
            if !self.text.is_empty() {
                self.text.clear();
                self.caret = 0;
                return true;
            }
        }
        false
    }

    /// Insert a character at the caret
    ///
    /// Whitespace is rejected: a token never contains it.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if ch.is_whitespace() || ch.is_control() {
            return false;
        }
        self.take_selection();
        let at = self.byte_offset(self.caret);
        self.text.insert(at, ch);
        self.caret += 1;
        true
    }

    /// Delete the character before the caret (backspace)
    pub fn delete_backward(&mut self) -> bool {
        if self.take_selection() {
            return true;
        }
        if self.caret == 0 {
            return false;
        }
        let at = self.byte_offset(self.caret - 1);
        self.text.remove(at);
        self.caret -= 1;
        true
    }

    /// Delete the character at the caret
    pub fn delete_forward(&mut self) -> bool {
        if self.take_selection() {
            return true;
        }
        if self.caret >= self.char_len() {
            return false;
        }
        let at = self.byte_offset(self.caret);
        self.text.remove(at);
        true
    }

    pub fn caret_left(&mut self) {
        if self.replace_all {
            self.replace_all = false;
            self.caret = 0;
            return;
        }
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn caret_right(&mut self) {
        if self.replace_all {
            self.replace_all = false;
            self.caret = self.char_len();
            return;
        }
        self.caret = (self.caret + 1).min(self.char_len());
    }

    pub fn caret_home(&mut self) {
        self.replace_all = false;
        self.caret = 0;
    }

    pub fn caret_end(&mut self) {
        self.replace_all = false;
        self.caret = self.char_len();
    }

    /// Text before and after the caret, for drawing
    pub fn split_at_caret(&self) -> (&str, &str) {
        self.text.split_at(self.byte_offset(self.caret))
    }
}

/// Whether a token is being edited
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    Editing(EditSession),
}

impl EditState {
    #[inline]
    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing(_))
    }

    pub fn session(&self) -> Option<&EditSession> {
        match self {
            EditState::Editing(session) => Some(session),
            EditState::Idle => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut EditSession> {
        match self {
            EditState::Editing(session) => Some(session),
            EditState::Idle => None,
        }
    }

    /// End the session, returning it
    pub fn take(&mut self) -> Option<EditSession> {
        match std::mem::take(self) {
            EditState::Editing(session) => Some(session),
            EditState::Idle => None,
        }
    }
}
