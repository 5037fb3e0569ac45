//! Correction list - the ordered token sequence being corrected

use crate::tokenize::{join_tokens, tokenize};

/// Ordered, mutable list of word tokens
///
/// Tokens are only ever replaced in place or removed; order never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorrectionList {
    tokens: Vec<String>,
}

impl CorrectionList {
    /// Tokenize a sentence into a fresh list
    pub fn from_sentence(sentence: &str) -> Self {
        Self {
            tokens: tokenize(sentence),
        }
    }

    /// Build a list from tokens that are already split
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.tokens.len()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Index of the last token, if any
    pub fn last_index(&self) -> Option<usize> {
        self.tokens.len().checked_sub(1)
    }

    /// Replace the token at `index`, returning the previous value
    pub fn replace(&mut self, index: usize, token: String) -> Option<String> {
        let slot = self.tokens.get_mut(index)?;
        Some(std::mem::replace(slot, token))
    }

    /// Remove the token at `index`, shifting later tokens down
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.tokens.len() {
            Some(self.tokens.remove(index))
        } else {
            None
        }
    }

    /// The corrected sentence: tokens joined with single spaces
    pub fn joined(&self) -> String {
        join_tokens(&self.tokens)
    }
}
