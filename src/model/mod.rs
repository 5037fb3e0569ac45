//! Application model - the complete state of the annotation tool
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod corrections;
pub mod edit;
pub mod selection;
pub mod session;
pub mod ui;

pub use corrections::CorrectionList;
pub use edit::{EditId, EditSession, EditState};
pub use session::{CommitOutcome, Phase, SentenceState, SessionState, Submission};
pub use ui::{FocusTarget, UiState};

use crate::config::{AppConfig, TextDirection};
use crate::data::SentencePair;
use crate::geometry::Direction;
use crate::theme::{load_theme, Theme};

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Sentence pairs and the correction state of the current one
    pub session: SessionState,
    /// Focus and help overlay
    pub ui: UiState,
    /// Theme for colors and styling
    pub theme: Theme,
    /// Persisted configuration
    pub config: AppConfig,
    /// Window dimensions
    pub window_size: (u32, u32),
    /// Line height in pixels
    pub line_height: usize,
    /// Average glyph advance in pixels
    pub char_width: f32,
}

impl AppModel {
    /// Create a model positioned on pair `start` (0-indexed)
    pub fn new(
        window_width: u32,
        window_height: u32,
        pairs: Vec<SentencePair>,
        start: usize,
        config: AppConfig,
    ) -> Self {
        let theme = match load_theme(&config.theme) {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!("Failed to load theme '{}': {}, using default", config.theme, e);
                Theme::default()
            }
        };

        let session = SessionState::starting_at(pairs, start);
        tracing::info!("Session started: {}", session.status_text());

        Self {
            session,
            ui: UiState::new(),
            theme,
            config,
            window_size: (window_width, window_height),
            line_height: 20,
            char_width: 10.0,
        }
    }

    /// Model with default theme and config, for headless use
    pub fn with_pairs(pairs: Vec<SentencePair>) -> Self {
        Self {
            session: SessionState::new(pairs),
            ui: UiState::new(),
            theme: Theme::default(),
            config: AppConfig::default(),
            window_size: (800, 600),
            line_height: 20,
            char_width: 10.0,
        }
    }

    pub fn set_char_width(&mut self, char_width: f32) {
        self.char_width = char_width;
    }

    /// Layout direction for the current sentence
    pub fn text_direction(&self) -> Direction {
        match self.config.direction {
            TextDirection::Ltr => Direction::Ltr,
            TextDirection::Rtl => Direction::Rtl,
            TextDirection::Auto => self
                .session
                .current_pair()
                .map(|p| Direction::detect(&p.target))
                .unwrap_or(Direction::Ltr),
        }
    }

    /// Current sentence, if not completed
    pub fn sentence(&self) -> Option<&SentenceState> {
        self.session.sentence()
    }

    pub fn sentence_mut(&mut self) -> Option<&mut SentenceState> {
        self.session.sentence_mut()
    }
}
