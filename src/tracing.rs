//! Logging setup and state snapshots for development diagnostics
//!
//! Configure console output via RUST_LOG:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=message=debug,session=debug` - scoped filtering
//! - `RUST_LOG=labelfast::update=debug` - module-level filtering
//!
//! Logs are also written to `~/.config/labelfast/logs/labelfast.log` with
//! daily rotation, always at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::SessionState;

/// Initialize tracing subscriber with console and file logging
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "labelfast.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of the correction state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub sentence: Option<usize>,
    pub token_count: usize,
    pub selection: Option<usize>,
    /// Edit target and buffer, if editing
    pub edit: Option<(usize, String)>,
}

impl SessionSnapshot {
    pub fn from_session(session: &SessionState) -> Self {
        let sentence = session.sentence();
        Self {
            sentence: sentence.map(|s| s.index),
            token_count: sentence.map_or(0, |s| s.corrections.len()),
            selection: session.selection(),
            edit: session
                .edit_session()
                .map(|e| (e.target_index, e.text().to_string())),
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &SessionSnapshot) -> Option<String> {
        if self.sentence != other.sentence {
            return Some(format!("sentence: {:?} → {:?}", self.sentence, other.sentence));
        }

        let mut changes = Vec::new();
        if self.token_count != other.token_count {
            changes.push(format!(
                "tokens: {} → {}",
                self.token_count, other.token_count
            ));
        }
        if self.selection != other.selection {
            changes.push(format!(
                "selection: {:?} → {:?}",
                self.selection, other.selection
            ));
        }
        match (&self.edit, &other.edit) {
            (None, Some((i, _))) => changes.push(format!("edit started at #{}", i)),
            (Some((i, _)), None) => changes.push(format!("edit ended at #{}", i)),
            (Some((_, a)), Some((_, b))) if a != b => {
                changes.push(format!("buffer: {:?} → {:?}", a, b))
            }
            _ => {}
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SentencePair;

    #[test]
    fn test_diff_reports_selection_change() {
        let mut session = SessionState::new(vec![SentencePair::new("s", "a b c")]);
        let before = SessionSnapshot::from_session(&session);
        session.sentence_mut().unwrap().select(2);
        let after = SessionSnapshot::from_session(&session);
        assert_eq!(
            before.diff(&after).as_deref(),
            Some("selection: Some(0) → Some(2)")
        );
    }

    #[test]
    fn test_diff_none_when_unchanged() {
        let session = SessionState::new(vec![SentencePair::new("s", "a")]);
        let snap = SessionSnapshot::from_session(&session);
        assert_eq!(snap.diff(&snap.clone()), None);
    }

    #[test]
    fn test_diff_sentence_change_short_circuits() {
        let mut session = SessionState::new(vec![
            SentencePair::new("s", "a"),
            SentencePair::new("s", "b c"),
        ]);
        let before = SessionSnapshot::from_session(&session);
        session.load(1);
        let after = SessionSnapshot::from_session(&session);
        assert_eq!(
            before.diff(&after).as_deref(),
            Some("sentence: Some(0) → Some(1)")
        );
    }
}
