//! Sentence pair feed
//!
//! Pairs are read from a JSON array of `{ "source": ..., "target": ... }`
//! objects. An embedded sample set is used when no file is given.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Sample sentence pairs embedded at compile time
pub const SAMPLE_PAIRS_JSON: &str = include_str!("../data/sample_pairs.json");

/// One unit of work: a source sentence and its machine-generated target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentencePair {
    pub source: String,
    pub target: String,
}

impl SentencePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Parse sentence pairs from a JSON string
pub fn parse_pairs(json: &str) -> Result<Vec<SentencePair>, DataError> {
    serde_json::from_str(json).map_err(|e| DataError::Parse(e.to_string()))
}

/// Load sentence pairs from a JSON file
pub fn load_pairs(path: &Path) -> Result<Vec<SentencePair>, DataError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| DataError::Io(format!("{}: {}", path.display(), e)))?;
    let pairs = parse_pairs(&content)?;
    tracing::info!("Loaded {} sentence pairs from {}", pairs.len(), path.display());
    Ok(pairs)
}

/// The embedded sample set
pub fn builtin_pairs() -> Vec<SentencePair> {
    match parse_pairs(SAMPLE_PAIRS_JSON) {
        Ok(pairs) => pairs,
        Err(e) => {
            tracing::warn!("Embedded sample pairs failed to parse: {}", e);
            Vec::new()
        }
    }
}

/// Errors that can occur when loading a sentence feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::Io(e) => write!(f, "IO error: {}", e),
            DataError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for DataError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_pairs_parse() {
        let pairs = builtin_pairs();
        assert_eq!(pairs.len(), 7);
        assert!(pairs.iter().all(|p| !p.target.trim().is_empty()));
    }

    #[test]
    fn test_parse_pairs() {
        let pairs = parse_pairs(r#"[{"source": "A", "target": "w1 w2"}]"#).unwrap();
        assert_eq!(pairs, vec![SentencePair::new("A", "w1 w2")]);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_pairs("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_missing_field_is_error() {
        let err = parse_pairs(r#"[{"source": "A"}]"#).unwrap_err();
        assert!(matches!(err, DataError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_pairs(Path::new("/nonexistent/labelfast/pairs.json")).unwrap_err();
        assert!(matches!(err, DataError::Io(_)));
    }
}
