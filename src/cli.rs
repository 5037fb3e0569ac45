//! Command-line argument parsing
//!
//! Supports:
//! - Loading sentence pairs from a JSON file (embedded samples otherwise)
//! - Starting at a given sentence
//! - Overriding font, theme and text direction from config.yaml

use clap::Parser;
use std::path::PathBuf;

use crate::config::{AppConfig, TextDirection};

/// Word-level correction of machine-generated sentences
#[derive(Parser, Debug)]
#[command(
    name = "labelfast",
    version,
    about = "Word-level correction of machine-generated sentences"
)]
pub struct CliArgs {
    /// JSON file with [{"source": ..., "target": ...}] pairs
    #[arg(value_name = "DATA")]
    pub data: Option<PathBuf>,

    /// Start at sentence N (1-indexed)
    #[arg(long, value_name = "N")]
    pub start: Option<usize>,

    /// Font file (TTF/OTF) covering the sentences' script
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Theme id
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,

    /// Layout direction: ltr, rtl or auto
    #[arg(long, value_name = "DIR")]
    pub direction: Option<TextDirection>,

    /// Write the effective configuration to config.yaml and continue
    #[arg(long)]
    pub save_config: bool,
}

/// Where sentence pairs come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// The embedded sample set
    Builtin,
    File(PathBuf),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub data: DataSource,
    /// First sentence, 0-indexed
    pub start_index: usize,
    pub font: Option<PathBuf>,
    pub theme: Option<String>,
    pub direction: Option<TextDirection>,
    pub save_config: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        // Convert from 1-indexed (user input) to 0-indexed (internal)
        let start_index = match self.start {
            Some(0) => return Err("--start is 1-indexed; use 1 for the first sentence".to_string()),
            Some(n) => n - 1,
            None => 0,
        };

        let data = match self.data {
            Some(path) if path.is_dir() => {
                return Err(format!("{} is a directory, expected a JSON file", path.display()))
            }
            Some(path) => DataSource::File(path),
            None => DataSource::Builtin,
        };

        Ok(StartupConfig {
            data,
            start_index,
            font: self.font,
            theme: self.theme,
            direction: self.direction,
            save_config: self.save_config,
        })
    }
}

impl StartupConfig {
    /// Apply command-line overrides on top of the file config
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(font) = &self.font {
            config.font_path = Some(font.clone());
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if let Some(direction) = self.direction {
            config.direction = direction;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("labelfast").chain(argv.iter().copied()))
            .expect("args should parse")
    }

    #[test]
    fn test_no_args_uses_builtin_data() {
        let config = args(&[]).into_config().unwrap();
        assert_eq!(config.data, DataSource::Builtin);
        assert_eq!(config.start_index, 0);
    }

    #[test]
    fn test_start_is_one_indexed() {
        let config = args(&["pairs.json", "--start", "3"]).into_config().unwrap();
        assert_eq!(config.data, DataSource::File(PathBuf::from("pairs.json")));
        assert_eq!(config.start_index, 2);
    }

    #[test]
    fn test_start_zero_rejected() {
        assert!(args(&["--start", "0"]).into_config().is_err());
    }

    #[test]
    fn test_direction_parsed() {
        let config = args(&["--direction", "rtl"]).into_config().unwrap();
        assert_eq!(config.direction, Some(TextDirection::Rtl));
        assert!(CliArgs::try_parse_from(["labelfast", "--direction", "sideways"]).is_err());
    }

    #[test]
    fn test_overrides_applied() {
        let startup = args(&["--theme", "default-dark", "--font", "/fonts/a.ttf"])
            .into_config()
            .unwrap();
        let config = startup.apply(AppConfig::default());
        assert_eq!(config.theme, "default-dark");
        assert_eq!(config.font_path, Some(PathBuf::from("/fonts/a.ttf")));
        assert_eq!(config.direction, AppConfig::default().direction);
    }
}
