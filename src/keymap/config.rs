//! YAML configuration parsing for keymaps
//!
//! ```yaml
//! bindings:
//!   - key: ctrl+enter
//!     command: SubmitSentence
//!   - key: escape
//!     command: CancelEdit
//!     when: [editing]
//!   - key: cmd+q
//!     command: Quit
//!     platform: macos
//! ```

use std::path::Path;

use serde::Deserialize;

use super::binding::Keybinding;
use super::command::Command;
use super::context::Condition;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Root structure of a keymap YAML file
#[derive(Debug, Deserialize)]
pub struct KeymapConfig {
    #[serde(default)]
    pub bindings: Vec<BindingConfig>,
}

/// A single binding entry from YAML
#[derive(Debug, Deserialize)]
pub struct BindingConfig {
    pub key: String,
    pub command: String,
    /// `macos`, `windows` or `linux`; other platforms skip the entry
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub when: Option<Vec<Condition>>,
}

/// Load keybindings from a YAML file
pub fn load_keymap_file(path: &Path) -> Result<Vec<Keybinding>, KeymapError> {
    let content = std::fs::read_to_string(path).map_err(|e| KeymapError::IoError(e.to_string()))?;
    parse_keymap_yaml(&content)
}

/// Parse keybindings from a YAML string
pub fn parse_keymap_yaml(yaml: &str) -> Result<Vec<Keybinding>, KeymapError> {
    let config: KeymapConfig =
        serde_yaml::from_str(yaml).map_err(|e| KeymapError::ParseError(e.to_string()))?;

    let platform = current_platform();
    let mut bindings = Vec::with_capacity(config.bindings.len());

    for entry in config.bindings {
        if entry.platform.as_deref().is_some_and(|p| p != platform) {
            continue;
        }

        let keystroke = parse_key_string(&entry.key)?;
        let command = entry
            .command
            .parse::<Command>()
            .map_err(|_| KeymapError::InvalidCommand(entry.command.clone()))?;

        bindings.push(Keybinding::new(keystroke, command).when(entry.when.unwrap_or_default()));
    }

    Ok(bindings)
}

/// Parse a key string like "cmd+shift+space" into a Keystroke
///
/// A lone "+" is the plus key.
pub fn parse_key_string(key_str: &str) -> Result<Keystroke, KeymapError> {
    let trimmed = key_str.trim();
    if trimmed.is_empty() {
        return Err(KeymapError::InvalidKey(key_str.to_string()));
    }

    let (modifier_part, key_part) = match trimmed.strip_suffix("++") {
        Some(rest) => (rest, "+"),
        None if trimmed == "+" => ("", "+"),
        None => match trimmed.rsplit_once('+') {
            Some((mods, key)) => (mods, key),
            None => ("", trimmed),
        },
    };

    let mut mods = Modifiers::NONE;
    for part in modifier_part.split('+').filter(|p| !p.is_empty()) {
        mods = mods
            | match part.to_lowercase().as_str() {
                "cmd" => Modifiers::cmd(),
                "ctrl" | "control" => Modifiers::CTRL,
                "shift" => Modifiers::SHIFT,
                "alt" | "option" | "opt" => Modifiers::ALT,
                "meta" | "super" | "win" => Modifiers::META,
                other => {
                    return Err(KeymapError::InvalidKey(format!(
                        "Unknown modifier '{}' in binding: {}",
                        other, key_str
                    )))
                }
            };
    }

    Ok(Keystroke::new(parse_key_code(key_part)?, mods))
}

/// Parse a key name or single character
fn parse_key_code(key: &str) -> Result<KeyCode, KeymapError> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c.to_ascii_lowercase()));
    }

    let lower = key.to_lowercase();
    if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        if (1..=24).contains(&n) {
            return Ok(KeyCode::F(n));
        }
    }

    match lower.as_str() {
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Escape),
        "tab" => Ok(KeyCode::Tab),
        "backspace" | "back" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "space" => Ok(KeyCode::Space),
        "up" | "arrowup" => Ok(KeyCode::Up),
        "down" | "arrowdown" => Ok(KeyCode::Down),
        "left" | "arrowleft" => Ok(KeyCode::Left),
        "right" | "arrowright" => Ok(KeyCode::Right),
        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" | "pgup" => Ok(KeyCode::PageUp),
        "pagedown" | "pgdown" | "pgdn" => Ok(KeyCode::PageDown),
        _ => Err(KeymapError::InvalidKey(format!("Unknown key: {}", key))),
    }
}

fn current_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else {
        "linux"
    }
}

/// Errors that can occur when loading keymaps
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeymapError {
    IoError(String),
    ParseError(String),
    InvalidKey(String),
    InvalidCommand(String),
}

impl std::fmt::Display for KeymapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeymapError::IoError(e) => write!(f, "IO error: {}", e),
            KeymapError::ParseError(e) => write!(f, "Parse error: {}", e),
            KeymapError::InvalidKey(k) => write!(f, "Invalid key: {}", k),
            KeymapError::InvalidCommand(c) => write!(f, "Invalid command: {}", c),
        }
    }
}

impl std::error::Error for KeymapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modified_key() {
        let stroke = parse_key_string("ctrl+enter").unwrap();
        assert_eq!(stroke, Keystroke::new(KeyCode::Enter, Modifiers::CTRL));

        let stroke = parse_key_string("Shift+Space").unwrap();
        assert_eq!(stroke, Keystroke::new(KeyCode::Space, Modifiers::SHIFT));
    }

    #[test]
    fn test_parse_punctuation_and_function_keys() {
        assert_eq!(parse_key_string("?").unwrap(), Keystroke::char('?'));
        assert_eq!(
            parse_key_string("shift+?").unwrap(),
            Keystroke::new(KeyCode::Char('?'), Modifiers::SHIFT)
        );
        assert_eq!(parse_key_string("+").unwrap(), Keystroke::char('+'));
        assert_eq!(
            parse_key_string("ctrl++").unwrap(),
            Keystroke::new(KeyCode::Char('+'), Modifiers::CTRL)
        );
        assert_eq!(parse_key_string("f2").unwrap().key, KeyCode::F(2));
        assert_eq!(parse_key_string("F12").unwrap().key, KeyCode::F(12));
    }

    #[test]
    fn test_parse_key_errors() {
        assert!(matches!(
            parse_key_string("hyper+x"),
            Err(KeymapError::InvalidKey(_))
        ));
        assert!(matches!(
            parse_key_string("ctrl+nope"),
            Err(KeymapError::InvalidKey(_))
        ));
        assert!(parse_key_string("").is_err());
        assert!(parse_key_string("f30").is_err());
    }

    #[test]
    fn test_parse_yaml_with_conditions() {
        let yaml = r#"
bindings:
  - key: escape
    command: CancelEdit
    when: [editing]
  - key: escape
    command: ResetSentence
"#;
        let bindings = parse_keymap_yaml(yaml).unwrap();
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[0].when, Some(vec![Condition::Editing]));
        assert_eq!(bindings[1].when, None);
    }

    #[test]
    fn test_parse_yaml_rejects_unknown_command() {
        let yaml = "bindings:\n  - key: a\n    command: Explode\n";
        assert_eq!(
            parse_keymap_yaml(yaml),
            Err(KeymapError::InvalidCommand("Explode".into()))
        );
    }

    #[test]
    fn test_parse_yaml_rejects_unknown_condition() {
        let yaml = "bindings:\n  - key: a\n    command: Quit\n    when: [sideways]\n";
        assert!(matches!(
            parse_keymap_yaml(yaml),
            Err(KeymapError::ParseError(_))
        ));
    }

    #[test]
    fn test_platform_filter() {
        let yaml = "bindings:\n  - key: a\n    command: Quit\n    platform: plan9\n";
        assert!(parse_keymap_yaml(yaml).unwrap().is_empty());
    }
}
