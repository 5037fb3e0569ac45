//! Theme system
//!
//! YAML colour themes, two embedded at compile time plus user themes.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/labelfast/themes/{id}.yaml`
//! 2. Embedded: built-in themes compiled into the binary

use std::path::Path;

use serde::Deserialize;

pub const DEFAULT_LIGHT_YAML: &str = include_str!("../themes/light.yaml");
pub const DEFAULT_DARK_YAML: &str = include_str!("../themes/dark.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier used in config.yaml
    pub id: &'static str,
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "default-light",
        yaml: DEFAULT_LIGHT_YAML,
    },
    BuiltinTheme {
        id: "default-dark",
        yaml: DEFAULT_DARK_YAML,
    },
];

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA"
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.trim().trim_start_matches('#');
        if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| format!("Invalid color {}: {}", s, e))
        };
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub ui: UiThemeData,
}

/// Colour strings for every themed surface
#[derive(Debug, Clone, Deserialize)]
pub struct UiThemeData {
    pub window: WindowThemeData,
    pub panel: PanelThemeData,
    pub chip: ChipThemeData,
    pub editor: EditorThemeData,
    pub button: ButtonThemeData,
    pub overlay: OverlayThemeData,
    pub success: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindowThemeData {
    pub background: String,
    pub foreground: String,
    pub muted: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PanelThemeData {
    pub background: String,
    pub border: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChipThemeData {
    pub background: String,
    pub foreground: String,
    pub border: String,
    pub selected_background: String,
    pub selected_foreground: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditorThemeData {
    pub background: String,
    pub foreground: String,
    pub border: String,
    pub caret: String,
    pub selection_background: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ButtonThemeData {
    pub background: String,
    pub foreground: String,
    pub primary_background: String,
    pub primary_foreground: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverlayThemeData {
    pub backdrop: String,
    pub background: String,
    pub foreground: String,
    pub border: String,
    pub key: String,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub window: WindowTheme,
    pub panel: PanelTheme,
    pub chip: ChipTheme,
    pub editor: EditorTheme,
    pub button: ButtonTheme,
    pub overlay: OverlayTheme,
    /// "Completed!" heading
    pub success: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowTheme {
    pub background: Color,
    pub foreground: Color,
    /// Status line and placeholder text
    pub muted: Color,
}

/// Source/target sentence panels
#[derive(Debug, Clone, PartialEq)]
pub struct PanelTheme {
    pub background: Color,
    pub border: Color,
    pub label: Color,
}

/// Token chips
#[derive(Debug, Clone, PartialEq)]
pub struct ChipTheme {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub selected_background: Color,
    pub selected_foreground: Color,
}

/// Inline word editor
#[derive(Debug, Clone, PartialEq)]
pub struct EditorTheme {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub caret: Color,
    pub selection_background: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonTheme {
    pub background: Color,
    pub foreground: Color,
    /// Submit button
    pub primary_background: Color,
    pub primary_foreground: Color,
}

/// Help overlay
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayTheme {
    /// Dims the window behind the overlay
    pub backdrop: Color,
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    /// Key labels in the shortcut table
    pub key: Color,
}

impl Theme {
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        if data.version != 1 {
            return Err(format!("Unsupported theme version: {}", data.version));
        }
        let ui = data.ui;
        let c = |s: &str| Color::from_hex(s);

        Ok(Theme {
            name: data.name,
            window: WindowTheme {
                background: c(&ui.window.background)?,
                foreground: c(&ui.window.foreground)?,
                muted: c(&ui.window.muted)?,
            },
            panel: PanelTheme {
                background: c(&ui.panel.background)?,
                border: c(&ui.panel.border)?,
                label: c(&ui.panel.label)?,
            },
            chip: ChipTheme {
                background: c(&ui.chip.background)?,
                foreground: c(&ui.chip.foreground)?,
                border: c(&ui.chip.border)?,
                selected_background: c(&ui.chip.selected_background)?,
                selected_foreground: c(&ui.chip.selected_foreground)?,
            },
            editor: EditorTheme {
                background: c(&ui.editor.background)?,
                foreground: c(&ui.editor.foreground)?,
                border: c(&ui.editor.border)?,
                caret: c(&ui.editor.caret)?,
                selection_background: c(&ui.editor.selection_background)?,
            },
            button: ButtonTheme {
                background: c(&ui.button.background)?,
                foreground: c(&ui.button.foreground)?,
                primary_background: c(&ui.button.primary_background)?,
                primary_foreground: c(&ui.button.primary_foreground)?,
            },
            overlay: OverlayTheme {
                backdrop: c(&ui.overlay.backdrop)?,
                background: c(&ui.overlay.background)?,
                foreground: c(&ui.overlay.foreground)?,
                border: c(&ui.overlay.border)?,
                key: c(&ui.overlay.key)?,
            },
            success: c(&ui.success)?,
        })
    }

    /// Hardcoded light theme, matching `themes/light.yaml`
    pub fn default_light() -> Self {
        let ink = Color::rgb(0x1F, 0x23, 0x28);
        let white = Color::rgb(0xFF, 0xFF, 0xFF);
        let blue = Color::rgb(0x09, 0x69, 0xDA);
        let green = Color::rgb(0x1F, 0x88, 0x3D);
        let border = Color::rgb(0xD0, 0xD7, 0xDE);

        Theme {
            name: "Default Light".to_string(),
            window: WindowTheme {
                background: Color::rgb(0xF4, 0xF5, 0xF7),
                foreground: ink,
                muted: Color::rgb(0x6B, 0x72, 0x80),
            },
            panel: PanelTheme {
                background: white,
                border,
                label: Color::rgb(0x57, 0x60, 0x6A),
            },
            chip: ChipTheme {
                background: Color::rgb(0xEE, 0xF1, 0xF4),
                foreground: ink,
                border: Color::rgb(0xC9, 0xD1, 0xD9),
                selected_background: blue,
                selected_foreground: white,
            },
            editor: EditorTheme {
                background: white,
                foreground: ink,
                border: blue,
                caret: blue,
                selection_background: Color::rgb(0xB6, 0xD7, 0xFF),
            },
            button: ButtonTheme {
                background: Color::rgb(0xE7, 0xEB, 0xEF),
                foreground: ink,
                primary_background: green,
                primary_foreground: white,
            },
            overlay: OverlayTheme {
                backdrop: Color::rgba(0x00, 0x00, 0x00, 0x66),
                background: white,
                foreground: ink,
                border,
                key: blue,
            },
            success: green,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#0969DA"), Ok(Color::rgb(0x09, 0x69, 0xDA)));
        assert_eq!(
            Color::from_hex("00000066"),
            Ok(Color::rgba(0, 0, 0, 0x66))
        );
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#GGGGGG").is_err());
    }

    #[test]
    fn test_argb_packing() {
        assert_eq!(Color::rgba(1, 2, 3, 4).to_argb_u32(), 0x04010203);
    }

    #[test]
    fn test_builtin_themes_parse() {
        for builtin in BUILTIN_THEMES {
            let theme = Theme::from_yaml(builtin.yaml);
            assert!(theme.is_ok(), "{} failed: {:?}", builtin.id, theme.err());
        }
    }

    #[test]
    fn test_light_yaml_matches_hardcoded_default() {
        assert_eq!(
            Theme::from_builtin("default-light").unwrap(),
            Theme::default_light()
        );
    }

    #[test]
    fn test_unknown_theme_id() {
        assert!(Theme::from_builtin("neon").is_err());
    }
}
