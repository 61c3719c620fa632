//! Theme management and ANSI escape sequence generation.
//!
//! Built-in themes ship as TOML under `themes/` and are compiled in. Custom
//! themes are loaded from a TOML file; any color a custom theme leaves out
//! falls back to the Catppuccin Mocha value.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme (default)
//! - `catppuccin-latte`: Light theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#cba6f7"
//! legendary_fg = "#f9e2af"
//! stat_bar_fill = "#a6e3a1"
//! ```
//!
//! # Examples
//!
//! ```
//! use dexplorer::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-latte").unwrap();
//! assert_eq!(theme.name, "catppuccin-latte");
//! assert_eq!(Theme::fg("#ff0000"), "\u{1b}[38;2;255;0;0m");
//! ```

use crate::domain::error::{DexError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    #[serde(default)]
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeColors {
    pub header_fg: String,
    pub header_bg: Option<String>,

    /// Cursor row.
    pub selection_fg: String,
    pub selection_bg: String,

    /// Marker on the row whose record fills the detail panel.
    pub selected_marker_fg: String,

    pub text_normal: String,
    /// Footer, secondary columns and hints.
    pub text_dim: String,

    /// Pane separators.
    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,
    pub error_fg: String,

    pub legendary_fg: String,

    /// Active-filter chips.
    pub chip_fg: String,
    pub chip_bg: String,

    /// Type badges in the detail panel.
    pub badge_fg: String,
    pub badge_bg: String,

    pub stat_bar_fill: String,
    pub stat_bar_empty: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            header_fg: "#cdd6f4".to_string(),
            header_bg: None,
            selection_fg: "#1e1e2e".to_string(),
            selection_bg: "#cba6f7".to_string(),
            selected_marker_fg: "#f38ba8".to_string(),
            text_normal: "#cdd6f4".to_string(),
            text_dim: "#6c7086".to_string(),
            border: "#45475a".to_string(),
            search_bar_border: "#f5c2e7".to_string(),
            match_highlight_fg: "#1e1e2e".to_string(),
            match_highlight_bg: "#f9e2af".to_string(),
            empty_state_fg: "#89b4fa".to_string(),
            error_fg: "#f38ba8".to_string(),
            legendary_fg: "#f9e2af".to_string(),
            chip_fg: "#1e1e2e".to_string(),
            chip_bg: "#89b4fa".to_string(),
            badge_fg: "#1e1e2e".to_string(),
            badge_bg: "#a6e3a1".to_string(),
            stat_bar_fill: "#a6e3a1".to_string(),
            stat_bar_empty: "#313244".to_string(),
        }
    }
}

impl Theme {
    /// Loads a built-in theme by name. Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DexError::Theme(format!("Failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| DexError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Returns `(255, 255, 255)` (white) when `hex` is not a 6-digit color.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape for `hex`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha").unwrap_or_else(|| Self {
            name: "catppuccin-mocha".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_parse() {
        assert_eq!(
            Theme::from_name("catppuccin-mocha").map(|t| t.name),
            Some("catppuccin-mocha".to_string())
        );
        assert!(Theme::from_name("catppuccin-latte").is_some());
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn partial_theme_falls_back_per_color() {
        let theme: Theme = toml::from_str(
            r##"
            name = "partial"

            [colors]
            legendary_fg = "#ffd700"
            "##,
        )
        .unwrap();
        assert_eq!(theme.colors.legendary_fg, "#ffd700");
        assert_eq!(theme.colors.text_normal, ThemeColors::default().text_normal);
    }

    #[test]
    fn malformed_hex_renders_white() {
        assert_eq!(Theme::fg("#12"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("1e1e2e"), "\u{1b}[48;2;30;30;46m");
    }

    #[test]
    fn missing_theme_file_is_a_theme_error() {
        let err = Theme::from_file("/nonexistent/theme.toml").unwrap_err();
        assert!(matches!(err, DexError::Theme(_)));
    }
}
