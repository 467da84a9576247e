//! Theme management and ANSI escape sequence generation.
//!
//! Color schemes for the terminal renderer, supporting built-in themes and
//! custom themes loaded from TOML files. Colors are hex strings converted to
//! truecolor ANSI escapes at render time.
//!
//! # Built-in Themes
//!
//! - `misty-night`: the temple's dark palette, neon blue on black (default)
//! - `porcelain-dawn`: a light palette for pale terminals
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! title_fg = "#eaf6ff"
//! accent = "#00d4ff"
//! text_normal = "#d8e2ea"
//! text_dim = "#5f6d7a"
//! border = "#24313c"
//! success_fg = "#7ee0a3"
//! error_fg = "#ff6b81"
//! focus_fg = "#00d4ff"
//! ```

use crate::domain::error::{Result, TempleError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g., `"#00d4ff"`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Screen title color.
    pub title_fg: String,
    /// Accent color: menu keys, locale labels, the glow line.
    pub accent: String,
    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, placeholders, dates).
    pub text_dim: String,
    /// Border and separator line color.
    pub border: String,
    /// Success notice color.
    pub success_fg: String,
    /// Error notice color.
    pub error_fg: String,
    /// Focused form field marker color.
    pub focus_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the name is not a built-in theme or the embedded
    /// definition fails to parse.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "misty-night" => include_str!("../../themes/misty-night.toml"),
            "porcelain-dawn" => include_str!("../../themes/porcelain-dawn.toml"),
            _ => return None,
        };
        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`TempleError::Theme`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| TempleError::Theme(format!("failed to read theme file: {e}")))?;
        toml::from_str(&contents)
            .map_err(|e| TempleError::Theme(format!("failed to parse theme file: {e}")))
    }

    /// Returns the ANSI foreground escape for a hex color.
    ///
    /// Unparseable colors fall back to the terminal default.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        hex_to_rgb(hex).map_or_else(
            || "\u{1b}[39m".to_string(),
            |(r, g, b)| format!("\u{1b}[38;2;{r};{g};{b}m"),
        )
    }

    /// Returns the ANSI background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        hex_to_rgb(hex).map_or_else(
            || "\u{1b}[49m".to_string(),
            |(r, g, b)| format!("\u{1b}[48;2;{r};{g};{b}m"),
        )
    }

    /// Returns the ANSI bold escape.
    #[must_use]
    pub fn bold() -> &'static str {
        "\u{1b}[1m"
    }

    /// Returns the ANSI reset escape.
    #[must_use]
    pub fn reset() -> &'static str {
        "\u{1b}[0m"
    }
}

impl Default for Theme {
    /// The `misty-night` palette, hardcoded so a broken theme file can never
    /// leave the renderer without colors.
    fn default() -> Self {
        Self {
            name: "misty-night".to_string(),
            colors: ThemeColors {
                title_fg: "#eaf6ff".to_string(),
                accent: "#00d4ff".to_string(),
                text_normal: "#d8e2ea".to_string(),
                text_dim: "#5f6d7a".to_string(),
                border: "#24313c".to_string(),
                success_fg: "#7ee0a3".to_string(),
                error_fg: "#ff6b81".to_string(),
                focus_fg: "#00d4ff".to_string(),
            },
        }
    }
}

/// Parses a `#rrggbb` hex color into an RGB triple.
fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        assert!(Theme::from_name("misty-night").is_some());
        assert!(Theme::from_name("porcelain-dawn").is_some());
        assert!(Theme::from_name("unknown").is_none());
    }

    #[test]
    fn custom_theme_file_round_trips() {
        let theme = Theme::default();
        let toml_str = toml::to_string(&theme).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml_str.as_bytes()).unwrap();

        let loaded = Theme::from_file(file.path()).unwrap();
        assert_eq!(loaded.name, theme.name);
        assert_eq!(loaded.colors.accent, theme.colors.accent);
    }

    #[test]
    fn bad_hex_falls_back_to_terminal_default() {
        assert_eq!(Theme::fg("not-a-color"), "\u{1b}[39m");
        assert_eq!(Theme::fg("#00d4ff"), "\u{1b}[38;2;0;212;255m");
    }
}
