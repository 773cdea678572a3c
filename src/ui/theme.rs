//! Color themes and ANSI styling.
//!
//! A theme is a named palette of 24-bit colors, one per screen element.
//! Four Catppuccin palettes are compiled in; any other palette can be loaded
//! from a TOML file with the same shape:
//!
//! ```toml
//! name = "stadium-night"
//!
//! [colors]
//! header_fg = "#cba6f7"
//! header_bg = "#181825"        # optional
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! sort_indicator_fg = "#a6e3a1"
//! error_fg = "#f38ba8"
//! modal_border = "#b4befe"
//! ```
//!
//! Colors are validated when the theme is loaded, so a typo in a custom
//! theme is reported instead of rendering in the wrong color.
//!
//! # Example
//!
//! ```rust
//! use trackside::ui::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! let mut frame = String::new();
//! frame.push_str(&Theme::fg(&theme.colors.error_fg));
//! frame.push_str("The resource was not found.");
//! frame.push_str(Theme::reset());
//! assert!(frame.starts_with("\u{1b}[38;2;243;139;168m"));
//! ```

use crate::domain::error::{Result, TracksideError};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Compiled-in palettes as `(name, toml)`; the first is the default.
const BUILT_IN: &[(&str, &str)] = &[
    ("catppuccin-mocha", include_str!("../../themes/catppuccin-mocha.toml")),
    ("catppuccin-latte", include_str!("../../themes/catppuccin-latte.toml")),
    ("catppuccin-frappe", include_str!("../../themes/catppuccin-frappe.toml")),
    ("catppuccin-macchiato", include_str!("../../themes/catppuccin-macchiato.toml")),
];

/// A 24-bit color, written `#rrggbb` in theme files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl TryFrom<String> for Rgb {
    type Error = TracksideError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl std::str::FromStr for Rgb {
    type Err = TracksideError;

    fn from_str(text: &str) -> Result<Self> {
        let invalid = || TracksideError::Theme(format!("'{text}' is not a #rrggbb color"));
        let hex = text.trim().strip_prefix('#').unwrap_or(text.trim());
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16).map_err(|_| invalid());
        Ok(Self(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// A named palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// One color per screen element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThemeColors {
    /// Brand and column headers.
    pub header_fg: Rgb,
    /// Navigation bar background; the terminal default when absent.
    #[serde(default)]
    pub header_bg: Option<Rgb>,

    /// Active navigation tab.
    pub selection_fg: Rgb,
    pub selection_bg: Rgb,

    pub text_normal: Rgb,
    /// Footer hints, column keys, select options.
    pub text_dim: Rgb,

    /// Frame lines and separators.
    pub border: Rgb,

    pub search_bar_border: Rgb,
    pub match_highlight_fg: Rgb,
    pub match_highlight_bg: Rgb,

    pub empty_state_fg: Rgb,

    /// `▲`/`▼` on the sorted column.
    pub sort_indicator_fg: Rgb,

    /// Notification text.
    pub error_fg: Rgb,

    pub modal_border: Rgb,
}

impl Theme {
    /// Names of the compiled-in themes, default first.
    pub fn built_in_names() -> impl Iterator<Item = &'static str> {
        BUILT_IN.iter().map(|(name, _)| *name)
    }

    /// Loads a compiled-in theme; `None` for unknown names.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trackside::ui::Theme;
    ///
    /// assert_eq!(Theme::from_name("catppuccin-latte").unwrap().name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let (_, source) = BUILT_IN.iter().find(|(built_in, _)| *built_in == name)?;
        match Self::from_toml_str(source) {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::error!(theme_name = name, error = %e, "built-in theme failed to parse");
                None
            }
        }
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`TracksideError::Theme`] when the file cannot be read, is not
    /// valid TOML, misses a color or holds a malformed color.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| TracksideError::Theme(format!("Failed to read {}: {e}", path.display())))?;
        let theme = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), theme_name = %theme.name, "custom theme loaded");
        Ok(theme)
    }

    fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| TracksideError::Theme(format!("Invalid theme: {e}")))
    }

    /// Foreground escape for a color.
    #[must_use]
    pub fn fg(color: &Rgb) -> String {
        let Rgb(r, g, b) = color;
        format!("\u{1b}[38;2;{r};{g};{b}m")
    }

    /// Background escape for a color.
    #[must_use]
    pub fn bg(color: &Rgb) -> String {
        let Rgb(r, g, b) = color;
        format!("\u{1b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{1b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{1b}[2m"
    }

    /// Clears every color and attribute.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{1b}[0m"
    }

    /// Grey palette, used only if no compiled-in theme parses.
    fn monochrome() -> Self {
        let white = Rgb(0xff, 0xff, 0xff);
        let light = Rgb(0xc0, 0xc0, 0xc0);
        let mid = Rgb(0x80, 0x80, 0x80);
        let black = Rgb(0, 0, 0);
        Self {
            name: "monochrome".to_string(),
            colors: ThemeColors {
                header_fg: white,
                header_bg: None,
                selection_fg: black,
                selection_bg: light,
                text_normal: Rgb(0xe0, 0xe0, 0xe0),
                text_dim: mid,
                border: Rgb(0x60, 0x60, 0x60),
                search_bar_border: light,
                match_highlight_fg: black,
                match_highlight_bg: white,
                empty_state_fg: light,
                sort_indicator_fg: white,
                error_fg: white,
                modal_border: light,
            },
        }
    }
}

impl Default for Theme {
    /// `catppuccin-mocha`.
    fn default() -> Self {
        Self::built_in_names()
            .next()
            .and_then(Self::from_name)
            .unwrap_or_else(Self::monochrome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn every_built_in_theme_parses_under_its_own_name() {
        for name in Theme::built_in_names() {
            assert_eq!(Theme::from_name(name).map(|t| t.name), Some(name.to_string()));
        }
        assert_eq!(Theme::default().name, "catppuccin-mocha");
    }

    #[test]
    fn custom_theme_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let body = include_str!("../../themes/catppuccin-frappe.toml").replace("catppuccin-frappe", "custom");
        file.write_all(body.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
        assert_eq!(Theme::fg(&theme.colors.error_fg), "\u{1b}[38;2;231;130;132m");
        assert_eq!(theme.colors.header_bg, None);
    }

    #[test]
    fn malformed_color_is_rejected_at_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let body = include_str!("../../themes/catppuccin-mocha.toml").replace("#f38ba8", "#f38b");
        file.write_all(body.as_bytes()).unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, TracksideError::Theme(_)));
    }

    #[test]
    fn unreadable_theme_is_a_theme_error() {
        let err = Theme::from_file("/nonexistent/theme.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/theme.toml"));
    }

    #[test]
    fn colors_parse_with_or_without_hash() {
        assert_eq!("#1e1e2e".parse::<Rgb>().unwrap(), Rgb(0x1e, 0x1e, 0x2e));
        assert_eq!("A6E3A1".parse::<Rgb>().unwrap().to_string(), "#a6e3a1");
        assert!("#zzzzzz".parse::<Rgb>().is_err());
        assert!("#é1234".parse::<Rgb>().is_err());
    }
}
