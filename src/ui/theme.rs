//! Palettes and ANSI escape sequence generation.
//!
//! Two built-in palettes mirror the page's light and dark themes. Custom
//! palettes can be loaded from TOML files of the same shape:
//!
//! ```toml
//! name = "my-palette"
//!
//! [colors]
//! text = "#2b2b2b"
//! text_dim = "#7a7a7a"
//! heading = "#0e2431"
//! accent = "#fdd835"
//! link = "#1e6fb8"
//! border = "#c8c8c8"
//! error = "#c62828"
//! ```
//!
//! # Example
//!
//! ```rust
//! use folio::app::ThemeMode;
//! use folio::ui::Theme;
//!
//! let theme = Theme::for_mode(ThemeMode::Dark);
//! println!("{}Title{}", Theme::fg(&theme.colors.heading), Theme::reset());
//! ```

use crate::app::ThemeMode;
use crate::domain::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// All colors are hex strings such as `"#e6e6e6"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub text: String,
    /// Secondary text (bios, descriptions, footers).
    pub text_dim: String,
    pub heading: String,
    /// Theme icon glow and active navigation link.
    pub accent: String,
    pub link: String,
    pub border: String,
    pub error: String,
}

impl Theme {
    /// Loads a built-in palette: `light` or `dark`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "light" => include_str!("../../themes/light.toml"),
            "dark" => include_str!("../../themes/dark.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Built-in palette for a page theme.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        Self::from_name(mode.as_str()).unwrap_or_else(|| Self::monochrome(mode.as_str()))
    }

    /// Loads a palette from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Io`] if the file cannot be read and
    /// [`FolioError::Theme`] if it is not a valid palette.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| FolioError::Theme(e.to_string()))
    }

    fn monochrome(name: &str) -> Self {
        let white = || "#ffffff".to_string();
        Self {
            name: name.to_string(),
            colors: ThemeColors {
                text: white(),
                text_dim: white(),
                heading: white(),
                accent: white(),
                link: white(),
                border: white(),
                error: white(),
            },
        }
    }

    /// Converts a hex color to RGB. Anything malformed becomes white.
    #[must_use]
    pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape, `\x1b[38;2;r;g;bm`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape, `\x1b[48;2;r;g;bm`.
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

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_mode(ThemeMode::Light)
    }
}
