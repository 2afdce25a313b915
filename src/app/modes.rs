//! Small state enums for the page.
//!
//! - [`ThemeMode`]: light or dark color scheme, persisted as `"light"`/`"dark"`
//! - [`JourneyPhase`]: fade in/out states of the hidden education entries
//! - [`PointerCapability`]: what kind of pointer the device reports

/// Page color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Glow color of the theme icon in light mode (warm gold).
    pub const LIGHT_GLOW: &'static str = "#fdd835";
    /// Glow color of the theme icon in dark mode (cool blue).
    pub const DARK_GLOW: &'static str = "#4db8ff";

    /// Value written to the preference store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a stored preference. Anything other than `"dark"` is light.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" {
            Self::Dark
        } else {
            Self::Light
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn glow_color(self) -> &'static str {
        match self {
            Self::Light => Self::LIGHT_GLOW,
            Self::Dark => Self::DARK_GLOW,
        }
    }

    /// Icon shown on the toggle: a sun while dark mode is active, a moon otherwise.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Light => "moon",
            Self::Dark => "sun",
        }
    }
}

/// Visibility of the collapsed education entries.
///
/// Expanding and collapsing each take two steps so the host can run its CSS
/// transition between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JourneyPhase {
    /// Not displayed.
    #[default]
    Hidden,
    /// Displayed, `show` class not yet applied.
    Revealing,
    /// Displayed with `show`.
    Shown,
    /// `show` removed, still displayed until the fade-out finishes.
    Concealing,
}

impl JourneyPhase {
    /// Whether the entries take up layout space.
    #[must_use]
    pub const fn is_displayed(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Whether the `show` class is applied.
    #[must_use]
    pub const fn has_show_class(self) -> bool {
        matches!(self, Self::Shown)
    }
}

/// Pointer precision reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerCapability {
    /// Mouse or trackpad.
    #[default]
    Fine,
    /// Touch.
    Coarse,
    /// No pointer at all.
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_round_trips_through_storage_strings() {
        assert_eq!(ThemeMode::from_stored(ThemeMode::Dark.as_str()), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored(ThemeMode::Light.as_str()), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored("solarized"), ThemeMode::Light);
    }

    #[test]
    fn theme_glow_and_icon_follow_mode() {
        assert_eq!(ThemeMode::Dark.glow_color(), "#4db8ff");
        assert_eq!(ThemeMode::Light.glow_color(), "#fdd835");
        assert_eq!(ThemeMode::Dark.icon(), "sun");
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }

    #[test]
    fn journey_phase_flags() {
        assert!(!JourneyPhase::Hidden.is_displayed());
        assert!(JourneyPhase::Revealing.is_displayed());
        assert!(!JourneyPhase::Revealing.has_show_class());
        assert!(JourneyPhase::Shown.has_show_class());
        assert!(JourneyPhase::Concealing.is_displayed());
    }
}
