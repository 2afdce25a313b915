//! Host environment signals.
//!
//! Read once at startup and updated from the host's media-query change
//! notifications. The page only reads them; it never asks the host to change.

use super::modes::PointerCapability;

/// Whether the tag cloud should animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudPolicy {
    Animate,
    /// Show the labels as a plain list instead.
    StaticFallback,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub reduced_motion: bool,
    pub prefers_dark: bool,
    pub pointer: PointerCapability,
    pub viewport_width: f64,
    /// Size of the cloud's drawing surface, if the page has one.
    pub surface: Option<(f64, f64)>,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            prefers_dark: false,
            pointer: PointerCapability::Fine,
            viewport_width: 1280.0,
            surface: Some((500.0, 500.0)),
        }
    }
}

impl Environment {
    /// Animate only with motion allowed and a non-empty surface to draw on.
    #[must_use]
    pub fn cloud_policy(&self) -> CloudPolicy {
        match self.surface {
            Some((w, h)) if !self.reduced_motion && w > 0.0 && h > 0.0 => CloudPolicy::Animate,
            _ => CloudPolicy::StaticFallback,
        }
    }

    /// Pointer moves steer the cloud only on fine pointers; touch drags would
    /// otherwise spin it while scrolling.
    #[must_use]
    pub fn pointer_drives_cloud(&self) -> bool {
        self.pointer == PointerCapability::Fine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_or_missing_surface_falls_back() {
        let env = Environment::default();
        assert_eq!(env.cloud_policy(), CloudPolicy::Animate);

        let reduced = Environment { reduced_motion: true, ..env };
        assert_eq!(reduced.cloud_policy(), CloudPolicy::StaticFallback);

        let headless = Environment { surface: None, ..env };
        assert_eq!(headless.cloud_policy(), CloudPolicy::StaticFallback);

        let collapsed = Environment { surface: Some((0.0, 300.0)), ..env };
        assert_eq!(collapsed.cloud_policy(), CloudPolicy::StaticFallback);
    }

    #[test]
    fn only_fine_pointers_drive_the_cloud() {
        let env = Environment::default();
        assert!(env.pointer_drives_cloud());
        let touch = Environment { pointer: PointerCapability::Coarse, ..env };
        assert!(!touch.pointer_drives_cloud());
    }
}
