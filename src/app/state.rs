//! Page state container.
//!
//! [`AppState`] is the single owner of everything the page shows. The event
//! handler mutates it; hosts read it to decide which classes, texts and
//! widgets to display.

use super::environment::{CloudPolicy, Environment};
use super::layout::{self, SectionBounds};
use super::modes::{JourneyPhase, ThemeMode};
use super::portfolio::PortfolioGallery;
use super::typewriter::{Typewriter, TypewriterTiming};
use crate::cloud::TagCloud;
use crate::domain::LabelSpec;
use crate::github::GithubWidget;
use crate::timing::{Debounce, Throttle};
use crate::Config;
use std::time::Duration;

/// Viewport and surface size carried through the resize debounce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeInfo {
    pub viewport_width: f64,
    pub surface: Option<(f64, f64)>,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub theme: ThemeMode,
    /// Whether a theme preference exists in the store. Color-scheme changes
    /// from the host only apply while this is `false`.
    pub theme_stored: bool,
    /// Theme icon glow animation is running.
    pub glow_active: bool,

    pub menu_open: bool,
    pub header_sticky: bool,
    pub active_section: Option<String>,
    pub sections: Vec<SectionBounds>,

    pub read_more_expanded: bool,
    pub journey: JourneyPhase,
    pub portfolio: PortfolioGallery,
    pub slides_per_view: usize,
    pub typewriter: Typewriter,

    pub github: GithubWidget,
    pub max_repo_cards: usize,

    /// Animated cloud, or `None` when the static fallback is shown.
    pub cloud: Option<TagCloud>,
    pub cloud_labels: Vec<LabelSpec>,
    cloud_seed: Option<u64>,

    pub environment: Environment,
    pub pointer_throttle: Throttle,
    pub resize_debounce: Debounce<ResizeInfo>,
    pub search_debounce: Debounce<String>,
}

impl AppState {
    /// Builds the initial page state.
    ///
    /// The theme comes from `stored_theme` if present, otherwise from the
    /// host's color-scheme preference.
    #[must_use]
    pub fn new(config: &Config, environment: Environment, stored_theme: Option<ThemeMode>) -> Self {
        let theme = stored_theme.unwrap_or(if environment.prefers_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        });

        let mut state = Self {
            theme,
            theme_stored: stored_theme.is_some(),
            glow_active: false,
            menu_open: false,
            header_sticky: false,
            active_section: None,
            sections: config.sections.clone(),
            read_more_expanded: false,
            journey: JourneyPhase::Hidden,
            portfolio: PortfolioGallery::new(config.portfolio.clone()),
            slides_per_view: layout::slides_per_view(environment.viewport_width),
            typewriter: Typewriter::new(&config.roles, TypewriterTiming::default()),
            github: GithubWidget::loading(),
            max_repo_cards: config.max_repo_cards,
            cloud: None,
            cloud_labels: config.labels.clone(),
            cloud_seed: config.seed,
            environment,
            pointer_throttle: Throttle::new(Duration::from_millis(config.throttle_ms)),
            resize_debounce: Debounce::new(Duration::from_millis(config.resize_debounce_ms)),
            search_debounce: Debounce::new(Duration::from_millis(config.search_debounce_ms)),
        };
        state.sync_cloud();

        tracing::debug!(
            theme = theme.as_str(),
            cloud = state.cloud.is_some(),
            "page state initialized"
        );
        state
    }

    /// Starts or drops the cloud to match the environment's [`CloudPolicy`].
    ///
    /// Returns `true` if the cloud was started or stopped.
    pub fn sync_cloud(&mut self) -> bool {
        match (self.environment.cloud_policy(), self.cloud.is_some()) {
            (CloudPolicy::Animate, false) => {
                let Some((width, height)) = self.environment.surface else {
                    return false;
                };
                let labels = self.cloud_labels.clone();
                self.cloud = Some(match self.cloud_seed {
                    Some(seed) => TagCloud::with_seed(labels, width, height, seed),
                    None => TagCloud::new(labels, width, height),
                });
                tracing::debug!("tag cloud started");
                true
            }
            (CloudPolicy::StaticFallback, true) => {
                self.cloud = None;
                tracing::debug!("tag cloud stopped, showing static labels");
                true
            }
            _ => false,
        }
    }

    /// Applies a debounced resize: carousel breakpoint and cloud geometry.
    pub fn apply_resize(&mut self, info: ResizeInfo) {
        self.environment.viewport_width = info.viewport_width;
        self.environment.surface = info.surface;
        self.slides_per_view = layout::slides_per_view(info.viewport_width);

        if !self.sync_cloud() {
            if let (Some(cloud), Some((w, h))) = (self.cloud.as_mut(), info.surface) {
                cloud.resize(w, h);
            }
        }
    }

    /// Label texts to list when the cloud is not animating.
    #[must_use]
    pub fn fallback_labels(&self) -> Option<Vec<String>> {
        self.cloud
            .is_none()
            .then(|| TagCloud::fallback_texts(&self.cloud_labels))
    }

    #[must_use]
    pub const fn read_more_label(&self) -> &'static str {
        if self.read_more_expanded {
            "Read Less"
        } else {
            "Read More"
        }
    }

    /// Whether the education list counts as expanded (drives the button text).
    #[must_use]
    pub const fn journey_expanded(&self) -> bool {
        matches!(self.journey, JourneyPhase::Revealing | JourneyPhase::Shown)
    }

    #[must_use]
    pub const fn journey_button_label(&self) -> &'static str {
        if self.journey_expanded() {
            "See Less"
        } else {
            "See More"
        }
    }
}
