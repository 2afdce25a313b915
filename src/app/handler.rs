//! Event handling and state transition logic.
//!
//! Hosts translate their native input into [`Event`]s and feed them through
//! [`handle_event`] together with the current page time. The handler mutates
//! [`AppState`] and returns whether the page needs a redraw plus any
//! [`Action`]s for the runtime to execute.
//!
//! ```text
//! Host input → Event → handle_event → AppState mutation → Actions
//!                 ↑                                          ↓
//!                 └────────── TimerFired / GithubLoaded ─────┘
//! ```

use super::actions::{Action, Timer};
use super::modes::JourneyPhase;
use super::state::{AppState, ResizeInfo};
use crate::cloud::Pointer;
use crate::domain::error::Result;
use crate::domain::GithubProfile;
use crate::github::GithubWidget;
use crate::storage::THEME_KEY;
use chrono::Utc;
use std::time::Duration;

/// Element the user clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    MenuIcon,
    ThemeToggle,
    ReadMore,
    JourneySeeMore,
    /// Portfolio filter button carrying its `data-filter` value.
    Filter(String),
    /// Portfolio item by index into the configured items.
    PortfolioItem(usize),
    ModalClose,
}

/// Events triggered by the host page, timers, or the GitHub fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Pointer moved over the page. Throttled before reaching the cloud.
    PointerMove { x: f64, y: f64 },

    /// Viewport resized. Applied once the resize debounce settles.
    Resize {
        viewport_width: f64,
        /// New size of the cloud surface, `None` if it was removed.
        surface: Option<(f64, f64)>,
    },

    Click(ClickTarget),

    /// Vertical scroll offset of the page.
    Scroll { y: f64 },

    /// Portfolio search box contents. Debounced.
    SearchInput(String),

    Escape,

    /// The host's `prefers-color-scheme` changed.
    ColorSchemeChanged { dark: bool },

    /// The host's `prefers-reduced-motion` changed.
    ReducedMotionChanged { reduce: bool },

    /// A timer scheduled through [`Action::Schedule`] came due.
    TimerFired(Timer),

    /// Periodic tick. Settles debounces and advances the typewriter.
    Tick,

    GithubLoaded(GithubProfile),
    GithubFailed { message: String },
}

/// Processes an event and returns `(should_render, actions)`.
///
/// `now` is the page time since start. It drives the pointer throttle and
/// the resize and search debounces.
#[allow(clippy::too_many_lines)]
pub fn handle_event(
    state: &mut AppState,
    event: &Event,
    now: Duration,
) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::PointerMove { x, y } => {
            if !state.environment.pointer_drives_cloud() {
                return Ok((false, vec![]));
            }
            let Some(cloud) = state.cloud.as_mut() else {
                return Ok((false, vec![]));
            };
            if state.pointer_throttle.admit(now) {
                cloud.set_pointer(Pointer::new(*x, *y));
            }
            Ok((false, vec![]))
        }
        Event::Resize {
            viewport_width,
            surface,
        } => {
            state.resize_debounce.call(
                now,
                ResizeInfo {
                    viewport_width: *viewport_width,
                    surface: *surface,
                },
            );
            Ok((false, vec![]))
        }
        Event::Scroll { y } => {
            state.menu_open = false;
            state.header_sticky = super::layout::is_sticky(*y);
            if let Some(id) = super::layout::active_section(&state.sections, *y) {
                if state.active_section.as_deref() != Some(id) {
                    tracing::debug!(section = %id, "active section changed");
                    state.active_section = Some(id.to_string());
                }
            }
            Ok((true, vec![]))
        }
        Event::Click(target) => handle_click(state, target),
        Event::SearchInput(query) => {
            state.search_debounce.call(now, query.clone());
            Ok((false, vec![]))
        }
        Event::Escape => Ok((state.portfolio.close(), vec![])),
        Event::ColorSchemeChanged { dark } => {
            state.environment.prefers_dark = *dark;
            if state.theme_stored {
                tracing::debug!("color scheme change ignored, theme preference stored");
                return Ok((false, vec![]));
            }
            state.theme = if *dark {
                super::modes::ThemeMode::Dark
            } else {
                super::modes::ThemeMode::Light
            };
            Ok((true, vec![]))
        }
        Event::ReducedMotionChanged { reduce } => {
            state.environment.reduced_motion = *reduce;
            Ok((state.sync_cloud(), vec![]))
        }
        Event::TimerFired(timer) => Ok((fire_timer(state, *timer), vec![])),
        Event::Tick => {
            let mut render = false;

            if let Some(info) = state.resize_debounce.poll(now) {
                tracing::debug!(
                    viewport_width = info.viewport_width,
                    surface = ?info.surface,
                    "applying debounced resize"
                );
                state.apply_resize(info);
                render = true;
            }

            if let Some(query) = state.search_debounce.poll(now) {
                tracing::debug!(query = %query, "applying debounced search");
                state.portfolio.set_search(&query);
                render = true;
            }

            render |= state.typewriter.advance(now);
            Ok((render, vec![]))
        }
        Event::GithubLoaded(profile) => {
            tracing::info!(
                login = %profile.user.login,
                repos = profile.repos.len(),
                "github profile loaded"
            );
            state.github = GithubWidget::ready(profile, state.max_repo_cards, Utc::now());
            Ok((true, vec![]))
        }
        Event::GithubFailed { message } => {
            tracing::warn!(error = %message, "github profile unavailable");
            state.github = GithubWidget::failed(message);
            Ok((true, vec![]))
        }
    }
}

fn handle_click(state: &mut AppState, target: &ClickTarget) -> Result<(bool, Vec<Action>)> {
    match target {
        ClickTarget::MenuIcon => {
            state.menu_open = !state.menu_open;
            Ok((true, vec![]))
        }
        ClickTarget::ThemeToggle => {
            state.theme = state.theme.toggled();
            state.theme_stored = true;
            state.glow_active = true;
            tracing::debug!(theme = state.theme.as_str(), "theme toggled");

            Ok((
                true,
                vec![
                    Action::PersistPreference {
                        key: THEME_KEY,
                        value: state.theme.as_str().to_string(),
                    },
                    Action::schedule(Timer::ClearGlow),
                ],
            ))
        }
        ClickTarget::ReadMore => {
            state.read_more_expanded = !state.read_more_expanded;
            Ok((true, vec![]))
        }
        ClickTarget::JourneySeeMore => {
            let (phase, timer) = match state.journey {
                JourneyPhase::Hidden | JourneyPhase::Concealing => {
                    (JourneyPhase::Revealing, Timer::ShowJourney)
                }
                JourneyPhase::Revealing | JourneyPhase::Shown => {
                    (JourneyPhase::Concealing, Timer::HideJourney)
                }
            };
            state.journey = phase;
            Ok((true, vec![Action::schedule(timer)]))
        }
        ClickTarget::Filter(filter) => {
            state.portfolio.select_filter(filter);
            Ok((true, vec![Action::schedule(Timer::RevealPortfolio)]))
        }
        ClickTarget::PortfolioItem(index) => {
            let opened = state.portfolio.open(*index);
            if !opened {
                tracing::debug!(index, "click on hidden or unknown portfolio item");
            }
            Ok((opened, vec![]))
        }
        ClickTarget::ModalClose => Ok((state.portfolio.close(), vec![])),
    }
}

/// Applies a due timer. Timers made stale by a later click are ignored.
fn fire_timer(state: &mut AppState, timer: Timer) -> bool {
    match timer {
        Timer::ClearGlow => std::mem::replace(&mut state.glow_active, false),
        Timer::RevealPortfolio => state.portfolio.reveal(),
        Timer::ShowJourney => {
            if state.journey == JourneyPhase::Revealing {
                state.journey = JourneyPhase::Shown;
                true
            } else {
                false
            }
        }
        Timer::HideJourney => {
            if state.journey == JourneyPhase::Concealing {
                state.journey = JourneyPhase::Hidden;
                true
            } else {
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::environment::Environment;
    use crate::app::modes::{PointerCapability, ThemeMode};
    use crate::app::portfolio::PortfolioItem;
    use crate::Config;

    fn state() -> AppState {
        let config = Config {
            seed: Some(7),
            portfolio: vec![
                PortfolioItem::new("Chat App", "web"),
                PortfolioItem::new("Inventory API", "backend"),
                PortfolioItem::new("Weather Widget", "web"),
            ],
            ..Config::default()
        };
        AppState::new(&config, Environment::default(), None)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn theme_toggle_persists_and_schedules_glow() {
        let mut state = state();
        let (render, actions) =
            handle_event(&mut state, &Event::Click(ClickTarget::ThemeToggle), ms(0)).unwrap();

        assert!(render);
        assert_eq!(state.theme, ThemeMode::Dark);
        assert!(state.glow_active);
        assert_eq!(
            actions,
            vec![
                Action::PersistPreference {
                    key: THEME_KEY,
                    value: "dark".to_string()
                },
                Action::Schedule {
                    delay: ms(600),
                    timer: Timer::ClearGlow
                },
            ]
        );

        handle_event(&mut state, &Event::TimerFired(Timer::ClearGlow), ms(600)).unwrap();
        assert!(!state.glow_active);
    }

    #[test]
    fn color_scheme_ignored_once_theme_stored() {
        let mut state = state();
        handle_event(&mut state, &Event::ColorSchemeChanged { dark: true }, ms(0)).unwrap();
        assert_eq!(state.theme, ThemeMode::Dark);

        handle_event(&mut state, &Event::Click(ClickTarget::ThemeToggle), ms(1)).unwrap();
        assert_eq!(state.theme, ThemeMode::Light);

        let (render, _) =
            handle_event(&mut state, &Event::ColorSchemeChanged { dark: true }, ms(2)).unwrap();
        assert!(!render);
        assert_eq!(state.theme, ThemeMode::Light);
    }

    #[test]
    fn scroll_closes_menu_and_tracks_section() {
        let mut state = state();
        state.sections = vec![
            crate::app::layout::SectionBounds::new("home", 0.0, 600.0),
            crate::app::layout::SectionBounds::new("about", 600.0, 600.0),
        ];
        handle_event(&mut state, &Event::Click(ClickTarget::MenuIcon), ms(0)).unwrap();
        assert!(state.menu_open);

        handle_event(&mut state, &Event::Scroll { y: 500.0 }, ms(1)).unwrap();
        assert!(!state.menu_open);
        assert!(state.header_sticky);
        assert_eq!(state.active_section.as_deref(), Some("about"));

        handle_event(&mut state, &Event::Scroll { y: 50.0 }, ms(2)).unwrap();
        assert!(!state.header_sticky);
        assert_eq!(state.active_section.as_deref(), Some("home"));
    }

    #[test]
    fn journey_toggle_walks_through_phases() {
        let mut state = state();
        assert_eq!(state.journey_button_label(), "See More");

        let (_, actions) =
            handle_event(&mut state, &Event::Click(ClickTarget::JourneySeeMore), ms(0)).unwrap();
        assert_eq!(state.journey, JourneyPhase::Revealing);
        assert_eq!(state.journey_button_label(), "See Less");
        assert_eq!(actions, vec![Action::schedule(Timer::ShowJourney)]);

        handle_event(&mut state, &Event::TimerFired(Timer::ShowJourney), ms(10)).unwrap();
        assert_eq!(state.journey, JourneyPhase::Shown);

        let (_, actions) =
            handle_event(&mut state, &Event::Click(ClickTarget::JourneySeeMore), ms(20)).unwrap();
        assert_eq!(state.journey, JourneyPhase::Concealing);
        assert_eq!(
            actions,
            vec![Action::Schedule {
                delay: ms(400),
                timer: Timer::HideJourney
            }]
        );
        assert_eq!(state.journey_button_label(), "See More");
    }

    #[test]
    fn stale_journey_timer_is_ignored() {
        let mut state = state();
        handle_event(&mut state, &Event::Click(ClickTarget::JourneySeeMore), ms(0)).unwrap();
        handle_event(&mut state, &Event::Click(ClickTarget::JourneySeeMore), ms(5)).unwrap();
        assert_eq!(state.journey, JourneyPhase::Concealing);

        let (render, _) =
            handle_event(&mut state, &Event::TimerFired(Timer::ShowJourney), ms(10)).unwrap();
        assert!(!render);
        assert_eq!(state.journey, JourneyPhase::Concealing);
    }

    #[test]
    fn filter_hides_then_reveals() {
        let mut state = state();
        let (_, actions) = handle_event(
            &mut state,
            &Event::Click(ClickTarget::Filter("web".to_string())),
            ms(0),
        )
        .unwrap();
        assert_eq!(actions, vec![Action::schedule(Timer::RevealPortfolio)]);
        assert_eq!(state.portfolio.visible_items().count(), 0);

        handle_event(&mut state, &Event::TimerFired(Timer::RevealPortfolio), ms(10)).unwrap();
        let titles: Vec<_> = state
            .portfolio
            .visible_items()
            .map(|i| i.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Chat App", "Weather Widget"]);
    }

    #[test]
    fn search_applies_after_quiet_period() {
        let mut state = state();
        handle_event(&mut state, &Event::SearchInput("wea".to_string()), ms(0)).unwrap();
        handle_event(&mut state, &Event::SearchInput("weather".to_string()), ms(100)).unwrap();

        handle_event(&mut state, &Event::Tick, ms(350)).unwrap();
        assert_eq!(state.portfolio.search_query(), "");

        handle_event(&mut state, &Event::Tick, ms(400)).unwrap();
        assert_eq!(state.portfolio.search_query(), "weather");
        assert_eq!(state.portfolio.visible_items().count(), 1);
    }

    #[test]
    fn modal_opens_and_escape_closes() {
        let mut state = state();
        let (render, _) =
            handle_event(&mut state, &Event::Click(ClickTarget::PortfolioItem(1)), ms(0)).unwrap();
        assert!(render);
        assert_eq!(state.portfolio.modal().map(|i| i.title.as_str()), Some("Inventory API"));

        handle_event(&mut state, &Event::Escape, ms(1)).unwrap();
        assert!(state.portfolio.modal().is_none());

        let (render, _) =
            handle_event(&mut state, &Event::Click(ClickTarget::PortfolioItem(9)), ms(2)).unwrap();
        assert!(!render);
    }

    #[test]
    fn pointer_moves_are_throttled() {
        let mut state = state();
        handle_event(&mut state, &Event::PointerMove { x: 10.0, y: 20.0 }, ms(0)).unwrap();
        handle_event(&mut state, &Event::PointerMove { x: 99.0, y: 99.0 }, ms(5)).unwrap();
        let pointer = state.cloud.as_ref().unwrap().pointer();
        assert_eq!(pointer, Pointer::new(10.0, 20.0));

        handle_event(&mut state, &Event::PointerMove { x: 30.0, y: 40.0 }, ms(16)).unwrap();
        assert_eq!(state.cloud.as_ref().unwrap().pointer(), Pointer::new(30.0, 40.0));
    }

    #[test]
    fn coarse_pointer_does_not_steer() {
        let mut state = state();
        state.environment.pointer = PointerCapability::Coarse;
        handle_event(&mut state, &Event::PointerMove { x: 10.0, y: 20.0 }, ms(0)).unwrap();
        assert_eq!(state.cloud.as_ref().unwrap().pointer(), Pointer::new(250.0, 250.0));
    }

    #[test]
    fn reduced_motion_toggles_cloud() {
        let mut state = state();
        assert!(state.cloud.is_some());

        handle_event(&mut state, &Event::ReducedMotionChanged { reduce: true }, ms(0)).unwrap();
        assert!(state.cloud.is_none());
        assert!(state.fallback_labels().is_some());

        handle_event(&mut state, &Event::ReducedMotionChanged { reduce: false }, ms(1)).unwrap();
        assert!(state.cloud.is_some());
    }

    #[test]
    fn resize_applies_on_tick_after_debounce() {
        let mut state = state();
        let resize = Event::Resize {
            viewport_width: 900.0,
            surface: Some((200.0, 100.0)),
        };
        handle_event(&mut state, &resize, ms(0)).unwrap();
        handle_event(&mut state, &Event::Tick, ms(100)).unwrap();
        assert_eq!(state.slides_per_view, 3);

        handle_event(&mut state, &Event::Tick, ms(250)).unwrap();
        assert_eq!(state.slides_per_view, 2);
        assert_eq!(state.cloud.as_ref().unwrap().size(), (200.0, 100.0));
    }

    #[test]
    fn github_failure_renders_error_state() {
        let mut state = state();
        handle_event(
            &mut state,
            &Event::GithubFailed {
                message: "HTTP 403".to_string(),
            },
            ms(0),
        )
        .unwrap();
        assert_eq!(state.github.stats.followers, crate::github::NOT_AVAILABLE);
        assert!(state.github.error_panel.is_some());
        assert!(state.github.repo_cards.is_empty());
    }
}
