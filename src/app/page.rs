//! Page runtime: executes handler actions and drives frames.
//!
//! [`Page`] is the explicit context object a host creates once per page
//! load. It owns the [`AppState`], the preference store and the timer
//! queue, and it is the only place actions take effect.

use super::actions::{Action, Timer};
use super::environment::Environment;
use super::handler::{handle_event, Event};
use super::modes::ThemeMode;
use super::state::AppState;
use crate::cloud::{FrameScheduler, Surface};
use crate::github::{GithubClient, HttpTransport};
use crate::storage::{PreferenceStore, THEME_KEY};
use crate::Config;
use std::time::Duration;

pub struct Page<S: PreferenceStore> {
    state: AppState,
    store: S,
    /// Pending timers as `(due, timer)`, in scheduling order.
    timers: Vec<(Duration, Timer)>,
    github_requested: bool,
    /// Latest page time seen by the runtime.
    now: Duration,
}

impl<S: PreferenceStore> Page<S> {
    /// Builds the page, restoring the theme from `store`.
    ///
    /// An unreadable store is logged and treated as empty.
    pub fn new(config: &Config, environment: Environment, store: S) -> Self {
        let _span = tracing::debug_span!("page_new").entered();

        let stored_theme = match store.get(THEME_KEY) {
            Ok(value) => value.as_deref().map(ThemeMode::from_stored),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read theme preference");
                None
            }
        };

        Self {
            state: AppState::new(config, environment, stored_theme),
            store,
            timers: Vec::new(),
            github_requested: false,
            now: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Gives the store back, e.g. to flush a file-backed store on drop.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Timers still waiting to fire.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Handles one event and executes its actions. Returns whether the page
    /// needs a redraw.
    pub fn dispatch(&mut self, event: &Event, now: Duration) -> bool {
        self.now = self.now.max(now);

        match handle_event(&mut self.state, event, now) {
            Ok((render, actions)) => {
                for action in actions {
                    self.execute(action, now);
                }
                render
            }
            Err(e) => {
                tracing::warn!(error = %e, "event handling failed");
                false
            }
        }
    }

    fn execute(&mut self, action: Action, now: Duration) {
        match action {
            Action::PersistPreference { key, value } => {
                if let Err(e) = self.store.set(key, &value) {
                    tracing::warn!(key, error = %e, "failed to persist preference");
                }
            }
            Action::Schedule { delay, timer } => {
                tracing::trace!(?timer, delay_ms = delay.as_millis(), "timer scheduled");
                self.timers.push((now + delay, timer));
            }
        }
    }

    /// Fires every timer due by `now`, earliest first. Returns whether any of
    /// them changed the page.
    pub fn advance_timers(&mut self, now: Duration) -> bool {
        let mut render = false;

        while let Some(index) = self.next_due(now) {
            let (due, timer) = self.timers.remove(index);
            render |= self.dispatch(&Event::TimerFired(timer), due);
        }
        render
    }

    fn next_due(&self, now: Duration) -> Option<usize> {
        self.timers
            .iter()
            .enumerate()
            .filter(|(_, (due, _))| *due <= now)
            .min_by_key(|(_, (due, _))| *due)
            .map(|(i, _)| i)
    }

    /// Runs one animation frame: due timers, a tick, then a cloud step and
    /// draw if the cloud is animating and a surface is given.
    pub fn frame<T: Surface + ?Sized>(&mut self, now: Duration, surface: Option<&mut T>) -> bool {
        let mut render = self.advance_timers(now);
        render |= self.dispatch(&Event::Tick, now);

        if let Some(cloud) = self.state.cloud.as_mut() {
            cloud.advance();
            if let Some(surface) = surface {
                cloud.draw(surface);
            }
            render = true;
        }
        render
    }

    /// Drives frames until `scheduler` stops. Returns the number of frames run.
    pub fn run<T, F>(&mut self, surface: &mut T, scheduler: &mut F) -> usize
    where
        T: Surface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        let _span = tracing::debug_span!("page_run").entered();
        let mut frames = 0;

        while let Some(now) = scheduler.request_frame() {
            self.frame(now, Some(&mut *surface));
            frames += 1;
        }

        tracing::debug!(frames, "frame loop finished");
        frames
    }

    /// Fetches the GitHub profile and fills the widget.
    ///
    /// Only the first call per page issues requests; later calls return
    /// `false` without touching the network.
    pub async fn load_github<T: HttpTransport>(&mut self, client: &GithubClient<T>) -> bool {
        if self.github_requested {
            tracing::debug!("github profile already requested");
            return false;
        }
        self.github_requested = true;

        let event = match client.fetch_profile().await {
            Ok(profile) => Event::GithubLoaded(profile),
            Err(e) => Event::GithubFailed {
                message: e.to_string(),
            },
        };
        self.dispatch(&event, self.now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handler::ClickTarget;
    use crate::cloud::{FixedFrames, RecordingSurface};
    use crate::storage::MemoryStore;

    fn config() -> Config {
        Config {
            seed: Some(3),
            ..Config::default()
        }
    }

    #[test]
    fn restores_stored_theme() {
        let page = Page::new(
            &config(),
            Environment::default(),
            MemoryStore::with_entry(THEME_KEY, "dark"),
        );
        assert_eq!(page.state().theme, ThemeMode::Dark);
    }

    #[test]
    fn theme_toggle_writes_store() {
        let mut page = Page::new(&config(), Environment::default(), MemoryStore::default());
        page.dispatch(&Event::Click(ClickTarget::ThemeToggle), Duration::ZERO);

        assert_eq!(page.store().get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(page.pending_timers(), 1);
    }

    #[test]
    fn timers_fire_in_due_order() {
        let mut page = Page::new(&config(), Environment::default(), MemoryStore::default());
        page.dispatch(&Event::Click(ClickTarget::ThemeToggle), Duration::ZERO);
        page.dispatch(&Event::Click(ClickTarget::JourneySeeMore), Duration::from_millis(5));

        assert!(page.advance_timers(Duration::from_millis(20)));
        assert!(page.state().glow_active);
        assert!(page.state().journey.has_show_class());
        assert_eq!(page.pending_timers(), 1);

        page.advance_timers(Duration::from_millis(600));
        assert!(!page.state().glow_active);
        assert_eq!(page.pending_timers(), 0);
    }

    #[test]
    fn frames_draw_the_cloud() {
        let mut page = Page::new(&config(), Environment::default(), MemoryStore::default());
        let mut surface = RecordingSurface::new();
        let frames = page.run(&mut surface, &mut FixedFrames::new(3));

        assert_eq!(frames, 3);
        assert_eq!(surface.clears, 3);
        assert_eq!(surface.calls.len(), config().labels.len());
    }

    #[test]
    fn frames_without_cloud_only_tick() {
        let env = Environment {
            reduced_motion: true,
            ..Environment::default()
        };
        let mut page = Page::new(&config(), env, MemoryStore::default());
        let mut surface = RecordingSurface::new();
        page.run(&mut surface, &mut FixedFrames::new(2));

        assert_eq!(surface.clears, 0);
        assert!(surface.calls.is_empty());
    }
}
