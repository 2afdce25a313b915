//! Side effects produced by the event handler.
//!
//! The handler only mutates [`AppState`](super::AppState). Anything that
//! touches the outside world, or has to happen later, comes back as an
//! [`Action`] for [`Page`](super::Page) to carry out.

use std::time::Duration;

/// Deferred page updates, scheduled with [`Action::Schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timer {
    /// End of the theme icon glow animation.
    ClearGlow,
    /// Give filtered portfolio items their `show` class back.
    RevealPortfolio,
    /// Apply `show` to freshly displayed education entries.
    ShowJourney,
    /// Stop displaying education entries after their fade-out.
    HideJourney,
}

impl Timer {
    /// How long after scheduling the timer fires.
    #[must_use]
    pub const fn delay(self) -> Duration {
        match self {
            Self::ClearGlow => Duration::from_millis(600),
            Self::RevealPortfolio | Self::ShowJourney => Duration::from_millis(10),
            Self::HideJourney => Duration::from_millis(400),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Write a preference to the store.
    PersistPreference {
        key: &'static str,
        value: String,
    },

    /// Fire `timer` after `delay`.
    Schedule { delay: Duration, timer: Timer },
}

impl Action {
    #[must_use]
    pub const fn schedule(timer: Timer) -> Self {
        Self::Schedule {
            delay: timer.delay(),
            timer,
        }
    }
}
