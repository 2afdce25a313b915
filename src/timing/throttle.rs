//! Leading-edge throttle.

use std::time::Duration;

/// Admits at most one call per `window`, measured from the last admitted call.
///
/// The first call in a window passes immediately; calls landing inside the
/// window are dropped, not deferred.
///
/// # Example
///
/// ```rust
/// use folio::timing::Throttle;
/// use std::time::Duration;
///
/// let mut throttle = Throttle::new(Duration::from_millis(16));
/// assert!(throttle.admit(Duration::from_millis(0)));
/// assert!(!throttle.admit(Duration::from_millis(10)));
/// assert!(throttle.admit(Duration::from_millis(16)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throttle {
    window: Duration,
    last_admitted: Option<Duration>,
}

impl Throttle {
    /// About one frame at 60 Hz.
    pub const DEFAULT_WINDOW: Duration = Duration::from_millis(16);

    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            last_admitted: None,
        }
    }

    /// Returns `true` if a call at `now` should run.
    pub fn admit(&mut self, now: Duration) -> bool {
        match self.last_admitted {
            Some(last) if now.saturating_sub(last) < self.window => false,
            _ => {
                self.last_admitted = Some(now);
                true
            }
        }
    }

    /// Runs `f` if a call at `now` is admitted.
    pub fn call<T>(&mut self, now: Duration, f: impl FnOnce() -> T) -> Option<T> {
        self.admit(now).then(f)
    }

    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}
