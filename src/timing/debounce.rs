//! Trailing-edge debounce.

use std::time::Duration;

/// Holds back a value until `quiet` has passed without another call.
///
/// Each [`call`](Self::call) replaces the pending value and restarts the quiet
/// period. The host polls with the current time; [`poll`](Self::poll) hands the
/// value out once, after the deadline.
///
/// # Example
///
/// ```rust
/// use folio::timing::Debounce;
/// use std::time::Duration;
///
/// let ms = Duration::from_millis;
/// let mut resize = Debounce::new(ms(250));
/// resize.call(ms(0), (800, 600));
/// resize.call(ms(100), (1024, 768));
/// assert_eq!(resize.poll(ms(300)), None);
/// assert_eq!(resize.poll(ms(350)), Some((1024, 768)));
/// assert_eq!(resize.poll(ms(400)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debounce<T> {
    quiet: Duration,
    pending: Option<(Duration, T)>,
}

impl<T> Debounce<T> {
    #[must_use]
    pub const fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Schedules `value` for `now + quiet`, cancelling whatever was pending.
    pub fn call(&mut self, now: Duration, value: T) {
        self.pending = Some((now + self.quiet, value));
    }

    /// Returns the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        match self.pending {
            Some((due, _)) if now >= due => self.pending.take().map(|(_, v)| v),
            _ => None,
        }
    }

    /// Drops the pending value, if any.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, v)| v)
    }

    /// When the pending value becomes due.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|(due, _)| *due)
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub const fn quiet(&self) -> Duration {
        self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn fires_once_after_quiet_period() {
        let mut d = Debounce::new(ms(300));
        d.call(ms(0), "r");
        assert_eq!(d.poll(ms(299)), None);
        assert_eq!(d.poll(ms(300)), Some("r"));
        assert_eq!(d.poll(ms(301)), None);
        assert!(!d.is_pending());
    }

    #[test]
    fn new_call_restarts_the_period_and_replaces_value() {
        let mut d = Debounce::new(ms(250));
        d.call(ms(0), 1);
        d.call(ms(200), 2);
        assert_eq!(d.deadline(), Some(ms(450)));
        assert_eq!(d.poll(ms(260)), None);
        assert_eq!(d.poll(ms(450)), Some(2));
    }

    #[test]
    fn cancel_drops_pending_value() {
        let mut d = Debounce::new(ms(10));
        d.call(ms(0), 'x');
        assert_eq!(d.cancel(), Some('x'));
        assert_eq!(d.poll(ms(100)), None);
    }
}
