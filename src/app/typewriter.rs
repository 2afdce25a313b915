//! Typing/erasing role banner under the hero heading.
//!
//! Types one role a character at a time, holds it, erases it, then moves on to
//! the next role, forever. Driven by the page clock: [`Typewriter::advance`]
//! catches up on every step that fell due since the last call.

use std::time::Duration;

/// Timing for the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_step: Duration,
    pub erase_step: Duration,
    pub hold: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_step: Duration::from_millis(70),
            erase_step: Duration::from_millis(70),
            hold: Duration::from_millis(1000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Erasing,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: Vec<Vec<char>>,
    timing: TypewriterTiming,
    role: usize,
    shown: usize,
    phase: Phase,
    /// When the next step is due.
    next_at: Duration,
}

impl Typewriter {
    /// Steps shorter than a millisecond are raised to one so `advance` always terminates.
    #[must_use]
    pub fn new(roles: &[String], timing: TypewriterTiming) -> Self {
        let floor = Duration::from_millis(1);
        let timing = TypewriterTiming {
            type_step: timing.type_step.max(floor),
            erase_step: timing.erase_step.max(floor),
            hold: timing.hold.max(floor),
        };
        Self {
            roles: roles.iter().map(|r| r.chars().collect()).collect(),
            timing,
            role: 0,
            shown: 0,
            phase: Phase::Typing,
            next_at: timing.type_step,
        }
    }

    /// Applies every step due by `now`. Returns `true` if the text changed.
    pub fn advance(&mut self, now: Duration) -> bool {
        if self.roles.is_empty() {
            return false;
        }

        let before = (self.role, self.shown);
        while now >= self.next_at {
            self.step();
        }
        before != (self.role, self.shown)
    }

    fn step(&mut self) {
        let len = self.roles[self.role].len();
        match self.phase {
            Phase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.phase = Phase::Holding;
                    self.next_at += self.timing.hold;
                } else {
                    self.next_at += self.timing.type_step;
                }
            }
            Phase::Holding => {
                self.phase = Phase::Erasing;
                self.erase_one();
            }
            Phase::Erasing => self.erase_one(),
        }
    }

    fn erase_one(&mut self) {
        self.shown = self.shown.saturating_sub(1);
        if self.shown == 0 {
            self.role = (self.role + 1) % self.roles.len();
            self.phase = Phase::Typing;
            self.next_at += self.timing.type_step;
        } else {
            self.next_at += self.timing.erase_step;
        }
    }

    /// Text currently on screen.
    #[must_use]
    pub fn text(&self) -> String {
        self.roles
            .get(self.role)
            .map(|r| r[..self.shown].iter().collect())
            .unwrap_or_default()
    }

    /// Index of the role being typed or erased.
    #[must_use]
    pub const fn role_index(&self) -> usize {
        self.role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn writer() -> Typewriter {
        Typewriter::new(&["Dev".to_string(), "Ops".to_string()], TypewriterTiming::default())
    }

    #[test]
    fn types_one_char_per_step() {
        let mut tw = writer();
        assert_eq!(tw.text(), "");
        assert!(!tw.advance(ms(69)));
        assert!(tw.advance(ms(70)));
        assert_eq!(tw.text(), "D");
        tw.advance(ms(210));
        assert_eq!(tw.text(), "Dev");
    }

    #[test]
    fn holds_then_erases_then_types_next_role() {
        let mut tw = writer();
        tw.advance(ms(210));
        tw.advance(ms(1209));
        assert_eq!(tw.text(), "Dev");
        tw.advance(ms(1210));
        assert_eq!(tw.text(), "De");
        tw.advance(ms(1350));
        assert_eq!(tw.text(), "");
        assert_eq!(tw.role_index(), 1);
        tw.advance(ms(1420));
        assert_eq!(tw.text(), "O");
    }

    #[test]
    fn loops_back_to_first_role() {
        let mut tw = writer();
        tw.advance(ms(10_000));
        let mut seen_first_again = false;
        for t in (10_000..20_000).step_by(10) {
            tw.advance(ms(t));
            if tw.role_index() == 0 && tw.text() == "Dev" {
                seen_first_again = true;
            }
        }
        assert!(seen_first_again);
    }

    #[test]
    fn no_roles_is_inert() {
        let mut tw = Typewriter::new(&[], TypewriterTiming::default());
        assert!(!tw.advance(ms(5000)));
        assert_eq!(tw.text(), "");
    }
}
