//! Rate limiting for high-frequency input.
//!
//! Pointer moves go through a leading-edge [`Throttle`] (about one frame);
//! resize and search input go through a trailing [`Debounce`]. Both take the
//! current time as a `Duration` since page start so the page stays
//! deterministic under test.

pub mod debounce;
pub mod throttle;

pub use debounce::Debounce;
pub use throttle::Throttle;
