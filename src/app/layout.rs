//! Scroll- and width-driven layout rules.

use serde::{Deserialize, Serialize};

/// Scroll position past which the header sticks.
pub const STICKY_THRESHOLD: f64 = 100.0;

/// A section becomes active this many pixels before its top reaches the viewport top.
pub const SECTION_ACTIVATION_OFFSET: f64 = 150.0;

/// Carousel breakpoints as `(min viewport width, slides per view)`, widest first.
const CAROUSEL_BREAKPOINTS: [(f64, usize); 2] = [(992.0, 3), (768.0, 2)];

/// Vertical extent of one page section, in document pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, scroll_y: f64) -> bool {
        let start = self.top - SECTION_ACTIVATION_OFFSET;
        scroll_y >= start && scroll_y < start + self.height
    }
}

/// Id of the section whose nav link should be highlighted at `scroll_y`.
///
/// When ranges overlap the last matching section wins. `None` leaves the
/// current highlight alone.
#[must_use]
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| s.contains(scroll_y))
        .map(|s| s.id.as_str())
}

#[must_use]
pub fn is_sticky(scroll_y: f64) -> bool {
    scroll_y > STICKY_THRESHOLD
}

/// Testimonial slides visible side by side at `viewport_width`.
#[must_use]
pub fn slides_per_view(viewport_width: f64) -> usize {
    CAROUSEL_BREAKPOINTS
        .iter()
        .find(|(min_width, _)| viewport_width >= *min_width)
        .map_or(1, |(_, slides)| *slides)
}
