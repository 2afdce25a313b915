//! Drawing surface abstraction.
//!
//! The renderer never talks to a real canvas. Hosts implement [`Surface`] for
//! whatever they draw on; [`RecordingSurface`] keeps the calls in memory.

/// Paint parameters for one `fill_text` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle<'a> {
    /// CSS-style color string, usually `#rrggbb`.
    pub color: &'a str,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
    /// Font size in pixels.
    pub font_size: f64,
}

/// A 2D drawing surface that can clear itself and draw centered text.
pub trait Surface {
    /// Clears the whole surface.
    fn clear(&mut self);

    /// Draws `text` centered on `(x, y)` in surface pixels.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle<'_>);
}

/// One recorded `fill_text` call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub alpha: f64,
    pub font_size: f64,
}

/// Surface that records what was drawn since the last clear.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    /// Calls since the most recent `clear`.
    pub calls: Vec<DrawCall>,
    /// Number of times `clear` was called.
    pub clears: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Texts of the last frame, in paint order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.calls.iter().map(|c| c.text.as_str()).collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.calls.clear();
        self.clears += 1;
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle<'_>) {
        self.calls.push(DrawCall {
            text: text.to_string(),
            x,
            y,
            color: style.color.to_string(),
            alpha: style.alpha,
            font_size: style.font_size,
        });
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle<'_>) {
        (**self).fill_text(text, x, y, style);
    }
}
