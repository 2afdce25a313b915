//! Text components for the terminal demo.
//!
//! Each component writes one block of the page into a `String` using the
//! active palette. [`render_page`](super::render_page) stacks them.

pub mod github;
pub mod header;
pub mod portfolio;

pub use github::render_github;
pub use header::render_header;
pub use portfolio::render_portfolio;

use crate::ui::theme::Theme;

/// Cuts `text` to `width` characters, ending with `…` when shortened.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// A horizontal separator spanning `cols` columns.
#[must_use]
pub fn rule(theme: &Theme, cols: usize) -> String {
    format!(
        "{}{}{}\n",
        Theme::fg(&theme.colors.border),
        "─".repeat(cols),
        Theme::reset()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_marks_cut_text() {
        assert_eq!(truncate("portfolio", 20), "portfolio");
        assert_eq!(truncate("portfolio", 5), "port…");
        assert_eq!(truncate("portfolio", 0), "");
    }
}
