//! Top-level terminal rendering coordinator.
//!
//! ```text
//! AppState (+ cloud grid) → header → cloud → about → portfolio → github
//! ```

use crate::app::AppState;
use crate::ui::components::{render_github, render_header, render_portfolio, rule};
use crate::ui::terminal::TerminalSurface;
use crate::ui::theme::Theme;
use std::fmt::Write;

/// Renders the whole page as ANSI text, `cols` columns wide.
///
/// `cloud` is the grid the tag cloud was last drawn into. When the cloud is
/// not animating the label texts are listed instead.
#[must_use]
pub fn render_page(state: &AppState, cloud: Option<&TerminalSurface>, cols: usize) -> String {
    let _span = tracing::debug_span!("render_page", cols).entered();
    let theme = Theme::for_mode(state.theme);
    let mut out = String::new();

    out.push_str(&render_header(state, &theme));
    out.push_str(&rule(&theme, cols));

    match (state.fallback_labels(), cloud) {
        (Some(labels), _) => {
            let _ = writeln!(
                out,
                "{}{}{}",
                Theme::fg(&theme.colors.text),
                labels.join(" · "),
                Theme::reset()
            );
        }
        (None, Some(grid)) => out.push_str(&grid.render()),
        (None, None) => {}
    }
    out.push_str(&rule(&theme, cols));

    let _ = writeln!(
        out,
        "{}[{}]  [{}]  carousel: {} per view{}",
        Theme::fg(&theme.colors.text_dim),
        state.read_more_label(),
        state.journey_button_label(),
        state.slides_per_view,
        Theme::reset()
    );
    out.push_str(&rule(&theme, cols));

    out.push_str(&render_portfolio(&state.portfolio, &theme, cols));
    out.push_str(&rule(&theme, cols));

    out.push_str(&render_github(&state.github, &theme, cols));
    out
}
