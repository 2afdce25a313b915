//! Portfolio block: filter buttons, visible items and the open modal.

use crate::app::PortfolioGallery;
use crate::ui::components::truncate;
use crate::ui::theme::Theme;
use std::fmt::Write;

#[must_use]
pub fn render_portfolio(gallery: &PortfolioGallery, theme: &Theme, cols: usize) -> String {
    let mut out = String::new();
    let colors = &theme.colors;

    for filter in gallery.filters() {
        if filter == gallery.active_filter() {
            let _ = write!(out, "{}{}[{filter}]{} ", Theme::bold(), Theme::fg(&colors.accent), Theme::reset());
        } else {
            let _ = write!(out, "{} {filter} {} ", Theme::fg(&colors.text_dim), Theme::reset());
        }
    }
    if !gallery.search_query().is_empty() {
        let _ = write!(out, " search: {}", gallery.search_query());
    }
    out.push('\n');

    for item in gallery.visible_items() {
        let _ = writeln!(
            out,
            "  {}{}{} {}({}){}",
            Theme::fg(&colors.text),
            item.title,
            Theme::reset(),
            Theme::fg(&colors.text_dim),
            item.category,
            Theme::reset()
        );
    }

    if let Some(item) = gallery.modal() {
        let _ = writeln!(out, "{}{}┃ {}{}", Theme::bold(), Theme::fg(&colors.heading), item.title, Theme::reset());
        let _ = writeln!(out, "┃ {}", truncate(&item.description, cols.saturating_sub(2)));
        if let Some(link) = &item.link {
            let _ = writeln!(out, "┃ {}{link}{}", Theme::fg(&colors.link), Theme::reset());
        }
    }
    out
}
