//! GitHub widget block: profile, stats, languages and repo cards.

use crate::github::{GithubWidget, WidgetStatus};
use crate::ui::components::truncate;
use crate::ui::theme::Theme;
use std::fmt::Write;

#[must_use]
pub fn render_github(widget: &GithubWidget, theme: &Theme, cols: usize) -> String {
    let mut out = String::new();
    let colors = &theme.colors;

    let _ = writeln!(out, "{}{}GitHub{}", Theme::bold(), Theme::fg(&colors.heading), Theme::reset());

    if widget.status == WidgetStatus::Ready {
        let _ = writeln!(
            out,
            "{}{} (@{}){}",
            Theme::fg(&colors.text),
            widget.display_name,
            widget.login,
            Theme::reset()
        );
        if !widget.bio.is_empty() {
            let _ = writeln!(
                out,
                "{}{}{}",
                Theme::fg(&colors.text_dim),
                truncate(&widget.bio, cols),
                Theme::reset()
            );
        }
    }

    let stats: Vec<String> = widget
        .stats
        .entries()
        .iter()
        .map(|(caption, value)| format!("{caption}: {value}"))
        .collect();
    let _ = writeln!(out, "{}{}{}", Theme::fg(&colors.text), stats.join("  "), Theme::reset());

    if let Some(panel) = &widget.error_panel {
        let _ = writeln!(
            out,
            "{}{}{}: {}{}",
            Theme::bold(),
            Theme::fg(&colors.error),
            panel.title,
            truncate(&panel.message, cols),
            Theme::reset()
        );
        return out;
    }

    if !widget.languages.is_empty() {
        let langs: Vec<String> = widget
            .languages
            .iter()
            .map(|(lang, count)| format!("{lang} ({count})"))
            .collect();
        let _ = writeln!(
            out,
            "{}Languages: {}{}",
            Theme::fg(&colors.text_dim),
            langs.join(", "),
            Theme::reset()
        );
    }

    for card in &widget.repo_cards {
        let mut meta = format!("★ {}  ⑂ {}", card.stars, card.forks);
        if let Some(lang) = &card.language {
            let _ = write!(meta, "  {lang}");
        }
        if let Some(updated) = &card.updated {
            let _ = write!(meta, "  {updated}");
        }
        let _ = writeln!(
            out,
            "{}{}{}  {}{}{}",
            Theme::fg(&colors.link),
            card.name,
            Theme::reset(),
            Theme::fg(&colors.text_dim),
            meta,
            Theme::reset()
        );
        let _ = writeln!(out, "  {}", truncate(&card.description, cols.saturating_sub(2)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::NOT_AVAILABLE;

    #[test]
    fn failure_shows_placeholders_and_panel() {
        let widget = GithubWidget::failed("HTTP 403 from https://api.github.com/users/octocat");
        let out = render_github(&widget, &Theme::default(), 80);
        assert!(out.contains(&format!("Followers: {NOT_AVAILABLE}")));
        assert!(out.contains("HTTP 403"));
        assert!(!out.contains('★'));
    }
}
