//! Page header: brand, theme icon, navigation and the typed role line.

use crate::app::AppState;
use crate::ui::theme::Theme;
use std::fmt::Write;

/// Renders the sticky header and hero line.
///
/// The active section is drawn bold in the accent color. While the theme
/// icon glows it is drawn in the glow color.
#[must_use]
pub fn render_header(state: &AppState, theme: &Theme) -> String {
    let mut out = String::new();
    let colors = &theme.colors;

    if state.header_sticky {
        out.push_str(Theme::bold());
    }
    let _ = write!(out, "{}folio{}  ", Theme::fg(&colors.heading), Theme::reset());

    for section in &state.sections {
        if state.active_section.as_deref() == Some(section.id.as_str()) {
            let _ = write!(
                out,
                "{}{}{}{}  ",
                Theme::bold(),
                Theme::fg(&colors.accent),
                section.id,
                Theme::reset()
            );
        } else {
            let _ = write!(out, "{}{}{}  ", Theme::fg(&colors.text), section.id, Theme::reset());
        }
    }

    let icon_color = if state.glow_active {
        state.theme.glow_color()
    } else {
        colors.text_dim.as_str()
    };
    let _ = writeln!(
        out,
        "{}[{}]{} {}",
        Theme::fg(icon_color),
        state.theme.icon(),
        Theme::reset(),
        if state.menu_open { "[x]" } else { "[≡]" }
    );

    let _ = writeln!(
        out,
        "{}I'm a {}{}{}|{}",
        Theme::fg(&colors.text),
        Theme::bold(),
        Theme::fg(&colors.accent),
        state.typewriter.text(),
        Theme::reset()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Environment, SectionBounds};
    use crate::Config;

    #[test]
    fn active_section_is_highlighted() {
        let config = Config {
            sections: vec![
                SectionBounds::new("home", 0.0, 500.0),
                SectionBounds::new("about", 500.0, 500.0),
            ],
            ..Config::default()
        };
        let mut state = AppState::new(&config, Environment::default(), None);
        state.active_section = Some("about".to_string());
        let theme = Theme::default();

        let out = render_header(&state, &theme);
        let highlighted = format!("{}{}about", Theme::bold(), Theme::fg(&theme.colors.accent));
        assert!(out.contains(&highlighted));
        assert!(out.contains("home"));
        assert!(out.contains("[moon]"));
    }
}
