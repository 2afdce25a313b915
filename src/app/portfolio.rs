//! Portfolio gallery: category filter, search and detail modal.
//!
//! Filtering mirrors the page's CSS animation: selecting a filter hides every
//! item at once, then the matching items get their `show` class back on the
//! next reveal tick so the transition replays.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::{Deserialize, Serialize};

/// Filter value that matches every category.
pub const FILTER_ALL: &str = "all";

/// One project box in the portfolio section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl PortfolioItem {
    #[must_use]
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            description: String::new(),
            link: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PortfolioGallery {
    items: Vec<PortfolioItem>,
    active_filter: String,
    search_query: String,
    /// Indices of items currently carrying the `show` class.
    visible: Vec<usize>,
    /// Indices waiting for the reveal tick.
    pending_reveal: Option<Vec<usize>>,
    open_modal: Option<usize>,
}

impl PortfolioGallery {
    /// Creates a gallery with every item shown.
    #[must_use]
    pub fn new(items: Vec<PortfolioItem>) -> Self {
        let visible = (0..items.len()).collect();
        Self {
            items,
            active_filter: FILTER_ALL.to_string(),
            search_query: String::new(),
            visible,
            pending_reveal: None,
            open_modal: None,
        }
    }

    /// Activates `filter` and hides everything until [`reveal`](Self::reveal).
    pub fn select_filter(&mut self, filter: &str) {
        self.active_filter = filter.to_string();
        self.visible.clear();
        self.open_modal = None;
        self.pending_reveal = Some(self.matching());

        tracing::debug!(
            filter = %filter,
            pending = self.pending_reveal.as_ref().map_or(0, Vec::len),
            "portfolio filter selected"
        );
    }

    /// Shows the items hidden by the last filter change. Returns `false` if
    /// nothing was waiting.
    pub fn reveal(&mut self) -> bool {
        match self.pending_reveal.take() {
            Some(indices) => {
                self.visible = indices;
                true
            }
            None => false,
        }
    }

    /// Applies a search query on top of the active filter.
    ///
    /// Every whitespace-separated token must fuzzy-match the item title.
    pub fn set_search(&mut self, query: &str) {
        self.search_query = query.trim().to_string();
        let matching = self.matching();

        if let Some(open) = self.open_modal {
            if !matching.contains(&open) {
                self.open_modal = None;
            }
        }

        match self.pending_reveal.as_mut() {
            Some(pending) => *pending = matching,
            None => self.visible = matching,
        }
    }

    fn matching(&self) -> Vec<usize> {
        let tokens: Vec<String> = self
            .search_query
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();
        let matcher = (!tokens.is_empty()).then(SkimMatcherV2::default);

        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| {
                self.active_filter == FILTER_ALL || item.category == self.active_filter
            })
            .filter(|(_, item)| {
                matcher.as_ref().map_or(true, |m| {
                    let title = item.title.to_lowercase();
                    tokens.iter().all(|t| m.fuzzy_match(&title, t).is_some())
                })
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// Opens the detail modal for a visible item.
    pub fn open(&mut self, index: usize) -> bool {
        if self.visible.contains(&index) {
            self.open_modal = Some(index);
            true
        } else {
            false
        }
    }

    /// Closes the modal. Returns `false` if it was not open.
    pub fn close(&mut self) -> bool {
        self.open_modal.take().is_some()
    }

    #[must_use]
    pub fn modal(&self) -> Option<&PortfolioItem> {
        self.open_modal.and_then(|i| self.items.get(i))
    }

    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.contains(&index)
    }

    pub fn visible_items(&self) -> impl Iterator<Item = &PortfolioItem> {
        self.visible.iter().filter_map(|&i| self.items.get(i))
    }

    #[must_use]
    pub fn items(&self) -> &[PortfolioItem] {
        &self.items
    }

    #[must_use]
    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    #[must_use]
    pub const fn reveal_pending(&self) -> bool {
        self.pending_reveal.is_some()
    }

    /// Filter buttons: `"all"` followed by each category in first-seen order.
    #[must_use]
    pub fn filters(&self) -> Vec<&str> {
        let mut filters = vec![FILTER_ALL];
        for item in &self.items {
            if !filters.contains(&item.category.as_str()) {
                filters.push(&item.category);
            }
        }
        filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> PortfolioGallery {
        PortfolioGallery::new(vec![
            PortfolioItem::new("Weather Dashboard", "web"),
            PortfolioItem::new("Inventory API", "backend"),
            PortfolioItem::new("Chat Widget", "web"),
            PortfolioItem::new("Payroll Service", "backend"),
        ])
    }

    fn visible_titles(g: &PortfolioGallery) -> Vec<&str> {
        g.visible_items().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn everything_shows_at_startup() {
        let g = gallery();
        assert_eq!(g.visible_items().count(), 4);
        assert_eq!(g.active_filter(), FILTER_ALL);
    }

    #[test]
    fn filter_hides_then_reveals_matches() {
        let mut g = gallery();
        g.select_filter("backend");
        assert_eq!(g.visible_items().count(), 0);
        assert!(g.reveal_pending());

        assert!(g.reveal());
        assert_eq!(visible_titles(&g), vec!["Inventory API", "Payroll Service"]);
        assert!(!g.reveal());
    }

    #[test]
    fn all_filter_reveals_everything() {
        let mut g = gallery();
        g.select_filter("web");
        g.reveal();
        g.select_filter(FILTER_ALL);
        g.reveal();
        assert_eq!(g.visible_items().count(), 4);
    }

    #[test]
    fn search_narrows_within_filter() {
        let mut g = gallery();
        g.select_filter("web");
        g.reveal();
        g.set_search("chat");
        assert_eq!(visible_titles(&g), vec!["Chat Widget"]);

        g.set_search("");
        assert_eq!(visible_titles(&g), vec!["Weather Dashboard", "Chat Widget"]);
    }

    #[test]
    fn search_during_pending_reveal_updates_pending_set() {
        let mut g = gallery();
        g.select_filter("backend");
        g.set_search("pay");
        assert_eq!(g.visible_items().count(), 0);
        g.reveal();
        assert_eq!(visible_titles(&g), vec!["Payroll Service"]);
    }

    #[test]
    fn modal_only_opens_for_visible_items() {
        let mut g = gallery();
        g.select_filter("web");
        g.reveal();
        assert!(!g.open(1));
        assert!(g.open(2));
        assert_eq!(g.modal().map(|i| i.title.as_str()), Some("Chat Widget"));
        assert!(g.close());
        assert!(!g.close());
    }

    #[test]
    fn filters_list_categories_once() {
        assert_eq!(gallery().filters(), vec!["all", "web", "backend"]);
    }
}
