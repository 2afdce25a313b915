//! View model for the GitHub profile widget.
//!
//! Built once from the outcome of [`GithubClient::fetch_profile`](super::GithubClient::fetch_profile).
//! A failed fetch renders as placeholder stats, an error panel and no cards;
//! there is no partial rendering of whichever half succeeded.

use crate::domain::error::Result;
use crate::domain::{GithubProfile, GithubRepo};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Placeholder for numeric stats that could not be loaded.
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder shown while the fetch is in flight.
pub const LOADING: &str = "...";

/// Default number of repository cards.
pub const DEFAULT_MAX_REPO_CARDS: usize = 6;

/// How many languages the summary lists.
const TOP_LANGUAGES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetStatus {
    Loading,
    Ready,
    Failed,
}

/// The four numeric stats, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub public_repos: String,
    pub followers: String,
    pub total_stars: String,
    pub total_forks: String,
}

impl StatsView {
    fn filled(placeholder: &str) -> Self {
        Self {
            public_repos: placeholder.to_string(),
            followers: placeholder.to_string(),
            total_stars: placeholder.to_string(),
            total_forks: placeholder.to_string(),
        }
    }

    /// `(caption, value)` pairs in display order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("Repositories", self.public_repos.as_str()),
            ("Followers", self.followers.as_str()),
            ("Stars", self.total_stars.as_str()),
            ("Forks", self.total_forks.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCard {
    pub name: String,
    pub description: String,
    pub url: String,
    pub language: Option<String>,
    pub stars: u32,
    pub forks: u32,
    /// e.g. `"3d ago"`.
    pub updated: Option<String>,
}

impl RepoCard {
    fn from_repo(repo: &GithubRepo, now: DateTime<Utc>) -> Self {
        Self {
            name: repo.name.clone(),
            description: repo
                .description
                .clone()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| "No description provided".to_string()),
            url: repo.html_url.clone(),
            language: repo.language.clone(),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            updated: repo.updated_ago(now),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPanel {
    pub title: String,
    pub message: String,
}

/// Everything the widget shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubWidget {
    pub status: WidgetStatus,
    pub avatar_url: Option<String>,
    pub display_name: String,
    pub login: String,
    pub bio: String,
    pub stats: StatsView,
    /// `(language, repo count)`, most common first.
    pub languages: Vec<(String, usize)>,
    pub repo_cards: Vec<RepoCard>,
    pub error_panel: Option<ErrorPanel>,
}

impl GithubWidget {
    #[must_use]
    pub fn loading() -> Self {
        Self {
            status: WidgetStatus::Loading,
            avatar_url: None,
            display_name: String::new(),
            login: String::new(),
            bio: String::new(),
            stats: StatsView::filled(LOADING),
            languages: Vec::new(),
            repo_cards: Vec::new(),
            error_panel: None,
        }
    }

    /// Widget for a failed fetch: `"N/A"` stats, an error panel, no cards.
    #[must_use]
    pub fn failed(message: &str) -> Self {
        Self {
            status: WidgetStatus::Failed,
            stats: StatsView::filled(NOT_AVAILABLE),
            error_panel: Some(ErrorPanel {
                title: "Unable to load GitHub data".to_string(),
                message: message.to_string(),
            }),
            ..Self::loading()
        }
    }

    /// Widget for a successful fetch, with at most `max_cards` repository cards.
    #[must_use]
    pub fn ready(profile: &GithubProfile, max_cards: usize, now: DateTime<Utc>) -> Self {
        let user = &profile.user;
        let total_stars: u64 = profile
            .repos
            .iter()
            .map(|r| u64::from(r.stargazers_count))
            .sum();
        let total_forks: u64 = profile.repos.iter().map(|r| u64::from(r.forks_count)).sum();

        Self {
            status: WidgetStatus::Ready,
            avatar_url: Some(user.avatar_url.clone()),
            display_name: user.display_name().to_string(),
            login: user.login.clone(),
            bio: user.bio.clone().unwrap_or_default(),
            stats: StatsView {
                public_repos: user.public_repos.to_string(),
                followers: user.followers.to_string(),
                total_stars: total_stars.to_string(),
                total_forks: total_forks.to_string(),
            },
            languages: top_languages(&profile.repos),
            repo_cards: profile
                .repos
                .iter()
                .take(max_cards)
                .map(|r| RepoCard::from_repo(r, now))
                .collect(),
            error_panel: None,
        }
    }

    /// Builds the widget from a fetch outcome, logging failures.
    #[must_use]
    pub fn from_result(result: &Result<GithubProfile>, max_cards: usize, now: DateTime<Utc>) -> Self {
        match result {
            Ok(profile) => Self::ready(profile, max_cards, now),
            Err(e) => {
                tracing::warn!(error = %e, "github fetch failed");
                Self::failed(&e.to_string())
            }
        }
    }
}

impl Default for GithubWidget {
    fn default() -> Self {
        Self::loading()
    }
}

fn top_languages(repos: &[GithubRepo]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for language in repos.iter().filter_map(|r| r.language.as_deref()) {
        *counts.entry(language).or_default() += 1;
    }

    let mut languages: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    languages.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    languages.truncate(TOP_LANGUAGES);
    languages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FolioError, GithubUser};

    fn repo(name: &str, language: Option<&str>, stars: u32, forks: u32) -> GithubRepo {
        GithubRepo {
            name: name.to_string(),
            description: Some(String::new()),
            html_url: format!("https://github.com/octocat/{name}"),
            language: language.map(str::to_string),
            stargazers_count: stars,
            forks_count: forks,
            updated_at: None,
        }
    }

    fn profile(repos: Vec<GithubRepo>) -> GithubProfile {
        GithubProfile {
            user: GithubUser {
                avatar_url: "https://avatars.example/1".into(),
                name: Some("Octo".into()),
                login: "octocat".into(),
                bio: Some("Builds things".into()),
                public_repos: 9,
                followers: 120,
            },
            repos,
        }
    }

    #[test]
    fn ready_sums_stars_and_forks() {
        let p = profile(vec![
            repo("a", Some("Rust"), 10, 2),
            repo("b", Some("C#"), 5, 1),
            repo("c", Some("Rust"), 0, 0),
        ]);
        let w = GithubWidget::ready(&p, 6, Utc::now());

        assert_eq!(w.status, WidgetStatus::Ready);
        assert_eq!(w.stats.public_repos, "9");
        assert_eq!(w.stats.followers, "120");
        assert_eq!(w.stats.total_stars, "15");
        assert_eq!(w.stats.total_forks, "3");
        assert_eq!(w.languages[0], ("Rust".to_string(), 2));
        assert_eq!(w.repo_cards.len(), 3);
        assert_eq!(w.repo_cards[0].description, "No description provided");
        assert!(w.error_panel.is_none());
    }

    #[test]
    fn ready_caps_cards_and_keeps_api_order() {
        let repos = (0..10).map(|i| repo(&format!("r{i}"), None, i, 0)).collect();
        let w = GithubWidget::ready(&profile(repos), 4, Utc::now());
        let names: Vec<&str> = w.repo_cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["r0", "r1", "r2", "r3"]);
    }

    #[test]
    fn failure_shows_placeholders_and_panel() {
        let result: Result<GithubProfile> = Err(FolioError::Http {
            status: 403,
            url: "https://api.github.com/users/octocat".into(),
        });
        let w = GithubWidget::from_result(&result, 6, Utc::now());

        assert_eq!(w.status, WidgetStatus::Failed);
        for (_, value) in w.stats.entries() {
            assert_eq!(value, NOT_AVAILABLE);
        }
        assert!(w.repo_cards.is_empty());
        let panel = w.error_panel.expect("error panel");
        assert!(panel.message.contains("403"));
    }

    #[test]
    fn languages_are_capped_and_tie_broken_by_name() {
        let repos = ["Go", "C", "Rust", "Zig", "Java", "Ada"]
            .iter()
            .map(|l| repo(l, Some(*l), 0, 0))
            .collect();
        let w = GithubWidget::ready(&profile(repos), 6, Utc::now());
        let names: Vec<&str> = w.languages.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(names, vec!["Ada", "C", "Go", "Java", "Rust"]);
    }
}
