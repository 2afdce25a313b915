//! Records returned by the public GitHub REST API.
//!
//! Only the fields the profile widget displays are modeled; serde ignores the
//! rest of the payload. Optional fields are `null` for many real accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Body of `GET /users/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubUser {
    pub avatar_url: String,
    #[serde(default)]
    pub name: Option<String>,
    pub login: String,
    #[serde(default)]
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
}

impl GithubUser {
    /// Display name, falling back to the login when the profile has none.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.login)
    }
}

/// One element of `GET /users/{name}/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubRepo {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl GithubRepo {
    /// Returns a short relative age for `updated_at`, e.g. `"3d ago"`.
    ///
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - 1 day or more: "Xd ago"
    ///
    /// Returns `None` when the API did not report an update time.
    #[must_use]
    pub fn updated_ago(&self, now: DateTime<Utc>) -> Option<String> {
        let updated = self.updated_at?;
        let diff = (now - updated).num_seconds();

        Some(if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            format!("{}m ago", diff / SECONDS_PER_MINUTE)
        } else if diff < SECONDS_PER_DAY {
            format!("{}h ago", diff / SECONDS_PER_HOUR)
        } else {
            format!("{}d ago", diff / SECONDS_PER_DAY)
        })
    }
}

/// Everything one successful fetch produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubProfile {
    pub user: GithubUser,
    /// Repositories in API order (most recently updated first).
    pub repos: Vec<GithubRepo>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn repo(updated_at: Option<DateTime<Utc>>) -> GithubRepo {
        GithubRepo {
            name: "folio".into(),
            description: None,
            html_url: "https://github.com/octocat/folio".into(),
            language: Some("Rust".into()),
            stargazers_count: 3,
            forks_count: 1,
            updated_at,
        }
    }

    #[test]
    fn user_deserializes_with_null_fields() {
        let json = r#"{
            "avatar_url": "https://avatars.githubusercontent.com/u/1",
            "name": null,
            "login": "octocat",
            "bio": null,
            "public_repos": 8,
            "followers": 42,
            "following": 9
        }"#;
        let user: GithubUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.display_name(), "octocat");
        assert_eq!(user.public_repos, 8);
        assert!(user.bio.is_none());
    }

    #[test]
    fn repo_updated_ago_buckets() {
        let now = Utc::now();
        assert_eq!(repo(Some(now)).updated_ago(now).as_deref(), Some("just now"));
        assert_eq!(
            repo(Some(now - Duration::minutes(5))).updated_ago(now).as_deref(),
            Some("5m ago")
        );
        assert_eq!(
            repo(Some(now - Duration::hours(3))).updated_ago(now).as_deref(),
            Some("3h ago")
        );
        assert_eq!(
            repo(Some(now - Duration::days(7))).updated_ago(now).as_deref(),
            Some("7d ago")
        );
        assert_eq!(repo(None).updated_ago(now), None);
    }
}
