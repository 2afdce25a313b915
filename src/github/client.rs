//! GitHub REST client for the profile widget.

use super::transport::HttpTransport;
use crate::domain::error::{FolioError, Result};
use crate::domain::{GithubProfile, GithubRepo, GithubUser};
use futures_util::future::try_join;
use serde::de::DeserializeOwned;
use tracing::Instrument;

/// Public API root.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Whether `username` is non-empty and only uses characters GitHub allows
/// in logins (ASCII letters, digits and `-`).
#[must_use]
pub fn is_valid_username(username: &str) -> bool {
    !username.is_empty()
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Fetches a user's profile and repositories.
///
/// Both requests go out together; if either fails, the whole fetch fails.
/// There is no retry, no timeout and no cancellation.
#[derive(Debug, Clone)]
pub struct GithubClient<T> {
    transport: T,
    base_url: String,
    username: String,
}

impl<T: HttpTransport> GithubClient<T> {
    /// Creates a client for `username` against `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Config`] if the username is empty or contains
    /// characters GitHub does not allow in logins.
    pub fn new(transport: T, base_url: &str, username: &str) -> Result<Self> {
        if !is_valid_username(username) {
            return Err(FolioError::Config(format!(
                "invalid GitHub username: {username:?}"
            )));
        }

        Ok(Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.to_string(),
        })
    }

    #[must_use]
    pub fn user_url(&self) -> String {
        format!("{}/users/{}", self.base_url, self.username)
    }

    #[must_use]
    pub fn repos_url(&self) -> String {
        format!(
            "{}/users/{}/repos?sort=updated&per_page=100",
            self.base_url, self.username
        )
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Fetches user and repositories concurrently.
    ///
    /// # Errors
    ///
    /// - [`FolioError::Network`] if either request never got a response
    /// - [`FolioError::Http`] if either response was not 2xx
    /// - [`FolioError::Decode`] if either body was not the expected JSON
    pub async fn fetch_profile(&self) -> Result<GithubProfile> {
        let span = tracing::debug_span!("github_fetch_profile", user = %self.username);

        async {
            let (user, repos) = try_join(
                self.get_json::<GithubUser>(self.user_url()),
                self.get_json::<Vec<GithubRepo>>(self.repos_url()),
            )
            .await?;

            tracing::debug!(repo_count = repos.len(), "github profile fetched");
            Ok(GithubProfile { user, repos })
        }
        .instrument(span)
        .await
    }

    async fn get_json<D: DeserializeOwned>(&self, url: String) -> Result<D> {
        let response = self.transport.get(&url).await?;

        if !response.is_success() {
            return Err(FolioError::Http {
                status: response.status,
                url,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| FolioError::Decode(format!("{url}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::transport::HttpResponse;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Answers from a fixed table and remembers what was asked.
    #[derive(Default)]
    struct CannedTransport {
        routes: HashMap<String, Result<HttpResponse>>,
        requested: RefCell<Vec<String>>,
    }

    impl CannedTransport {
        fn route(mut self, url: &str, status: u16, body: &str) -> Self {
            self.routes
                .insert(url.to_string(), Ok(HttpResponse::new(status, body)));
            self
        }

        fn fail(mut self, url: &str) -> Self {
            self.routes
                .insert(url.to_string(), Err(FolioError::Network("connection reset".into())));
            self
        }
    }

    impl HttpTransport for CannedTransport {
        async fn get(&self, url: &str) -> Result<HttpResponse> {
            self.requested.borrow_mut().push(url.to_string());
            match self.routes.get(url) {
                Some(Ok(r)) => Ok(r.clone()),
                Some(Err(e)) => Err(FolioError::Network(e.to_string())),
                None => Ok(HttpResponse::new(404, "{}")),
            }
        }
    }

    const USER: &str = "https://api.github.com/users/octocat";
    const REPOS: &str = "https://api.github.com/users/octocat/repos?sort=updated&per_page=100";
    const USER_JSON: &str = r#"{"avatar_url":"a","name":"The Octocat","login":"octocat","bio":null,"public_repos":2,"followers":10}"#;
    const REPOS_JSON: &str = r#"[{"name":"one","description":"first","html_url":"u1","language":"Rust","stargazers_count":5,"forks_count":1},{"name":"two","description":null,"html_url":"u2","language":null,"stargazers_count":0,"forks_count":0}]"#;

    #[test]
    fn urls_follow_the_rest_layout() {
        let client =
            GithubClient::new(CannedTransport::default(), "https://api.github.com/", "octocat").unwrap();
        assert_eq!(client.user_url(), USER);
        assert_eq!(client.repos_url(), REPOS);
    }

    #[test]
    fn rejects_bad_usernames() {
        for name in ["", "octo cat", "../etc", "a/b"] {
            assert!(GithubClient::new(CannedTransport::default(), DEFAULT_API_BASE, name).is_err());
        }
    }

    #[tokio::test]
    async fn fetch_profile_combines_both_calls() {
        let transport = CannedTransport::default()
            .route(USER, 200, USER_JSON)
            .route(REPOS, 200, REPOS_JSON);
        let client = GithubClient::new(transport, DEFAULT_API_BASE, "octocat").unwrap();

        let profile = client.fetch_profile().await.unwrap();
        assert_eq!(profile.user.display_name(), "The Octocat");
        assert_eq!(profile.repos.len(), 2);
        assert_eq!(profile.repos[0].name, "one");
        assert_eq!(client.transport.requested.borrow().len(), 2);
    }

    #[tokio::test]
    async fn non_success_status_is_http_error() {
        let transport = CannedTransport::default()
            .route(USER, 403, r#"{"message":"API rate limit exceeded"}"#)
            .route(REPOS, 200, REPOS_JSON);
        let client = GithubClient::new(transport, DEFAULT_API_BASE, "octocat").unwrap();

        match client.fetch_profile().await {
            Err(FolioError::Http { status, url }) => {
                assert_eq!(status, 403);
                assert_eq!(url, USER);
            }
            other => panic!("expected HTTP error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn repos_failure_fails_whole_fetch() {
        let transport = CannedTransport::default()
            .route(USER, 200, USER_JSON)
            .fail(REPOS);
        let client = GithubClient::new(transport, DEFAULT_API_BASE, "octocat").unwrap();

        let err = client.fetch_profile().await.unwrap_err();
        assert!(matches!(err, FolioError::Network(_)));
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let transport = CannedTransport::default()
            .route(USER, 200, "<html>")
            .route(REPOS, 200, REPOS_JSON);
        let client = GithubClient::new(transport, DEFAULT_API_BASE, "octocat").unwrap();

        let err = client.fetch_profile().await.unwrap_err();
        assert!(matches!(err, FolioError::Decode(_)));
    }
}
