//! GitHub profile widget: REST client and view model.
//!
//! # Flow
//!
//! ```text
//! GithubClient::fetch_profile ──► Result<GithubProfile> ──► GithubWidget
//!   (two concurrent GETs)           (either fails = fails)    (N/A + error panel on failure)
//! ```

pub mod client;
pub mod transport;
pub mod widget;

pub use client::{is_valid_username, GithubClient, DEFAULT_API_BASE};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
pub use widget::{
    ErrorPanel, GithubWidget, RepoCard, StatsView, WidgetStatus, DEFAULT_MAX_REPO_CARDS,
    NOT_AVAILABLE,
};
