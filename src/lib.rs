//! folio: interactivity core for a single-page personal portfolio.
//!
//! The crate is host-agnostic. A browser binding or the terminal demo in
//! `main.rs` feeds it events and draws what it produces:
//! - A pseudo-3D tag cloud rotating under pointer control
//! - Leading-edge throttling and trailing debouncing of noisy input
//! - The page state machine (menu, sticky header, theme, filters, modal, ...)
//! - A GitHub profile widget backed by the public REST API
//! - A persisted theme preference

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host (browser binding, or the demo in main.rs)     │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, actions, timers                  │
//! │  - Page runtime (Page)                              │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Cloud (cloud/)│   │ Storage       │   │ GitHub        │
//! │ - Sphere math │   │ (storage/)    │   │ (github/)     │
//! │ - Frame loop  │   │ - Preferences │   │ - Client      │
//! │ - Surfaces    │   │ - JSON file   │   │ - Widget      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Timing (timing/), Domain (domain/),                │
//! │  Infrastructure (infrastructure/), UI (ui/)         │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing-subscriber fmt output                    │
//! │  - Rotating log file                                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Page state machine with event/action model and runtime
//! - [`cloud`]: Tag cloud renderer and frame loop
//! - [`domain`]: Core types (labels, GitHub records, errors)
//! - [`github`]: GitHub REST client and widget view model
//! - [`infrastructure`]: Platform paths
//! - [`observability`]: Tracing subscriber setup
//! - [`storage`]: Preference store backends
//! - [`timing`]: Throttle and debounce
//! - [`ui`]: Terminal rendering for the demo
//!
//! # Configuration
//!
//! Everything has a default. A TOML file overrides any subset:
//!
//! ```toml
//! github_user = "octocat"
//! max_repo_cards = 4
//! trace_level = "debug"
//!
//! [[labels]]
//! text = "Rust"
//! color = "#dea584"
//! ```
//!
//! # Example
//!
//! ```rust
//! use folio::app::{ClickTarget, Environment, Event, Page};
//! use folio::cloud::{FixedFrames, RecordingSurface};
//! use folio::storage::MemoryStore;
//! use folio::Config;
//! use std::time::Duration;
//!
//! let config = Config::default();
//! let mut page = Page::new(&config, Environment::default(), MemoryStore::default());
//!
//! page.dispatch(&Event::PointerMove { x: 320.0, y: 180.0 }, Duration::ZERO);
//! let mut surface = RecordingSurface::new();
//! page.run(&mut surface, &mut FixedFrames::new(10));
//! assert_eq!(surface.calls.len(), config.labels.len());
//! ```

pub mod app;
pub mod cloud;
pub mod domain;
pub mod github;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod timing;

pub mod ui;

pub use app::{handle_event, Action, AppState, ClickTarget, Environment, Event, Page};
pub use domain::{FolioError, LabelSpec, Result};
pub use ui::Theme;

use app::{PortfolioItem, SectionBounds};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Page configuration.
///
/// Every field has a default, so an empty TOML document is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GitHub account shown in the profile widget.
    pub github_user: String,

    /// Base URL of the GitHub REST API.
    pub api_base: String,

    /// Tag cloud labels.
    pub labels: Vec<LabelSpec>,

    /// Roles cycled by the hero typewriter.
    pub roles: Vec<String>,

    pub portfolio: Vec<PortfolioItem>,

    /// Section bounds used for scroll spying, top to bottom.
    pub sections: Vec<SectionBounds>,

    /// Pointer throttle window. Default: 16
    pub throttle_ms: u64,

    /// Quiet period before a resize is applied. Default: 250
    pub resize_debounce_ms: u64,

    /// Quiet period before a search query is applied. Default: 300
    pub search_debounce_ms: u64,

    /// Maximum repository cards in the GitHub widget. Default: 6
    pub max_repo_cards: usize,

    /// Preference file location. Default: `<data dir>/folio/preferences.json`
    pub preferences_path: Option<PathBuf>,

    /// Log filter directive, e.g. `info` or `folio=debug`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Log file. Logs go to stderr when unset.
    pub log_file: Option<PathBuf>,

    /// Fixed seed for the tag cloud's random placement.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_user: "octocat".to_string(),
            api_base: github::DEFAULT_API_BASE.to_string(),
            labels: default_labels(),
            roles: default_roles(),
            portfolio: default_portfolio(),
            sections: default_sections(),
            throttle_ms: 16,
            resize_debounce_ms: 250,
            search_debounce_ms: 300,
            max_repo_cards: github::DEFAULT_MAX_REPO_CARDS,
            preferences_path: None,
            trace_level: None,
            log_file: None,
            seed: None,
        }
    }
}

impl Config {
    /// Parses a TOML document, filling unset fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Config`] if the document is not valid TOML for
    /// this shape or fails [`validate`](Self::validate).
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| FolioError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let _span = tracing::debug_span!("config_from_file", path = %path.display()).entered();
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Builds a configuration from flat string key/value pairs.
    ///
    /// Unknown keys are ignored and unparsable numbers keep their default.
    ///
    /// - `roles`: comma-separated list
    /// - `labels`: comma-separated `text:#color` pairs (color optional)
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use folio::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("github_user".to_string(), "torvalds".to_string());
    /// map.insert("roles".to_string(), "Kernel Hacker, Diver".to_string());
    /// map.insert("throttle_ms".to_string(), "32".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.github_user, "torvalds");
    /// assert_eq!(config.roles, vec!["Kernel Hacker", "Diver"]);
    /// assert_eq!(config.throttle_ms, 32);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let mut config = Self::default();

        let list = |s: &str| -> Vec<String> {
            s.split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(String::from)
                .collect()
        };
        fn number<T: std::str::FromStr>(map: &BTreeMap<String, String>, key: &str, current: T) -> T {
            map.get(key)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(current)
        }

        if let Some(user) = map.get("github_user").filter(|s| !s.trim().is_empty()) {
            config.github_user = user.trim().to_string();
        }
        if let Some(base) = map.get("api_base") {
            config.api_base = base.trim().to_string();
        }
        if let Some(roles) = map.get("roles").map(|s| list(s.as_str())).filter(|v| !v.is_empty()) {
            config.roles = roles;
        }
        if let Some(labels) = map.get("labels").map(|s| list(s.as_str())).filter(|v| !v.is_empty()) {
            config.labels = labels
                .iter()
                .map(|entry| match entry.split_once(':') {
                    Some((text, color)) => LabelSpec::new(text.trim(), color.trim()),
                    None => LabelSpec::new(entry, DEFAULT_LABEL_COLOR),
                })
                .collect();
        }

        config.throttle_ms = number(map, "throttle_ms", config.throttle_ms);
        config.resize_debounce_ms = number(map, "resize_debounce_ms", config.resize_debounce_ms);
        config.search_debounce_ms = number(map, "search_debounce_ms", config.search_debounce_ms);
        config.max_repo_cards = number(map, "max_repo_cards", config.max_repo_cards);
        config.seed = map.get("seed").and_then(|s| s.trim().parse().ok());
        config.preferences_path = map.get("preferences_path").map(PathBuf::from);
        config.trace_level = map.get("trace_level").cloned();
        config.log_file = map.get("log_file").map(PathBuf::from);

        config
    }

    /// Checks values that would otherwise fail later, far from their source.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Config`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if !github::is_valid_username(&self.github_user) {
            return Err(FolioError::Config(format!(
                "github_user: invalid GitHub username {:?}",
                self.github_user
            )));
        }
        if !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://")) {
            return Err(FolioError::Config(format!(
                "api_base: expected an http(s) URL, got {:?}",
                self.api_base
            )));
        }
        Ok(())
    }
}

const DEFAULT_LABEL_COLOR: &str = "#4db8ff";

fn default_labels() -> Vec<LabelSpec> {
    [
        ("C#", "#9b4f96"),
        (".NET", "#512bd4"),
        ("React", "#61dafb"),
        ("JavaScript", "#f7df1e"),
        ("TypeScript", "#3178c6"),
        ("HTML", "#e34f26"),
        ("CSS", "#1572b6"),
        ("Node.js", "#5fa04e"),
        ("SQL", "#e38c00"),
        ("Git", "#f05032"),
        ("Docker", "#2496ed"),
        ("Rust", "#dea584"),
    ]
    .into_iter()
    .map(|(text, color)| LabelSpec::new(text, color))
    .collect()
}

fn default_roles() -> Vec<String> {
    [
        "Backend Developer",
        "Frontend Developer",
        "Web Developer",
        "React Developer",
        "C# Developer",
        ".Net Developer",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_portfolio() -> Vec<PortfolioItem> {
    vec![
        PortfolioItem::new("Realtime Chat", "web"),
        PortfolioItem::new("Inventory API", "backend"),
        PortfolioItem::new("Weather Dashboard", "web"),
        PortfolioItem::new("Task Scheduler", "backend"),
    ]
}

fn default_sections() -> Vec<SectionBounds> {
    ["home", "about", "education", "portfolio", "github", "contact"]
        .iter()
        .zip(0_u32..)
        .map(|(id, i)| SectionBounds::new(*id, f64::from(i) * 800.0, 800.0))
        .collect()
}
