//! Application layer coordinating page state, events, and actions.
//!
//! Sits between the host (a browser binding, or the terminal demo in
//! `main.rs`) and the cloud/github/storage layers.
//!
//! ```text
//! Host input → Event → handle_event → AppState → Actions → Page executes
//!                 ↑                                          ↓
//!                 └──────────── timers, GitHub fetch ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects emitted by the handler
//! - [`handler`]: Event processing and state transitions
//! - [`page`]: Runtime that owns state and store and runs frames
//! - [`state`]: Page state container
//! - [`modes`], [`environment`], [`layout`], [`portfolio`], [`typewriter`]:
//!   the individual page behaviors
//!
//! # Example
//!
//! ```rust
//! use folio::app::{ClickTarget, Environment, Event, Page};
//! use folio::storage::MemoryStore;
//! use folio::Config;
//! use std::time::Duration;
//!
//! let mut page = Page::new(&Config::default(), Environment::default(), MemoryStore::default());
//! page.dispatch(&Event::Click(ClickTarget::ThemeToggle), Duration::ZERO);
//! assert_eq!(page.state().theme.as_str(), "dark");
//! ```

pub mod actions;
pub mod environment;
pub mod handler;
pub mod layout;
pub mod modes;
pub mod page;
pub mod portfolio;
pub mod state;
pub mod typewriter;

pub use actions::{Action, Timer};
pub use environment::{CloudPolicy, Environment};
pub use handler::{handle_event, ClickTarget, Event};
pub use layout::SectionBounds;
pub use modes::{JourneyPhase, PointerCapability, ThemeMode};
pub use page::Page;
pub use portfolio::{PortfolioGallery, PortfolioItem, FILTER_ALL};
pub use state::{AppState, ResizeInfo};
pub use typewriter::{Typewriter, TypewriterTiming};
