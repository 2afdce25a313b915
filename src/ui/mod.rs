//! Terminal rendering layer for the demo binary.
//!
//! A browser host maps [`AppState`](crate::app::AppState) onto its own DOM;
//! this module does the same for an ANSI terminal so the page can be driven
//! and inspected without one.
//!
//! # Modules
//!
//! - [`terminal`]: Character-grid [`Surface`](crate::cloud::Surface) for the tag cloud
//! - [`renderer`]: Whole-page rendering coordinator
//! - [`components`]: Header, portfolio and GitHub blocks
//! - [`theme`]: Light/dark palettes and ANSI escape sequence generation
//!
//! # Example
//!
//! ```rust
//! use folio::cloud::TagCloud;
//! use folio::domain::LabelSpec;
//! use folio::ui::TerminalSurface;
//!
//! let mut cloud = TagCloud::with_seed(vec![LabelSpec::new("Rust", "#dea584")], 400.0, 200.0, 1);
//! let mut grid = TerminalSurface::new(40, 10, 400.0, 200.0);
//! cloud.draw(&mut grid);
//! print!("{}", grid.render());
//! ```

pub mod components;
pub mod renderer;
pub mod terminal;
pub mod theme;

pub use renderer::render_page;
pub use terminal::TerminalSurface;
pub use theme::Theme;
