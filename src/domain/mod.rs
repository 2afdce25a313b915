//! Domain layer for folio.
//!
//! Core types shared by the renderer, the page state machine and the GitHub
//! widget, independent of any host environment.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`label`]: Tag cloud labels and 3D points
//! - [`github`]: Records returned by the public GitHub REST API

pub mod error;
pub mod github;
pub mod label;

pub use error::{FolioError, Result};
pub use github::{GithubProfile, GithubRepo, GithubUser};
pub use label::{Label, LabelSpec, Point3};
