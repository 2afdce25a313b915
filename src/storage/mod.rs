//! Persistence for the single user preference the page keeps.
//!
//! # Modules
//!
//! - `backend`: the [`PreferenceStore`] trait and well-known keys
//! - `memory`: in-process store for tests and diskless hosts
//! - `json`: JSON file store with atomic writes

pub mod backend;
pub mod json;
pub mod memory;

pub use backend::{PreferenceStore, THEME_KEY};
pub use json::JsonPreferenceStore;
pub use memory::MemoryStore;
