//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where the preference file and log output live on the host.

pub mod paths;

pub use paths::{default_log_path, expand_tilde, get_data_dir, preferences_path};
