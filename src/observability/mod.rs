//! Structured logging for the library and the demo binary.
//!
//! Everything in the crate logs through `tracing` macros and spans. This
//! module installs the subscriber that turns them into text:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → stderr | rotating log file
//! ```
//!
//! # Configuration
//!
//! The level comes from `RUST_LOG` if set, else `trace_level` in
//! [`Config`](crate::Config), else `"info"`. Setting `log_file` sends output
//! to that file, rotated at 10 MB with 3 backups.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer usable as a `MakeWriter`

pub mod file_writer;
pub mod init;

pub use file_writer::FileWriter;
pub use init::{env_filter, init_tracing};
