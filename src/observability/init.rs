//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when neither `RUST_LOG` nor `trace_level` is set.
pub const DEFAULT_LEVEL: &str = "info";

/// Builds the filter: `RUST_LOG` wins, then `config.trace_level`, then
/// [`DEFAULT_LEVEL`]. An unparsable directive falls back to the default.
#[must_use]
pub fn env_filter(config: &Config) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Initializes the global tracing subscriber.
///
/// Output goes to `config.log_file` through a size-rotated [`FileWriter`]
/// when set, otherwise to stderr. Safe to call more than once; only the
/// first call installs a subscriber.
///
/// ```rust
/// use folio::observability::init_tracing;
/// use folio::Config;
///
/// init_tracing(&Config::default());
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let filter = env_filter(config);

    let installed = match &config.log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                if std::fs::create_dir_all(parent).is_err() {
                    // Logging is optional; run without it.
                    return;
                }
            }
            let writer = FileWriter::new(path.clone());
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .try_init()
        }
        None => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    if installed.is_ok() {
        tracing::debug!(log_file = ?config.log_file, "tracing initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        let config = Config::default();
        init_tracing(&config);
        init_tracing(&config);
        tracing::info!("still logging");
    }

    #[test]
    fn bad_level_falls_back() {
        let config = Config {
            trace_level: Some("not a [valid directive".to_string()),
            ..Config::default()
        };
        let _ = env_filter(&config);
    }
}
