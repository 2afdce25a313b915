//! Filesystem locations for the preference file and log output.
//!
//! Everything lives under the platform data directory
//! (`~/.local/share/folio` on Linux). A configured path always wins over
//! the default.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "folio";
const PREFERENCES_FILE: &str = "preferences.json";
const LOG_FILE: &str = "folio.log";

/// Returns the data directory for folio files.
///
/// Falls back to the current directory when the platform has no data
/// directory (e.g. `$HOME` unset).
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Path of the preference store, honoring a configured override.
#[must_use]
pub fn preferences_path(configured: Option<&Path>) -> PathBuf {
    configured.map_or_else(|| get_data_dir().join(PREFERENCES_FILE), resolve)
}

/// Default log file location.
#[must_use]
pub fn default_log_path() -> PathBuf {
    get_data_dir().join(LOG_FILE)
}

/// Expands a leading `~` to the user's home directory.
///
/// ```
/// use folio::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("relative/path"), "relative/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = dirs::home_dir() else {
        return path.to_string();
    };

    if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest).to_string_lossy().into_owned()
    } else if path == "~" {
        home.to_string_lossy().into_owned()
    } else {
        path.to_string()
    }
}

fn resolve(path: &Path) -> PathBuf {
    path.to_str()
        .map_or_else(|| path.to_path_buf(), |s| PathBuf::from(expand_tilde(s)))
}
