//! JSON file-based preference store.
//!
//! Keeps every preference in memory and rewrites the whole file on change,
//! using write-to-temp + rename so a crash never leaves a half-written file.

use crate::domain::error::{FolioError, Result};
use crate::storage::backend::PreferenceStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// On-disk container.
///
/// ```json
/// {
///   "version": 1,
///   "preferences": { "theme": "dark" }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreData {
    version: u32,
    #[serde(default)]
    preferences: BTreeMap<String, String>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            preferences: BTreeMap::new(),
        }
    }
}

/// Preference store persisted to a JSON file.
pub struct JsonPreferenceStore {
    file_path: PathBuf,
    data: StoreData,
    /// Set when the in-memory data is ahead of the file.
    dirty: bool,
}

impl JsonPreferenceStore {
    /// Opens the store at `file_path`, creating parent directories as needed.
    ///
    /// A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the file
    /// exists but cannot be read or parsed.
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening preference store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no preference file yet, starting empty");
            StoreData::default()
        };

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    fn load_from_file(path: &Path) -> Result<StoreData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StoreData = serde_json::from_str(&contents)
            .map_err(|e| FolioError::Storage(format!("failed to parse preferences: {e}")))?;

        if data.version > FORMAT_VERSION {
            return Err(FolioError::Storage(format!(
                "preference file version {} is newer than supported version {FORMAT_VERSION}",
                data.version
            )));
        }

        tracing::debug!(
            version = data.version,
            entries = data.preferences.len(),
            "loaded preferences"
        );
        Ok(data)
    }

    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| FolioError::Storage(format!("failed to serialize preferences: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "preferences saved");
        Ok(())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.preferences.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set_preference", key = %key, value = %value).entered();

        if self.data.preferences.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }

        self.data
            .preferences
            .insert(key.to_string(), value.to_string());
        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for JsonPreferenceStore {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty preferences on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save preferences on drop");
            }
        }
    }
}

impl std::fmt::Debug for JsonPreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonPreferenceStore")
            .field("file_path", &self.file_path)
            .field("entries", &self.data.preferences.len())
            .finish_non_exhaustive()
    }
}
