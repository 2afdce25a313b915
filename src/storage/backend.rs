//! Preference store abstraction.
//!
//! The page persists exactly one preference (`"theme"`), but the trait is keyed
//! so hosts can back it with whatever key-value storage they have.

use crate::domain::error::Result;

/// Key under which the theme preference is stored.
pub const THEME_KEY: &str = "theme";

/// String key-value storage that survives page reloads.
///
/// # Implementations
///
/// - [`MemoryStore`](super::MemoryStore): in-process map, nothing survives the process
/// - [`JsonPreferenceStore`](super::JsonPreferenceStore): JSON file with atomic writes
///
/// # Examples
///
/// ```
/// use folio::storage::{MemoryStore, PreferenceStore, THEME_KEY};
///
/// let mut store = MemoryStore::default();
/// store.set(THEME_KEY, "dark")?;
/// assert_eq!(store.get(THEME_KEY)?.as_deref(), Some("dark"));
/// # Ok::<(), folio::FolioError>(())
/// ```
pub trait PreferenceStore {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
