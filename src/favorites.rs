// SPDX-License-Identifier: MPL-2.0
//! The user's favorite cards, persisted in local storage.
//!
//! The store is owned by the application root and lent to screens by
//! reference. It keeps an ordered list of card identifiers and mirrors it to
//! the `favorites` key of [`LocalStorage`] as a JSON array after every
//! change.

use crate::storage::LocalStorage;
use std::path::PathBuf;

/// Storage key holding the JSON-encoded identifier list.
pub const FAVORITES_KEY: &str = "favorites";

#[derive(Debug, Clone)]
pub struct FavoritesStore {
    ids: Vec<String>,
    storage: LocalStorage,
}

impl FavoritesStore {
    /// Loads favorites from the default data directory.
    ///
    /// Returns a tuple of (store, optional_warning). See [`Self::load_from`].
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads favorites from a custom data directory.
    ///
    /// A missing mirror is an empty list. An unreadable or unparsable one
    /// also yields an empty list, plus the i18n key of a warning; the next
    /// save overwrites it.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let storage = match LocalStorage::open(base_dir.clone()) {
            Ok(storage) => storage,
            Err(error) => {
                tracing::warn!(%error, "local storage unreadable; starting with no favorites");
                let storage = LocalStorage::empty_at(LocalStorage::file_path(base_dir));
                return (
                    Self::with_storage(storage, Vec::new()),
                    Some("notification-favorites-load-error".to_string()),
                );
            }
        };

        let Some(raw) = storage.get(FAVORITES_KEY) else {
            return (Self::with_storage(storage, Vec::new()), None);
        };

        match serde_json::from_str::<Vec<String>>(raw) {
            Ok(ids) => {
                tracing::debug!(count = ids.len(), "favorites loaded");
                (Self::with_storage(storage, ids), None)
            }
            Err(error) => {
                tracing::warn!(%error, "favorites mirror is not an identifier list");
                (
                    Self::with_storage(storage, Vec::new()),
                    Some("notification-favorites-load-error".to_string()),
                )
            }
        }
    }

    /// A store over `storage` starting with `ids`, without touching disk.
    #[must_use]
    pub fn with_storage(storage: LocalStorage, ids: Vec<String>) -> Self {
        Self { ids, storage }
    }

    /// Adds `id` if absent, removes it if present.
    ///
    /// Returns whether the card is a favorite afterwards. Only the in-memory
    /// list changes; call [`Self::save`] to mirror it.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.ids.retain(|existing| existing != id);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Identifiers in the order they were added.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Mirrors the current list to local storage.
    ///
    /// Returns the i18n key of a warning when the write failed.
    pub fn save(&mut self) -> Option<String> {
        let encoded = match serde_json::to_string(&self.ids) {
            Ok(encoded) => encoded,
            Err(error) => {
                tracing::warn!(%error, "failed to encode favorites");
                return Some("notification-favorites-save-error".to_string());
            }
        };

        match self.storage.set(FAVORITES_KEY, encoded) {
            Ok(()) => None,
            Err(error) => {
                tracing::warn!(%error, "failed to persist favorites");
                Some("notification-favorites-save-error".to_string())
            }
        }
    }
}
