//! Browser `localStorage` backend for the recent-search history.

use spotlight_core::{ArtistRef, RecentSearchStore, RecentSearches, RouterConfig};
use thiserror::Error;
use web_sys::Storage;

#[derive(Debug, Error)]
#[error("localStorage: {0}")]
pub struct StorageError(String);

impl From<wasm_bindgen::JsValue> for StorageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self(crate::dom::js_error_message(&value))
    }
}

pub struct BrowserStore {
    storage: Storage,
}

impl BrowserStore {
    /// # Errors
    ///
    /// Returns an error when the page has no usable `localStorage`.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self {
            storage: crate::dom::local_storage()?,
        })
    }
}

impl RecentSearchStore for BrowserStore {
    type Error = StorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.storage.get_item(key)?)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        Ok(self.storage.set_item(key, value)?)
    }

    fn delete(&self, key: &str) -> Result<(), Self::Error> {
        Ok(self.storage.remove_item(key)?)
    }
}

fn history(config: &RouterConfig) -> Option<RecentSearches<BrowserStore>> {
    match BrowserStore::open() {
        Ok(store) => Some(RecentSearches::new(store, config.history_limit)),
        Err(err) => {
            log::warn!("recent searches disabled: {err}");
            None
        }
    }
}

/// History for `user_id`, empty when storage is unavailable or corrupt.
#[must_use]
pub fn load_recent(config: &RouterConfig, user_id: &str) -> Vec<ArtistRef> {
    history(config)
        .map(|h| h.load(user_id))
        .transpose()
        .unwrap_or_else(|err| {
            log::warn!("could not load recent searches: {err}");
            None
        })
        .unwrap_or_default()
}

#[must_use]
pub fn remember_artist(config: &RouterConfig, user_id: &str, artist: ArtistRef) -> Vec<ArtistRef> {
    history(config)
        .map(|h| h.add(user_id, artist))
        .transpose()
        .unwrap_or_else(|err| {
            log::warn!("could not save recent search: {err}");
            None
        })
        .unwrap_or_default()
}

#[must_use]
pub fn forget_artist(config: &RouterConfig, user_id: &str, artist_id: &str) -> Vec<ArtistRef> {
    history(config)
        .map(|h| h.remove(user_id, artist_id))
        .transpose()
        .unwrap_or_else(|err| {
            log::warn!("could not update recent searches: {err}");
            None
        })
        .unwrap_or_default()
}

pub fn clear_recent(config: &RouterConfig, user_id: &str) {
    if let Some(Err(err)) = history(config).map(|h| h.clear(user_id)) {
        log::warn!("could not clear recent searches: {err}");
    }
}
