//! Browser-backed implementations of the shared storage and notifier traits.

use gloo_storage::{LocalStorage, Storage};
use todo_shared::{StorageError, notify::Notifier, storage::KeyValueStorage};
use tracing::warn;

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| StorageError::new(key, format!("{err:?}")))
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// Blocking `window.alert`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        let shown = web_sys::window().map(|window| window.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            warn!(%message, "could not show alert");
        }
    }
}
