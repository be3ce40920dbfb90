//! Persistent key/value storage used to remember the session between visits.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::errors::StorageError;

/// Key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";

/// Key holding the JSON-serialized [`crate::models::User`].
pub const USER_KEY: &str = "user";

/// Synchronous string storage, in the shape of the browser's `localStorage`.
pub trait KeyValueStorage {
    /// Read a value; unreadable entries are reported as absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value.
    ///
    /// # Errors
    /// Returns a [`StorageError`] when the backend refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a value. Removing a missing key is not an error.
    fn remove(&self, key: &str);
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// In-process storage, used natively and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with the given entries.
    #[must_use]
    pub fn with_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let storage = Self::new();
        storage.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string())),
        );
        storage
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
