//! Best-effort preference storage.
//!
//! TRADE-OFFS
//! ==========
//! Browsers may deny `localStorage` (private modes, sandboxed frames, quota).
//! Callers treat every error as "no preference" and carry on, so the trait
//! returns errors only so they can be logged.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::PageError;

/// Key/value store for user preferences.
pub trait PreferenceStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Storage`] when the backing store is unavailable.
    fn load(&self, key: &str) -> Result<Option<String>, PageError>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Storage`] when the backing store is unavailable
    /// or rejects the write.
    fn save(&self, key: &str, value: &str) -> Result<(), PageError>;
}

/// In-memory store; used in tests and when the browser denies storage access.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    unavailable: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails, like a denied `localStorage`.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { entries: RefCell::default(), unavailable: true }
    }

    /// Seed `key` with `value`.
    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }

    /// Peek at a stored value without going through the trait.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, PageError> {
        if self.unavailable {
            return Err(PageError::Storage("memory store marked unavailable".into()));
        }
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PageError> {
        if self.unavailable {
            return Err(PageError::Storage("memory store marked unavailable".into()));
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `window.localStorage`, looked up on every call.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStore;

#[cfg(feature = "hydrate")]
impl LocalStore {
    fn storage() -> Result<web_sys::Storage, PageError> {
        let window = web_sys::window().ok_or_else(|| PageError::Storage("no window".into()))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(PageError::Storage("localStorage is not exposed".into())),
            Err(err) => Err(PageError::Storage(format!("{err:?}"))),
        }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Result<Option<String>, PageError> {
        Self::storage()?.get_item(key).map_err(|err| PageError::Storage(format!("{err:?}")))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PageError> {
        Self::storage()?.set_item(key, value).map_err(|err| PageError::Storage(format!("{err:?}")))
    }
}
