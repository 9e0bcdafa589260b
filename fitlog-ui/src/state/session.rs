//! Browser Session Storage
//!
//! `localStorage` backing for the core session repository.

use fitlog::{FitlogError, FitlogResult, KeyValueStore, KeyedSessionStore};

/// `window.localStorage` as a [`KeyValueStore`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage(&self) -> FitlogResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| FitlogError::Storage("No window".to_string()))?
            .local_storage()
            .map_err(|e| FitlogError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| FitlogError::Storage("localStorage unavailable".to_string()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> FitlogResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| FitlogError::Storage(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> FitlogResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| FitlogError::Storage(format!("{:?}", e)))
    }

    fn remove_item(&self, key: &str) -> FitlogResult<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| FitlogError::Storage(format!("{:?}", e)))
    }
}

/// Session repository used by every page
pub type BrowserSessions = KeyedSessionStore<LocalStorage>;

pub fn browser_sessions() -> BrowserSessions {
    KeyedSessionStore::new(LocalStorage)
}
