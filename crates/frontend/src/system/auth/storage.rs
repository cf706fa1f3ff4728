//! Access token persistence.
//!
//! The API layer never reaches into browser storage itself: callers hand a
//! [`TokenStore`] to the auth functions and pass tokens explicitly to the
//! service facades.

use std::cell::RefCell;

pub const ACCESS_TOKEN_KEY: &str = "auth_access_token";

pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Token kept in memory for the lifetime of the store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// Token persisted in the browser's localStorage.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageTokenStore;

#[cfg(target_arch = "wasm32")]
fn get_local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
    }

    fn save(&self, token: &str) {
        if let Some(storage) = get_local_storage() {
            if storage.set_item(ACCESS_TOKEN_KEY, token).is_err() {
                log::warn!("failed to persist access token");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_lifecycle() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.load(), None);

        store.save("abc");
        assert_eq!(store.load().as_deref(), Some("abc"));

        store.save("def");
        assert_eq!(store.load().as_deref(), Some("def"));

        store.clear();
        assert_eq!(store.load(), None);
    }
}
