use std::sync::RwLock;

/// Where the bearer token lives between requests. The gateway reads it
/// synchronously before every call; nothing here refreshes or inspects
/// the token.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Process-local store for native targets and tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    fn set(&self, token: &str) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }
}

/// Browser localStorage under the single key `token`.
#[cfg(target_arch = "wasm32")]
pub mod browser {
    use super::TokenStore;
    use gloo_storage::{LocalStorage, Storage};

    const TOKEN_KEY: &str = "token";

    #[derive(Debug, Default)]
    pub struct BrowserTokenStore;

    impl TokenStore for BrowserTokenStore {
        fn get(&self) -> Option<String> {
            LocalStorage::get::<String>(TOKEN_KEY).ok()
        }

        fn set(&self, token: &str) {
            let _ = LocalStorage::set(TOKEN_KEY, token.to_string());
        }

        fn clear(&self) {
            LocalStorage::delete(TOKEN_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(), None);

        store.set("abc123");
        assert_eq!(store.get(), Some("abc123".to_string()));

        store.clear();
        assert_eq!(store.get(), None);
    }
}
