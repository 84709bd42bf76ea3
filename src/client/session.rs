use std::sync::RwLock;

#[cfg(test)]
use mockall::automock;

/// Single owner of the bearer token. Every request reads from here and the
/// 401 handler clears it, so callers never touch the token directly.
#[cfg_attr(test, automock)]
pub trait SessionStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: String);
    fn clear(&self);
}

#[derive(Default)]
pub struct InMemorySessionStore {
    token: RwLock<Option<String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self) -> Option<String> {
        self.token.read().ok()?.clone()
    }

    fn set(&self, token: String) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token);
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_clear_round_trip() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.get(), None);

        store.set("token-123".to_string());
        assert_eq!(store.get(), Some("token-123".to_string()));

        store.clear();
        assert_eq!(store.get(), None);
    }
}
