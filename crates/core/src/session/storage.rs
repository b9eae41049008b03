//! Storage abstraction for session state

use std::cell::RefCell;
use std::collections::HashMap;

/// Client-side key/value storage.
///
/// The browser implementation is `localStorage`; tests use [`MemoryStorage`].
/// Implementations never fail loudly: a missing or unreadable value is `None`,
/// and writes that cannot be performed are dropped.
pub trait SessionStorage {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str);

    /// Delete `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str);
}

/// In-memory storage used by tests and native tooling.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

impl<S: SessionStorage + ?Sized> SessionStorage for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips() {
        let storage = MemoryStorage::new();
        storage.set("k", "v");
        assert_eq!(storage.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn remove_missing_key_is_noop() {
        let storage = MemoryStorage::new();
        storage.remove("absent");
        assert!(storage.get("absent").is_none());
    }
}
