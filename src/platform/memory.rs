//! In-memory key-value store. Used when localStorage is unavailable and in tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::{AppError, AppResult};

/// HashMap-backed store that counts writes and can be made to fail
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.values.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    /// Successful `set` calls so far
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    /// Make every later `set` fail, like a full quota
    pub fn fail_writes(&self) {
        self.fail_writes.set(true);
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        if self.fail_writes.get() {
            return Err(AppError::Storage("quota exceeded".to_string()));
        }
        self.writes.set(self.writes.get() + 1);
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::default();
        assert_eq!(store.get("k"), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k"), None);
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_failing_writes_leave_value() {
        let store = MemoryStore::with("k", "old");
        store.fail_writes();
        assert!(matches!(store.set("k", "new"), Err(AppError::Storage(_))));
        assert_eq!(store.get("k").as_deref(), Some("old"));
    }
}
