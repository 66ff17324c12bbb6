//! Key-value storage for cross-session stats
//!
//! A narrow, string-backed store in the spirit of browser local storage.
//! Integers are stored as decimal strings; a value that fails to parse reads
//! back as the caller's default.

pub mod error;
pub mod json;

use std::cell::RefCell;
use std::collections::HashMap;

pub use error::StoreError;
pub use json::JsonStore;

/// Daily streak count
pub const STREAK_KEY: &str = "lf_streak";
/// Total experience points
pub const XP_KEY: &str = "lf_xp";
/// Display name
pub const USERNAME_KEY: &str = "lf_username";
/// "light" or "dark"
pub const THEME_KEY: &str = "lf_theme";

pub const DEFAULT_STREAK: i64 = 3;
pub const DEFAULT_XP: i64 = 420;
pub const DEFAULT_USERNAME: &str = "Student";
pub const DEFAULT_THEME: &str = "light";

/// Scalar storage shared by the quiz and profile
///
/// Writes are fire-and-forget: implementations that can fail must log and
/// carry on rather than bubble errors into the state machines.
pub trait KeyValueStore {
    /// Read a raw value
    fn get(&self, key: &str) -> Option<String>;

    /// Write a raw value
    fn set(&self, key: &str, value: String);

    /// Read an integer, falling back to `default` when missing or malformed
    fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get(key).and_then(|v| v.trim().parse().ok()).unwrap_or(default)
    }

    fn set_int(&self, key: &str, value: i64) {
        self.set(key, value.to_string());
    }

    /// Read a string, falling back to `default` when missing
    fn get_string(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    fn set_string(&self, key: &str, value: &str) {
        self.set(key, value.to_string());
    }
}

/// Volatile store, used for tests and when no data directory is available
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.values.borrow_mut().insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_int_returns_default() {
        let store = MemoryStore::new();
        assert_eq!(store.get_int(XP_KEY, 420), 420);
    }

    #[test]
    fn int_round_trips_as_string() {
        let store = MemoryStore::new();
        store.set_int(XP_KEY, 440);
        assert_eq!(store.get(XP_KEY).as_deref(), Some("440"));
        assert_eq!(store.get_int(XP_KEY, 0), 440);
    }

    #[test]
    fn malformed_int_returns_default() {
        let store = MemoryStore::new();
        store.set_string(STREAK_KEY, "lots");
        assert_eq!(store.get_int(STREAK_KEY, 3), 3);
    }

    #[test]
    fn string_default_when_missing() {
        let store = MemoryStore::new();
        assert_eq!(store.get_string(USERNAME_KEY, "Student"), "Student");
        store.set_string(USERNAME_KEY, "Ada");
        assert_eq!(store.get_string(USERNAME_KEY, "Student"), "Ada");
        assert_eq!(store.len(), 1);
    }
}
