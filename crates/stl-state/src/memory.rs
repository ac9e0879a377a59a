use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::error::StateResult;
use crate::traits::WorldState;

/// In-memory, `BTreeMap`-based world state.
///
/// Intended for tests, local demos, and embedding. Entries are held behind a
/// `RwLock` for safe concurrent access; the `BTreeMap` keeps keys ordered so
/// `scan` is deterministic without a sort pass.
pub struct InMemoryWorldState {
    entries: RwLock<BTreeMap<String, String>>,
}

impl InMemoryWorldState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the state holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.entries.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryWorldState {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldState for InMemoryWorldState {
    fn get(&self, key: &str) -> StateResult<Option<String>> {
        let map = self.entries.read().expect("lock poisoned");
        Ok(map.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> StateResult<()> {
        let mut map = self.entries.write().expect("lock poisoned");
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> StateResult<bool> {
        let mut map = self.entries.write().expect("lock poisoned");
        Ok(map.remove(key).is_some())
    }

    fn contains(&self, key: &str) -> StateResult<bool> {
        let map = self.entries.read().expect("lock poisoned");
        Ok(map.contains_key(key))
    }

    fn scan(&self) -> StateResult<Vec<(String, String)>> {
        let map = self.entries.read().expect("lock poisoned");
        Ok(map
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}

impl std::fmt::Debug for InMemoryWorldState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryWorldState")
            .field("key_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Core CRUD
    // -----------------------------------------------------------------------

    #[test]
    fn put_and_get() {
        let state = InMemoryWorldState::new();
        state.put("card_001", "{\"a\":1}").unwrap();
        assert_eq!(state.get("card_001").unwrap(), Some("{\"a\":1}".into()));
    }

    #[test]
    fn get_missing_returns_none() {
        let state = InMemoryWorldState::new();
        assert_eq!(state.get("absent").unwrap(), None);
    }

    #[test]
    fn put_replaces_existing_value() {
        let state = InMemoryWorldState::new();
        state.put("k", "first").unwrap();
        state.put("k", "second").unwrap();
        assert_eq!(state.get("k").unwrap(), Some("second".into()));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn delete_present_key() {
        let state = InMemoryWorldState::new();
        state.put("k", "v").unwrap();
        assert!(state.delete("k").unwrap());
        assert!(!state.contains("k").unwrap());
        assert!(!state.delete("k").unwrap()); // second delete = false
    }

    #[test]
    fn delete_missing_key() {
        let state = InMemoryWorldState::new();
        assert!(!state.delete("never-written").unwrap());
    }

    #[test]
    fn contains_tracks_presence() {
        let state = InMemoryWorldState::new();
        assert!(!state.contains("k").unwrap());
        state.put("k", "v").unwrap();
        assert!(state.contains("k").unwrap());
    }

    // -----------------------------------------------------------------------
    // Scan ordering
    // -----------------------------------------------------------------------

    #[test]
    fn scan_is_key_ordered_regardless_of_insertion_order() {
        let state = InMemoryWorldState::new();
        state.put("printer_001", "p").unwrap();
        state.put("card_001", "c").unwrap();
        state.put("light_001", "l").unwrap();

        let keys: Vec<String> = state.scan().unwrap().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["card_001", "light_001", "printer_001"]);
    }

    #[test]
    fn scan_of_empty_state() {
        let state = InMemoryWorldState::new();
        assert!(state.scan().unwrap().is_empty());
    }

    #[test]
    fn two_states_with_same_writes_scan_identically() {
        let a = InMemoryWorldState::new();
        let b = InMemoryWorldState::new();
        for (k, v) in [("z", "1"), ("a", "2"), ("m", "3")] {
            a.put(k, v).unwrap();
        }
        for (k, v) in [("m", "3"), ("z", "1"), ("a", "2")] {
            b.put(k, v).unwrap();
        }
        assert_eq!(a.scan().unwrap(), b.scan().unwrap());
    }

    // -----------------------------------------------------------------------
    // Utility methods
    // -----------------------------------------------------------------------

    #[test]
    fn len_and_is_empty() {
        let state = InMemoryWorldState::new();
        assert!(state.is_empty());
        state.put("k", "v").unwrap();
        assert_eq!(state.len(), 1);
        assert!(!state.is_empty());
    }

    #[test]
    fn clear_removes_all() {
        let state = InMemoryWorldState::new();
        state.put("a", "1").unwrap();
        state.put("b", "2").unwrap();
        state.clear();
        assert!(state.is_empty());
    }

    // -----------------------------------------------------------------------
    // Concurrent access
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let state = Arc::new(InMemoryWorldState::new());
        state.put("shared", "value").unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let state = Arc::clone(&state);
                thread::spawn(move || {
                    assert_eq!(state.get("shared").unwrap(), Some("value".into()));
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }

    #[test]
    fn concurrent_writers_to_distinct_keys() {
        use std::sync::Arc;
        use std::thread;

        let state = Arc::new(InMemoryWorldState::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let state = Arc::clone(&state);
                thread::spawn(move || {
                    for j in 0..25 {
                        state.put(&format!("w{i}_{j}"), "x").unwrap();
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(state.len(), 100);
    }

    #[test]
    fn debug_format() {
        let state = InMemoryWorldState::new();
        state.put("k", "v").unwrap();
        let debug = format!("{state:?}");
        assert!(debug.contains("InMemoryWorldState"));
        assert!(debug.contains("key_count"));
    }
}
