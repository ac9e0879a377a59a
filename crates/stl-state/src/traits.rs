use crate::error::StateResult;

/// Flat key-value world state holding the current value for each key.
///
/// All implementations must satisfy these invariants:
/// - `get` returns `Ok(None)` for an absent key, never an error.
/// - `put` fully replaces any existing value; there is no merge.
/// - `delete` returns `true` iff the key existed; deleting an absent key is
///   not an error.
/// - `scan` enumerates the ENTIRE state in ascending key order. Callers that
///   need a subset filter on the value side; there is no prefix scoping.
/// - The store never interprets values.
pub trait WorldState: Send + Sync {
    /// Read the current value for a key. `Ok(None)` if absent.
    fn get(&self, key: &str) -> StateResult<Option<String>>;

    /// Write a value, replacing any existing value for the key.
    fn put(&self, key: &str, value: &str) -> StateResult<()>;

    /// Remove a key. Returns `true` if the key existed.
    fn delete(&self, key: &str) -> StateResult<bool>;

    /// Check whether a key is present.
    fn contains(&self, key: &str) -> StateResult<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Enumerate every `(key, value)` pair in ascending key order.
    fn scan(&self) -> StateResult<Vec<(String, String)>>;
}
