//! Deterministic JSON encoding for world-state values.
//!
//! Replicated nodes must produce byte-identical state for the same logical
//! operation, so every value written to the world state goes through
//! [`to_canonical_json`]: compact separators, object keys recursively sorted,
//! independent of field supply order or host.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::TypeError;

/// Encode a value as canonical JSON: compact, with every object's keys in
/// lexicographic order at every nesting depth.
pub fn to_canonical_json<T: Serialize>(value: &T) -> Result<String, TypeError> {
    let raw = serde_json::to_value(value).map_err(|e| TypeError::Serialization(e.to_string()))?;
    serde_json::to_string(&sort_keys(raw)).map_err(|e| TypeError::Serialization(e.to_string()))
}

/// Recursively rebuild every object through a `BTreeMap` so key order is
/// lexicographic regardless of how the input map was constructed.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> = map
                .into_iter()
                .map(|(key, inner)| (key, sort_keys(inner)))
                .collect();
            Value::Object(sorted.into_iter().collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        scalar => scalar,
    }
}
