//! Snapshot fingerprinting
//!
//! SHA-256 over canonical JSON (object keys sorted recursively), so the hash
//! depends only on content and never on map iteration order.

use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

use super::BillError;

/// Recursively sort all object keys
fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> =
                map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
            Value::Object(sorted.into_iter().collect())
        }
        Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Compute deterministic SHA-256 hex digest of any serializable bill input
pub fn compute_bill_hash<T: Serialize>(input: &T) -> Result<String, BillError> {
    let value = serde_json::to_value(input).map_err(|e| {
        BillError::SerializationError(format!("Bill serialization failed: {}", e))
    })?;

    let json = serde_json::to_string(&canonicalize(value)).map_err(|e| {
        BillError::SerializationError(format!("Bill serialization failed: {}", e))
    })?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}
