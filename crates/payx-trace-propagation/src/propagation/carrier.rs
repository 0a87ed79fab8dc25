//! Carrier traits for trace context propagation.
//!
//! Carriers abstract the mutable key-value transport (HTTP headers, message
//! queue metadata, JSON envelopes) through which context is extracted or
//! injected.
//!
//! # Carrier Types
//!
//! Implementations are provided for:
//! - **`HashMap<String, String>`**: HTTP header maps and in-memory tests
//! - **`serde_json::Value`**: JSON-based message formats
//!
//! # Case Insensitivity
//!
//! All carrier implementations normalize keys to lowercase to handle HTTP
//! header case normalization (`X-Payx-Txid` vs `x-payx-txid`).

use std::collections::HashMap;

use serde_json::Value;

/// Trait for injecting trace context into a carrier.
///
/// Keys are normalized to lowercase for case-insensitive matching.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use payx_trace_propagation::propagation::carrier::Injector;
///
/// let mut headers = HashMap::new();
/// headers.set("X-Payx-Txid", "80f198ee56343ba864fe8b2a57d3eff7".to_string());
///
/// assert_eq!(
///     headers.get("x-payx-txid"),
///     Some(&"80f198ee56343ba864fe8b2a57d3eff7".to_string())
/// );
/// ```
pub trait Injector {
    /// Sets a key-value pair in the carrier. The key is lowercased.
    fn set(&mut self, key: &str, value: String);
}

/// Trait for extracting trace context from a carrier.
///
/// Keys are normalized to lowercase for case-insensitive matching.
pub trait Extractor {
    /// Gets a value from the carrier by key (case-insensitive).
    fn get(&self, key: &str) -> Option<&str>;

    /// Gets all keys present in the carrier, in their stored (lowercase)
    /// form.
    fn keys(&self) -> Vec<&str>;
}

impl<S: std::hash::BuildHasher> Injector for HashMap<String, String, S> {
    fn set(&mut self, key: &str, value: String) {
        self.insert(key.to_lowercase(), value);
    }
}

impl<S: std::hash::BuildHasher> Extractor for HashMap<String, String, S> {
    fn get(&self, key: &str) -> Option<&str> {
        self.get(&key.to_lowercase()).map(String::as_str)
    }

    fn keys(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect::<Vec<_>>()
    }
}

/// `Injector` for JSON objects. Non-object values are silently ignored.
impl Injector for Value {
    fn set(&mut self, key: &str, value: String) {
        if let Value::Object(map) = self {
            map.insert(key.to_lowercase(), Value::String(value));
        }
    }
}

/// `Extractor` for JSON objects. Non-object values yield nothing.
impl Extractor for Value {
    fn get(&self, key: &str) -> Option<&str> {
        if let Value::Object(map) = self {
            map.get(&key.to_lowercase()).and_then(|v| v.as_str())
        } else {
            None
        }
    }

    fn keys(&self) -> Vec<&str> {
        if let Value::Object(map) = self {
            map.keys().map(String::as_str).collect::<Vec<_>>()
        } else {
            Vec::new()
        }
    }
}
