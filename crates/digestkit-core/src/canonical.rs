//! # Canonical Bytes — Deterministic Input for Structured Values
//!
//! Digesting a struct through `serde_json::to_vec()` is not reproducible:
//! field order and number formatting vary between serializers. This module
//! defines [`CanonicalBytes`], the single construction path for the bytes of
//! a structured value that is about to be digested.
//!
//! ## Rules
//!
//! 1. The value is converted to a JSON tree via `serde`.
//! 2. **Floats are rejected.** Any number stored as a float fails, even an
//!    integral one like `1.0`; amounts must be integers or strings.
//! 3. The tree is serialized with RFC 8785 (JSON Canonicalization Scheme):
//!    sorted keys, compact separators, UTF-8 output.
//!
//! The inner bytes are private, so any function that takes `&CanonicalBytes`
//! knows the rules above were applied.

use serde::Serialize;
use serde_json::Value;

use crate::error::CanonicalizationError;

/// Bytes produced exclusively by JCS canonicalization of a float-free value.
///
/// # Invariants
///
/// - The only constructor is [`CanonicalBytes::new()`].
/// - All numbers are integers; floats were rejected.
/// - Object keys are sorted and separators are compact (RFC 8785).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns [`CanonicalizationError::FloatRejected`] if the value contains
    /// any floating-point number (including integral ones such as `1.0`), and
    /// [`CanonicalizationError::SerializationFailed`] if `serde` conversion
    /// or JCS serialization fails.
    pub fn new<T: Serialize + ?Sized>(obj: &T) -> Result<Self, CanonicalizationError> {
        let value = serde_json::to_value(obj)?;
        reject_floats(&value)?;
        let s = serde_jcs::to_string(&value)?;
        Ok(Self(s.into_bytes()))
    }

    /// Access the canonical bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Walk the JSON tree and fail on the first floating-point number.
fn reject_floats(value: &Value) -> Result<(), CanonicalizationError> {
    match value {
        Value::Null | Value::Bool(_) | Value::String(_) => Ok(()),
        Value::Number(n) => {
            if n.is_f64() {
                if let Some(f) = n.as_f64() {
                    return Err(CanonicalizationError::FloatRejected(f));
                }
            }
            Ok(())
        }
        Value::Array(items) => items.iter().try_for_each(reject_floats),
        Value::Object(map) => map.values().try_for_each(reject_floats),
    }
}
