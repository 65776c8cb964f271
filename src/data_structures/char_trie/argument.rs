//! Validation of untyped arguments.
//!
//! The typed API takes `&str` and cannot be misused. Callers holding
//! loosely-typed input (JSON from the command line, scripted drivers) go
//! through these helpers, which reject anything that is not a string or an
//! array of strings before the trie is touched.

use serde_json::Value;

use super::{TrieError, TrieResult};

const EXPECTED_STRING: &str = "a string";
const EXPECTED_STRING_ARRAY: &str = "an array of strings";

/// Short name of a JSON value's type, used in error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Borrows the string inside `value` or fails with `InvalidArgument`.
///
/// # Arguments
///
/// * `value` - The untyped argument.
/// * `argument` - Parameter name reported in the error.
pub fn expect_str<'a>(value: &'a Value, argument: &'static str) -> TrieResult<&'a str> {
    match value {
        Value::String(s) => Ok(s.as_str()),
        other => {
            tracing::warn!(argument, found = type_name(other), "Rejected non-string argument");
            Err(TrieError::InvalidArgument {
                argument,
                expected: EXPECTED_STRING,
                found: type_name(other).to_string(),
            })
        }
    }
}

/// Borrows every item of an array of strings or fails with `InvalidArgument`.
///
/// The whole array is checked before anything is returned, so a bad item at
/// any position rejects the batch.
pub fn expect_str_sequence<'a>(
    value: &'a Value,
    argument: &'static str,
) -> TrieResult<Vec<&'a str>> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            tracing::warn!(argument, found = type_name(other), "Rejected non-array argument");
            return Err(TrieError::InvalidArgument {
                argument,
                expected: EXPECTED_STRING_ARRAY,
                found: type_name(other).to_string(),
            });
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(s) => Ok(s.as_str()),
            other => {
                tracing::warn!(argument, index, found = type_name(other), "Rejected array item");
                Err(TrieError::InvalidArgument {
                    argument,
                    expected: EXPECTED_STRING_ARRAY,
                    found: format!("{} at index {}", type_name(other), index),
                })
            }
        })
        .collect()
}
