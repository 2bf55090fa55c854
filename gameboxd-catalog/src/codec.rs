//! Conversion of list-valued fields to and from a single text column.
//!
//! Genre and platform lists are stored as JSON arrays. Decoding is lossy by
//! default: a missing or unreadable blob becomes an empty list. Use
//! [`try_decode_list`] when the difference between the two matters.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize a list into its stored text form. Order is preserved.
pub fn encode_list<T: Serialize>(items: &[T]) -> Result<String, CodecError> {
    Ok(serde_json::to_string(items)?)
}

/// Decode a stored list, treating absent and malformed input alike as empty.
pub fn decode_list<T: DeserializeOwned>(blob: Option<&str>) -> Vec<T> {
    match try_decode_list(blob) {
        Ok(items) => items.unwrap_or_default(),
        Err(e) => {
            log::warn!("Discarding unreadable list value: {e}");
            Vec::new()
        }
    }
}

/// Decode a stored list, reporting corruption instead of hiding it.
///
/// Returns `Ok(None)` for an absent blob and `Err` for one that is not a valid
/// JSON array of `T`.
pub fn try_decode_list<T: DeserializeOwned>(
    blob: Option<&str>,
) -> Result<Option<Vec<T>>, CodecError> {
    match blob {
        None => Ok(None),
        Some(text) => Ok(Some(serde_json::from_str(text)?)),
    }
}
