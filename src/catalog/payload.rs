//! Collection endpoint response decoding.
//!
//! The endpoint answers a single parameterless GET with a JSON list of
//! records. A load either yields the whole list or fails; there is no partial
//! result.

use crate::domain::error::{DexError, Result};
use crate::domain::Record;
use serde_json::Value;

/// Decodes a collection response.
///
/// # Errors
///
/// - [`DexError::Http`] for a non-2xx `status`
/// - [`DexError::InvalidPayload`] when the body is not a JSON list or when
///   its first element lacks a name or identifier
///
/// Later elements that are not records, or that carry no name, are skipped
/// with a warning. Malformed sprite data inside a record is not an error.
///
/// # Examples
///
/// ```
/// use dexplorer::catalog::decode_collection;
/// use dexplorer::DexError;
///
/// assert!(matches!(decode_collection(404, b"[]"), Err(DexError::Http { status: 404 })));
/// assert!(decode_collection(200, b"[]").unwrap().is_empty());
/// ```
pub fn decode_collection(status: u16, body: &[u8]) -> Result<Vec<Record>> {
    let _span = tracing::debug_span!("decode_collection", status, body_len = body.len()).entered();

    if !(200..300).contains(&status) {
        tracing::debug!(status, "collection request failed");
        return Err(DexError::Http { status });
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| DexError::InvalidPayload(format!("body is not JSON: {e}")))?;

    let Value::Array(items) = value else {
        return Err(DexError::InvalidPayload("expected a list of records".to_string()));
    };

    if let Some(first) = items.first() {
        validate_shape(first)?;
    }

    let total = items.len();
    let records: Vec<Record> = items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| match serde_json::from_value::<Record>(item) {
            Ok(record) if !record.name.is_empty() => Some(record),
            Ok(record) => {
                tracing::warn!(index = idx, id = record.id, "skipping record without a name");
                None
            }
            Err(e) => {
                tracing::warn!(index = idx, error = %e, "skipping malformed record");
                None
            }
        })
        .collect();

    if records.len() < total {
        tracing::debug!(skipped = total - records.len(), "collection had unusable records");
    }

    tracing::debug!(record_count = records.len(), "collection decoded");
    Ok(records)
}

/// The first element must carry a non-empty name and a non-zero identifier.
fn validate_shape(first: &Value) -> Result<()> {
    let has_name = first
        .get("name")
        .and_then(Value::as_str)
        .is_some_and(|name| !name.is_empty());
    let has_id = first
        .get("id")
        .and_then(Value::as_u64)
        .is_some_and(|id| id > 0);

    if has_name && has_id {
        Ok(())
    } else {
        tracing::debug!(first = %first, "first record lacks name or id");
        Err(DexError::InvalidPayload("invalid record format".to_string()))
    }
}
