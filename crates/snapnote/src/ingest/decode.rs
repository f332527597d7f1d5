//! Payload decoding for the ingest endpoint.

use serde_json::Value;

/// Extract the `text` field from a raw JSON request body.
///
/// Returns `Some` only when the body is a JSON object whose `text`
/// member is a string. Malformed JSON, a missing key, or a non-string
/// value all yield `None`; whether absence is an error or a default is
/// the caller's decision.
#[must_use]
pub fn extract_text(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("text")?.as_str().map(ToOwned::to_owned)
}
