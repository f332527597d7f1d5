//! The text ingest endpoint.
//!
//! Accepts `POST /upload` with a JSON body, extracts the `text` field
//! through an explicit decode step, appends the value to the text store,
//! and echoes it back as the plaintext response body. Decoding failures
//! are not errors at the HTTP level: absent or malformed input is
//! coerced to the empty string by the handler and still appended, which
//! mirrors the endpoint's observed contract.

mod decode;
mod server;

pub use decode::extract_text;
pub use server::{ingest_text, router, serve, AppState};
