//! Envelope decoding: outer JSON → base64 `content` → inner payload text
//!
//! The remote source answers with a JSON object whose `content` field holds
//! the real payload, base64-encoded. Transports are allowed to insert
//! whitespace (including newlines) into the encoded string, so it is stripped
//! before decoding. One decode path, standard alphabet, no
//! environment-dependent fallbacks.

use crate::error::EnvelopeError;
use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use serde::Deserialize;

/// Outer response shape; all fields besides `content` are ignored
#[derive(Debug, Deserialize)]
struct Envelope {
    content: Option<String>,
}

/// Unwrap a raw response body into the inner payload text
///
/// # Errors
/// Fails if the body is not JSON, the `content` field is missing or empty,
/// the content is not valid base64 after whitespace stripping, or the decoded
/// bytes are not UTF-8. Every failure here is structural: the caller falls
/// back to synthesis rather than guessing at partial content.
pub fn decode(raw: &str) -> Result<String, EnvelopeError> {
    let envelope: Envelope = serde_json::from_str(raw)?;
    let content = envelope.content.ok_or(EnvelopeError::MissingContent)?;

    let stripped: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.is_empty() {
        return Err(EnvelopeError::MissingContent);
    }

    let bytes = BASE64_STANDARD.decode(stripped.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}
