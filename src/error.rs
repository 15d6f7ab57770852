//! Error types for jee-content
//!
//! The resolution pipeline has a layered error taxonomy:
//! - [`FetchError`] — the remote request itself failed (transport, timeout,
//!   non-success status)
//! - [`EnvelopeError`] — the response body could not be unwrapped into the
//!   inner payload text
//! - [`ResolveError`] — umbrella for any stage of one resolution cycle,
//!   including payload parse and shape validation
//!
//! None of these ever escape [`ContentStore`](crate::store::ContentStore)'s
//! get-operations: every resolution failure triggers the synthetic fallback
//! and callers always receive a usable dataset. [`Error`] covers the small
//! fallible surface that remains (store construction).

use std::time::Duration;
use thiserror::Error;

/// Result type alias for jee-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the public fallible surface
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "tests_url")
        key: Option<String>,
    },

    /// HTTP client construction failed
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors from a single remote fetch attempt
///
/// There are no retries: any of these immediately yields to the caller's
/// fallback path.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection or protocol-level failure
    #[error("transport error: {0}")]
    Transport(reqwest::Error),

    /// The request exceeded its time budget
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The remote source answered with a non-success status
    #[error("remote source returned HTTP {0}")]
    Status(u16),
}

/// Errors from unwrapping the response envelope
///
/// The envelope is the outer JSON object whose `content` field carries the
/// base64-encoded inner payload.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The response body is not valid JSON
    #[error("envelope is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The envelope has no usable `content` field
    #[error("envelope has no content field")]
    MissingContent,

    /// The `content` field is not valid base64
    #[error("content is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded content is not valid UTF-8
    #[error("decoded content is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Any failure of one resolution cycle
///
/// All variants are handled identically by the store: log, synthesize, cache.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The remote fetch failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The envelope could not be decoded
    #[error("envelope decode failed: {0}")]
    Envelope(#[from] EnvelopeError),

    /// The inner payload is not parseable JSON
    #[error("payload parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// The parsed payload lacks the expected shape
    #[error("payload shape invalid: {0}")]
    Shape(String),
}
