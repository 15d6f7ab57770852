//! # jee-content
//!
//! Fetch-with-fallback content library for JEE practice tests and lectures.
//!
//! ## Design Philosophy
//!
//! jee-content is designed to be:
//! - **Always answerable** - get-operations never fail; a failed resolution
//!   is served from a complete synthetic dataset instead
//! - **Resolve-once** - each content type is resolved at most once per
//!   process and memoized for the process's lifetime
//! - **Library-first** - no CLI or UI, purely a Rust crate for embedding in
//!   the page-rendering layer
//! - **Mockable at the seam** - the remote source is a trait, so tests can
//!   force timeouts, count fetches, or serve canned envelopes
//!
//! ## Quick Start
//!
//! ```no_run
//! use jee_content::{ContentConfig, ContentStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = ContentStore::new(ContentConfig::default())?;
//!
//!     // First call fetches (bounded to 5s) or falls back to synthetic data
//!     let tests = store.tests().await;
//!     for test in tests.iter().filter(|t| t.featured) {
//!         println!("{}: {} questions", test.title, test.questions.len());
//!     }
//!
//!     // Informal subject names are understood
//!     let physics = store.tests_by_subject("phy").await;
//!     println!("{} physics tests", physics.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Envelope decoding (outer JSON, base64 content field)
pub mod envelope;
/// Error types
pub mod error;
/// Content normalization (payload documents → domain entities)
pub mod normalize;
/// Remote source client
pub mod source;
/// Process-scoped content store
pub mod store;
/// Canonical subjects and synonym mapping
pub mod subjects;
/// Synthetic fallback data generation
pub mod synthesize;
/// Core domain types
pub mod types;

// Re-export commonly used types
pub use config::ContentConfig;
pub use error::{EnvelopeError, Error, FetchError, ResolveError, Result};
pub use source::{HttpSource, RemoteSource};
pub use store::ContentStore;
pub use types::{Difficulty, Lecture, LectureResource, Question, Test};
