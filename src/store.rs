//! Process-scoped content store: resolve once, serve forever
//!
//! [`ContentStore`] owns the two cache slots (tests, lectures) and runs the
//! full resolution pipeline — fetch, envelope decode, parse, normalize — on
//! the first request for each content type. Any failure along the way is
//! logged and answered with the synthetic fallback, so the get-operations
//! never fail and never return an empty dataset. Concurrent first callers are
//! coalesced onto a single in-flight resolution; once a slot is populated it
//! is never re-resolved or invalidated for the lifetime of the process.

use crate::config::ContentConfig;
use crate::envelope;
use crate::error::{Error, ResolveError, Result};
use crate::normalize;
use crate::source::{HttpSource, RemoteSource};
use crate::subjects;
use crate::synthesize;
use crate::types::{Lecture, Test};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{info, warn};

/// Resolved-once, read-many store for tests and lectures
///
/// # Example
///
/// ```no_run
/// use jee_content::{ContentConfig, ContentStore};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = ContentStore::new(ContentConfig::default())?;
///
/// // First call resolves (network or fallback); later calls hit the cache
/// let tests = store.tests().await;
/// println!("{} tests available", tests.len());
///
/// let physics = store.tests_by_subject("phy").await;
/// println!("{} physics tests", physics.len());
/// # Ok(())
/// # }
/// ```
pub struct ContentStore {
    config: ContentConfig,
    source: Arc<dyn RemoteSource>,
    tests: OnceCell<Arc<[Test]>>,
    lectures: OnceCell<Arc<[Lecture]>>,
}

impl std::fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStore")
            .field("config", &self.config)
            .field("tests", &self.tests)
            .field("lectures", &self.lectures)
            .finish_non_exhaustive()
    }
}

impl ContentStore {
    /// Create a store backed by the HTTP remote source
    ///
    /// # Errors
    /// Returns [`Error::Config`] for an empty source locator and
    /// [`Error::Http`] if the HTTP client cannot be constructed.
    pub fn new(config: ContentConfig) -> Result<Self> {
        for (key, url) in [("tests_url", &config.tests_url), ("lectures_url", &config.lectures_url)]
        {
            if url.trim().is_empty() {
                return Err(Error::Config {
                    message: "source locator must not be empty".to_string(),
                    key: Some(key.to_string()),
                });
            }
        }

        let source = Arc::new(HttpSource::new(&config)?);
        Ok(Self::with_source(config, source))
    }

    /// Create a store over an arbitrary [`RemoteSource`]
    ///
    /// This is the seam tests use to inject canned or failing sources.
    pub fn with_source(config: ContentConfig, source: Arc<dyn RemoteSource>) -> Self {
        Self {
            config,
            source,
            tests: OnceCell::new(),
            lectures: OnceCell::new(),
        }
    }

    fn rng(&self) -> StdRng {
        match self.config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Get the tests snapshot, resolving it on first call
    ///
    /// Never fails: a failed resolution is served from the synthesizer.
    pub async fn tests(&self) -> Arc<[Test]> {
        self.tests
            .get_or_init(|| async {
                match self.remote_tests().await {
                    Ok(tests) => {
                        info!(count = tests.len(), "resolved tests from remote source");
                        tests.into()
                    }
                    Err(err) => {
                        warn!(error = %err, "test resolution failed, using synthetic data");
                        synthesize::generate_tests(&mut self.rng()).into()
                    }
                }
            })
            .await
            .clone()
    }

    async fn remote_tests(&self) -> std::result::Result<Vec<Test>, ResolveError> {
        let raw = self.source.fetch(&self.config.tests_url).await?;
        let inner = envelope::decode(&raw)?;
        let doc: Value = serde_json::from_str(&inner)?;
        normalize::tests_from_document(&doc, &mut self.rng())
    }

    /// Get the lectures snapshot, resolving it on first call
    ///
    /// Never fails: a failed resolution is served from the synthesizer.
    pub async fn lectures(&self) -> Arc<[Lecture]> {
        self.lectures
            .get_or_init(|| async {
                match self.remote_lectures().await {
                    Ok(lectures) => {
                        info!(count = lectures.len(), "resolved lectures from remote source");
                        lectures.into()
                    }
                    Err(err) => {
                        warn!(error = %err, "lecture resolution failed, using synthetic data");
                        synthesize::generate_lectures(&mut self.rng()).into()
                    }
                }
            })
            .await
            .clone()
    }

    async fn remote_lectures(&self) -> std::result::Result<Vec<Lecture>, ResolveError> {
        let raw = self.source.fetch(&self.config.lectures_url).await?;
        let inner = envelope::decode(&raw)?;
        let doc: Value = serde_json::from_str(&inner)?;
        normalize::lectures_from_document(&doc, &mut self.rng())
    }

    /// Look up a test by its identifier
    pub async fn test_by_id(&self, id: &str) -> Option<Test> {
        self.tests().await.iter().find(|test| test.id == id).cloned()
    }

    /// All tests for a subject, accepting informal names like "phy" or "math"
    pub async fn tests_by_subject(&self, subject: &str) -> Vec<Test> {
        let subject = subjects::canonical(subject);
        self.tests()
            .await
            .iter()
            .filter(|test| test.subject.eq_ignore_ascii_case(&subject))
            .cloned()
            .collect()
    }

    /// All tests flagged as featured
    pub async fn featured_tests(&self) -> Vec<Test> {
        self.tests()
            .await
            .iter()
            .filter(|test| test.featured)
            .cloned()
            .collect()
    }

    /// Number of tests per subject label
    pub async fn test_counts(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for test in self.tests().await.iter() {
            *counts.entry(test.subject.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Look up a lecture by its identifier
    pub async fn lecture_by_id(&self, id: &str) -> Option<Lecture> {
        self.lectures()
            .await
            .iter()
            .find(|lecture| lecture.id == id)
            .cloned()
    }

    /// All lectures for a subject, accepting informal names like "chem"
    pub async fn lectures_by_subject(&self, subject: &str) -> Vec<Lecture> {
        let subject = subjects::canonical(subject);
        self.lectures()
            .await
            .iter()
            .filter(|lecture| lecture.subject.eq_ignore_ascii_case(&subject))
            .cloned()
            .collect()
    }

    /// Number of lectures per subject label
    pub async fn lecture_counts(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for lecture in self.lectures().await.iter() {
            *counts.entry(lecture.subject.clone()).or_insert(0) += 1;
        }
        counts
    }
}
