//! Configuration types for jee-content

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Content source configuration
///
/// Controls where the two content pipelines fetch from and how long a single
/// fetch attempt may take. Works out of the box: the defaults point at the
/// public sources the reference deployment uses.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Source locator for the tests dataset
    #[serde(default = "default_tests_url")]
    pub tests_url: String,

    /// Source locator for the lectures dataset
    #[serde(default = "default_lectures_url")]
    pub lectures_url: String,

    /// Time budget for a single fetch attempt (default: 5 seconds)
    ///
    /// Enforced by the client itself; expiry is treated like any other fetch
    /// failure and triggers the synthetic fallback. There are no retries.
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout: Duration,

    /// User-Agent sent with fetch requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Seed for the pseudo-random details of generated content
    ///
    /// `None` (the default) draws from entropy. Setting a seed makes the
    /// synthetic fallback and the normalizer's substitutions reproducible.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            tests_url: default_tests_url(),
            lectures_url: default_lectures_url(),
            fetch_timeout: default_fetch_timeout(),
            user_agent: default_user_agent(),
            rng_seed: None,
        }
    }
}

fn default_tests_url() -> String {
    "https://api.github.com/repos/DevParapalli/JEE-Mains-AnswerKeys/contents/keys.json".to_string()
}

fn default_lectures_url() -> String {
    "https://api.github.com/repos/pranjalaggarwal/JEE_HELPER/contents/JEEHELPER/lecture_meta.json"
        .to_string()
}

fn default_fetch_timeout() -> Duration {
    Duration::from_secs(5)
}

fn default_user_agent() -> String {
    "jee-content fetcher".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sane_values() {
        let config = ContentConfig::default();
        assert!(config.tests_url.starts_with("https://"));
        assert!(config.lectures_url.starts_with("https://"));
        assert_eq!(config.fetch_timeout, Duration::from_secs(5));
        assert!(config.rng_seed.is_none());
    }

    #[test]
    fn partial_config_deserializes_with_defaults() {
        let config: ContentConfig =
            serde_json::from_str(r#"{"tests_url": "https://example.com/tests.json"}"#)
                .expect("partial config should deserialize");
        assert_eq!(config.tests_url, "https://example.com/tests.json");
        assert_eq!(config.fetch_timeout, Duration::from_secs(5));
        assert_eq!(config.lectures_url, default_lectures_url());
    }
}
