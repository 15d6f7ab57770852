//! Remote source client: one bounded-time fetch per resolution
//!
//! [`RemoteSource`] is the seam between the resolution pipeline and the
//! network. The production implementation is [`HttpSource`]; tests substitute
//! their own implementations to force timeouts, count invocations, or serve
//! canned envelopes.

use crate::config::ContentConfig;
use crate::error::{Error, FetchError};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// A source of raw content payloads
///
/// One call is one attempt: implementations must not retry, and must bound
/// their own latency rather than relying on the caller to do so.
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Fetch the raw response body from `url`
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// HTTP(S) implementation of [`RemoteSource`] backed by reqwest
///
/// The time budget is enforced by the client itself: the request is raced
/// against an internal timer, and expiry surfaces as [`FetchError::Timeout`].
pub struct HttpSource {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpSource {
    /// Accept header value expected by the GitHub contents API
    const ACCEPT: &'static str = "application/vnd.github.v3+json";

    /// Create an HTTP source from the content configuration
    ///
    /// # Errors
    /// Returns [`Error::Http`] if the HTTP client cannot be constructed.
    pub fn new(config: &ContentConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(config.fetch_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            timeout: config.fetch_timeout,
        })
    }
}

#[async_trait]
impl RemoteSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "fetching remote content");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, Self::ACCEPT)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout(self.timeout)
                } else {
                    FetchError::Transport(e)
                }
            })?;

        // Check status before touching the body
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.timeout)
            } else {
                FetchError::Transport(e)
            }
        })
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(timeout: Duration) -> ContentConfig {
        ContentConfig {
            fetch_timeout: timeout,
            ..ContentConfig::default()
        }
    }

    #[tokio::test]
    async fn fetch_returns_body_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/contents/keys.json"))
            .and(header("accept", "application/vnd.github.v3+json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"content":""}"#))
            .expect(1)
            .mount(&server)
            .await;

        let source = HttpSource::new(&test_config(Duration::from_secs(5))).unwrap();
        let body = source
            .fetch(&format!("{}/contents/keys.json", server.uri()))
            .await
            .expect("fetch should succeed");
        assert_eq!(body, r#"{"content":""}"#);
    }

    #[tokio::test]
    async fn fetch_reports_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let source = HttpSource::new(&test_config(Duration::from_secs(5))).unwrap();
        let err = source.fetch(&server.uri()).await.unwrap_err();
        assert!(matches!(err, FetchError::Status(404)), "got {err:?}");
    }

    #[tokio::test]
    async fn fetch_times_out_against_slow_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let source = HttpSource::new(&test_config(Duration::from_millis(50))).unwrap();
        let err = source.fetch(&server.uri()).await.unwrap_err();
        assert!(matches!(err, FetchError::Timeout(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn fetch_reports_transport_error_for_unreachable_host() {
        // Port 1 on localhost should refuse the connection
        let source = HttpSource::new(&test_config(Duration::from_secs(5))).unwrap();
        let err = source.fetch("http://127.0.0.1:1/").await.unwrap_err();
        assert!(
            matches!(err, FetchError::Transport(_) | FetchError::Timeout(_)),
            "got {err:?}"
        );
    }
}
