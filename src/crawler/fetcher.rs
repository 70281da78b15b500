//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with the configured user agent and timeout
//! - GET requests to fetch page content
//! - Retry with exponential backoff for transient failures
//! - Error classification

use crate::config::{CrawlerConfig, UserAgentConfig};
use crate::FetchError;
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use std::time::Duration;

/// Status codes treated as transient and retried
const RETRY_STATUSES: &[u16] = &[500, 502, 503, 504];

/// Raw content of a successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL the request was made for
    pub url: String,

    /// URL after redirects
    pub final_url: String,

    /// HTTP status code
    pub status_code: u16,

    /// Content-Type header value, if any
    pub content_type: Option<String>,

    /// Body decoded with the Content-Type charset, UTF-8 when none is given
    pub body: String,
}

/// Retrieves raw page content for a URL
///
/// Retrying transient failures is the fetcher's concern; callers see either
/// the final page or the final error.
#[async_trait]
pub trait PageFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

/// Retry schedule for transient failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,

    /// Delay before the first retry; doubled for each further retry
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &CrawlerConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            backoff: config.backoff(),
        }
    }

    /// Delay before retry number `retry` (1-based)
    pub fn delay_for(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1).min(16);
        self.backoff.saturating_mul(1u32 << exponent)
    }

    /// Returns true if a response with this status should be retried
    pub fn is_retryable_status(status: StatusCode) -> bool {
        RETRY_STATUSES.contains(&status.as_u16())
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `timeout` - Per-request timeout
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(timeout)
        .connect_timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Page fetcher backed by a reqwest client
pub struct HttpFetcher {
    client: Client,
    retry: RetryPolicy,
}

impl HttpFetcher {
    pub fn new(client: Client, retry: RetryPolicy) -> Self {
        Self { client, retry }
    }

    /// Builds a fetcher from the crawler and user agent settings
    pub fn from_config(
        crawler: &CrawlerConfig,
        user_agent: &UserAgentConfig,
    ) -> Result<Self, reqwest::Error> {
        let client = build_http_client(user_agent, crawler.request_timeout())?;
        Ok(Self::new(client, RetryPolicy::from_config(crawler)))
    }

    async fn backoff(&self, url: &str, retry: u32, reason: &str) {
        let delay = self.retry.delay_for(retry);
        tracing::warn!(
            "Retrying {} ({}/{}) after {:?}: {}",
            url,
            retry,
            self.retry.max_retries,
            delay,
            reason
        );
        tokio::time::sleep(delay).await;
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    /// Fetches a URL, retrying transient failures
    ///
    /// # Retry Logic
    ///
    /// | Condition | Action |
    /// |-----------|--------|
    /// | HTTP 500/502/503/504 | Retry, then `RetriesExhausted` |
    /// | Timeout | Retry, then `Timeout` |
    /// | Connection failure | Retry, then `Connect` |
    /// | Other non-2xx | Immediate `Status` |
    /// | Body read failure | Immediate `Body` |
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let mut retries = 0;

        loop {
            let response = match self.client.get(url).send().await {
                Ok(response) => response,
                Err(e) if (e.is_timeout() || e.is_connect()) && retries < self.retry.max_retries => {
                    retries += 1;
                    self.backoff(url, retries, &e.to_string()).await;
                    continue;
                }
                Err(e) => return Err(classify_error(url, e)),
            };

            let status = response.status();

            if RetryPolicy::is_retryable_status(status) {
                if retries < self.retry.max_retries {
                    retries += 1;
                    self.backoff(url, retries, &format!("HTTP {}", status.as_u16()))
                        .await;
                    continue;
                }
                return Err(FetchError::RetriesExhausted {
                    url: url.to_string(),
                    status: status.as_u16(),
                    attempts: retries + 1,
                });
            }

            if !status.is_success() {
                return Err(FetchError::Status {
                    url: url.to_string(),
                    status: status.as_u16(),
                });
            }

            let final_url = response.url().to_string();
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);

            let body = response.text().await.map_err(|e| FetchError::Body {
                url: url.to_string(),
                message: e.to_string(),
            })?;

            return Ok(FetchedPage {
                url: url.to_string(),
                final_url,
                status_code: status.as_u16(),
                content_type,
                body,
            });
        }
    }
}

/// Maps a transport error onto the fetch error taxonomy
fn classify_error(url: &str, e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else if e.is_connect() {
        FetchError::Connect {
            url: url.to_string(),
            message: e.to_string(),
        }
    } else {
        FetchError::Request {
            url: url.to_string(),
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&UserAgentConfig::default(), Duration::from_secs(10));
        assert!(client.is_ok());
    }

    #[test]
    fn test_from_config() {
        let fetcher = HttpFetcher::from_config(&CrawlerConfig::default(), &UserAgentConfig::default());
        assert!(fetcher.is_ok());
    }

    #[test]
    fn test_retry_policy_from_default_config() {
        let policy = RetryPolicy::from_config(&CrawlerConfig::default());
        assert_eq!(policy.max_retries, 5);
        assert_eq!(policy.backoff, Duration::from_millis(100));
    }

    #[test]
    fn test_backoff_doubles() {
        let policy = RetryPolicy {
            max_retries: 5,
            backoff: Duration::from_millis(100),
        };
        assert_eq!(policy.delay_for(1), Duration::from_millis(100));
        assert_eq!(policy.delay_for(2), Duration::from_millis(200));
        assert_eq!(policy.delay_for(3), Duration::from_millis(400));
        assert_eq!(policy.delay_for(5), Duration::from_millis(1600));
    }

    #[test]
    fn test_zero_backoff() {
        let policy = RetryPolicy {
            max_retries: 3,
            backoff: Duration::ZERO,
        };
        assert_eq!(policy.delay_for(3), Duration::ZERO);
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(RetryPolicy::is_retryable_status(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(RetryPolicy::is_retryable_status(StatusCode::BAD_GATEWAY));
        assert!(RetryPolicy::is_retryable_status(StatusCode::SERVICE_UNAVAILABLE));
        assert!(RetryPolicy::is_retryable_status(StatusCode::GATEWAY_TIMEOUT));

        assert!(!RetryPolicy::is_retryable_status(StatusCode::NOT_FOUND));
        assert!(!RetryPolicy::is_retryable_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(!RetryPolicy::is_retryable_status(StatusCode::NOT_IMPLEMENTED));
    }

    // Request, retry and charset behaviour is covered against wiremock in tests/
}
