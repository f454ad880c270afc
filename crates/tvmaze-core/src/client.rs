//! HTTP client with rate limiting for the TVmaze API
//!
//! This module provides a rate-limited JSON client for the public TVmaze
//! catalog. Retries on transient errors are available but disabled by default.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tokio::time::sleep;

use crate::error::{Result, TvmazeError};

/// Base URL of the public TVmaze API
pub const TVMAZE_BASE_URL: &str = "https://api.tvmaze.com";

const USER_AGENT: &str = concat!("tvmaze-core/", env!("CARGO_PKG_VERSION"));

/// Base delay for exponential backoff (in milliseconds)
const BASE_RETRY_DELAY_MS: u64 = 1000;

/// Rate limiter to control request frequency
///
/// Ensures that requests are spaced at least `min_interval` apart.
/// TVmaze allows roughly 20 calls every 10 seconds per IP.
pub struct RateLimiter {
    /// Minimum interval between requests
    min_interval: Duration,
    /// Timestamp of the last request
    last_request: Arc<Mutex<Instant>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the specified requests per second
    ///
    /// # Panics
    /// If `requests_per_second` is not a positive finite number.
    /// [`TvmazeClient::with_config`] rejects such rates before getting here.
    ///
    /// # Example
    /// ```
    /// use tvmaze_core::client::RateLimiter;
    ///
    /// let limiter = RateLimiter::new(2.0);
    /// assert_eq!(limiter.min_interval().as_millis(), 500);
    /// ```
    pub fn new(requests_per_second: f64) -> Self {
        let min_interval = Duration::from_secs_f64(1.0 / requests_per_second);
        let now = Instant::now();
        Self {
            min_interval,
            last_request: Arc::new(Mutex::new(
                now.checked_sub(min_interval).unwrap_or(now),
            )),
        }
    }

    /// Acquire permission to make a request
    ///
    /// Sleeps if the previous request was less than `min_interval` ago.
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;
        let elapsed = last.elapsed();

        if elapsed < self.min_interval {
            sleep(self.min_interval - elapsed).await;
        }

        *last = Instant::now();
    }

    /// Get the minimum interval between requests
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

/// Configuration for the TVmaze HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root without trailing path (default: `https://api.tvmaze.com`)
    pub base_url: String,
    /// Maximum requests per second (default: 2.0)
    pub requests_per_second: f64,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Retry attempts for 429 and 5xx responses (default: 0)
    pub max_retries: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: TVMAZE_BASE_URL.to_string(),
            requests_per_second: 2.0,
            timeout_secs: 30,
            max_retries: 0,
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at a different API root.
    ///
    /// Mostly useful for tests running against a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// JSON client for the TVmaze API
///
/// This client:
/// - Limits request rate to stay within the public API quota
/// - Optionally retries 429 and 5xx responses with exponential backoff
/// - Decodes response bodies with serde_json
pub struct TvmazeClient {
    client: reqwest::Client,
    rate_limiter: RateLimiter,
    base_url: String,
    max_retries: u32,
}

impl TvmazeClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// - `TvmazeError::InvalidConfig` - `requests_per_second` is zero, negative, infinite or NaN
    /// - `TvmazeError::HttpError` - The HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let rate = config.requests_per_second;
        if !(rate.is_finite() && rate > 0.0) {
            return Err(TvmazeError::InvalidConfig(format!(
                "requests_per_second must be a positive number, got {}",
                rate
            )));
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            rate_limiter: RateLimiter::new(config.requests_per_second),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries,
        })
    }

    /// API root this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the absolute URL for an API path such as `/shows/1/episodes`
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch a path and decode the body as JSON
    ///
    /// # Errors
    /// - `TvmazeError::DecodeError` - Body is not the expected shape
    /// - Everything [`TvmazeClient::fetch`] can return
    pub async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.fetch(path).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch the raw body of an API path
    ///
    /// # Errors
    /// - `TvmazeError::HttpError` - Network error, or 5xx after all retries
    /// - `TvmazeError::RateLimited` - Server returned 429 after all retries
    /// - `TvmazeError::NotFound` - Server returned 404
    pub async fn fetch(&self, path: &str) -> Result<String> {
        let url = self.url_for(path);
        let mut attempt = 0;

        loop {
            self.rate_limiter.acquire().await;

            tracing::debug!(url = %url, attempt, "GET");
            let response = self.client.get(&url).send().await?;
            let status = response.status();

            if status.is_success() {
                return Ok(response.text().await?);
            }

            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(TvmazeError::NotFound(url));
            }

            let transient =
                status == reqwest::StatusCode::TOO_MANY_REQUESTS || status.is_server_error();

            if transient && attempt < self.max_retries {
                let delay = self.calculate_backoff_delay(attempt);
                tracing::warn!(
                    url = %url,
                    status = status.as_u16(),
                    delay_ms = delay.as_millis() as u64,
                    "transient error, retrying"
                );
                sleep(delay).await;
                attempt += 1;
                continue;
            }

            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                return Err(TvmazeError::RateLimited);
            }

            return Err(match response.error_for_status() {
                Err(err) => TvmazeError::HttpError(err),
                Ok(response) => TvmazeError::UnexpectedStatus(response.status().as_u16()),
            });
        }
    }

    /// Calculate exponential backoff delay for retry
    fn calculate_backoff_delay(&self, attempt: u32) -> Duration {
        // 1s, 2s, 4s, ...
        Duration::from_millis(BASE_RETRY_DELAY_MS * 2u64.pow(attempt))
    }
}
