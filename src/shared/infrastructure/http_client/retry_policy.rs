//! Retry policies for the remote services we talk to
//!
//! Retrying is a property of the HTTP layer only. Services above it see a
//! single success or a single failure.

use std::time::Duration;

/// Configuration for HTTP retry behavior
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of retry attempts
    pub max_retries: u32,
    /// Base delay between retries (will be adjusted based on headers)
    pub base_delay: Duration,
    /// Maximum delay to wait (prevents excessive waits)
    pub max_delay: Duration,
    /// Whether to use exponential backoff
    pub exponential_backoff: bool,
    /// Multiplier for exponential backoff
    pub backoff_multiplier: f64,
}

impl RetryPolicy {
    /// Pacing backend: one quick retry for transient server or network errors
    pub fn pacing_api() -> Self {
        Self {
            max_retries: 1,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(5),
            exponential_backoff: false,
            backoff_multiplier: 1.0,
        }
    }

    /// TMDB: ~40 requests per 10 seconds, answers 429 with Retry-After
    pub fn tmdb() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            exponential_backoff: true,
            backoff_multiplier: 2.0,
        }
    }

    /// Fail on the first error
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            exponential_backoff: false,
            backoff_multiplier: 1.0,
        }
    }

    /// Calculate delay for next retry attempt
    pub fn calculate_delay(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        // If server provided Retry-After header, respect it
        if let Some(server_delay) = retry_after {
            return server_delay.min(self.max_delay);
        }

        let delay = if self.exponential_backoff {
            let multiplier = self.backoff_multiplier.powi(attempt as i32);
            Duration::from_millis((self.base_delay.as_millis() as f64 * multiplier) as u64)
        } else {
            self.base_delay
        };

        delay.min(self.max_delay)
    }
}

/// Information extracted from HTTP 429 responses
#[derive(Debug, Clone, Default)]
pub struct RateLimitInfo {
    /// How long to wait before next request (from Retry-After header)
    pub retry_after: Option<Duration>,
    /// Number of requests remaining (from X-RateLimit-Remaining header)
    pub remaining: Option<u32>,
    /// Total rate limit (from X-RateLimit-Limit header)
    pub limit: Option<u32>,
}

impl RateLimitInfo {
    /// Parse rate limit information from HTTP response headers
    pub fn from_headers(headers: &reqwest::header::HeaderMap) -> Self {
        let header_number = |name: &str| {
            headers
                .get(name)
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.trim().parse::<u64>().ok())
        };

        Self {
            retry_after: header_number("retry-after").map(Duration::from_secs),
            remaining: header_number("x-ratelimit-remaining").map(|v| v as u32),
            limit: header_number("x-ratelimit-limit").map(|v| v as u32),
        }
    }

    pub fn recommended_delay(&self) -> Option<Duration> {
        self.retry_after
    }
}

/// Determines if an error is retryable
pub fn is_retryable_error(error: &reqwest::Error) -> bool {
    if let Some(status) = error.status() {
        is_retryable_status(status.as_u16())
    } else {
        // Network errors are potentially retryable
        error.is_timeout() || error.is_connect()
    }
}

pub(crate) fn is_retryable_status(status: u16) -> bool {
    match status {
        // Rate limiting, timeouts, too early
        429 | 408 | 425 => true,
        // Server errors (potentially temporary)
        500..=599 => true,
        _ => false,
    }
}
