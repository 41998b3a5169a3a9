//! HTTP client with client-side rate limiting and retry logic
//!
//! Shared by the pacing backend client and the TMDB adapter so both handle
//! 429s, server errors and body decoding the same way.

use super::retry_policy::{is_retryable_error, RateLimitInfo, RetryPolicy};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter as GovernorRateLimiter};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use std::num::NonZeroU32;
use std::time::{Duration, Instant};
use tokio::time::sleep;

const USER_AGENT: &str = "pacing-score/0.1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// HTTP client that handles rate limiting and retries
pub struct RateLimitClient {
    client: Client,
    rate_limiter: DefaultDirectRateLimiter,
    retry_policy: RetryPolicy,
    service_name: String,
}

impl RateLimitClient {
    /// Client for the pacing score backend
    pub fn for_pacing_api() -> Self {
        Self::new(
            "PacingAPI",
            RetryPolicy::pacing_api(),
            Self::create_rate_limiter(10.0, 20),
        )
    }

    /// Client for TMDB
    pub fn for_tmdb() -> Self {
        Self::new(
            "TMDB",
            RetryPolicy::tmdb(),
            // TMDB: ~40 req / 10 sec
            Self::create_rate_limiter(4.0, 10),
        )
    }

    /// Create a rate limiter with specified requests per second and burst capacity
    pub fn create_rate_limiter(requests_per_second: f64, burst_size: u32) -> DefaultDirectRateLimiter {
        let period = if requests_per_second > 0.0 {
            Duration::from_secs_f64(1.0 / requests_per_second)
        } else {
            Duration::MAX // Effectively disable if rate is 0
        };

        let burst = NonZeroU32::new(burst_size.max(1)).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(burst))
            .allow_burst(burst);

        GovernorRateLimiter::direct(quota)
    }

    pub fn new(
        service_name: &str,
        retry_policy: RetryPolicy,
        rate_limiter: DefaultDirectRateLimiter,
    ) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|e| {
                log::warn!("Falling back to default HTTP client: {}", e);
                Client::new()
            });

        Self {
            client,
            rate_limiter,
            retry_policy,
            service_name: service_name.to_string(),
        }
    }

    /// GET a JSON document
    pub async fn get<T>(&self, url: &str) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let body = self.request_with_retries(Method::GET, url, None).await?;
        self.parse_json(&body)
    }

    /// POST (optional JSON body) and decode a JSON response
    pub async fn post_json<T>(&self, url: &str, body: Option<&Value>) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let body = self
            .request_with_retries(Method::POST, url, body.cloned())
            .await?;
        self.parse_json(&body)
    }

    /// POST without body and return the raw text response
    pub async fn post_text(&self, url: &str) -> AppResult<String> {
        self.request_with_retries(Method::POST, url, None).await
    }

    /// Make a request with automatic retries and rate limiting; returns the body text
    async fn request_with_retries(
        &self,
        method: Method,
        url: &str,
        body: Option<Value>,
    ) -> AppResult<String> {
        let endpoint = redact_query(url);
        let attempts = self.retry_policy.max_retries + 1;
        let started = Instant::now();
        LogContext::api_call(&self.service_name, &endpoint, "start", None);

        for attempt in 0..attempts {
            let is_last = attempt + 1 == attempts;

            // Wait for rate limiter before attempting request
            self.rate_limiter.until_ready().await;

            let mut request = self
                .client
                .request(method.clone(), url)
                .header("Accept", "application/json");
            if let Some(json_body) = &body {
                request = request.json(json_body);
            }

            let response = match request.send().await {
                Ok(response) => response,
                Err(e) => {
                    if is_retryable_error(&e) && !is_last {
                        let delay = self.retry_policy.calculate_delay(attempt, None);
                        log::warn!(
                            "{} request failed (attempt {}/{}): {}. Retrying in {:?}",
                            self.service_name,
                            attempt + 1,
                            attempts,
                            e,
                            delay
                        );
                        sleep(delay).await;
                        continue;
                    }
                    return Err(AppError::ExternalServiceError(format!(
                        "{} request failed: {}",
                        self.service_name, e
                    )));
                }
            };

            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                if is_last {
                    return Err(AppError::RateLimitError(format!(
                        "{} rate limit exceeded after {} attempts",
                        self.service_name, attempts
                    )));
                }
                let info = RateLimitInfo::from_headers(response.headers());
                let delay = self
                    .retry_policy
                    .calculate_delay(attempt, info.recommended_delay());
                log::warn!(
                    "{} rate limited (attempt {}/{}). Waiting {:?} before retry.",
                    self.service_name,
                    attempt + 1,
                    attempts,
                    delay
                );
                sleep(delay).await;
                continue;
            }

            if status.is_server_error() && !is_last {
                let delay = self.retry_policy.calculate_delay(attempt, None);
                log::warn!(
                    "{} returned {} (attempt {}/{}). Retrying in {:?}",
                    self.service_name,
                    status,
                    attempt + 1,
                    attempts,
                    delay
                );
                sleep(delay).await;
                continue;
            }

            if !status.is_success() {
                LogContext::api_call(
                    &self.service_name,
                    &endpoint,
                    status.as_str(),
                    Some(started.elapsed().as_millis() as u64),
                );
                return Err(self.status_error(status));
            }

            let text = response.text().await.map_err(|e| {
                AppError::ExternalServiceError(format!(
                    "Failed to read {} response: {}",
                    self.service_name, e
                ))
            })?;

            LogContext::api_call(
                &self.service_name,
                &endpoint,
                status.as_str(),
                Some(started.elapsed().as_millis() as u64),
            );
            return Ok(text);
        }

        Err(AppError::ExternalServiceError(format!(
            "{} request failed after {} attempts",
            self.service_name, attempts
        )))
    }

    fn status_error(&self, status: StatusCode) -> AppError {
        match status.as_u16() {
            404 => AppError::NotFound(format!("{} resource not found", self.service_name)),
            401 | 403 => AppError::Unauthorized(format!(
                "{} rejected the credentials ({})",
                self.service_name, status
            )),
            500..=599 => AppError::ExternalServiceError(format!(
                "{} returned error: {}",
                self.service_name, status
            )),
            _ => AppError::ApiError(format!("{} returned error: {}", self.service_name, status)),
        }
    }

    fn parse_json<T>(&self, text: &str) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        serde_json::from_str(text).map_err(|e| {
            let preview: String = text.chars().take(200).collect();
            AppError::SerializationError(format!(
                "Failed to parse {} response: {}. Response: {}",
                self.service_name, e, preview
            ))
        })
    }

    /// Check if a request can be made now (for testing/debugging)
    pub fn can_make_request_now(&self) -> bool {
        self.rate_limiter.check().is_ok()
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }
}

/// Strip the query string so API keys never reach the logs
fn redact_query(url: &str) -> String {
    match url.split_once('?') {
        Some((path, _)) => format!("{}?…", path),
        None => url.to_string(),
    }
}
