//! Timing-suggestion HTTP client.
//!
//! Submits structured timing requests and returns the parsed reply.
//! One attempt per call, bounded timeout, concurrency capped by a
//! semaphore so a burst of per-POI lookups cannot flood the service.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue};
use serde::Deserialize;
use tokio::sync::Semaphore;

use super::TimingSuggester;
use super::error::SuggestError;
use super::types::{TimingReply, TimingRequest};

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 4;

/// Default per-call timeout in seconds. Timing advice is an optional
/// enhancement; a slow service must not stall the build.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the suggestion client.
#[derive(Debug, Clone)]
pub struct SuggestConfig {
    /// Base URL of the suggestion service
    pub base_url: String,
    /// Optional bearer token
    pub api_key: Option<String>,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl SuggestConfig {
    /// Create a new config for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the bearer token.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set the per-call timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Wire shape of the service reply body.
#[derive(Debug, Deserialize)]
struct SuggestResponseBody {
    /// Free text expected to contain the three labeled lines.
    text: String,
}

/// HTTP client for the timing-suggestion service.
#[derive(Debug, Clone)]
pub struct SuggestClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl SuggestClient {
    /// Create a new client with the given configuration.
    pub fn new(config: SuggestConfig) -> Result<Self, SuggestError> {
        let mut headers = HeaderMap::new();

        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(&format!("Bearer {key}")).map_err(|_| {
                SuggestError::ApiError {
                    status: 0,
                    message: "invalid API key format".to_string(),
                }
            })?;
            headers.insert(reqwest::header::AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    async fn fetch(&self, request: &TimingRequest) -> Result<String, SuggestError> {
        // Holding the permit for the whole request bounds concurrency.
        let _permit = self.semaphore.acquire().await.map_err(|_| {
            SuggestError::ApiError {
                status: 0,
                message: "client shut down".to_string(),
            }
        })?;

        let url = format!("{}/v1/timing", self.base_url);
        let response = self.http.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SuggestError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body: SuggestResponseBody = response.json().await?;
        if body.text.trim().is_empty() {
            return Err(SuggestError::EmptyResponse);
        }
        Ok(body.text)
    }
}

impl TimingSuggester for SuggestClient {
    async fn suggest_timing(&self, request: &TimingRequest) -> Result<TimingReply, SuggestError> {
        let text = self.fetch(request).await?;
        Ok(TimingReply::parse(&text))
    }
}

/// A suggester that is never available.
///
/// Used when no service is configured; the timing policy then always
/// takes the deterministic fallback path.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledSuggester;

impl TimingSuggester for DisabledSuggester {
    async fn suggest_timing(&self, _request: &TimingRequest) -> Result<TimingReply, SuggestError> {
        Err(SuggestError::NotConfigured)
    }
}
