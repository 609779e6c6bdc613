use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::retry::{is_retryable_status, with_retry, RetryConfig};

const STACK_API_BASE: &str = "https://api.stackoverflow.com/1.1";

#[derive(Error, Debug)]
pub enum StackExchangeError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    ParseError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StackExchangeError>;

/// Client for the Stack Exchange questions API.
///
/// Anonymous and read-only; the questions feed needs no auth token.
pub struct StackExchangeClient {
    client: reqwest::Client,
    base_url: String,
    retry_config: RetryConfig,
}

impl StackExchangeClient {
    pub fn new() -> Self {
        Self::with_base_url(STACK_API_BASE.to_string())
    }

    /// For a non-default API endpoint (other Stack Exchange sites, test servers)
    pub fn with_base_url(base_url: String) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("stacknotify/0.1.0"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url,
            retry_config: RetryConfig::default(),
        }
    }

    /// Create client with custom retry configuration
    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_config = retry_config;
        self
    }

    /// Fetch the most recently created questions, newest first.
    ///
    /// The API sorts by creation time descending; callers rely on that
    /// ordering and do not re-sort.
    pub async fn recent_questions(&self, page_size: u32) -> Result<Vec<ApiQuestion>> {
        let url = format!("{}/questions", self.base_url);

        with_retry(&self.retry_config, || async {
            let response = self
                .client
                .get(&url)
                .query(&[
                    ("pagesize", page_size.to_string().as_str()),
                    ("sort", "creation"),
                ])
                .send()
                .await?;

            if response.status() == 404 {
                return Err(StackExchangeError::NotFound(url.clone()));
            }

            if response.status() == 429 {
                return Err(StackExchangeError::RateLimitExceeded);
            }

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                if is_retryable_status(status) {
                    tracing::warn!("transient API failure ({}), will retry", status);
                }
                return Err(StackExchangeError::RequestFailed(format!(
                    "Status {}: {}",
                    status, body
                )));
            }

            let page: QuestionsEnvelope = response.json().await?;
            Ok(page.questions)
        })
        .await
    }
}

impl Default for StackExchangeClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Response envelope for the questions endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
struct QuestionsEnvelope {
    questions: Vec<ApiQuestion>,
}

/// A question as the API serves it.
///
/// Identity fields are required and fail deserialization when missing;
/// vote and answer counts are display enrichment and default to zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiQuestion {
    pub question_id: u64,
    pub title: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub up_vote_count: i64,
    #[serde(default)]
    pub down_vote_count: i64,
    #[serde(default)]
    pub answer_count: u32,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub creation_date: DateTime<Utc>,
}
