//! Wikipedia-backed term explanations
//!
//! The front-end shows short explanations of ML terms next to the
//! configuration form; summaries come from the Wikipedia REST API.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::domain::DomainError;

const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org";

/// Source of term explanations. Behind a trait so handlers can be tested
/// against a stub.
#[async_trait]
pub trait ExplanationProvider: Send + Sync {
    /// Short summary for a term, or `None` when no page exists.
    async fn summary(&self, term: &str) -> Result<Option<String>, DomainError>;
}

/// Client for the Wikipedia page-summary endpoint.
pub struct ExplanationClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    #[serde(default)]
    extract: Option<String>,
}

impl ExplanationClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for ExplanationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExplanationProvider for ExplanationClient {
    async fn summary(&self, term: &str) -> Result<Option<String>, DomainError> {
        let url = format!("{}/api/rest_v1/page/summary/{}", self.base_url, term);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::internal(format!("Explanation lookup failed: {e}")))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(DomainError::internal(format!(
                "Explanation lookup returned {}",
                response.status()
            )));
        }

        let summary: SummaryResponse = response
            .json()
            .await
            .map_err(|e| DomainError::internal(format!("Malformed summary response: {e}")))?;

        Ok(summary.extract.filter(|extract| !extract.is_empty()))
    }
}
