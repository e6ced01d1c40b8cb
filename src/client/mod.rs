//! HTTP client for the summarisation backend.
//!
//! One `POST /summarize` per call, no retries. The response is mapped to a
//! [`SummaryResult`] or a [`SummarizeError`] carrying the text to show.

mod error;
mod types;

pub use error::{SummarizeError, SERVER_MESSAGE, TRANSPORT_MESSAGE};
pub use types::{extract_detail, Sentiment, SummarizeRequest, SummarizeResponse, SummaryResult};

use reqwest::Client;
use std::time::{Duration, Instant};

use crate::config::{EndpointConfig, Variant};

/// Reachability of the backend as seen by the startup probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendHealth {
    #[default]
    Unknown,
    Online,
    Offline,
}

/// Client for the `/summarize` endpoint.
pub struct SummarizeClient {
    client: Client,
    summarize_url: String,
    health_url: String,
    variant: Variant,
}

impl SummarizeClient {
    /// Create a client for `endpoint` speaking the `variant` contract.
    pub fn new(endpoint: &EndpointConfig, variant: Variant) -> Result<Self, SummarizeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(endpoint.timeout_seconds as u64))
            .connect_timeout(Duration::from_secs(endpoint.connect_timeout_seconds as u64))
            .build()
            .map_err(SummarizeError::Build)?;

        Ok(Self {
            client,
            summarize_url: endpoint.summarize_url(),
            health_url: endpoint.health_url(),
            variant,
        })
    }

    pub fn summarize_url(&self) -> &str {
        &self.summarize_url
    }

    /// Request a summary of `request.text`.
    pub async fn summarize(
        &self,
        request: &SummarizeRequest,
    ) -> Result<SummaryResult, SummarizeError> {
        tracing::debug!(
            url = %self.summarize_url,
            max_sentences = request.max_sentences,
            text_len = request.text.len(),
            "Sending summarization request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&self.summarize_url)
            .json(request)
            .send()
            .await?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if !status.is_success() {
            // An unreadable error body is treated like one without a detail.
            let detail = match response.bytes().await {
                Ok(body) => extract_detail(&body),
                Err(_) => None,
            };

            tracing::warn!(
                status = %status,
                latency_ms,
                has_detail = detail.is_some(),
                "Summarization API error"
            );

            return Err(SummarizeError::Server {
                status: status.as_u16(),
                detail,
            });
        }

        let body = response.bytes().await?;
        let parsed: SummarizeResponse = serde_json::from_slice(&body)?;
        let result = parsed.into_result(self.variant);

        tracing::info!(
            latency_ms,
            summary_len = result.summary.len(),
            "Summarization succeeded"
        );

        Ok(result)
    }

    /// Single `GET /` to tell the user whether the backend is up.
    pub async fn probe(&self) -> BackendHealth {
        match self.client.get(&self.health_url).send().await {
            Ok(response) if response.status().is_success() => BackendHealth::Online,
            Ok(response) => {
                tracing::warn!(status = %response.status(), "Backend probe returned error status");
                BackendHealth::Offline
            }
            Err(err) => {
                tracing::warn!(error = %err, "Backend probe failed");
                BackendHealth::Offline
            }
        }
    }
}
