//! Wire types for the `/summarize` contract.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::Variant;

/// Request body sent to `POST /summarize`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummarizeRequest {
    /// Raw notes, untrimmed.
    pub text: String,
    pub max_sentences: u32,
}

/// Success body. Every field is optional on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct SummarizeResponse {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub sentiment_label: Option<String>,
    #[serde(default)]
    pub sentiment_score: Option<f64>,
}

/// Sentiment reported by the rich contract.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sentiment {
    pub label: String,
    pub score: f64,
}

/// What the UI displays after a successful request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SummaryResult {
    pub summary: String,
    /// `Some` only for the rich contract; may be empty.
    pub keywords: Option<Vec<String>>,
    pub sentiment: Option<Sentiment>,
}

impl SummarizeResponse {
    /// Convert the wire body into a result, keeping only the fields the
    /// variant's contract defines.
    pub fn into_result(self, variant: Variant) -> SummaryResult {
        let summary = self.summary.unwrap_or_default();
        if !variant.supports_insights() {
            return SummaryResult {
                summary,
                keywords: None,
                sentiment: None,
            };
        }

        let sentiment = match (self.sentiment_label, self.sentiment_score) {
            (None, None) => None,
            (label, score) => Some(Sentiment {
                label: label.unwrap_or_default(),
                score: score.unwrap_or_default(),
            }),
        };

        SummaryResult {
            summary,
            keywords: Some(self.keywords.unwrap_or_default()),
            sentiment,
        }
    }
}

/// Pull a string `detail` out of an error body, if there is one.
pub fn extract_detail(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value
        .get("detail")
        .and_then(Value::as_str)
        .map(str::to_owned)
}
