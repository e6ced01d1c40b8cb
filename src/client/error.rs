//! Error types for the summarisation client.

use thiserror::Error;

/// Shown when the backend could not be reached or answered with garbage.
pub const TRANSPORT_MESSAGE: &str = "Something went wrong. Is the backend running?";

/// Shown for a non-success status without a usable `detail`.
pub const SERVER_MESSAGE: &str = "Server error, please try again.";

/// Errors that can occur while requesting a summary.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// Connection, timeout or body transfer failure.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Server returned status {status}")]
    Server { status: u16, detail: Option<String> },

    /// A success response whose body is not the expected JSON.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SummarizeError {
    /// Text shown to the user in the error slot.
    pub fn user_message(&self) -> String {
        match self {
            SummarizeError::Server {
                detail: Some(detail),
                ..
            } => detail.clone(),
            SummarizeError::Server { detail: None, .. } => SERVER_MESSAGE.to_string(),
            SummarizeError::Build(_)
            | SummarizeError::Transport(_)
            | SummarizeError::Decode(_) => TRANSPORT_MESSAGE.to_string(),
        }
    }
}
