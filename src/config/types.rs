use serde::{Deserialize, Serialize};

use crate::ui::summariser::LengthPolicy;
use crate::ui::theme::ThemeMode;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Location and timeouts of the summarisation backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Base URL of the backend (e.g., "https://notes.example.com").
    /// The `/summarize` path is appended by the client.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 60).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 10).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Which request/response contract this deployment speaks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryConfig {
    #[serde(default)]
    pub variant: Variant,
    /// Initial summary length. Falls back to the variant's default when unset.
    #[serde(default)]
    pub default_length: Option<u32>,
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    /// How long the "Copied!" acknowledgment stays visible (default: 1500).
    #[serde(default = "default_copy_ack_millis")]
    pub copy_ack_millis: u64,
    /// Redraw/animation tick interval (default: 250).
    #[serde(default = "default_tick_rate_millis")]
    pub tick_rate_millis: u64,
}

/// The two shipped summariser contracts.
///
/// `Strict` rejects short notes and offers a fixed set of summary lengths.
/// `Rich` accepts any non-empty text, takes a free length in 1..=7 and also
/// renders keywords and sentiment.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Strict,
    Rich,
}

/// Minimum word count accepted by the strict variant.
pub const STRICT_MIN_WORDS: usize = 30;

/// Summary lengths offered by the strict variant.
pub const STRICT_LENGTHS: &[u32] = &[3, 5, 8, 12];

impl Variant {
    /// Minimum number of words a submission must have, if any.
    pub fn min_words(self) -> Option<usize> {
        match self {
            Variant::Strict => Some(STRICT_MIN_WORDS),
            Variant::Rich => None,
        }
    }

    pub fn length_policy(self) -> LengthPolicy {
        match self {
            Variant::Strict => LengthPolicy::Choices(STRICT_LENGTHS),
            Variant::Rich => LengthPolicy::Range { min: 1, max: 7 },
        }
    }

    pub fn default_length(self) -> u32 {
        match self {
            Variant::Strict => 5,
            Variant::Rich => 3,
        }
    }

    /// Whether keywords and sentiment are part of the response contract.
    pub fn supports_insights(self) -> bool {
        matches!(self, Variant::Rich)
    }

    /// Whether the "fill sample" convenience is offered.
    pub fn supports_sample(self) -> bool {
        matches!(self, Variant::Strict)
    }
}

impl SummaryConfig {
    /// Length the form starts with.
    pub fn initial_length(&self) -> u32 {
        self.default_length
            .unwrap_or_else(|| self.variant.default_length())
    }
}

impl EndpointConfig {
    /// Full URL of the summarisation route.
    pub fn summarize_url(&self) -> String {
        format!("{}/summarize", self.base_url.trim_end_matches('/'))
    }

    /// URL probed at startup to check that the backend is up.
    pub fn health_url(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout() -> u32 {
    60
}

fn default_connect_timeout() -> u32 {
    10
}

fn default_copy_ack_millis() -> u64 {
    1500
}

fn default_tick_rate_millis() -> u64 {
    250
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            copy_ack_millis: default_copy_ack_millis(),
            tick_rate_millis: default_tick_rate_millis(),
        }
    }
}
