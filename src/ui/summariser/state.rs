//! State of the summariser form.

use crate::client::SummaryResult;
use crate::config::Variant;
use crate::ui::mvi::UiState;
use crate::ui::theme::ThemeMode;

use super::length::LengthPolicy;
use super::validation::word_count;

/// Paragraph inserted by "fill sample".
pub const SAMPLE_NOTES: &str = "Artificial Intelligence (AI) is transforming many industries, including healthcare, education, and finance. \
In healthcare, AI helps doctors analyse scans and detect diseases earlier. In education, AI tools support personalised learning \
by recommending content based on each student's pace. However, AI also raises important questions about privacy, bias, and job \
replacement. Understanding both the benefits and risks of AI is essential so that we can use this technology responsibly and \
build systems that are fair, transparent, and helpful for everyone.";

/// Lifecycle of the (single) outstanding request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    /// Waiting for the response to request `request_id`.
    InFlight { request_id: u64 },
}

impl RequestState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight { .. })
    }
}

/// Everything the summariser view renders.
#[derive(Debug, Clone, PartialEq)]
pub struct SummariserState {
    pub variant: Variant,
    /// Raw notes as typed or pasted.
    pub text: String,
    /// Requested `max_sentences`, always allowed by the variant's policy.
    pub length: u32,
    pub request: RequestState,
    pub result: Option<SummaryResult>,
    pub error: Option<String>,
    /// "Copied!" acknowledgment.
    pub copied: bool,
    pub theme: ThemeMode,
    /// Spinner frame while a request is in flight.
    pub animation_tick: u8,
    pub(super) last_request_id: u64,
    pub(super) copy_generation: u64,
    /// First visible row of the summary panel, never above `summary_scroll_max`.
    pub(super) summary_scroll: u16,
    /// Rows the summary overflows its panel by, as of the last draw.
    pub(super) summary_scroll_max: u16,
}

impl UiState for SummariserState {}

impl Default for SummariserState {
    fn default() -> Self {
        let variant = Variant::default();
        Self::new(variant, variant.default_length(), ThemeMode::default())
    }
}

impl SummariserState {
    /// Empty form. `length` is snapped into the variant's policy.
    pub fn new(variant: Variant, length: u32, theme: ThemeMode) -> Self {
        Self {
            variant,
            text: String::new(),
            length: variant.length_policy().snap(length),
            request: RequestState::Idle,
            result: None,
            error: None,
            copied: false,
            theme,
            animation_tick: 0,
            last_request_id: 0,
            copy_generation: 0,
            summary_scroll: 0,
            summary_scroll_max: 0,
        }
    }

    pub fn word_count(&self) -> usize {
        word_count(&self.text)
    }

    /// Encouragement shown next to the word count.
    pub fn word_count_hint(&self) -> &'static str {
        match self.word_count() {
            0 => "Tip: paste a paragraph or two.",
            n if n < 40 => "More text = better summary.",
            n if n > 600 => "Very long - I'll truncate a bit.",
            _ => "Nice length for a summary.",
        }
    }

    pub fn length_policy(&self) -> LengthPolicy {
        self.variant.length_policy()
    }

    pub fn length_label(&self) -> String {
        self.length_policy().label(self.length)
    }

    pub fn is_in_flight(&self) -> bool {
        self.request.is_in_flight()
    }

    /// The summary text, only when there is something to copy.
    pub fn summary(&self) -> Option<&str> {
        self.result
            .as_ref()
            .map(|result| result.summary.as_str())
            .filter(|summary| !summary.is_empty())
    }

    /// Id of the most recently issued request (0 before the first).
    pub fn last_request_id(&self) -> u64 {
        self.last_request_id
    }

    /// Bumped on every successful copy; identifies the current revert timer.
    pub fn copy_generation(&self) -> u64 {
        self.copy_generation
    }

    pub fn summary_scroll(&self) -> u16 {
        self.summary_scroll
    }

    /// Reset the slots that a new submission or a reset replaces.
    pub(super) fn clear_outcome(&mut self) {
        self.result = None;
        self.error = None;
        self.copied = false;
        self.summary_scroll = 0;
    }
}
