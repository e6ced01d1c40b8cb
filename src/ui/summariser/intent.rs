//! Intents for the summariser form.

use crate::client::SummaryResult;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SummariserIntent {
    /// Append a typed character.
    InsertChar(char),
    InsertNewline,
    /// Remove the last character.
    DeleteBackward,
    /// Bracketed paste from the terminal.
    Paste(String),

    /// Step the summary length up or down within the variant's policy.
    CycleLength { longer: bool },
    SetLength(u32),

    /// Validate and, if valid, move to `InFlight`.
    Submit,
    /// Response for `request_id` arrived.
    RequestSucceeded {
        request_id: u64,
        result: SummaryResult,
    },
    /// Request `request_id` failed.
    RequestFailed { request_id: u64, message: String },

    Clear,
    FillSample,

    CopySucceeded,
    CopyFailed { message: String },
    /// Revert timer for copy `generation` fired.
    CopyAckExpired { generation: u64 },

    ToggleTheme,

    /// Move the summary panel by `rows` (negative scrolls up).
    ScrollSummary { rows: i32 },
    /// The last draw found the summary `max_scroll` rows taller than its panel.
    SummaryViewport { max_scroll: u16 },

    /// Animation tick (spinner).
    Tick,
}

impl Intent for SummariserIntent {}
