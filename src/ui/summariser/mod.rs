//! Summariser form feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - form state (text, length, request, result, error, copy ack, theme)
//! - `intent.rs` - user actions and side-effect outcomes
//! - `reducer.rs` - state transitions
//! - `validation.rs` - local checks before a request is issued
//! - `length.rs` - allowed summary lengths per variant
//!
//! Rendering lives in `ui::render`; side effects in `ui::app`.

mod intent;
mod length;
mod reducer;
mod state;
mod validation;

pub use intent::SummariserIntent;
pub use length::LengthPolicy;
pub use reducer::SummariserReducer;
pub use state::{RequestState, SummariserState, SAMPLE_NOTES};
pub use validation::{validate, word_count, ValidationError};
