//! Marker trait for intents.

/// Something that happened: a user action or the outcome of a side effect
/// (HTTP response, clipboard write, expired timer).
///
/// Intents cross from worker tasks to the UI thread, hence `Send`.
pub trait Intent: Send + 'static {}
