//! Marker trait for UI state.

/// A self-contained snapshot of everything a view renders.
///
/// `Default` lets the owner `std::mem::take` the state into a reducer;
/// `PartialEq` lets callers detect whether an intent changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
