//! Model-View-Intent (MVI) primitives.
//!
//! ```text
//! key press / HTTP reply / timer ──→ Intent ──→ Reducer ──→ State ──→ render
//!        ↑                                                     │
//!        └─────────────────────────────────────────────────────┘
//! ```
//!
//! Reducers never perform I/O. The `App` shell runs side effects (network,
//! clipboard, timers) and feeds their outcomes back in as intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
