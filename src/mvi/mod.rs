//! Model-View-Intent primitives shared by the field's state machines.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ effects ──→ presenter / timers / callbacks
//!    ↑                                                    │
//!    └────────────────────────────────────────────────────┘
//! ```
//!
//! Reducers stay pure. Anything observable outside the state (view updates,
//! timer scheduling, host callbacks) is queued on the state as data and drained
//! by the caller after dispatch.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
