//! Marker trait for intents.

/// An input event or system notification that a reducer consumes.
///
/// Key presses, pastes, elapsed timers and host API calls are all intents.
pub trait Intent: Send + 'static {}
