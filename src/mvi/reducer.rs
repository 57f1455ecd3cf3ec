//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The single place where state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Consume the current state and an intent, return the next state.
    ///
    /// Must not perform side effects; queue them on the state instead.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
