//! Intents for the PIN field reducer.

use crate::config::DeleteMode;
use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum PinIntent {
    /// Throw away all slots and start over in the loading state.
    Reset,
    /// The settle delay after a reset has elapsed.
    Settled,
    /// A cell received text. Usually one character, occasionally more
    /// when the platform input method batches keystrokes.
    CharacterEntered { index: usize, text: String },
    /// A cell saw a backward delete.
    DeleteBackward { index: usize, mode: DeleteMode },
    /// Distribute a code across the cells from the first one.
    Paste { text: String },
    Focus { index: usize },
    ResignFocus,
    /// A mask timer fired for a slot.
    MaskElapsed { index: usize, token: u64 },
    /// Turn the persistent error indicator on.
    ShowError,
}

impl Intent for PinIntent {}
