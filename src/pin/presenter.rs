//! Contract between the field and whatever draws its cells.

use thiserror::Error;

/// Instructions the field issues to its presenter. The presenter owns the
/// per-cell view handles; the field never touches layout or styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewIntent {
    /// Throw away every cell view and build `placeholders.len()` fresh ones.
    Rebuild { placeholders: Vec<Option<char>> },
    /// Show `glyph` in a cell; `None` empties it.
    Display { index: usize, glyph: Option<char> },
    Placeholder { index: usize, visible: bool },
    Focus { index: usize },
    Resign { index: usize },
    ErrorIndicator { visible: bool },
}

impl ViewIntent {
    /// Cell the intent addresses, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            ViewIntent::Display { index, .. }
            | ViewIntent::Placeholder { index, .. }
            | ViewIntent::Focus { index }
            | ViewIntent::Resign { index } => Some(*index),
            ViewIntent::Rebuild { .. } | ViewIntent::ErrorIndicator { .. } => None,
        }
    }
}

/// Structural mismatches between the field and its presenter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresenterError {
    #[error("no cell view registered at index {index}")]
    MissingView { index: usize },
    #[error("cell views have not been built")]
    NotBuilt,
}

/// Receives view intents. Implementations map indices to their own cell
/// handles and report mismatches instead of panicking.
pub trait CellPresenter {
    fn apply(&mut self, intent: ViewIntent) -> Result<(), PresenterError>;
}
