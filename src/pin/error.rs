use thiserror::Error;

use crate::pin::presenter::PresenterError;

/// Non-fatal errors reported by a field. The field stays usable after any
/// of them; the error indicator stays on until the next reset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinError {
    #[error("cell {index} does not exist in a field of {length} cells")]
    CellNotFound { index: usize, length: usize },

    #[error("presenter rejected an update for cell {index:?}: {source}")]
    Presenter {
        index: Option<usize>,
        #[source]
        source: PresenterError,
    },

    #[error("paste target cell {index} is unavailable")]
    PasteTarget { index: usize },
}

impl PinError {
    /// Stable code used in logs and on the error indicator.
    pub fn code(&self) -> &'static str {
        match self {
            PinError::CellNotFound { .. } => "ERR-101",
            PinError::Presenter {
                source: PresenterError::NotBuilt,
                ..
            } => "ERR-102",
            PinError::PasteTarget { .. } => "ERR-103",
            PinError::Presenter {
                source: PresenterError::MissingView { .. },
                ..
            } => "ERR-104",
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            PinError::CellNotFound { .. }
            | PinError::Presenter {
                source: PresenterError::MissingView { .. },
                ..
            } => "Tag Mismatch",
            PinError::Presenter { .. } | PinError::PasteTarget { .. } => "Type Mismatch",
        }
    }
}
