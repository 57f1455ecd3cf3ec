//! A single-character input cell.
//!
//! A cell does not navigate on its own. It turns keys into events for the
//! field: typed text, a delete intent tagged with its index and delete
//! mode, or a paste request. Clipboard edit actions other than paste are
//! refused so an entered secret cannot be copied out of the field.

use crate::config::DeleteMode;

/// Clipboard/selection edit actions a host toolkit may ask a cell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Cut,
    Copy,
    Paste,
    Delete,
    Select,
    SelectAll,
}

/// Toolkit-neutral key input addressed to a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellKey {
    Char(char),
    /// Raw text delivered in one edit (input methods, autofill).
    Text(String),
    Backspace,
    Edit(EditAction),
}

/// What the field should do with a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellEvent {
    Text { index: usize, text: String },
    DeleteIntent { index: usize, mode: DeleteMode },
    PasteRequested { index: usize },
    Rejected { index: usize, action: EditAction },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinCell {
    index: usize,
    delete_mode: DeleteMode,
}

impl PinCell {
    pub fn new(index: usize, delete_mode: DeleteMode) -> Self {
        Self { index, delete_mode }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn delete_mode(&self) -> DeleteMode {
        self.delete_mode
    }

    pub fn can_perform(&self, action: EditAction) -> bool {
        matches!(action, EditAction::Paste)
    }

    pub fn translate(&self, key: CellKey) -> CellEvent {
        let index = self.index;
        match key {
            CellKey::Char(ch) => CellEvent::Text {
                index,
                text: ch.to_string(),
            },
            CellKey::Text(text) => CellEvent::Text { index, text },
            CellKey::Backspace => CellEvent::DeleteIntent {
                index,
                mode: self.delete_mode,
            },
            CellKey::Edit(action) if self.can_perform(action) => {
                CellEvent::PasteRequested { index }
            }
            CellKey::Edit(action) => CellEvent::Rejected { index, action },
        }
    }
}
