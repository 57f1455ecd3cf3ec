//! Clipboard access for pasting codes into the field.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Failed to read clipboard text: {0}")]
    Read(#[source] arboard::Error),
}

/// Anything the field can read pasted text from.
pub trait ClipboardSource {
    fn text(&mut self) -> Result<String, ClipboardError>;
}

impl<T: ClipboardSource + ?Sized> ClipboardSource for Box<T> {
    fn text(&mut self) -> Result<String, ClipboardError> {
        (**self).text()
    }
}

/// System clipboard.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    /// Open the system clipboard. Fails on headless sessions.
    pub fn new() -> Result<Self, arboard::Error> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }
}

impl ClipboardSource for ClipboardHandler {
    fn text(&mut self) -> Result<String, ClipboardError> {
        self.clipboard.get_text().map_err(ClipboardError::Read)
    }
}

/// Fixed clipboard contents, for hosts without a system clipboard.
#[derive(Debug, Clone, Default)]
pub struct StaticClipboard(pub Option<String>);

impl ClipboardSource for StaticClipboard {
    fn text(&mut self) -> Result<String, ClipboardError> {
        self.0
            .clone()
            .ok_or(ClipboardError::Read(arboard::Error::ContentNotAvailable))
    }
}
