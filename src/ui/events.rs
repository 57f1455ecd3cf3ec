use crossterm::event::{Event, KeyEvent};

/// Terminal events the host reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    /// Bracketed paste: the whole chunk arrives at once.
    Paste(String),
    /// The next draw picks up the new size.
    Resize,
}

impl AppEvent {
    /// Focus and mouse events are dropped.
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) => Some(Self::Key(key)),
            Event::Paste(text) => Some(Self::Paste(text)),
            Event::Resize(..) => Some(Self::Resize),
            Event::FocusGained | Event::FocusLost | Event::Mouse(_) => None,
        }
    }
}
