use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use crate::clipboard::ClipboardSource;
use crate::config::Config;
use crate::pin::{CellKey, EditAction, PinError, PinField};
use crate::ui::theme::Theme;
use crate::ui::view::PinView;

/// What the callbacks have reported so far. Only lengths are kept; the
/// code itself stays inside the field.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub entered: usize,
    pub completed: bool,
}

pub struct App {
    field: PinField<PinView>,
    theme: Theme,
    progress: Rc<RefCell<Progress>>,
    should_quit: bool,
    submitted: Option<String>,
    last_error: Option<PinError>,
}

impl App {
    pub fn new(config: &Config, clipboard: Option<Box<dyn ClipboardSource>>) -> Self {
        let progress = Rc::new(RefCell::new(Progress::default()));
        let on_change = Rc::clone(&progress);
        let on_complete = Rc::clone(&progress);

        let mut field = PinField::new(config.pin.clone(), PinView::new())
            .on_change(move |code| {
                *on_change.borrow_mut() = Progress {
                    entered: code.chars().count(),
                    completed: false,
                };
            })
            .on_complete(move |_| on_complete.borrow_mut().completed = true);
        if let Some(clipboard) = clipboard {
            field = field.with_clipboard(clipboard);
        }

        Self {
            field,
            theme: Theme::from_config(&config.style),
            progress,
            should_quit: false,
            submitted: None,
            last_error: None,
        }
    }

    pub fn field(&self) -> &PinField<PinView> {
        &self.field
    }

    pub fn view(&self) -> &PinView {
        self.field.presenter()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn progress(&self) -> Progress {
        *self.progress.borrow()
    }

    pub fn last_error(&self) -> Option<&PinError> {
        self.last_error.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Code accepted with Enter, if any.
    pub fn submitted(&self) -> Option<&str> {
        self.submitted.as_deref()
    }

    pub fn into_submitted(self) -> Option<String> {
        self.submitted
    }

    /// Cell that receives typed characters: the focused one, else the
    /// first empty one.
    pub fn entry_target(&self) -> Option<usize> {
        self.field
            .focused()
            .or_else(|| self.field.state().first_unfilled())
    }

    /// Cell that receives a backspace: the focused one, else the last
    /// filled one.
    pub fn delete_target(&self) -> Option<usize> {
        self.field.focused().or_else(|| {
            self.field
                .state()
                .slots()
                .iter()
                .rposition(|slot| slot.is_filled())
        })
    }

    pub fn type_char(&mut self, ch: char) {
        if let Some(index) = self.entry_target() {
            let result = self.field.handle_key(index, CellKey::Char(ch));
            self.record(result);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(index) = self.delete_target() {
            let result = self.field.handle_key(index, CellKey::Backspace);
            self.record(result);
        }
    }

    /// Clipboard edit action on the target cell. Only paste does anything.
    pub fn edit(&mut self, action: EditAction) {
        let index = self.entry_target().unwrap_or(0);
        let result = self.field.handle_key(index, CellKey::Edit(action));
        self.record(result);
    }

    /// Bracketed paste from the terminal: the autofill channel.
    pub fn on_paste(&mut self, text: &str) {
        let index = self.entry_target().unwrap_or(0);
        let result = self.field.handle_key(index, CellKey::Text(text.to_string()));
        self.record(result);
    }

    /// Move focus by `delta` cells, clamped to the field.
    pub fn move_focus(&mut self, delta: isize) {
        let len = self.field.len();
        if len == 0 {
            return;
        }
        let current = self.field.focused().or(self.entry_target()).unwrap_or(0);
        let target = current.saturating_add_signed(delta).min(len - 1);
        self.focus(target);
    }

    pub fn focus(&mut self, index: usize) {
        let result = self.field.focus(index);
        self.record(result);
    }

    pub fn focus_last(&mut self) {
        if let Some(last) = self.field.len().checked_sub(1) {
            self.focus(last);
        }
    }

    pub fn clear(&mut self) {
        let progress = Rc::clone(&self.progress);
        let result = self.field.clear_pin(Some(Box::new(move || {
            *progress.borrow_mut() = Progress::default();
        })));
        self.last_error = None;
        self.record(result);
    }

    /// Accept the code and quit, if it is complete.
    pub fn submit(&mut self) -> bool {
        let code = self.field.code();
        if code.is_empty() {
            return false;
        }
        self.submitted = Some(code);
        self.should_quit = true;
        true
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.field.next_deadline()
    }

    pub fn on_tick(&mut self, now: Instant) {
        let result = self.field.poll(now);
        self.record(result);
    }

    fn record(&mut self, result: Result<(), PinError>) {
        if let Err(err) = result {
            self.last_error = Some(err);
        }
    }
}
