//! Shared helpers for driving a field through its public API.

#![allow(dead_code, unused_imports)]

use pinfield::config::{DeleteMode, PinConfig};
use pinfield::pin::{CellPresenter, PinField, PresenterError, ViewIntent};
use pinfield::ui::view::PinView;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Everything the host callbacks received, in order.
#[derive(Debug, Default)]
pub struct Recorder {
    pub changes: Vec<String>,
    pub completions: Vec<String>,
}

pub type SharedRecorder = Rc<RefCell<Recorder>>;

pub fn config(length: usize) -> PinConfig {
    PinConfig::with_length(length)
}

pub fn config_with_mode(length: usize, mode: DeleteMode) -> PinConfig {
    PinConfig {
        delete_mode: mode,
        ..PinConfig::with_length(length)
    }
}

/// A field wired to a recorder, built with `presenter`.
pub fn recorded<P: CellPresenter>(config: PinConfig, presenter: P) -> (PinField<P>, SharedRecorder) {
    let recorder = SharedRecorder::default();
    let changes = Rc::clone(&recorder);
    let completions = Rc::clone(&recorder);
    let field = PinField::new(config, presenter)
        .on_change(move |code| changes.borrow_mut().changes.push(code.to_string()))
        .on_complete(move |code| completions.borrow_mut().completions.push(code.to_string()));
    (field, recorder)
}

/// A settled field on the terminal view, with a recorder.
pub fn ready(config: PinConfig) -> (PinField<PinView>, SharedRecorder) {
    let (mut field, recorder) = recorded(config, PinView::new());
    settle(&mut field);
    (field, recorder)
}

/// Fire the settle timer.
pub fn settle<P: CellPresenter>(field: &mut PinField<P>) {
    field
        .poll(later(Duration::from_secs(1)))
        .expect("settle should not fail");
}

pub fn later(delay: Duration) -> Instant {
    Instant::now() + delay
}

pub fn type_text<P: CellPresenter>(field: &mut PinField<P>, start: usize, text: &str) {
    for (offset, ch) in text.chars().enumerate() {
        field
            .enter_text(start + offset, &ch.to_string())
            .expect("entry should succeed");
    }
}

pub fn values<P: CellPresenter>(field: &PinField<P>) -> Vec<Option<char>> {
    field.state().slots().iter().map(|slot| slot.value).collect()
}

/// Presenter that refuses updates for one cell.
#[derive(Default)]
pub struct BrokenCell {
    pub inner: PinView,
    pub broken: usize,
}

impl CellPresenter for BrokenCell {
    fn apply(&mut self, intent: ViewIntent) -> Result<(), PresenterError> {
        match intent {
            ViewIntent::Display { index, .. } if index == self.broken => {
                Err(PresenterError::MissingView { index })
            }
            other => self.inner.apply(other),
        }
    }
}
