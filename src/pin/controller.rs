//! The field a host application talks to.
//!
//! `PinField` owns the cell registry, the reducer state, the timer queue
//! and the host callbacks. Every public operation dispatches one intent,
//! then drains the queued effects: view intents go to the presenter,
//! timer effects to the queue, code updates to the callbacks.

use std::time::{Duration, Instant};

use crate::clipboard::ClipboardSource;
use crate::config::PinConfig;
use crate::mvi::Reducer;

use super::cell::{CellEvent, CellKey, PinCell};
use super::error::PinError;
use super::intent::PinIntent;
use super::presenter::{CellPresenter, ViewIntent};
use super::reducer::PinReducer;
use super::state::{PinEffect, PinFieldState};
use super::timers::{Timer, TimerQueue};

/// Called with the partial or complete code.
pub type CodeCallback = Box<dyn FnMut(&str)>;
/// Called once after a reset has settled.
pub type DoneCallback = Box<dyn FnOnce()>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct PinField<P: CellPresenter> {
    state: PinFieldState,
    cells: Vec<PinCell>,
    presenter: P,
    timers: TimerQueue,
    clipboard: Option<Box<dyn ClipboardSource>>,
    on_change: Option<CodeCallback>,
    on_complete: Option<CodeCallback>,
    on_settled: Vec<DoneCallback>,
}

impl<P: CellPresenter> PinField<P> {
    /// Build the field and its cells. The field is loading until the settle
    /// delay has passed and `poll` has run.
    pub fn new(config: PinConfig, presenter: P) -> Self {
        let mut field = Self {
            state: PinFieldState::new(config),
            cells: Vec::new(),
            presenter,
            timers: TimerQueue::new(),
            clipboard: None,
            on_change: None,
            on_complete: None,
            on_settled: Vec::new(),
        };
        // Failures are already logged and shown on the error indicator.
        let _ = field.dispatch(PinIntent::Reset);
        field
    }

    pub fn on_change(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn on_complete(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    pub fn with_clipboard(mut self, clipboard: impl ClipboardSource + 'static) -> Self {
        self.clipboard = Some(Box::new(clipboard));
        self
    }

    pub fn state(&self) -> &PinFieldState {
        &self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn cells(&self) -> &[PinCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn focused(&self) -> Option<usize> {
        self.state.focus()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn has_error(&self) -> bool {
        self.state.error_visible()
    }

    /// The entered code, or an empty string while incomplete or loading.
    pub fn code(&self) -> String {
        self.state.code()
    }

    /// Route a key to the cell at `index`.
    pub fn handle_key(&mut self, index: usize, key: CellKey) -> Result<(), PinError> {
        let cell = self.cell_at(index)?;
        match cell.translate(key) {
            CellEvent::Text { index, text } => self.enter_text(index, &text),
            CellEvent::DeleteIntent { index, mode } => {
                self.dispatch(PinIntent::DeleteBackward { index, mode })
            }
            CellEvent::PasteRequested { .. } => self.paste_from_clipboard(),
            CellEvent::Rejected { index, action } => {
                tracing::debug!(index, ?action, "edit action refused by cell");
                Ok(())
            }
        }
    }

    /// Text arriving at a cell. Input at least as long as the field is
    /// treated as a pasted code when it matches the clipboard or when the
    /// one-time-code autofill channel is enabled.
    pub fn enter_text(&mut self, index: usize, raw: &str) -> Result<(), PinError> {
        self.cell_at(index)?;
        if self.is_pasted_code(raw) {
            tracing::debug!(index, "bulk input routed to paste");
            self.dispatch(PinIntent::ResignFocus)?;
            return self.paste_pin(raw);
        }
        self.dispatch(PinIntent::CharacterEntered {
            index,
            text: raw.to_string(),
        })
    }

    /// Backward delete at `index`, handled per the field's delete mode.
    pub fn delete_backward(&mut self, index: usize) -> Result<(), PinError> {
        let cell = self.cell_at(index)?;
        self.dispatch(PinIntent::DeleteBackward {
            index,
            mode: cell.delete_mode(),
        })
    }

    /// Spread `pin` over the cells from the first one. Extra characters are
    /// ignored. A cell view that cannot take its character is reported as
    /// a paste target error.
    pub fn paste_pin(&mut self, pin: &str) -> Result<(), PinError> {
        self.dispatch(PinIntent::Paste {
            text: pin.to_string(),
        })
    }

    /// Paste whatever text the clipboard holds. A missing clipboard or an
    /// unreadable one is not an error of the field.
    pub fn paste_from_clipboard(&mut self) -> Result<(), PinError> {
        let Some(clipboard) = self.clipboard.as_mut() else {
            tracing::debug!("paste requested without a clipboard");
            return Ok(());
        };
        match clipboard.text() {
            Ok(text) => self.paste_pin(&text),
            Err(err) => {
                tracing::warn!(error = %err, "clipboard paste failed");
                Ok(())
            }
        }
    }

    pub fn focus(&mut self, index: usize) -> Result<(), PinError> {
        self.cell_at(index)?;
        self.dispatch(PinIntent::Focus { index })
    }

    pub fn resign_focus(&mut self) -> Result<(), PinError> {
        self.dispatch(PinIntent::ResignFocus)
    }

    /// Empty every cell and rebuild the views from scratch. `on_done` runs
    /// once the field has settled again.
    pub fn clear_pin(&mut self, on_done: Option<DoneCallback>) -> Result<(), PinError> {
        self.on_settled.extend(on_done);
        tracing::info!(generation = self.state.generation() + 1, "clearing field");
        self.dispatch(PinIntent::Reset)
    }

    /// Same as [`PinField::clear_pin`].
    pub fn refresh_view(&mut self, on_done: Option<DoneCallback>) -> Result<(), PinError> {
        self.clear_pin(on_done)
    }

    /// Earliest time `poll` has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Fire every timer due at `now`.
    pub fn poll(&mut self, now: Instant) -> Result<(), PinError> {
        let mut first_error = None;
        for timer in self.timers.take_due(now) {
            let result = match timer {
                Timer::Mask { index, token } => self.dispatch(PinIntent::MaskElapsed { index, token }),
                Timer::Settle => {
                    let result = self.dispatch(PinIntent::Settled);
                    for done in std::mem::take(&mut self.on_settled) {
                        done();
                    }
                    result
                }
            };
            if let Err(err) = result {
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn is_pasted_code(&mut self, raw: &str) -> bool {
        let count = raw.chars().count();
        if count < 2 || count < self.state.len() {
            return false;
        }
        if self.state.config().one_time_code {
            return true;
        }
        self.clipboard
            .as_mut()
            .and_then(|clipboard| clipboard.text().ok())
            .is_some_and(|text| text == raw)
    }

    fn cell_at(&mut self, index: usize) -> Result<PinCell, PinError> {
        match self.cells.get(index) {
            Some(cell) => Ok(*cell),
            None => {
                let err = PinError::CellNotFound {
                    index,
                    length: self.cells.len(),
                };
                self.report(&err);
                Err(err)
            }
        }
    }

    fn dispatch(&mut self, intent: PinIntent) -> Result<(), PinError> {
        let pasting = matches!(intent, PinIntent::Paste { .. });
        dispatch_mvi!(self, state, PinReducer, intent);

        let mut first_error = None;
        for effect in self.state.take_effects() {
            if let Err(err) = self.perform(effect, pasting) {
                self.report(&err);
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn perform(&mut self, effect: PinEffect, pasting: bool) -> Result<(), PinError> {
        let config = self.state.config();
        match effect {
            PinEffect::View(intent) => {
                if let ViewIntent::Rebuild { placeholders } = &intent {
                    let mode = config.delete_mode;
                    self.cells = (0..placeholders.len())
                        .map(|index| PinCell::new(index, mode))
                        .collect();
                }
                if let ViewIntent::Focus { index } = intent {
                    tracing::debug!(index, "cell focused");
                }
                let index = intent.index();
                let writes_cell = matches!(
                    intent,
                    ViewIntent::Display { .. } | ViewIntent::Placeholder { .. }
                );
                self.presenter.apply(intent).map_err(|source| match index {
                    Some(index) if pasting && writes_cell => PinError::PasteTarget { index },
                    index => PinError::Presenter { index, source },
                })?;
            }
            PinEffect::ScheduleMask { index, token } => {
                let delay = Duration::from_millis(config.mask_delay_ms);
                self.timers.schedule_mask(index, token, delay);
            }
            PinEffect::CancelMask { index } => self.timers.cancel_mask(index),
            PinEffect::CancelAllMasks => self.timers.cancel_masks(),
            PinEffect::ScheduleSettle => {
                let delay = Duration::from_millis(config.settle_delay_ms);
                self.timers.schedule_settle(delay);
            }
            PinEffect::Changed(code) => {
                if let Some(callback) = self.on_change.as_mut() {
                    callback(&code);
                }
            }
            PinEffect::Completed(code) => {
                tracing::info!(length = code.chars().count(), "code complete");
                if let Some(callback) = self.on_complete.as_mut() {
                    callback(&code);
                }
            }
        }
        Ok(())
    }

    /// Log a structural error and raise the error indicator. The field
    /// keeps working.
    fn report(&mut self, err: &PinError) {
        tracing::warn!(code = err.code(), kind = err.kind(), "{}", err);
        if !self.state.error_visible() {
            let _ = self.dispatch(PinIntent::ShowError);
        }
    }
}
