//! State of a PIN field.

use crate::config::PinConfig;
use crate::mvi::UiState;
use crate::pin::presenter::ViewIntent;

/// Storage for one cell's character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Slot {
    /// `None` means unset. A stored space is `Some(' ')`: filled but blank.
    pub value: Option<char>,
    /// Whether the view currently shows the mask glyph instead of `value`.
    pub masked: bool,
    /// Bumped on every write to the slot; a mask timer only lands if it
    /// carries the current token.
    pub mask_token: u64,
}

impl Slot {
    pub fn is_filled(&self) -> bool {
        self.value.is_some()
    }

    /// Filled with a non-whitespace character.
    pub fn is_solid(&self) -> bool {
        matches!(self.value, Some(c) if !c.is_whitespace())
    }
}

/// Side effects queued by the reducer, drained by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum PinEffect {
    View(ViewIntent),
    ScheduleMask { index: usize, token: u64 },
    CancelMask { index: usize },
    CancelAllMasks,
    ScheduleSettle,
    Changed(String),
    Completed(String),
}

/// Slots, focus and lifecycle of a field.
///
/// Built by the `Reset` intent; a default state has no cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PinFieldState {
    pub(crate) config: PinConfig,
    pub(crate) slots: Vec<Slot>,
    pub(crate) focus: Option<usize>,
    pub(crate) loading: bool,
    pub(crate) error_visible: bool,
    pub(crate) generation: u64,
    /// Last mask token handed out. Tokens are never reused, even across
    /// resets.
    pub(crate) last_token: u64,
    /// A slot changed since the last broadcast.
    pub(crate) dirty: bool,
    pub(crate) effects: Vec<PinEffect>,
}

impl UiState for PinFieldState {}

impl PinFieldState {
    /// An unbuilt state carrying `config`. Dispatch `Reset` to create cells.
    pub fn new(config: PinConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &PinConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error_visible(&self) -> bool {
        self.error_visible
    }

    /// Number of resets this state has gone through.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Filled slots concatenated in cell order, complete or not.
    pub fn assembled(&self) -> String {
        self.slots.iter().filter_map(|slot| slot.value).collect()
    }

    /// The code once every cell holds a non-blank character; empty
    /// otherwise, and always empty while loading.
    pub fn code(&self) -> String {
        if self.loading || self.slots.len() != self.config.length {
            return String::new();
        }
        if !self.slots.iter().all(Slot::is_solid) {
            return String::new();
        }
        self.assembled()
    }

    /// Glyph the view should show for a slot.
    pub fn display_glyph(&self, index: usize) -> Option<char> {
        let slot = self.slots.get(index)?;
        if slot.masked {
            slot.value.map(|_| self.config.mask_char)
        } else {
            slot.value
        }
    }

    /// Index of the first unfilled cell.
    pub fn first_unfilled(&self) -> Option<usize> {
        self.slots.iter().position(|slot| !slot.is_filled())
    }

    pub(crate) fn take_effects(&mut self) -> Vec<PinEffect> {
        std::mem::take(&mut self.effects)
    }
}
