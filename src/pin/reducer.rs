//! Reducer for the PIN field.
//!
//! All focus routing and input merging lives here. The reducer never calls
//! out: view updates, timers and host callbacks are queued as `PinEffect`s
//! and performed by `PinField` after dispatch.

use crate::config::DeleteMode;
use crate::mvi::Reducer;
use crate::pin::presenter::ViewIntent;

use super::intent::PinIntent;
use super::state::{PinEffect, PinFieldState, Slot};

pub struct PinReducer;

impl Reducer for PinReducer {
    type State = PinFieldState;
    type Intent = PinIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PinIntent::Reset => reset(&mut state),
            PinIntent::Settled => settle(&mut state),
            PinIntent::CharacterEntered { index, text } => enter(&mut state, index, &text),
            PinIntent::DeleteBackward { index, mode } => delete_backward(&mut state, index, mode),
            PinIntent::Paste { text } => paste(&mut state, &text),
            PinIntent::Focus { index } => {
                if index < state.len() {
                    focus_cell(&mut state, index);
                }
            }
            PinIntent::ResignFocus => resign(&mut state),
            PinIntent::MaskElapsed { index, token } => mask(&mut state, index, token),
            PinIntent::ShowError => {
                if !state.error_visible {
                    state.error_visible = true;
                    push_view(&mut state, ViewIntent::ErrorIndicator { visible: true });
                }
            }
        }
        commit(&mut state);
        state
    }
}

fn reset(state: &mut PinFieldState) {
    let length = state.config.length;
    state.slots = vec![Slot::default(); length];
    state.focus = None;
    state.loading = true;
    state.dirty = false;
    state.generation += 1;

    let placeholders = (0..length)
        .map(|index| state.config.placeholder_for(index))
        .collect();
    state.effects.push(PinEffect::CancelAllMasks);
    push_view(state, ViewIntent::Rebuild { placeholders });
    if state.error_visible {
        state.error_visible = false;
        push_view(state, ViewIntent::ErrorIndicator { visible: false });
    }
    state.effects.push(PinEffect::ScheduleSettle);
}

fn settle(state: &mut PinFieldState) {
    if !state.loading {
        return;
    }
    state.loading = false;
    if let Some(index) = state.config.initial_focus {
        if index < state.len() {
            focus_cell(state, index);
        }
    }
}

fn enter(state: &mut PinFieldState, index: usize, text: &str) {
    if index >= state.len() {
        return;
    }
    // Keep only the most recent character of a batched edit.
    let Some(ch) = text.chars().last() else {
        return;
    };
    if !state.config.allows_whitespace && ch.is_whitespace() {
        return;
    }

    write(state, index, ch);

    if index + 1 < state.len() {
        focus_cell(state, index + 1);
    } else if index > 0 || state.config.dismiss_on_empty_first {
        resign(state);
    }
}

fn delete_backward(state: &mut PinFieldState, index: usize, mode: DeleteMode) {
    if index >= state.len() {
        return;
    }
    let previous = index.checked_sub(1);

    match mode {
        DeleteMode::DeleteCurrentAndMoveToPrevious => {
            clear_slot(state, index);
            if let Some(previous) = previous {
                focus_cell(state, previous);
            }
        }
        DeleteMode::DeleteCurrent => {
            if state.slots[index].is_filled() {
                clear_slot(state, index);
            } else if let Some(previous) = previous {
                focus_cell(state, previous);
                clear_slot(state, previous);
            }
        }
        DeleteMode::MoveToPreviousAndDelete => match previous {
            Some(previous) => {
                focus_cell(state, previous);
                clear_slot(state, previous);
            }
            None => clear_slot(state, index),
        },
    }
}

fn paste(state: &mut PinFieldState, text: &str) {
    let length = state.len();
    if length == 0 {
        return;
    }

    for index in 0..length {
        clear_slot(state, index);
    }

    let mut written = 0;
    for (index, ch) in text.chars().take(length).enumerate() {
        write(state, index, ch);
        broadcast(state);
        written = index + 1;
    }

    if written < length {
        focus_cell(state, written);
    } else {
        resign(state);
    }
}

fn mask(state: &mut PinFieldState, index: usize, token: u64) {
    if !state.config.secure_text {
        return;
    }
    let Some(slot) = state.slots.get_mut(index) else {
        return;
    };
    if slot.mask_token != token || !slot.is_filled() || slot.masked {
        return;
    }
    slot.masked = true;
    let glyph = state.display_glyph(index);
    push_view(state, ViewIntent::Display { index, glyph });
}

fn write(state: &mut PinFieldState, index: usize, ch: char) {
    state.last_token += 1;
    let token = state.last_token;
    let slot = &mut state.slots[index];
    slot.value = Some(ch);
    slot.masked = false;
    slot.mask_token = token;
    state.dirty = true;

    push_view(
        state,
        ViewIntent::Display {
            index,
            glyph: Some(ch),
        },
    );
    push_view(
        state,
        ViewIntent::Placeholder {
            index,
            visible: false,
        },
    );
    if state.config.secure_text {
        state.effects.push(PinEffect::ScheduleMask { index, token });
    }
}

fn clear_slot(state: &mut PinFieldState, index: usize) {
    state.last_token += 1;
    let token = state.last_token;
    let Some(slot) = state.slots.get_mut(index) else {
        return;
    };
    if !slot.is_filled() {
        return;
    }
    slot.value = None;
    slot.masked = false;
    slot.mask_token = token;
    state.dirty = true;

    state.effects.push(PinEffect::CancelMask { index });
    push_view(state, ViewIntent::Display { index, glyph: None });
    push_view(
        state,
        ViewIntent::Placeholder {
            index,
            visible: true,
        },
    );
}

fn focus_cell(state: &mut PinFieldState, index: usize) {
    if state.focus == Some(index) {
        return;
    }
    if let Some(previous) = state.focus.replace(index) {
        push_view(state, ViewIntent::Resign { index: previous });
    }
    push_view(state, ViewIntent::Focus { index });

    if state.config.delete_mode == DeleteMode::MoveToPreviousAndDelete {
        clear_slot(state, index);
    }
}

fn resign(state: &mut PinFieldState) {
    if let Some(index) = state.focus.take() {
        push_view(state, ViewIntent::Resign { index });
    }
}

fn commit(state: &mut PinFieldState) {
    if state.dirty {
        broadcast(state);
    }
}

fn broadcast(state: &mut PinFieldState) {
    state.dirty = false;
    let assembled = state.assembled();
    state.effects.push(PinEffect::Changed(assembled));
    let code = state.code();
    if !code.is_empty() {
        state.effects.push(PinEffect::Completed(code));
    }
}

fn push_view(state: &mut PinFieldState, intent: ViewIntent) {
    state.effects.push(PinEffect::View(intent));
}
