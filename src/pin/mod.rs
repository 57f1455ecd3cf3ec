//! Segmented PIN field core.
//!
//! Toolkit-neutral: keys come in as [`CellKey`]s, view updates go out as
//! [`ViewIntent`]s through a [`CellPresenter`].
//!
//! - `cell.rs` - single-character input cell
//! - `state.rs` - slots, focus, loading and queued effects
//! - `intent.rs` - entry, delete, paste, focus and timer events
//! - `reducer.rs` - focus routing and input merging (pure)
//! - `timers.rs` - mask and settle deadlines
//! - `controller.rs` - `PinField`, the host-facing API

mod cell;
mod controller;
mod error;
mod intent;
mod presenter;
mod reducer;
mod state;
mod timers;

pub use cell::{CellEvent, CellKey, EditAction, PinCell};
pub use controller::{CodeCallback, DoneCallback, PinField};
pub use error::PinError;
pub use intent::PinIntent;
pub use presenter::{CellPresenter, PresenterError, ViewIntent};
pub use reducer::PinReducer;
pub use state::{PinEffect, PinFieldState, Slot};
pub use timers::{Timer, TimerQueue};
