//! Marker trait for reducer-owned state.

/// State objects are owned values: cloned to snapshot, compared to detect
/// changes, and defaultable so dispatch can `std::mem::take` them.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
