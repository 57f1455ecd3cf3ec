//! Cell view handles for the terminal presenter.
//!
//! `PinView` only stores what the field tells it; rendering reads these
//! handles and nothing else.

use crate::pin::{CellPresenter, PresenterError, ViewIntent};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellView {
    /// Real character or mask glyph, whichever the field last sent.
    pub glyph: Option<char>,
    pub placeholder: Option<char>,
    pub placeholder_visible: bool,
    pub focused: bool,
}

#[derive(Debug, Default)]
pub struct PinView {
    cells: Option<Vec<CellView>>,
    error_visible: bool,
    builds: u64,
}

impl PinView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[CellView] {
        self.cells.as_deref().unwrap_or(&[])
    }

    pub fn cell(&self, index: usize) -> Option<&CellView> {
        self.cells().get(index)
    }

    pub fn error_visible(&self) -> bool {
        self.error_visible
    }

    /// How many times the cells have been rebuilt from scratch.
    pub fn builds(&self) -> u64 {
        self.builds
    }

    /// Text as it appears on screen, one char per cell, `_` for blank.
    pub fn visible_text(&self) -> String {
        self.cells()
            .iter()
            .map(|cell| match (cell.glyph, cell.placeholder_visible, cell.placeholder) {
                (Some(glyph), _, _) => glyph,
                (None, true, Some(placeholder)) => placeholder,
                _ => '_',
            })
            .collect()
    }

    fn cell_mut(&mut self, index: usize) -> Result<&mut CellView, PresenterError> {
        self.cells
            .as_mut()
            .ok_or(PresenterError::NotBuilt)?
            .get_mut(index)
            .ok_or(PresenterError::MissingView { index })
    }
}

impl CellPresenter for PinView {
    fn apply(&mut self, intent: ViewIntent) -> Result<(), PresenterError> {
        match intent {
            ViewIntent::Rebuild { placeholders } => {
                let cells = placeholders
                    .into_iter()
                    .map(|placeholder| CellView {
                        placeholder,
                        placeholder_visible: true,
                        ..CellView::default()
                    })
                    .collect();
                self.cells = Some(cells);
                self.builds += 1;
            }
            ViewIntent::Display { index, glyph } => self.cell_mut(index)?.glyph = glyph,
            ViewIntent::Placeholder { index, visible } => {
                self.cell_mut(index)?.placeholder_visible = visible;
            }
            ViewIntent::Focus { index } => {
                self.cell_mut(index)?;
                for (position, cell) in self.cells.iter_mut().flatten().enumerate() {
                    cell.focused = position == index;
                }
            }
            ViewIntent::Resign { index } => self.cell_mut(index)?.focused = false,
            ViewIntent::ErrorIndicator { visible } => self.error_visible = visible,
        }
        Ok(())
    }
}
