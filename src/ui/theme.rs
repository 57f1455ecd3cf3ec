use std::str::FromStr;

use ratatui::style::Color;

use crate::config::{FieldStyle, StyleConfig};

pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const BORDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const ACTIVE_BORDER: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const FRAME_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);

/// Resolved presentation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub variant: FieldStyle,
    pub inter_space: u16,
    pub cell_width: u16,
    pub text: Color,
    pub border: Color,
    pub active_border: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&StyleConfig::default())
    }
}

impl Theme {
    /// Colours that fail to parse fall back to the built-in palette;
    /// `Config::validate` rejects them before this point.
    pub fn from_config(style: &StyleConfig) -> Self {
        Self {
            variant: style.variant,
            inter_space: style.inter_space,
            cell_width: style.cell_width,
            text: parse_or(&style.text_color, TEXT),
            border: parse_or(&style.border_color, BORDER),
            active_border: parse_or(&style.active_border_color, ACTIVE_BORDER),
            error: parse_or(&style.error_color, STATUS_ERROR),
        }
    }

    /// Columns needed to draw `cells` cells side by side, saturating at
    /// `u16::MAX`.
    pub fn row_width(&self, cells: usize) -> u16 {
        let cells = u16::try_from(cells).unwrap_or(u16::MAX);
        cells
            .saturating_mul(self.cell_width)
            .saturating_add(cells.saturating_sub(1).saturating_mul(self.inter_space))
    }
}

fn parse_or(value: &str, fallback: Color) -> Color {
    Color::from_str(value).unwrap_or(fallback)
}
