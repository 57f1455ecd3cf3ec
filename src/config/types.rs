use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub pin: PinConfig,
    #[serde(default)]
    pub style: StyleConfig,
}

/// How a backward delete maps onto focus movement and slot mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DeleteMode {
    /// Deletes the current cell and moves focus to the previous cell.
    #[default]
    DeleteCurrentAndMoveToPrevious,
    /// Deletes the current cell and keeps focus. On an empty cell, moves
    /// back one cell and deletes there.
    DeleteCurrent,
    /// Moves focus to the previous cell and deletes its contents. A filled
    /// cell that gains focus is cleared.
    MoveToPreviousAndDelete,
}

/// Visual treatment of each cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FieldStyle {
    None,
    #[default]
    Underline,
    Box,
}

/// Behaviour of the field itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinConfig {
    /// Number of cells (default: 5).
    #[serde(default = "default_length")]
    pub length: usize,
    /// Glyph shown in place of an entered character once masked.
    #[serde(default = "default_mask_char")]
    pub mask_char: char,
    /// Mask entered characters after `mask_delay_ms` (default: true).
    #[serde(default = "default_true")]
    pub secure_text: bool,
    /// Delay before an entered character is masked (default: 500).
    #[serde(default = "default_mask_delay_ms")]
    pub mask_delay_ms: u64,
    /// Delay after construction or a reset before the field reports a code
    /// (default: 100).
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    /// Accept whitespace characters as cell content (default: true).
    #[serde(default = "default_true")]
    pub allows_whitespace: bool,
    /// Resign focus after entry in a single-cell field (default: false).
    #[serde(default)]
    pub dismiss_on_empty_first: bool,
    #[serde(default)]
    pub delete_mode: DeleteMode,
    /// Treat any input at least as long as the field as an autofilled
    /// one-time code (default: true).
    #[serde(default = "default_true")]
    pub one_time_code: bool,
    /// Cell focused once the field has settled.
    #[serde(default)]
    pub initial_focus: Option<usize>,
    /// Per-cell placeholder characters, shown while a cell is empty.
    #[serde(default)]
    pub placeholder: String,
}

/// Presentation settings. Colours accept anything ratatui parses
/// ("red", "#ff8800", "8").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    pub variant: FieldStyle,
    /// Columns between cells (default: 1).
    #[serde(default = "default_inter_space")]
    pub inter_space: u16,
    /// Width of a cell in columns (default: 5).
    #[serde(default = "default_cell_width")]
    pub cell_width: u16,
    #[serde(default = "default_text_color")]
    pub text_color: String,
    #[serde(default = "default_border_color")]
    pub border_color: String,
    #[serde(default = "default_active_border_color")]
    pub active_border_color: String,
    #[serde(default = "default_error_color")]
    pub error_color: String,
}

fn default_length() -> usize {
    5
}

fn default_mask_char() -> char {
    '\u{25CF}'
}

fn default_true() -> bool {
    true
}

fn default_mask_delay_ms() -> u64 {
    500
}

fn default_settle_delay_ms() -> u64 {
    100
}

fn default_inter_space() -> u16 {
    1
}

fn default_cell_width() -> u16 {
    5
}

fn default_text_color() -> String {
    "#e5e5e5".to_string()
}

fn default_border_color() -> String {
    "#6b7280".to_string()
}

fn default_active_border_color() -> String {
    "#da7756".to_string()
}

fn default_error_color() -> String {
    "#ef4444".to_string()
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            length: default_length(),
            mask_char: default_mask_char(),
            secure_text: true,
            mask_delay_ms: default_mask_delay_ms(),
            settle_delay_ms: default_settle_delay_ms(),
            allows_whitespace: true,
            dismiss_on_empty_first: false,
            delete_mode: DeleteMode::default(),
            one_time_code: true,
            initial_focus: None,
            placeholder: String::new(),
        }
    }
}

impl PinConfig {
    /// Config for a field of `length` cells, everything else default.
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    /// Placeholder character for a cell, if the placeholder string covers it.
    pub fn placeholder_for(&self, index: usize) -> Option<char> {
        self.placeholder.chars().nth(index)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            variant: FieldStyle::default(),
            inter_space: default_inter_space(),
            cell_width: default_cell_width(),
            text_color: default_text_color(),
            border_color: default_border_color(),
            active_border_color: default_active_border_color(),
            error_color: default_error_color(),
        }
    }
}
