//! Command-line flags. Each flag overrides one value from the config file.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, DeleteMode, FieldStyle};

#[derive(Debug, Parser)]
#[command(name = "pinfield", version, about = "Segmented PIN / one-time-code entry")]
pub struct Cli {
    /// Config file to load instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of cells.
    #[arg(long, short = 'n')]
    pub length: Option<usize>,

    #[arg(long, value_enum)]
    pub delete_mode: Option<DeleteMode>,

    /// Glyph shown for masked characters.
    #[arg(long)]
    pub mask_char: Option<char>,

    /// Delay before a typed character is masked.
    #[arg(long, value_name = "MS")]
    pub mask_delay_ms: Option<u64>,

    /// Show entered characters instead of masking them.
    #[arg(long)]
    pub no_secure: bool,

    /// Reject whitespace characters.
    #[arg(long)]
    pub no_whitespace: bool,

    /// Resign focus after entry in a single-cell field.
    #[arg(long)]
    pub dismiss_on_empty_first: bool,

    /// Only treat pasted text as a code when it matches the clipboard.
    #[arg(long)]
    pub no_one_time_code: bool,

    /// Cell focused once the field is ready.
    #[arg(long, value_name = "INDEX")]
    pub focus: Option<usize>,

    /// Placeholder characters, one per cell.
    #[arg(long)]
    pub placeholder: Option<String>,

    #[arg(long, value_enum)]
    pub style: Option<FieldStyle>,
}

impl Cli {
    /// Applies the flags that were given on top of `config`.
    pub fn apply(&self, config: &mut Config) {
        let pin = &mut config.pin;
        if let Some(length) = self.length {
            pin.length = length;
        }
        if let Some(mode) = self.delete_mode {
            pin.delete_mode = mode;
        }
        if let Some(mask_char) = self.mask_char {
            pin.mask_char = mask_char;
        }
        if let Some(delay) = self.mask_delay_ms {
            pin.mask_delay_ms = delay;
        }
        if self.no_secure {
            pin.secure_text = false;
        }
        if self.no_whitespace {
            pin.allows_whitespace = false;
        }
        if self.dismiss_on_empty_first {
            pin.dismiss_on_empty_first = true;
        }
        if self.no_one_time_code {
            pin.one_time_code = false;
        }
        if let Some(focus) = self.focus {
            pin.initial_focus = Some(focus);
        }
        if let Some(placeholder) = &self.placeholder {
            pin.placeholder = placeholder.clone();
        }
        if let Some(style) = self.style {
            config.style.variant = style;
        }
    }
}
