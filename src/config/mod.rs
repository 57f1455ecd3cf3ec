mod loader;
mod types;

pub use loader::{ConfigError, MAX_LENGTH};
pub use types::{Config, DeleteMode, FieldStyle, PinConfig, StyleConfig};
