pub mod cli;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod pin;
pub mod ui;
