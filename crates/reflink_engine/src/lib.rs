//! RefLink engine: clipboard access and configuration loading.
mod clipboard;
mod config;
mod error;

pub use clipboard::{clipboard_from_backend, Clipboard, CommandClipboard, StdoutClipboard};
pub use config::{AppConfig, ClipboardBackend, LogDestination, DEFAULT_CONFIG_FILENAME};
pub use error::{ClipboardError, ConfigError};
