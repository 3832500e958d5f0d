//! Clipboard backend selection and error types

use thiserror::Error;

use crate::config::ClipboardBackend;

use super::{osc52, system};

/// Result type for clipboard operations
pub type ClipboardResult = Result<(), ClipboardError>;

/// Errors that can occur during clipboard operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("system clipboard is not available")]
    SystemUnavailable,
    #[error("failed to write to clipboard")]
    WriteError,
    #[error("text is too large for the terminal clipboard")]
    TooLarge,
}

/// Copy text to clipboard using the specified backend
///
/// - `System`: OS clipboard only (arboard)
/// - `Osc52`: OSC 52 escape sequence only
/// - `Auto`: system clipboard, falling back to OSC 52
pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> ClipboardResult {
    match backend {
        ClipboardBackend::System => system::copy(text),
        ClipboardBackend::Osc52 => osc52::copy(text),
        ClipboardBackend::Auto => system::copy(text).or_else(|e| {
            log::debug!("System clipboard failed ({}), using OSC 52", e);
            osc52::copy(text)
        }),
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod backend_tests;
