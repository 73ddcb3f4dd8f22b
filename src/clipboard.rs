// src/clipboard.rs
use std::{thread, time::Duration};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Failed to access clipboard: {0}")]
    Unavailable(String),

    #[error("Failed to copy to clipboard: {0}")]
    WriteFailed(String),
}

/// Copy the provided text to the system clipboard and optionally clear it
/// after the given timeout. Clipboard failure never affects the generated
/// password itself; callers surface the error and move on.
pub fn copy_to_clipboard(text: &str, clear_after: Option<Duration>) -> Result<(), ClipboardError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

    clipboard
        .set_text(text.to_owned())
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;

    if let Some(duration) = clear_after {
        // Best-effort background clear; errors here are ignored so the copy
        // itself still counts as successful.
        thread::spawn(move || {
            thread::sleep(duration);
            if let Ok(mut cb) = arboard::Clipboard::new() {
                let _ = cb.clear();
            }
        });
    }

    Ok(())
}
