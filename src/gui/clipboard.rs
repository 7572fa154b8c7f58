//! Clipboard functionality

use crate::utils::error::TeraPeekError;
use arboard::Clipboard;
use std::time::Duration;
use tracing::warn;

/// How long a short-lived process keeps serving the clipboard on Linux
pub const CLIPBOARD_HOLD: Duration = Duration::from_secs(10);

/// Get clipboard content
pub fn get_clipboard_content() -> Result<String, TeraPeekError> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| TeraPeekError::Clipboard(format!("Failed to access clipboard: {}", e)))?;

    clipboard
        .get_text()
        .map_err(|e| TeraPeekError::Clipboard(format!("Failed to read clipboard: {}", e)))
}

/// Set clipboard content
pub fn set_clipboard_content(text: &str) -> Result<(), TeraPeekError> {
    let mut clipboard = Clipboard::new().map_err(|e| {
        warn!("Clipboard unavailable: {}", e);
        TeraPeekError::Clipboard(format!("Failed to access clipboard: {}", e))
    })?;

    clipboard.set_text(text).map_err(|e| {
        warn!("Clipboard write failed: {}", e);
        TeraPeekError::Clipboard(format!("Failed to write clipboard: {}", e))
    })
}

/// Set clipboard content from a process that is about to exit.
///
/// On Linux the selection disappears with its owner, so the contents are
/// served until another program takes them over or `hold` elapses. Other
/// platforms hand the text to the system immediately.
pub fn set_clipboard_content_and_hold(text: &str, hold: Duration) -> Result<(), TeraPeekError> {
    let mut clipboard = Clipboard::new().map_err(|e| {
        warn!("Clipboard unavailable: {}", e);
        TeraPeekError::Clipboard(format!("Failed to access clipboard: {}", e))
    })?;

    #[cfg(target_os = "linux")]
    let result = {
        use arboard::SetExtLinux;
        tracing::info!("Holding clipboard selection for up to {:?}", hold);
        clipboard
            .set()
            .wait_until(std::time::Instant::now() + hold)
            .text(text.to_string())
    };

    #[cfg(not(target_os = "linux"))]
    let result = {
        let _ = hold;
        clipboard.set_text(text)
    };

    result.map_err(|e| {
        warn!("Clipboard write failed: {}", e);
        TeraPeekError::Clipboard(format!("Failed to write clipboard: {}", e))
    })
}
