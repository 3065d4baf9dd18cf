//! Cross-platform clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).
//!
//! On X11 the copied text is served by whoever owns the selection, and
//! arboard only serves it while an `arboard::Clipboard` is alive. The
//! adapter therefore keeps one handle for its whole lifetime instead of
//! opening a fresh one per call.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{Clipboard, ClipboardError};

type Slot<H> = Arc<Mutex<Option<H>>>;

/// Cross-platform clipboard adapter using arboard
pub struct ArboardClipboard {
    handle: Slot<arboard::Clipboard>,
}

impl ArboardClipboard {
    /// Create the adapter. The display connection is opened on first use.
    pub fn new() -> Self {
        Self {
            handle: Arc::new(Mutex::new(None)),
        }
    }

    fn connect() -> Result<arboard::Clipboard, ClipboardError> {
        arboard::Clipboard::new().map_err(|e| ClipboardError::ClipboardUnavailable(e.to_string()))
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Run `op` against the handle in `slot`, connecting first if needed.
///
/// A failed operation drops the handle so the next call reconnects.
fn with_handle<H, T>(
    slot: &Mutex<Option<H>>,
    connect: impl FnOnce() -> Result<H, ClipboardError>,
    op: impl FnOnce(&mut H) -> Result<T, ClipboardError>,
) -> Result<T, ClipboardError> {
    let mut guard = slot
        .lock()
        .map_err(|_| ClipboardError::ClipboardUnavailable("clipboard handle poisoned".to_string()))?;

    if guard.is_none() {
        *guard = Some(connect()?);
    }
    let Some(handle) = guard.as_mut() else {
        return Err(ClipboardError::ClipboardUnavailable(
            "clipboard handle missing".to_string(),
        ));
    };

    let result = op(handle);
    if result.is_err() {
        debug!("Dropping clipboard handle after a failed operation");
        *guard = None;
    }
    result
}

#[async_trait]
impl Clipboard for ArboardClipboard {
    async fn read(&self) -> Result<String, ClipboardError> {
        let handle = Arc::clone(&self.handle);

        // arboard calls block on the display server
        tokio::task::spawn_blocking(move || {
            with_handle(&handle, Self::connect, |clipboard| match clipboard.get_text() {
                Ok(text) => Ok(text),
                // Images, files or an empty clipboard
                Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
                Err(e) => Err(ClipboardError::ReadFailed(e.to_string())),
            })
        })
        .await
        .map_err(|e| ClipboardError::ReadFailed(format!("Task join error: {}", e)))?
    }

    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();
        let handle = Arc::clone(&self.handle);

        tokio::task::spawn_blocking(move || {
            with_handle(&handle, Self::connect, |clipboard| {
                clipboard
                    .set_text(text)
                    .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
            })
        })
        .await
        .map_err(|e| ClipboardError::CopyFailed(format!("Task join error: {}", e)))?
    }
}
