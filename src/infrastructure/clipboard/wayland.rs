//! Wayland clipboard adapter using wl-clipboard (wl-paste / wl-copy)

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::application::ports::{Clipboard, ClipboardError};

/// Wayland clipboard adapter using wl-clipboard
pub struct WaylandClipboard;

impl WaylandClipboard {
    /// Create a new Wayland clipboard adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for WaylandClipboard {
    fn default() -> Self {
        Self::new()
    }
}

fn spawn_error(e: std::io::Error, wrap: fn(String) -> ClipboardError) -> ClipboardError {
    if e.kind() == std::io::ErrorKind::NotFound {
        ClipboardError::WlClipboardNotFound
    } else {
        wrap(e.to_string())
    }
}

#[async_trait]
impl Clipboard for WaylandClipboard {
    async fn read(&self) -> Result<String, ClipboardError> {
        let output = Command::new("wl-paste")
            .args(["--no-newline", "--type", "text/plain"])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| spawn_error(e, ClipboardError::ReadFailed))?;

        // wl-paste exits non-zero when the clipboard is empty or holds no text
        if !output.status.success() {
            return Ok(String::new());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new("wl-copy")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| spawn_error(e, ClipboardError::CopyFailed))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| ClipboardError::CopyFailed(e.to_string()))?;
        }

        let status = child
            .wait()
            .await
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))?;

        if !status.success() {
            return Err(ClipboardError::CopyFailed(format!(
                "wl-copy exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_maps_to_not_found() {
        let err = spawn_error(
            std::io::Error::from(std::io::ErrorKind::NotFound),
            ClipboardError::ReadFailed,
        );
        assert!(matches!(err, ClipboardError::WlClipboardNotFound));
    }

    #[test]
    fn other_spawn_errors_are_wrapped() {
        let err = spawn_error(
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            ClipboardError::CopyFailed,
        );
        assert!(matches!(err, ClipboardError::CopyFailed(_)));
    }
}
