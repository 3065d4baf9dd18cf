//! Clipboard infrastructure module
//!
//! Provides cross-platform clipboard support using arboard (primary)
//! or wl-clipboard on Wayland sessions where arboard cannot see changes.

mod arboard;
mod wayland;

pub use arboard::ArboardClipboard;
pub use wayland::WaylandClipboard;

use std::fmt;
use std::str::FromStr;

use crate::application::ports::Clipboard;

/// Available clipboard backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipboardTool {
    #[default]
    Arboard,
    WlClipboard,
}

impl ClipboardTool {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Arboard => "arboard",
            Self::WlClipboard => "wl-clipboard",
        }
    }
}

/// Error type for parsing a clipboard tool name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseClipboardToolError {
    pub value: String,
}

impl fmt::Display for ParseClipboardToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid clipboard tool '{}'. Valid options: arboard, wl-clipboard",
            self.value
        )
    }
}

impl std::error::Error for ParseClipboardToolError {}

impl FromStr for ClipboardTool {
    type Err = ParseClipboardToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "arboard" => Ok(Self::Arboard),
            "wl-clipboard" | "wl-copy" | "wayland" => Ok(Self::WlClipboard),
            _ => Err(ParseClipboardToolError {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ClipboardTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Create the clipboard adapter for `tool`
pub fn create_clipboard(tool: ClipboardTool) -> Box<dyn Clipboard> {
    match tool {
        ClipboardTool::Arboard => Box::new(ArboardClipboard::new()),
        ClipboardTool::WlClipboard => Box::new(WaylandClipboard::new()),
    }
}
