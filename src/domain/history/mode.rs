//! Paste mode value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidModeError;

/// All available paste modes
pub const ALL_MODES: &[PasteMode] = &[
    PasteMode::Default,
    PasteMode::Stack,
    PasteMode::Queue,
    PasteMode::Random,
];

/// Consumption policy applied when the hotkey fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasteMode {
    /// Show the interactive list; consuming only peeks the newest entry
    #[default]
    Default,
    /// Pop the newest entry (LIFO)
    Stack,
    /// Shift the oldest entry (FIFO)
    Queue,
    /// Sample any entry without removing it
    Random,
}

impl PasteMode {
    /// Get the human-readable label for this mode
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Default => "Default (Interactive List)",
            Self::Stack => "Stack",
            Self::Queue => "Queue",
            Self::Random => "Random",
        }
    }

    /// Get the string identifier for this mode
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Stack => "stack",
            Self::Queue => "queue",
            Self::Random => "random",
        }
    }

    /// Whether consuming in this mode removes the returned entry
    pub const fn is_destructive(&self) -> bool {
        matches!(self, Self::Stack | Self::Queue)
    }
}

impl FromStr for PasteMode {
    type Err = InvalidModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "stack" => Ok(Self::Stack),
            "queue" => Ok(Self::Queue),
            "random" => Ok(Self::Random),
            _ => Err(InvalidModeError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for PasteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
