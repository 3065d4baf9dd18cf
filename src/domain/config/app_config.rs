//! Application configuration value object

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::history::{Capacity, PasteMode};
use crate::domain::hotkey::Accelerator;

/// Default clipboard sampling period
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Shortest accepted sampling period
pub const MIN_POLL_INTERVAL_MS: u64 = 50;

/// Linux-specific configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinuxConfig {
    pub clipboard_tool: Option<String>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
/// Unknown keys in a settings document are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub hotkey: Option<String>,
    pub max_history_items: Option<i64>,
    pub mode: Option<String>,
    pub poll_interval_ms: Option<u64>,
    pub notify: Option<bool>,
    pub linux: Option<LinuxConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            hotkey: Some(Accelerator::platform_default().to_string()),
            max_history_items: Some(Capacity::default().get() as i64),
            mode: Some(PasteMode::default().to_string()),
            poll_interval_ms: Some(DEFAULT_POLL_INTERVAL_MS),
            notify: Some(false),
            linux: Some(LinuxConfig {
                clipboard_tool: Some("arboard".to_string()),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            hotkey: other.hotkey.or(self.hotkey),
            max_history_items: other.max_history_items.or(self.max_history_items),
            mode: other.mode.or(self.mode),
            poll_interval_ms: other.poll_interval_ms.or(self.poll_interval_ms),
            notify: other.notify.or(self.notify),
            linux: Self::merge_linux_config(self.linux, other.linux),
        }
    }

    /// Merge Linux config sections
    fn merge_linux_config(
        base: Option<LinuxConfig>,
        other: Option<LinuxConfig>,
    ) -> Option<LinuxConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(LinuxConfig {
                clipboard_tool: o.clipboard_tool.or(b.clipboard_tool),
            }),
        }
    }

    /// Get hotkey as parsed Accelerator, or the platform default if not set/invalid
    pub fn hotkey_or_default(&self) -> Accelerator {
        self.hotkey
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(Accelerator::platform_default)
    }

    /// Get max_history_items as a Capacity, or default if not set/invalid
    pub fn capacity_or_default(&self) -> Capacity {
        self.max_history_items
            .and_then(|n| Capacity::new(n).ok())
            .unwrap_or_default()
    }

    /// Get mode as parsed PasteMode, or default if not set/invalid
    pub fn mode_or_default(&self) -> PasteMode {
        self.mode
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get the clipboard sampling period, clamped to a sane minimum
    pub fn poll_interval_or_default(&self) -> Duration {
        let ms = self
            .poll_interval_ms
            .unwrap_or(DEFAULT_POLL_INTERVAL_MS)
            .max(MIN_POLL_INTERVAL_MS);
        Duration::from_millis(ms)
    }

    /// Get notify setting, or false if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(false)
    }

    /// Get clipboard tool preference, or "arboard" if not set
    pub fn clipboard_tool_or_default(&self) -> &str {
        self.linux
            .as_ref()
            .and_then(|l| l.clipboard_tool.as_deref())
            .unwrap_or("arboard")
    }
}
