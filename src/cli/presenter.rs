//! CLI presenter for output formatting

use colored::*;

use crate::application::DaemonStatus;
use crate::domain::history::{entry_label, HistoryState};

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print daemon status
    pub fn daemon_status(&self, status: &DaemonStatus) {
        eprintln!("{} Daemon: running", "●".cyan());
        self.key_value("mode", status.mode.as_str());
        let hotkey = if status.hotkey_registered {
            status.hotkey.clone()
        } else {
            format!("{} (not registered)", status.hotkey)
        };
        self.key_value("hotkey", &hotkey);
        self.key_value(
            "recent",
            &format!("{} / {}", status.ephemeral, status.capacity),
        );
        self.key_value("pinned", &status.durable.to_string());
        self.key_value("popup", if status.popup_visible { "shown" } else { "hidden" });
    }

    /// Print the history with the indices `select-*` and `unpin` expect
    pub fn history(&self, state: &HistoryState) {
        self.output(&format_history(state));
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Render both sections with their selection indices.
///
/// Recent entries are shown newest first, each prefixed with the index
/// that selects it (0 is the oldest).
pub fn format_history(state: &HistoryState) -> String {
    let mut lines = vec!["Recent:".to_string()];
    if state.ephemeral.is_empty() {
        lines.push("  (none)".to_string());
    }
    for (index, text) in state.ephemeral.iter().enumerate().rev() {
        lines.push(format!("  [{}] {}", index, entry_label(text)));
    }

    lines.push("Pinned:".to_string());
    if state.durable.is_empty() {
        lines.push("  (none)".to_string());
    }
    for (index, text) in state.durable.iter().enumerate() {
        lines.push(format!("  [{}] {}", index, entry_label(text)));
    }

    lines.join("\n")
}
