//! Short labels for list rows

use super::clipboard_history::HistoryState;

/// Longest label shown before truncation
pub const MAX_LABEL_CHARS: usize = 50;

/// Number of rows shown per section in compact listings
pub const MAX_LISTED_ITEMS: usize = 8;

/// First line of `text`, trimmed and truncated for display.
pub fn entry_label(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or("").trim();

    if first_line.is_empty() {
        return "(empty)".to_string();
    }

    if first_line.chars().count() > MAX_LABEL_CHARS {
        let head: String = first_line.chars().take(MAX_LABEL_CHARS - 3).collect();
        format!("{}…", head)
    } else {
        first_line.to_string()
    }
}

/// Render a compact two-section listing of the history.
///
/// Recent entries are listed newest first, pinned snippets in their stored
/// order. Each section is capped at [`MAX_LISTED_ITEMS`].
pub fn render_listing(state: &HistoryState) -> String {
    let mut lines = Vec::new();

    if !state.ephemeral.is_empty() {
        lines.push("Recent".to_string());
        for text in state.ephemeral.iter().rev().take(MAX_LISTED_ITEMS) {
            lines.push(format!("  {}", entry_label(text)));
        }
    }

    if !state.durable.is_empty() {
        lines.push("Pinned".to_string());
        for text in state.durable.iter().take(MAX_LISTED_ITEMS) {
            lines.push(format!("  {}", entry_label(text)));
        }
    }

    if lines.is_empty() {
        return "Copy some text to build your recent history…".to_string();
    }

    lines.join("\n")
}
