//! Clipboard history domain

pub mod capacity;
pub mod clipboard_history;
pub mod label;
pub mod mode;

pub use capacity::{Capacity, DEFAULT_MAX_HISTORY_ITEMS};
pub use clipboard_history::{normalize_text, ClipboardHistory, HistoryState};
pub use label::{entry_label, render_listing};
pub use mode::{PasteMode, ALL_MODES};
