//! Application layer - Use cases and port interfaces
//!
//! Contains the core clipboard operations and trait definitions
//! for external system interactions.

pub mod daemon;
pub mod dispatcher;
pub mod history;
pub mod ports;
pub mod watcher;

// Re-export use cases
pub use daemon::{ClipboardDaemon, DaemonConfig, DaemonError, DaemonStatus};
pub use dispatcher::{DispatchOutcome, ModeDispatcher};
pub use history::{DurableUpdate, HistoryEngine};
pub use watcher::{ChangeDetector, ClipboardChange, ClipboardWatcher};
