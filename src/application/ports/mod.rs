//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod config;
pub mod hotkey;
pub mod notifier;
pub mod snippet_store;
pub mod surface;

// Re-export common types
pub use clipboard::{Clipboard, ClipboardError};
pub use config::ConfigStore;
pub use hotkey::{HotkeyError, HotkeyRegistrar};
pub use notifier::{NotificationError, Notifier};
pub use snippet_store::{SnippetStore, StoreError};
pub use surface::PopupSurface;
