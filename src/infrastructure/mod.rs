//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the system clipboard, the filesystem and the desktop.

pub mod clipboard;
pub mod config;
pub mod hotkey;
pub mod notification;
pub mod store;
pub mod surface;

// Re-export adapters
pub use clipboard::{create_clipboard, ArboardClipboard, ClipboardTool, WaylandClipboard};
pub use config::XdgConfigStore;
pub use hotkey::DesktopShortcutRegistrar;
pub use notification::{create_notifier, NotifyRustNotifier};
pub use store::JsonSnippetStore;
pub use surface::{create_surface, HeadlessSurface, NotificationSurface};
