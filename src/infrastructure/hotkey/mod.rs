//! Hotkey registration adapters

mod shortcut;

pub use shortcut::{DesktopShortcutRegistrar, TRIGGER_COMMAND};
