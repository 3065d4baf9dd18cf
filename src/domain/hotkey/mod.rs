//! Global hotkey domain

pub mod accelerator;

pub use accelerator::{Accelerator, Modifier, DEFAULT_HOTKEY, DEFAULT_HOTKEY_MACOS};
