//! Global hotkey port interface

use thiserror::Error;

use crate::domain::hotkey::Accelerator;

/// Hotkey registration errors
#[derive(Debug, Clone, Error)]
pub enum HotkeyError {
    #[error("Hotkey {0} is already in use")]
    Conflict(String),

    #[error("Global hotkeys are not supported here: {0}")]
    Unsupported(String),

    #[error("Failed to register hotkey: {0}")]
    RegistrationFailed(String),
}

/// Port for registering the global trigger accelerator.
///
/// A failed registration is never fatal: the daemon keeps running and the
/// trigger simply never fires.
pub trait HotkeyRegistrar: Send + Sync {
    /// Register `accelerator` as the trigger.
    fn register(&self, accelerator: &Accelerator) -> Result<(), HotkeyError>;

    /// Release a previously registered accelerator. Unknown accelerators are ignored.
    fn unregister(&self, accelerator: &Accelerator);
}

/// Blanket implementation for boxed registrars
impl HotkeyRegistrar for Box<dyn HotkeyRegistrar> {
    fn register(&self, accelerator: &Accelerator) -> Result<(), HotkeyError> {
        self.as_ref().register(accelerator)
    }

    fn unregister(&self, accelerator: &Accelerator) {
        self.as_ref().unregister(accelerator)
    }
}
