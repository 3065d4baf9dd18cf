//! Desktop-shortcut hotkey registrar
//!
//! The accelerator is bound in the desktop environment's keyboard settings to
//! `clip-buddy daemon trigger`; this adapter tracks which accelerator the
//! daemon currently answers to and refuses to register without a graphical
//! session.

#[cfg(target_os = "linux")]
use std::env;
use std::sync::Mutex;

use tracing::{info, warn};

use crate::application::ports::{HotkeyError, HotkeyRegistrar};
use crate::domain::hotkey::Accelerator;

/// Command the desktop shortcut must run
pub const TRIGGER_COMMAND: &str = "clip-buddy daemon trigger";

/// Registrar for accelerators bound through the desktop environment
pub struct DesktopShortcutRegistrar {
    has_session: bool,
    active: Mutex<Option<Accelerator>>,
}

impl DesktopShortcutRegistrar {
    /// Create a registrar, detecting the graphical session from the environment
    pub fn new() -> Self {
        Self::with_session(detect_session())
    }

    /// Create with an explicit session flag
    pub fn with_session(has_session: bool) -> Self {
        Self {
            has_session,
            active: Mutex::new(None),
        }
    }

    /// Accelerator currently registered, if any
    pub fn active(&self) -> Option<Accelerator> {
        self.active.lock().ok().and_then(|guard| guard.clone())
    }
}

impl Default for DesktopShortcutRegistrar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_os = "linux")]
fn detect_session() -> bool {
    env::var_os("WAYLAND_DISPLAY").is_some() || env::var_os("DISPLAY").is_some()
}

#[cfg(not(target_os = "linux"))]
fn detect_session() -> bool {
    true
}

impl HotkeyRegistrar for DesktopShortcutRegistrar {
    fn register(&self, accelerator: &Accelerator) -> Result<(), HotkeyError> {
        if !self.has_session {
            return Err(HotkeyError::Unsupported(
                "no graphical session detected".to_string(),
            ));
        }

        let mut active = self
            .active
            .lock()
            .map_err(|e| HotkeyError::RegistrationFailed(e.to_string()))?;

        match active.as_ref() {
            Some(current) if current == accelerator => return Ok(()),
            Some(current) => return Err(HotkeyError::Conflict(current.to_string())),
            None => {}
        }

        info!(
            hotkey = %accelerator,
            command = TRIGGER_COMMAND,
            "Bind this hotkey to the trigger command in your desktop keyboard settings"
        );
        *active = Some(accelerator.clone());
        Ok(())
    }

    fn unregister(&self, accelerator: &Accelerator) {
        match self.active.lock() {
            Ok(mut active) => {
                if active.as_ref() == Some(accelerator) {
                    *active = None;
                }
            }
            Err(e) => warn!(error = %e, "Hotkey registrar state poisoned"),
        }
    }
}
