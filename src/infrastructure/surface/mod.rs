//! Popup surface adapters

mod headless;
mod notification;

pub use headless::HeadlessSurface;
pub use notification::NotificationSurface;

use crate::application::ports::{Notifier, PopupSurface};

/// Create the popup surface: notifications when enabled, headless otherwise
pub fn create_surface(notify: bool, notifier: Box<dyn Notifier>) -> Box<dyn PopupSurface> {
    if notify {
        Box::new(NotificationSurface::new(notifier))
    } else {
        Box::new(HeadlessSurface::new())
    }
}
