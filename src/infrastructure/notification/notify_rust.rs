//! Desktop notification adapter using notify-rust

use async_trait::async_trait;

use crate::application::ports::{NotificationError, Notifier};

const APP_NAME: &str = "Clip Buddy";

/// Freedesktop icon shown next to the history listing
const ICON: &str = "edit-paste";

/// Notifier backed by the platform notification service
pub struct NotifyRustNotifier {
    app_name: &'static str,
    icon: &'static str,
}

impl NotifyRustNotifier {
    pub fn new() -> Self {
        Self {
            app_name: APP_NAME,
            icon: ICON,
        }
    }
}

impl Default for NotifyRustNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    async fn notify(&self, title: &str, body: &str) -> Result<(), NotificationError> {
        let title = title.to_owned();
        let body = body.to_owned();
        let app_name = self.app_name;
        let icon = self.icon;

        // The D-Bus round trip blocks
        tokio::task::spawn_blocking(move || {
            notify_rust::Notification::new()
                .appname(app_name)
                .summary(&title)
                .body(&body)
                .icon(icon)
                .show()
                .map(|_| ())
                .map_err(|e| NotificationError::SendFailed(e.to_string()))
        })
        .await
        .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifier_uses_app_identity() {
        let notifier = NotifyRustNotifier::default();
        assert_eq!(notifier.app_name, "Clip Buddy");
        assert_eq!(notifier.icon, "edit-paste");
    }
}
