//! Notification port interface

use async_trait::async_trait;
use thiserror::Error;

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("Failed to show notification: {0}")]
    SendFailed(String),
}

/// Port for desktop notifications carrying the popup listing
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show `body` under `title`. Errors are for the caller to log.
    async fn notify(&self, title: &str, body: &str) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn notify(&self, title: &str, body: &str) -> Result<(), NotificationError> {
        self.as_ref().notify(title, body).await
    }
}
