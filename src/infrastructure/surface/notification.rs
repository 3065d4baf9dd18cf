//! Popup rendered as a desktop notification

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tracing::warn;

use crate::application::ports::{Notifier, PopupSurface};
use crate::domain::history::{render_listing, HistoryState};

const TITLE: &str = "Clip Buddy";

/// Shows the history listing in a notification each time the popup opens
pub struct NotificationSurface<N: Notifier> {
    notifier: N,
    visible: AtomicBool,
}

impl<N: Notifier> NotificationSurface<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            notifier,
            visible: AtomicBool::new(false),
        }
    }

    async fn show(&self, state: &HistoryState) {
        let body = render_listing(state);
        if let Err(e) = self.notifier.notify(TITLE, &body).await {
            warn!(error = %e, "Failed to show history notification");
        }
    }
}

#[async_trait]
impl<N: Notifier> PopupSurface for NotificationSurface<N> {
    async fn toggle(&self, state: &HistoryState) {
        let was_visible = self.visible.fetch_xor(true, Ordering::SeqCst);
        if !was_visible {
            self.show(state).await;
        }
    }

    async fn hide(&self) {
        self.visible.store(false, Ordering::SeqCst);
    }

    async fn refresh(&self, state: &HistoryState) {
        if self.is_visible() {
            self.show(state).await;
        }
    }

    fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}
