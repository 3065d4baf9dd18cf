//! Surface with no visible output

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::PopupSurface;
use crate::domain::history::{render_listing, HistoryState};

/// Tracks popup visibility without drawing anything.
///
/// Used when notifications are disabled; the history is still reachable
/// through `clip-buddy daemon list`.
#[derive(Default)]
pub struct HeadlessSurface {
    visible: AtomicBool,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PopupSurface for HeadlessSurface {
    async fn toggle(&self, state: &HistoryState) {
        let was_visible = self.visible.fetch_xor(true, Ordering::SeqCst);
        if was_visible {
            debug!("Popup hidden");
        } else {
            debug!(listing = %render_listing(state), "Popup shown");
        }
    }

    async fn hide(&self) {
        self.visible.store(false, Ordering::SeqCst);
    }

    async fn refresh(&self, _state: &HistoryState) {}

    fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}
