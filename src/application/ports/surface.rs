//! Popup surface port interface

use async_trait::async_trait;

use crate::domain::history::HistoryState;

/// Port for the popup list that shows the history.
///
/// Implementations own their visibility state; the daemon only asks them to
/// toggle, hide or redraw.
#[async_trait]
pub trait PopupSurface: Send + Sync {
    /// Show the popup if hidden, hide it if shown.
    async fn toggle(&self, state: &HistoryState);

    /// Hide the popup. No-op if already hidden.
    async fn hide(&self);

    /// Redraw with fresh state. Hidden surfaces may ignore this.
    async fn refresh(&self, state: &HistoryState);

    /// Whether the popup is currently shown.
    fn is_visible(&self) -> bool;
}

/// Blanket implementation for boxed surfaces
#[async_trait]
impl PopupSurface for Box<dyn PopupSurface> {
    async fn toggle(&self, state: &HistoryState) {
        self.as_ref().toggle(state).await
    }

    async fn hide(&self) {
        self.as_ref().hide().await
    }

    async fn refresh(&self, state: &HistoryState) {
        self.as_ref().refresh(state).await
    }

    fn is_visible(&self) -> bool {
        self.as_ref().is_visible()
    }
}
