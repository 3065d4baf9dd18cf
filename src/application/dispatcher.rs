//! Mode dispatcher
//!
//! Maps a trigger to one action based on the active [`PasteMode`]: toggle
//! the popup in default mode, otherwise consume from the history and put the
//! result on the clipboard.

use tracing::{debug, warn};

use crate::domain::history::PasteMode;

use super::history::HistoryEngine;
use super::ports::{Clipboard, PopupSurface, SnippetStore};

/// What a trigger ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Default mode: the popup was shown or hidden
    ToggledPopup,
    /// An entry was consumed and written to the clipboard
    Pasted(String),
    /// An entry was consumed but the clipboard write failed
    CopyFailed(String),
    /// Nothing to consume
    Empty,
}

/// Holds the active mode and routes triggers
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeDispatcher {
    mode: PasteMode,
}

impl ModeDispatcher {
    /// Create a dispatcher in `mode`
    pub fn new(mode: PasteMode) -> Self {
        Self { mode }
    }

    /// Active mode
    pub fn mode(&self) -> PasteMode {
        self.mode
    }

    /// Switch mode; applies from the next trigger on
    pub fn set_mode(&mut self, mode: PasteMode) {
        self.mode = mode;
    }

    /// Handle one trigger
    pub async fn dispatch<S, C, P>(
        &self,
        engine: &mut HistoryEngine<S>,
        clipboard: &C,
        surface: &P,
    ) -> DispatchOutcome
    where
        S: SnippetStore,
        C: Clipboard + ?Sized,
        P: PopupSurface + ?Sized,
    {
        if self.mode == PasteMode::Default {
            surface.toggle(&engine.snapshot()).await;
            return DispatchOutcome::ToggledPopup;
        }

        let Some(text) = engine.consume(self.mode) else {
            debug!(mode = %self.mode, "Trigger with empty history");
            return DispatchOutcome::Empty;
        };

        match clipboard.copy(&text).await {
            Ok(()) => DispatchOutcome::Pasted(text),
            Err(e) => {
                warn!(mode = %self.mode, error = %e, "Failed to write entry to clipboard");
                // The entry never reached the user; keep it for the next trigger
                engine.restore(self.mode, text.clone());
                DispatchOutcome::CopyFailed(text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{ClipboardError, StoreError};
    use crate::domain::history::{Capacity, HistoryState};
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct NullStore;

    #[async_trait]
    impl SnippetStore for NullStore {
        async fn load(&self) -> Result<Vec<String>, StoreError> {
            Ok(Vec::new())
        }

        async fn save(&self, _snippets: &[String]) -> Result<(), StoreError> {
            Ok(())
        }

        fn path(&self) -> PathBuf {
            PathBuf::from("/dev/null")
        }
    }

    #[derive(Default)]
    struct RecordingClipboard {
        written: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl Clipboard for RecordingClipboard {
        async fn read(&self) -> Result<String, ClipboardError> {
            Ok(self.written.lock().unwrap().last().cloned().unwrap_or_default())
        }

        async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::CopyFailed("no display".to_string()));
            }
            self.written.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingSurface {
        visible: AtomicBool,
        toggles: AtomicUsize,
    }

    #[async_trait]
    impl PopupSurface for CountingSurface {
        async fn toggle(&self, _state: &HistoryState) {
            self.toggles.fetch_add(1, Ordering::SeqCst);
            self.visible.fetch_xor(true, Ordering::SeqCst);
        }

        async fn hide(&self) {
            self.visible.store(false, Ordering::SeqCst);
        }

        async fn refresh(&self, _state: &HistoryState) {}

        fn is_visible(&self) -> bool {
            self.visible.load(Ordering::SeqCst)
        }
    }

    async fn engine_with(items: &[&str]) -> HistoryEngine<NullStore> {
        let mut engine = HistoryEngine::create(NullStore, Capacity::default()).await;
        for item in items {
            engine.record_copy(item);
        }
        engine
    }

    #[tokio::test]
    async fn default_mode_toggles_popup_without_consuming() {
        let mut engine = engine_with(&["a", "b"]).await;
        let clipboard = RecordingClipboard::default();
        let surface = CountingSurface::default();
        let dispatcher = ModeDispatcher::default();

        let outcome = dispatcher.dispatch(&mut engine, &clipboard, &surface).await;
        assert_eq!(outcome, DispatchOutcome::ToggledPopup);
        assert!(surface.is_visible());

        dispatcher.dispatch(&mut engine, &clipboard, &surface).await;
        assert!(!surface.is_visible());
        assert_eq!(surface.toggles.load(Ordering::SeqCst), 2);
        assert_eq!(engine.history().ephemeral_len(), 2);
        assert!(clipboard.written.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn stack_mode_pastes_newest() {
        let mut engine = engine_with(&["a", "b"]).await;
        let clipboard = RecordingClipboard::default();
        let surface = CountingSurface::default();
        let dispatcher = ModeDispatcher::new(PasteMode::Stack);

        assert_eq!(
            dispatcher.dispatch(&mut engine, &clipboard, &surface).await,
            DispatchOutcome::Pasted("b".to_string())
        );
        assert_eq!(
            dispatcher.dispatch(&mut engine, &clipboard, &surface).await,
            DispatchOutcome::Pasted("a".to_string())
        );
        assert_eq!(*clipboard.written.lock().unwrap(), vec!["b", "a"]);
        assert_eq!(surface.toggles.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn queue_mode_pastes_oldest() {
        let mut engine = engine_with(&["a", "b"]).await;
        let clipboard = RecordingClipboard::default();
        let surface = CountingSurface::default();
        let dispatcher = ModeDispatcher::new(PasteMode::Queue);

        dispatcher.dispatch(&mut engine, &clipboard, &surface).await;
        assert_eq!(*clipboard.written.lock().unwrap(), vec!["a"]);
        assert_eq!(engine.snapshot().ephemeral, vec!["b"]);
    }

    #[tokio::test]
    async fn random_mode_keeps_buffer() {
        let mut engine = engine_with(&["a", "b", "c"]).await;
        let clipboard = RecordingClipboard::default();
        let surface = CountingSurface::default();
        let dispatcher = ModeDispatcher::new(PasteMode::Random);

        match dispatcher.dispatch(&mut engine, &clipboard, &surface).await {
            DispatchOutcome::Pasted(text) => assert!(["a", "b", "c"].contains(&text.as_str())),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(engine.history().ephemeral_len(), 3);
    }

    #[tokio::test]
    async fn empty_history_writes_nothing() {
        let mut engine = engine_with(&[]).await;
        let clipboard = RecordingClipboard::default();
        let surface = CountingSurface::default();

        for mode in [PasteMode::Stack, PasteMode::Queue, PasteMode::Random] {
            let dispatcher = ModeDispatcher::new(mode);
            assert_eq!(
                dispatcher.dispatch(&mut engine, &clipboard, &surface).await,
                DispatchOutcome::Empty
            );
        }
        assert!(clipboard.written.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn copy_failure_is_reported_not_fatal() {
        let mut engine = engine_with(&["a"]).await;
        let clipboard = RecordingClipboard {
            fail: true,
            ..Default::default()
        };
        let surface = CountingSurface::default();
        let dispatcher = ModeDispatcher::new(PasteMode::Stack);

        assert_eq!(
            dispatcher.dispatch(&mut engine, &clipboard, &surface).await,
            DispatchOutcome::CopyFailed("a".to_string())
        );
        assert_eq!(engine.snapshot().ephemeral, vec!["a"]);
    }

    #[tokio::test]
    async fn copy_failure_keeps_buffer_for_stack_and_queue() {
        let mut engine = engine_with(&["A", "B"]).await;
        let clipboard = RecordingClipboard {
            fail: true,
            ..Default::default()
        };
        let surface = CountingSurface::default();

        assert_eq!(
            ModeDispatcher::new(PasteMode::Stack)
                .dispatch(&mut engine, &clipboard, &surface)
                .await,
            DispatchOutcome::CopyFailed("B".to_string())
        );
        assert_eq!(engine.snapshot().ephemeral, vec!["A", "B"]);

        assert_eq!(
            ModeDispatcher::new(PasteMode::Queue)
                .dispatch(&mut engine, &clipboard, &surface)
                .await,
            DispatchOutcome::CopyFailed("A".to_string())
        );
        assert_eq!(engine.snapshot().ephemeral, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn mode_change_applies_to_next_trigger() {
        let mut engine = engine_with(&["a", "b"]).await;
        let clipboard = RecordingClipboard::default();
        let surface = CountingSurface::default();
        let mut dispatcher = ModeDispatcher::new(PasteMode::Queue);

        dispatcher.dispatch(&mut engine, &clipboard, &surface).await;
        dispatcher.set_mode(PasteMode::Default);
        assert_eq!(dispatcher.mode(), PasteMode::Default);
        assert_eq!(
            dispatcher.dispatch(&mut engine, &clipboard, &surface).await,
            DispatchOutcome::ToggledPopup
        );
        assert_eq!(engine.snapshot().ephemeral, vec!["b"]);
    }
}
