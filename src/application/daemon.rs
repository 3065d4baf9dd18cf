//! Clipboard daemon use case
//!
//! The operations the popup, tray and settings front-ends call: reading the
//! history, selecting entries, pinning and unpinning snippets, switching
//! modes and updating settings. Each call runs to completion before the next
//! one starts; the daemon loop owns this value and never shares it.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::config::AppConfig;
use crate::domain::error::{AcceleratorParseError, InvalidCapacityError, InvalidModeError};
use crate::domain::history::{Capacity, HistoryState, PasteMode};
use crate::domain::hotkey::Accelerator;

use super::dispatcher::{DispatchOutcome, ModeDispatcher};
use super::history::{DurableUpdate, HistoryEngine};
use super::ports::{
    Clipboard, ConfigStore, HotkeyError, HotkeyRegistrar, PopupSurface, SnippetStore,
};
use super::watcher::ClipboardChange;

/// Errors from the daemon use case
#[derive(Debug, Error)]
pub enum DaemonError {
    #[error(transparent)]
    InvalidCapacity(#[from] InvalidCapacityError),

    #[error(transparent)]
    InvalidHotkey(#[from] AcceleratorParseError),

    #[error(transparent)]
    InvalidMode(#[from] InvalidModeError),

    #[error("Hotkey unavailable: {0}")]
    Hotkey(#[from] HotkeyError),
}

/// Startup options for the daemon
#[derive(Debug, Clone)]
pub struct DaemonConfig {
    /// Paste mode active at startup
    pub mode: PasteMode,
    /// Accelerator to register as the trigger
    pub hotkey: Accelerator,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            mode: PasteMode::default(),
            hotkey: Accelerator::platform_default(),
        }
    }
}

impl DaemonConfig {
    /// Build from merged settings
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            mode: config.mode_or_default(),
            hotkey: config.hotkey_or_default(),
        }
    }
}

/// Snapshot of daemon status for `status` queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaemonStatus {
    pub mode: PasteMode,
    pub hotkey: String,
    pub hotkey_registered: bool,
    pub capacity: usize,
    pub ephemeral: usize,
    pub durable: usize,
    pub popup_visible: bool,
}

/// Clipboard daemon use case
pub struct ClipboardDaemon<S, C, P, H, K>
where
    S: SnippetStore,
    C: Clipboard,
    P: PopupSurface,
    H: HotkeyRegistrar,
    K: ConfigStore,
{
    engine: HistoryEngine<S>,
    dispatcher: ModeDispatcher,
    clipboard: C,
    surface: P,
    hotkeys: H,
    settings: K,
    hotkey: Accelerator,
    hotkey_registered: bool,
}

impl<S, C, P, H, K> ClipboardDaemon<S, C, P, H, K>
where
    S: SnippetStore,
    C: Clipboard,
    P: PopupSurface,
    H: HotkeyRegistrar,
    K: ConfigStore,
{
    /// Create a new daemon use case instance. The hotkey is not registered
    /// until [`ClipboardDaemon::register_hotkey`] is called.
    pub fn new(
        engine: HistoryEngine<S>,
        clipboard: C,
        surface: P,
        hotkeys: H,
        settings: K,
        config: DaemonConfig,
    ) -> Self {
        Self {
            engine,
            dispatcher: ModeDispatcher::new(config.mode),
            clipboard,
            surface,
            hotkeys,
            settings,
            hotkey: config.hotkey,
            hotkey_registered: false,
        }
    }

    /// Register the configured accelerator, replacing any previous one.
    ///
    /// On failure the daemon keeps running with triggers disabled.
    pub fn register_hotkey(&mut self) -> Result<(), DaemonError> {
        if self.hotkey_registered {
            self.hotkeys.unregister(&self.hotkey);
            self.hotkey_registered = false;
        }

        match self.hotkeys.register(&self.hotkey) {
            Ok(()) => {
                info!(hotkey = %self.hotkey, "Hotkey registered");
                self.hotkey_registered = true;
                Ok(())
            }
            Err(e) => {
                warn!(hotkey = %self.hotkey, error = %e, "Hotkey registration failed; triggers disabled");
                Err(e.into())
            }
        }
    }

    /// Whether the trigger hotkey is live
    pub fn is_hotkey_registered(&self) -> bool {
        self.hotkey_registered
    }

    /// Active paste mode
    pub fn mode(&self) -> PasteMode {
        self.dispatcher.mode()
    }

    /// Switch paste mode for subsequent triggers
    pub fn set_mode(&mut self, mode: PasteMode) {
        info!(mode = %mode, "Paste mode changed");
        self.dispatcher.set_mode(mode);
    }

    /// Current status
    pub fn status(&self) -> DaemonStatus {
        let history = self.engine.history();
        DaemonStatus {
            mode: self.mode(),
            hotkey: self.hotkey.to_string(),
            hotkey_registered: self.hotkey_registered,
            capacity: history.capacity().get(),
            ephemeral: history.ephemeral_len(),
            durable: history.durable_len(),
            popup_visible: self.surface.is_visible(),
        }
    }

    /// Handle a hotkey trigger.
    ///
    /// # Returns
    /// `None` when no hotkey is registered, so the trigger was ignored
    pub async fn handle_trigger(&mut self) -> Option<DispatchOutcome> {
        if !self.hotkey_registered {
            debug!("Trigger ignored: hotkey not registered");
            return None;
        }

        let outcome = self
            .dispatcher
            .dispatch(&mut self.engine, &self.clipboard, &self.surface)
            .await;

        if matches!(outcome, DispatchOutcome::Pasted(_)) && self.mode().is_destructive() {
            self.surface.refresh(&self.engine.snapshot()).await;
        }

        Some(outcome)
    }

    /// Record a change reported by the clipboard watcher
    pub async fn handle_clipboard_change(&mut self, change: ClipboardChange) -> bool {
        let appended = self.engine.record_copy(&change.text);
        if appended {
            self.surface.refresh(&self.engine.snapshot()).await;
        }
        appended
    }

    /// Independent copy of the history
    pub fn get_state(&self) -> HistoryState {
        self.engine.snapshot()
    }

    /// Copy the ephemeral entry at `index` (0 = oldest) and hide the popup.
    /// Out-of-range indices do nothing.
    pub async fn select_ephemeral(&mut self, index: i64) -> Option<String> {
        let text = usize::try_from(index)
            .ok()
            .and_then(|i| self.engine.history().ephemeral(i))
            .map(str::to_string)?;
        self.write_selection(&text).await;
        Some(text)
    }

    /// Copy the durable snippet at `index` and hide the popup.
    /// Out-of-range indices do nothing.
    pub async fn select_durable(&mut self, index: i64) -> Option<String> {
        let text = usize::try_from(index)
            .ok()
            .and_then(|i| self.engine.history().durable(i))
            .map(str::to_string)?;
        self.write_selection(&text).await;
        Some(text)
    }

    /// Pin whatever text is on the clipboard right now
    pub async fn add_durable_from_clipboard(&mut self) -> DurableUpdate {
        let text = match self.clipboard.read().await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Could not read clipboard to pin it");
                return DurableUpdate::Unchanged;
            }
        };

        let update = self.engine.add_durable(&text).await;
        if update.changed() {
            self.surface.refresh(&self.engine.snapshot()).await;
        }
        update
    }

    /// Unpin the snippet at `index`; negative or out-of-range indices do nothing
    pub async fn remove_durable(&mut self, index: i64) -> DurableUpdate {
        let Ok(index) = usize::try_from(index) else {
            debug!(index, "Ignored negative snippet index");
            return DurableUpdate::Unchanged;
        };

        let update = self.engine.remove_durable(index).await;
        if update.changed() {
            self.surface.refresh(&self.engine.snapshot()).await;
        }
        update
    }

    /// Drop all ephemeral entries
    pub async fn clear_ephemeral(&mut self) {
        self.engine.clear_ephemeral();
        self.surface.refresh(&self.engine.snapshot()).await;
    }

    /// Current settings, with defaults filled in.
    /// An unreadable settings file falls back to defaults.
    pub async fn get_settings(&self) -> AppConfig {
        match self.settings.load().await {
            Ok(stored) => AppConfig::defaults().merge(stored),
            Err(e) => {
                warn!(error = %e, "Failed to load settings, using defaults");
                AppConfig::defaults()
            }
        }
    }

    /// Merge `partial` into the stored settings and apply it to the live daemon.
    ///
    /// Values are validated before anything is written; an invalid value
    /// rejects the whole update. A failed write is logged and the new values
    /// are still applied in memory.
    pub async fn update_settings(&mut self, partial: AppConfig) -> Result<AppConfig, DaemonError> {
        let capacity = partial.max_history_items.map(Capacity::new).transpose()?;
        let hotkey = partial
            .hotkey
            .as_deref()
            .map(str::parse::<Accelerator>)
            .transpose()?;
        let mode = partial
            .mode
            .as_deref()
            .map(str::parse::<PasteMode>)
            .transpose()?;

        let merged = match self.settings.update(&partial).await {
            Ok(merged) => AppConfig::defaults().merge(merged),
            Err(e) => {
                warn!(error = %e, "Failed to save settings; applying in memory only");
                self.get_settings().await.merge(partial)
            }
        };

        if let Some(capacity) = capacity {
            self.engine.apply_capacity(capacity);
            self.surface.refresh(&self.engine.snapshot()).await;
        }

        if let Some(mode) = mode {
            self.set_mode(mode);
        }

        if let Some(hotkey) = hotkey {
            if self.hotkey_registered {
                self.hotkeys.unregister(&self.hotkey);
                self.hotkey_registered = false;
            }
            self.hotkey = hotkey;
            // A failed registration degrades the daemon but not the update;
            // callers read it back from `status().hotkey_registered`
            let _ = self.register_hotkey();
        }

        Ok(merged)
    }

    /// Release the hotkey, hide the popup and drop the history
    pub async fn shutdown(mut self) {
        if self.hotkey_registered {
            self.hotkeys.unregister(&self.hotkey);
            self.hotkey_registered = false;
        }
        self.surface.hide().await;
        self.engine.shutdown();
    }

    async fn write_selection(&self, text: &str) {
        if let Err(e) = self.clipboard.copy(text).await {
            warn!(error = %e, "Failed to copy selected entry");
        }
        self.surface.hide().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{ClipboardError, StoreError};
    use crate::domain::error::ConfigError;
    use crate::application::watcher::ClipboardWatcher;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::sync::mpsc;
    use tokio::time::timeout;

    #[derive(Default, Clone)]
    struct MockStore {
        saved: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl SnippetStore for MockStore {
        async fn load(&self) -> Result<Vec<String>, StoreError> {
            Ok(self.saved.lock().unwrap().clone())
        }

        async fn save(&self, snippets: &[String]) -> Result<(), StoreError> {
            *self.saved.lock().unwrap() = snippets.to_vec();
            Ok(())
        }

        fn path(&self) -> PathBuf {
            PathBuf::from("/mock/snippets.json")
        }
    }

    #[derive(Default, Clone)]
    struct MockClipboard {
        content: Arc<Mutex<String>>,
    }

    #[async_trait]
    impl Clipboard for MockClipboard {
        async fn read(&self) -> Result<String, ClipboardError> {
            Ok(self.content.lock().unwrap().clone())
        }

        async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
            *self.content.lock().unwrap() = text.to_string();
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    struct MockSurface {
        visible: Arc<AtomicBool>,
    }

    #[async_trait]
    impl PopupSurface for MockSurface {
        async fn toggle(&self, _state: &HistoryState) {
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

    #[derive(Default, Clone)]
    struct MockHotkeys {
        fail: bool,
        active: Arc<Mutex<Vec<String>>>,
    }

    impl HotkeyRegistrar for MockHotkeys {
        fn register(&self, accelerator: &Accelerator) -> Result<(), HotkeyError> {
            if self.fail {
                return Err(HotkeyError::Conflict(accelerator.to_string()));
            }
            self.active.lock().unwrap().push(accelerator.to_string());
            Ok(())
        }

        fn unregister(&self, accelerator: &Accelerator) {
            let name = accelerator.to_string();
            self.active.lock().unwrap().retain(|a| *a != name);
        }
    }

    #[derive(Default, Clone)]
    struct MockSettings {
        stored: Arc<Mutex<AppConfig>>,
        fail_save: bool,
    }

    #[async_trait]
    impl ConfigStore for MockSettings {
        async fn load(&self) -> Result<AppConfig, ConfigError> {
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
            if self.fail_save {
                return Err(ConfigError::WriteError("read-only".to_string()));
            }
            *self.stored.lock().unwrap() = config.clone();
            Ok(())
        }

        fn path(&self) -> PathBuf {
            PathBuf::from("/mock/config.toml")
        }

        fn exists(&self) -> bool {
            true
        }

        async fn init(&self) -> Result<(), ConfigError> {
            Ok(())
        }
    }

    type TestDaemon = ClipboardDaemon<MockStore, MockClipboard, MockSurface, MockHotkeys, MockSettings>;

    struct Harness {
        daemon: TestDaemon,
        clipboard: MockClipboard,
        surface: MockSurface,
        hotkeys: MockHotkeys,
        settings: MockSettings,
        store: MockStore,
    }

    async fn harness_with(mode: PasteMode, hotkeys: MockHotkeys, settings: MockSettings) -> Harness {
        let store = MockStore::default();
        let clipboard = MockClipboard::default();
        let surface = MockSurface::default();
        let engine = HistoryEngine::create(store.clone(), Capacity::default()).await;
        let mut daemon = ClipboardDaemon::new(
            engine,
            clipboard.clone(),
            surface.clone(),
            hotkeys.clone(),
            settings.clone(),
            DaemonConfig {
                mode,
                ..Default::default()
            },
        );
        let _ = daemon.register_hotkey();
        Harness {
            daemon,
            clipboard,
            surface,
            hotkeys,
            settings,
            store,
        }
    }

    async fn harness(mode: PasteMode) -> Harness {
        harness_with(mode, MockHotkeys::default(), MockSettings::default()).await
    }

    async fn copy_all(daemon: &mut TestDaemon, items: &[&str]) {
        for item in items {
            daemon
                .handle_clipboard_change(ClipboardChange {
                    text: item.to_string(),
                })
                .await;
        }
    }

    #[tokio::test]
    async fn trigger_in_stack_mode_pastes() {
        let mut h = harness(PasteMode::Stack).await;
        copy_all(&mut h.daemon, &["a", "b"]).await;

        let outcome = h.daemon.handle_trigger().await;
        assert_eq!(outcome, Some(DispatchOutcome::Pasted("b".to_string())));
        assert_eq!(*h.clipboard.content.lock().unwrap(), "b");
        assert_eq!(h.daemon.get_state().ephemeral, vec!["a"]);
    }

    #[tokio::test]
    async fn trigger_in_default_mode_toggles_popup() {
        let mut h = harness(PasteMode::Default).await;
        assert_eq!(h.daemon.handle_trigger().await, Some(DispatchOutcome::ToggledPopup));
        assert!(h.surface.is_visible());
        assert!(h.daemon.status().popup_visible);
    }

    #[tokio::test]
    async fn failed_hotkey_registration_degrades() {
        let hotkeys = MockHotkeys {
            fail: true,
            ..Default::default()
        };
        let mut h = harness_with(PasteMode::Stack, hotkeys, MockSettings::default()).await;
        copy_all(&mut h.daemon, &["a"]).await;

        assert!(!h.daemon.is_hotkey_registered());
        assert_eq!(h.daemon.handle_trigger().await, None);
        assert_eq!(h.daemon.get_state().ephemeral, vec!["a"]);
    }

    #[tokio::test]
    async fn select_ephemeral_copies_and_hides() {
        let mut h = harness(PasteMode::Default).await;
        copy_all(&mut h.daemon, &["first", "second"]).await;
        h.daemon.handle_trigger().await;
        assert!(h.surface.is_visible());

        assert_eq!(h.daemon.select_ephemeral(0).await, Some("first".to_string()));
        assert_eq!(*h.clipboard.content.lock().unwrap(), "first");
        assert!(!h.surface.is_visible());
    }

    #[tokio::test]
    async fn select_out_of_range_is_noop() {
        let mut h = harness(PasteMode::Default).await;
        copy_all(&mut h.daemon, &["only"]).await;
        *h.clipboard.content.lock().unwrap() = "untouched".to_string();

        assert_eq!(h.daemon.select_ephemeral(1).await, None);
        assert_eq!(h.daemon.select_ephemeral(-1).await, None);
        assert_eq!(h.daemon.select_durable(0).await, None);
        assert_eq!(*h.clipboard.content.lock().unwrap(), "untouched");
    }

    #[tokio::test]
    async fn pin_from_clipboard_and_select() {
        let mut h = harness(PasteMode::Default).await;
        *h.clipboard.content.lock().unwrap() = "  snippet  ".to_string();

        assert!(h.daemon.add_durable_from_clipboard().await.changed());
        assert!(!h.daemon.add_durable_from_clipboard().await.changed());
        assert_eq!(h.daemon.get_state().durable, vec!["snippet"]);
        assert_eq!(*h.store.saved.lock().unwrap(), vec!["snippet".to_string()]);

        *h.clipboard.content.lock().unwrap() = String::new();
        assert_eq!(h.daemon.select_durable(0).await, Some("snippet".to_string()));
        assert_eq!(*h.clipboard.content.lock().unwrap(), "snippet");
    }

    #[tokio::test]
    async fn remove_durable_bounds() {
        let mut h = harness(PasteMode::Default).await;
        *h.clipboard.content.lock().unwrap() = "a".to_string();
        h.daemon.add_durable_from_clipboard().await;

        assert!(!h.daemon.remove_durable(-1).await.changed());
        assert!(!h.daemon.remove_durable(1).await.changed());
        assert!(h.daemon.remove_durable(0).await.changed());
        assert!(h.daemon.get_state().durable.is_empty());
    }

    #[tokio::test]
    async fn clear_ephemeral_keeps_pins() {
        let mut h = harness(PasteMode::Default).await;
        copy_all(&mut h.daemon, &["a", "b"]).await;
        *h.clipboard.content.lock().unwrap() = "pin".to_string();
        h.daemon.add_durable_from_clipboard().await;

        h.daemon.clear_ephemeral().await;
        let state = h.daemon.get_state();
        assert!(state.ephemeral.is_empty());
        assert_eq!(state.durable, vec!["pin"]);
    }

    #[tokio::test]
    async fn get_settings_fills_defaults() {
        let h = harness(PasteMode::Default).await;
        let settings = h.daemon.get_settings().await;
        assert_eq!(settings.max_history_items, Some(200));
        assert!(settings.hotkey.is_some());
    }

    #[tokio::test]
    async fn update_capacity_applies_live() {
        let mut h = harness(PasteMode::Default).await;
        copy_all(&mut h.daemon, &["1", "2", "3", "4", "5"]).await;

        let merged = h
            .daemon
            .update_settings(AppConfig {
                max_history_items: Some(3),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(merged.max_history_items, Some(3));
        assert_eq!(h.daemon.get_state().ephemeral, vec!["3", "4", "5"]);
        assert_eq!(h.daemon.status().capacity, 3);
        assert_eq!(h.settings.stored.lock().unwrap().max_history_items, Some(3));
    }

    #[tokio::test]
    async fn update_with_invalid_capacity_is_rejected() {
        let mut h = harness(PasteMode::Default).await;
        copy_all(&mut h.daemon, &["1", "2"]).await;

        let result = h
            .daemon
            .update_settings(AppConfig {
                max_history_items: Some(0),
                hotkey: Some("Super+V".to_string()),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(DaemonError::InvalidCapacity(_))));
        assert_eq!(h.daemon.status().capacity, 200);
        assert!(h.settings.stored.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_hotkey_reregisters() {
        let mut h = harness(PasteMode::Default).await;
        assert_eq!(h.hotkeys.active.lock().unwrap().len(), 1);

        h.daemon
            .update_settings(AppConfig {
                hotkey: Some("shift+super+v".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(*h.hotkeys.active.lock().unwrap(), vec!["Super+Shift+V".to_string()]);
        assert_eq!(h.daemon.status().hotkey, "Super+Shift+V");
        assert!(h.daemon.is_hotkey_registered());
    }

    #[tokio::test]
    async fn update_hotkey_that_fails_to_register_reports_degraded() {
        let hotkeys = MockHotkeys {
            fail: true,
            ..Default::default()
        };
        let mut h = harness_with(PasteMode::Stack, hotkeys, MockSettings::default()).await;

        let merged = h
            .daemon
            .update_settings(AppConfig {
                hotkey: Some("super+v".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(merged.hotkey, Some("Super+V".to_string()));
        let status = h.daemon.status();
        assert_eq!(status.hotkey, "Super+V");
        assert!(!status.hotkey_registered);
        assert_eq!(h.daemon.handle_trigger().await, None);
    }

    #[tokio::test]
    async fn update_with_invalid_mode_is_rejected() {
        let mut h = harness(PasteMode::Stack).await;
        let result = h
            .daemon
            .update_settings(AppConfig {
                mode: Some("shuffle".to_string()),
                ..Default::default()
            })
            .await;
        assert!(matches!(result, Err(DaemonError::InvalidMode(_))));
        assert_eq!(h.daemon.mode(), PasteMode::Stack);
    }

    #[tokio::test]
    async fn update_applies_even_when_save_fails() {
        let settings = MockSettings {
            fail_save: true,
            ..Default::default()
        };
        let mut h = harness_with(PasteMode::Default, MockHotkeys::default(), settings).await;
        copy_all(&mut h.daemon, &["1", "2", "3"]).await;

        let merged = h
            .daemon
            .update_settings(AppConfig {
                max_history_items: Some(1),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(merged.max_history_items, Some(1));
        assert_eq!(h.daemon.get_state().ephemeral, vec!["3"]);
    }

    /// Replays a fixed sequence of clipboard values, then repeats the last
    struct SequenceClipboard {
        pending: Mutex<VecDeque<String>>,
        last: Mutex<String>,
    }

    impl SequenceClipboard {
        fn new(values: &[&str]) -> Self {
            Self {
                pending: Mutex::new(values.iter().map(|v| v.to_string()).collect()),
                last: Mutex::new(String::new()),
            }
        }
    }

    #[async_trait]
    impl Clipboard for SequenceClipboard {
        async fn read(&self) -> Result<String, ClipboardError> {
            if let Some(next) = self.pending.lock().unwrap().pop_front() {
                *self.last.lock().unwrap() = next;
            }
            Ok(self.last.lock().unwrap().clone())
        }

        async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
            *self.last.lock().unwrap() = text.to_string();
            Ok(())
        }
    }

    #[tokio::test]
    async fn watched_copies_are_recorded_once_each() {
        let mut h = harness(PasteMode::Default).await;
        let source = Arc::new(SequenceClipboard::new(&["", "x", "x", "y"]));
        let mut watcher = ClipboardWatcher::new(source, Duration::from_millis(5));
        let (tx, mut changes) = mpsc::channel(8);
        assert!(watcher.start(tx).await);

        let mut recorded = 0;
        while let Ok(Some(change)) = timeout(Duration::from_millis(200), changes.recv()).await {
            if h.daemon.handle_clipboard_change(change).await {
                recorded += 1;
            }
        }
        watcher.stop();

        assert_eq!(recorded, 2);
        assert_eq!(h.daemon.get_state().ephemeral, vec!["x", "y"]);
    }

    #[tokio::test]
    async fn shutdown_unregisters_hotkey() {
        let h = harness(PasteMode::Default).await;
        let hotkeys = h.hotkeys.clone();
        h.daemon.shutdown().await;
        assert!(hotkeys.active.lock().unwrap().is_empty());
    }
}
