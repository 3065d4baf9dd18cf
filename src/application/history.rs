//! History engine use case
//!
//! Wraps the [`ClipboardHistory`] entity with its persistence policy: the
//! durable set is loaded once on creation and written through on every
//! change. Writes are best-effort; a failed save is logged and reported to
//! the caller but the in-memory change stands.

use rand::Rng;
use tracing::{debug, info, warn};

use crate::domain::error::InvalidCapacityError;
use crate::domain::history::{Capacity, ClipboardHistory, HistoryState, PasteMode};

use super::ports::{SnippetStore, StoreError};

/// Result of a durable-set mutation
#[derive(Debug, Clone)]
pub enum DurableUpdate {
    /// Input was blank, a duplicate, or out of range
    Unchanged,
    /// Changed in memory and written to the store
    Saved,
    /// Changed in memory, but the write failed
    SaveFailed(StoreError),
}

impl DurableUpdate {
    /// Whether the in-memory durable set changed
    pub fn changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Clipboard history engine with write-through snippet persistence
pub struct HistoryEngine<S: SnippetStore> {
    history: ClipboardHistory,
    store: S,
}

impl<S: SnippetStore> HistoryEngine<S> {
    /// Create an engine, seeding the durable set from `store`.
    ///
    /// A missing or unreadable file yields an empty durable set.
    pub async fn create(store: S, capacity: Capacity) -> Self {
        let durable = match store.load().await {
            Ok(items) => items,
            Err(e) => {
                warn!(path = %store.path().display(), error = %e, "Ignoring stored snippets");
                Vec::new()
            }
        };

        let history = ClipboardHistory::with_durable(capacity, durable);
        info!(
            capacity = %capacity,
            snippets = history.durable_len(),
            "History engine ready"
        );

        Self { history, store }
    }

    /// Read-only view of the underlying history
    pub fn history(&self) -> &ClipboardHistory {
        &self.history
    }

    /// Current capacity
    pub fn capacity(&self) -> Capacity {
        self.history.capacity()
    }

    /// Record a copied value. Returns `true` if it was appended.
    pub fn record_copy(&mut self, text: &str) -> bool {
        let appended = self.history.record_copy(text);
        if !appended {
            debug!("Skipped blank or repeated clipboard value");
        }
        appended
    }

    /// Take the next ephemeral entry according to `mode`
    pub fn consume(&mut self, mode: PasteMode) -> Option<String> {
        self.history.consume(mode)
    }

    /// Take the next ephemeral entry with a caller-supplied RNG
    pub fn consume_with<R: Rng + ?Sized>(&mut self, mode: PasteMode, rng: &mut R) -> Option<String> {
        self.history.consume_with(mode, rng)
    }

    /// Put back an entry taken by [`HistoryEngine::consume`]
    pub fn restore(&mut self, mode: PasteMode, text: String) {
        self.history.restore(mode, text);
    }

    /// Drop every ephemeral entry
    pub fn clear_ephemeral(&mut self) {
        self.history.clear_ephemeral();
    }

    /// Independent copy of the current state
    pub fn snapshot(&self) -> HistoryState {
        self.history.snapshot()
    }

    /// Pin `text` and persist the durable set
    pub async fn add_durable(&mut self, text: &str) -> DurableUpdate {
        if !self.history.add_durable(text) {
            debug!("Skipped blank or already pinned snippet");
            return DurableUpdate::Unchanged;
        }
        self.persist().await
    }

    /// Unpin the snippet at `index` and persist the durable set
    pub async fn remove_durable(&mut self, index: usize) -> DurableUpdate {
        if self.history.remove_durable(index).is_none() {
            debug!(index, "Ignored out-of-range snippet index");
            return DurableUpdate::Unchanged;
        }
        self.persist().await
    }

    /// Validate and apply a new capacity.
    ///
    /// # Returns
    /// The number of evicted entries, or an error (with state untouched) when
    /// `requested` is not a positive integer.
    pub fn set_capacity(&mut self, requested: i64) -> Result<usize, InvalidCapacityError> {
        let capacity = Capacity::new(requested)?;
        Ok(self.apply_capacity(capacity))
    }

    /// Apply an already validated capacity
    pub fn apply_capacity(&mut self, capacity: Capacity) -> usize {
        let evicted = self.history.set_capacity(capacity);
        if evicted > 0 {
            debug!(capacity = %capacity, evicted, "Trimmed history to new capacity");
        }
        evicted
    }

    /// Tear the engine down. Ephemeral entries are dropped with it.
    pub fn shutdown(self) {
        info!(
            discarded = self.history.ephemeral_len(),
            "History engine stopped"
        );
    }

    async fn persist(&self) -> DurableUpdate {
        match self.store.save(self.history.durable_items()).await {
            Ok(()) => DurableUpdate::Saved,
            Err(e) => {
                warn!(path = %self.store.path().display(), error = %e, "Failed to save snippets");
                DurableUpdate::SaveFailed(e)
            }
        }
    }
}
