//! Clipboard history entity
//!
//! Holds the two halves of the history:
//!
//! - **ephemeral**: recently copied text, oldest first, bounded by a
//!   [`Capacity`]. Never persisted; a new process starts empty.
//! - **durable**: pinned snippets in insertion order, unique by value.
//!
//! Every mutation goes through a method on [`ClipboardHistory`]; callers only
//! ever see owned copies through [`ClipboardHistory::snapshot`].

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::capacity::Capacity;
use super::mode::PasteMode;

/// Immutable copy of the history, handed out to presentation and IPC.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    /// Ephemeral entries, oldest to newest
    pub ephemeral: Vec<String>,
    /// Durable snippets, in insertion order
    pub durable: Vec<String>,
}

/// Trim input and drop it if nothing is left.
pub fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Bounded ephemeral buffer plus deduplicated durable set
#[derive(Debug, Clone, Default)]
pub struct ClipboardHistory {
    ephemeral: VecDeque<String>,
    durable: Vec<String>,
    capacity: Capacity,
}

impl ClipboardHistory {
    /// Create an empty history with the given capacity
    pub fn new(capacity: Capacity) -> Self {
        Self {
            ephemeral: VecDeque::new(),
            durable: Vec::new(),
            capacity,
        }
    }

    /// Create a history whose durable set is seeded from storage.
    ///
    /// Loaded values go through the same normalization and dedup as
    /// [`ClipboardHistory::add_durable`], so a hand-edited file cannot break
    /// the set invariants.
    pub fn with_durable<I, S>(capacity: Capacity, durable: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut history = Self::new(capacity);
        for value in durable {
            history.add_durable(value.as_ref());
        }
        history
    }

    /// Current capacity
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Number of ephemeral entries
    pub fn ephemeral_len(&self) -> usize {
        self.ephemeral.len()
    }

    /// Number of durable snippets
    pub fn durable_len(&self) -> usize {
        self.durable.len()
    }

    /// Ephemeral entry at `index` (0 = oldest)
    pub fn ephemeral(&self, index: usize) -> Option<&str> {
        self.ephemeral.get(index).map(String::as_str)
    }

    /// Durable snippet at `index`
    pub fn durable(&self, index: usize) -> Option<&str> {
        self.durable.get(index).map(String::as_str)
    }

    /// Durable snippets in insertion order
    pub fn durable_items(&self) -> &[String] {
        &self.durable
    }

    /// Newest ephemeral entry
    pub fn latest(&self) -> Option<&str> {
        self.ephemeral.back().map(String::as_str)
    }

    /// Record a copied value.
    ///
    /// Returns `true` when the value was appended. Blank input and a repeat
    /// of the newest entry are ignored.
    pub fn record_copy(&mut self, text: &str) -> bool {
        let Some(value) = normalize_text(text) else {
            return false;
        };

        if self.latest() == Some(value.as_str()) {
            return false;
        }

        self.ephemeral.push_back(value);
        self.evict_overflow();
        true
    }

    /// Take the next entry according to `mode`, using the thread RNG for
    /// [`PasteMode::Random`].
    pub fn consume(&mut self, mode: PasteMode) -> Option<String> {
        self.consume_with(mode, &mut rand::thread_rng())
    }

    /// Take the next entry according to `mode`.
    ///
    /// Stack and queue remove what they return; random and default leave the
    /// buffer untouched. The durable set is never read here.
    pub fn consume_with<R: Rng + ?Sized>(&mut self, mode: PasteMode, rng: &mut R) -> Option<String> {
        if self.ephemeral.is_empty() {
            return None;
        }

        match mode {
            PasteMode::Stack => self.ephemeral.pop_back(),
            PasteMode::Queue => self.ephemeral.pop_front(),
            PasteMode::Random => {
                let index = rng.gen_range(0..self.ephemeral.len());
                self.ephemeral.get(index).cloned()
            }
            PasteMode::Default => self.ephemeral.back().cloned(),
        }
    }

    /// Undo a [`ClipboardHistory::consume`]: put `text` back where `mode`
    /// took it from. Modes that do not remove are a no-op.
    pub fn restore(&mut self, mode: PasteMode, text: String) {
        match mode {
            PasteMode::Stack => self.ephemeral.push_back(text),
            PasteMode::Queue => self.ephemeral.push_front(text),
            PasteMode::Random | PasteMode::Default => return,
        }
        self.evict_overflow();
    }

    /// Drop every ephemeral entry
    pub fn clear_ephemeral(&mut self) {
        self.ephemeral.clear();
    }

    /// Independent copy of both collections
    pub fn snapshot(&self) -> HistoryState {
        HistoryState {
            ephemeral: self.ephemeral.iter().cloned().collect(),
            durable: self.durable.clone(),
        }
    }

    /// Pin a value. Returns `true` when the durable set changed.
    pub fn add_durable(&mut self, text: &str) -> bool {
        let Some(value) = normalize_text(text) else {
            return false;
        };

        if self.durable.contains(&value) {
            return false;
        }

        self.durable.push(value);
        true
    }

    /// Unpin the snippet at `index`; out of range is ignored.
    pub fn remove_durable(&mut self, index: usize) -> Option<String> {
        if index < self.durable.len() {
            Some(self.durable.remove(index))
        } else {
            None
        }
    }

    /// Change the capacity, evicting the oldest entries if the buffer is now
    /// over the limit. Returns how many entries were evicted.
    pub fn set_capacity(&mut self, capacity: Capacity) -> usize {
        self.capacity = capacity;
        self.evict_overflow()
    }

    fn evict_overflow(&mut self) -> usize {
        let mut evicted = 0;
        while self.ephemeral.len() > self.capacity.get() {
            self.ephemeral.pop_front();
            evicted += 1;
        }
        evicted
    }
}
