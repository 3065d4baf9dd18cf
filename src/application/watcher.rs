//! Clipboard change detection
//!
//! [`ChangeDetector`] is the pure part: it remembers the last value seen and
//! decides whether a sample is a change. [`ClipboardWatcher`] runs it on a
//! fixed period against a [`Clipboard`] port and forwards changes over a
//! channel.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, warn};

use super::ports::Clipboard;

/// A new clipboard value observed by the watcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardChange {
    pub text: String,
}

/// Tracks the last observed clipboard value
#[derive(Debug, Clone, Default)]
pub struct ChangeDetector {
    last_seen: String,
}

impl ChangeDetector {
    /// Create a detector that treats `initial` as already seen
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            last_seen: initial.into(),
        }
    }

    /// Last value reported as a change (or the initial value)
    pub fn last_seen(&self) -> &str {
        &self.last_seen
    }

    /// Feed one sample. Returns a change only for a non-empty value that
    /// differs from the last one seen.
    pub fn observe(&mut self, sample: &str) -> Option<ClipboardChange> {
        if sample.is_empty() || sample == self.last_seen {
            return None;
        }

        self.last_seen = sample.to_string();
        Some(ClipboardChange {
            text: sample.to_string(),
        })
    }
}

/// Periodic clipboard sampler with an explicit start/stop lifecycle
pub struct ClipboardWatcher<C: Clipboard + ?Sized + 'static> {
    clipboard: Arc<C>,
    period: Duration,
    task: Option<JoinHandle<()>>,
}

impl<C: Clipboard + ?Sized + 'static> ClipboardWatcher<C> {
    /// Create a stopped watcher
    pub fn new(clipboard: Arc<C>, period: Duration) -> Self {
        Self {
            clipboard,
            period,
            task: None,
        }
    }

    /// Sampling period
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether the sampling task is alive
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Start sampling, sending each change to `tx`.
    ///
    /// Whatever is on the clipboard at start is taken as already seen.
    /// Calling this while running does nothing and returns `false`.
    pub async fn start(&mut self, tx: mpsc::Sender<ClipboardChange>) -> bool {
        if self.is_running() {
            debug!("Clipboard watcher already running");
            return false;
        }

        let initial = match self.clipboard.read().await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Initial clipboard read failed");
                String::new()
            }
        };

        let clipboard = Arc::clone(&self.clipboard);
        let period = self.period;
        let mut detector = ChangeDetector::new(initial);

        self.task = Some(tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // First tick completes immediately
            ticker.tick().await;

            loop {
                ticker.tick().await;

                let sample = match clipboard.read().await {
                    Ok(text) => text,
                    Err(e) => {
                        warn!(error = %e, "Clipboard polling failed");
                        continue;
                    }
                };

                if let Some(change) = detector.observe(&sample) {
                    if tx.send(change).await.is_err() {
                        debug!("Clipboard change receiver dropped, stopping watcher");
                        break;
                    }
                }
            }
        }));

        true
    }

    /// Stop sampling. No-op when not started.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl<C: Clipboard + ?Sized + 'static> Drop for ClipboardWatcher<C> {
    fn drop(&mut self) {
        self.stop();
    }
}
