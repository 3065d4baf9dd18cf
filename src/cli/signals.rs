//! Shutdown signal handling for the daemon

use tokio::sync::mpsc;
use tracing::info;

/// Why the daemon loop should stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    /// SIGINT / Ctrl+C
    Interrupt,
    /// SIGTERM
    Terminate,
}

/// Daemon signal handler
///
/// Listens for OS shutdown signals (SIGINT/SIGTERM) and forwards them to
/// the daemon loop over a channel.
pub struct DaemonSignalHandler {
    receiver: mpsc::Receiver<ShutdownSignal>,
}

impl DaemonSignalHandler {
    /// Create a new handler and start listening for shutdown signals.
    #[cfg(unix)]
    pub fn new() -> Result<Self, std::io::Error> {
        use tokio::signal::unix::{signal, SignalKind};

        let (tx, rx) = mpsc::channel(4);

        let tx_int = tx.clone();
        let mut sigint = signal(SignalKind::interrupt())?;
        tokio::spawn(async move {
            while sigint.recv().await.is_some() {
                info!("Received SIGINT (shutdown)");
                if tx_int.send(ShutdownSignal::Interrupt).await.is_err() {
                    break;
                }
            }
        });

        let mut sigterm = signal(SignalKind::terminate())?;
        tokio::spawn(async move {
            while sigterm.recv().await.is_some() {
                info!("Received SIGTERM (shutdown)");
                if tx.send(ShutdownSignal::Terminate).await.is_err() {
                    break;
                }
            }
        });

        Ok(Self { receiver: rx })
    }

    /// Create a new handler and start listening for Ctrl+C.
    #[cfg(not(unix))]
    pub fn new() -> Result<Self, std::io::Error> {
        let (tx, rx) = mpsc::channel(4);

        tokio::spawn(async move {
            while tokio::signal::ctrl_c().await.is_ok() {
                info!("Received Ctrl+C (shutdown)");
                if tx.send(ShutdownSignal::Interrupt).await.is_err() {
                    break;
                }
            }
        });

        Ok(Self { receiver: rx })
    }

    /// Wait for the next signal
    pub async fn recv(&mut self) -> Option<ShutdownSignal> {
        self.receiver.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn handler_installs() {
        assert!(DaemonSignalHandler::new().is_ok());
    }

    #[test]
    fn signals_are_distinct() {
        assert_ne!(ShutdownSignal::Interrupt, ShutdownSignal::Terminate);
    }
}
