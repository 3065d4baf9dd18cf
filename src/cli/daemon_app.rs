//! Daemon app runner
//!
//! Wires the adapters into a [`ClipboardDaemon`] and runs a single event
//! loop over clipboard changes, IPC requests and shutdown signals. Each event
//! is handled to completion before the next is taken.

use std::process::ExitCode;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::application::ports::{
    Clipboard, ConfigStore, HotkeyRegistrar, PopupSurface, SnippetStore,
};
use crate::application::{
    ClipboardDaemon, ClipboardWatcher, DaemonConfig, DispatchOutcome, HistoryEngine,
};
use crate::domain::history::PasteMode;
use crate::infrastructure::{
    create_clipboard, create_notifier, create_surface, DesktopShortcutRegistrar,
    JsonSnippetStore, XdgConfigStore,
};

use super::app::{EXIT_ERROR, EXIT_SUCCESS};
use super::args::DaemonOptions;
use super::ipc::{create_ipc_server, DaemonRequest, DaemonResponse, IpcMessage};
#[cfg(unix)]
use super::pid_file::{PidFile, PidFileError};
use super::presenter::Presenter;
use super::signals::DaemonSignalHandler;

/// Run daemon mode
pub async fn run_daemon(options: DaemonOptions) -> ExitCode {
    let presenter = Presenter::new();

    #[cfg(unix)]
    let pid_file = {
        let pid_file = PidFile::new();
        if let Err(e) = pid_file.acquire() {
            match e {
                PidFileError::AlreadyRunning(pid) => {
                    presenter.error(&format!("Another daemon is already running (PID: {})", pid));
                }
                _ => presenter.error(&e.to_string()),
            }
            return ExitCode::from(EXIT_ERROR);
        }
        pid_file
    };

    let mut signals = match DaemonSignalHandler::new() {
        Ok(s) => s,
        Err(e) => {
            presenter.error(&format!("Failed to setup signal handler: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Adapters
    let clipboard: Arc<Box<dyn Clipboard>> = Arc::new(create_clipboard(options.clipboard_tool));
    let surface = create_surface(options.notify, create_notifier());
    let engine = HistoryEngine::create(JsonSnippetStore::new(), options.capacity).await;

    let mut daemon = ClipboardDaemon::new(
        engine,
        Arc::clone(&clipboard),
        surface,
        DesktopShortcutRegistrar::new(),
        XdgConfigStore::new(),
        DaemonConfig {
            mode: options.mode,
            hotkey: options.hotkey.clone(),
        },
    );

    if let Err(e) = daemon.register_hotkey() {
        presenter.warn(&format!("{}. Triggers are disabled.", e));
    }

    // Clipboard watcher
    let (change_tx, mut changes) = mpsc::channel(32);
    let mut watcher = ClipboardWatcher::new(clipboard, options.poll_interval);
    watcher.start(change_tx).await;

    // IPC server
    let mut server = create_ipc_server();
    if let Err(e) = server.bind() {
        presenter.error(&format!("Failed to bind {}: {}", server.path(), e));
        watcher.stop();
        return ExitCode::from(EXIT_ERROR);
    }
    let endpoint = server.path();
    let (request_tx, mut requests) = mpsc::channel::<IpcMessage>(16);
    let server_task = tokio::spawn(async move {
        if let Err(e) = server.run(request_tx).await {
            error!(error = %e, "IPC server stopped");
        }
    });

    presenter.info(&format!(
        "Clip Buddy running | PID: {} | Socket: {} | Mode: {} | Hotkey: {}",
        std::process::id(),
        endpoint,
        options.mode,
        options.hotkey
    ));

    loop {
        tokio::select! {
            Some(change) = changes.recv() => {
                daemon.handle_clipboard_change(change).await;
            }
            Some(message) = requests.recv() => {
                let response = handle_request(&mut daemon, message.request).await;
                if message.reply.send(response).is_err() {
                    debug!("IPC client went away before the reply");
                }
            }
            signal = signals.recv() => {
                info!(?signal, "Shutting down");
                break;
            }
        }
    }

    // Teardown: watcher first so no change arrives mid-shutdown
    watcher.stop();
    server_task.abort();
    let _ = server_task.await;
    daemon.shutdown().await;

    #[cfg(unix)]
    if let Err(e) = pid_file.release() {
        presenter.warn(&e.to_string());
    }

    presenter.info("Daemon stopped");
    ExitCode::from(EXIT_SUCCESS)
}

/// Short name reported to `daemon trigger`
fn trigger_result(outcome: Option<&DispatchOutcome>) -> &'static str {
    match outcome {
        None => "ignored",
        Some(DispatchOutcome::ToggledPopup) => "toggled_popup",
        Some(DispatchOutcome::Pasted(_)) => "pasted",
        Some(DispatchOutcome::CopyFailed(_)) => "copy_failed",
        Some(DispatchOutcome::Empty) => "empty",
    }
}

/// Apply one IPC request to the daemon
pub async fn handle_request<S, C, P, H, K>(
    daemon: &mut ClipboardDaemon<S, C, P, H, K>,
    request: DaemonRequest,
) -> DaemonResponse
where
    S: SnippetStore,
    C: Clipboard,
    P: PopupSurface,
    H: HotkeyRegistrar,
    K: ConfigStore,
{
    debug!(?request, "IPC request");

    match request {
        DaemonRequest::Trigger => {
            let outcome = daemon.handle_trigger().await;
            DaemonResponse::with_data(&trigger_result(outcome.as_ref()))
        }
        DaemonRequest::Status => DaemonResponse::with_data(&daemon.status()),
        DaemonRequest::GetState => DaemonResponse::with_data(&daemon.get_state()),
        DaemonRequest::SelectEphemeral { index } => {
            DaemonResponse::with_data(&daemon.select_ephemeral(index).await)
        }
        DaemonRequest::SelectDurable { index } => {
            DaemonResponse::with_data(&daemon.select_durable(index).await)
        }
        DaemonRequest::AddDurableFromClipboard => {
            DaemonResponse::with_data(&daemon.add_durable_from_clipboard().await.changed())
        }
        DaemonRequest::RemoveDurable { index } => {
            DaemonResponse::with_data(&daemon.remove_durable(index).await.changed())
        }
        DaemonRequest::ClearEphemeral => {
            daemon.clear_ephemeral().await;
            DaemonResponse::ok()
        }
        DaemonRequest::SetMode { mode } => match mode.parse::<PasteMode>() {
            Ok(mode) => {
                daemon.set_mode(mode);
                DaemonResponse::with_data(&mode)
            }
            Err(e) => DaemonResponse::error(e.to_string()),
        },
        DaemonRequest::GetSettings => DaemonResponse::with_data(&daemon.get_settings().await),
        DaemonRequest::UpdateSettings { settings } => {
            match daemon.update_settings(settings).await {
                Ok(merged) => DaemonResponse::with_data(&merged),
                Err(e) => DaemonResponse::error(e.to_string()),
            }
        }
    }
}
