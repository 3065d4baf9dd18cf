//! Daemon command handler - sends commands to running daemon via IPC

use crate::application::DaemonStatus;
use crate::domain::config::AppConfig;
use crate::domain::history::{entry_label, HistoryState, PasteMode};

use super::args::{DaemonAction, VALID_CONFIG_KEYS};
use super::config_cmd::config_value;
use super::ipc::{create_ipc_client, DaemonRequest, DaemonResponse, IpcClient};
use super::presenter::Presenter;

/// Handle daemon subcommand
pub async fn handle_daemon_command(
    action: DaemonAction,
    presenter: &Presenter,
) -> Result<(), String> {
    let client = create_ipc_client();
    run_action(client.as_ref(), action, presenter).await
}

/// IPC request for a CLI action
pub fn request_for(action: &DaemonAction) -> DaemonRequest {
    match action {
        DaemonAction::Trigger => DaemonRequest::Trigger,
        DaemonAction::Status => DaemonRequest::Status,
        DaemonAction::List => DaemonRequest::GetState,
        DaemonAction::SelectRecent { index } => DaemonRequest::SelectEphemeral { index: *index },
        DaemonAction::SelectPinned { index } => DaemonRequest::SelectDurable { index: *index },
        DaemonAction::Pin => DaemonRequest::AddDurableFromClipboard,
        DaemonAction::Unpin { index } => DaemonRequest::RemoveDurable { index: *index },
        DaemonAction::Clear => DaemonRequest::ClearEphemeral,
        DaemonAction::Mode { mode } => DaemonRequest::SetMode { mode: mode.clone() },
        DaemonAction::Settings => DaemonRequest::GetSettings,
    }
}

async fn run_action(
    client: &dyn IpcClient,
    action: DaemonAction,
    presenter: &Presenter,
) -> Result<(), String> {
    if !client.is_daemon_running() {
        return Err("No daemon running. Start it with: clip-buddy".to_string());
    }

    // Validate locally so a typo never reaches the daemon
    if let DaemonAction::Mode { mode } = &action {
        mode.parse::<PasteMode>().map_err(|e| e.to_string())?;
    }

    let response = client
        .request(&request_for(&action))
        .await
        .map_err(|e| format!("Failed to communicate with daemon: {}", e))?;

    present(action, response, presenter)
}

fn present(action: DaemonAction, response: DaemonResponse, presenter: &Presenter) -> Result<(), String> {
    match action {
        DaemonAction::Trigger => {
            let result: Option<String> = response.into_data()?;
            let result = result.unwrap_or_default();
            if result == "ignored" {
                presenter.warn("Trigger ignored: hotkey is not registered");
            } else {
                presenter.info(&format!("Trigger: {}", result.replace('_', " ")));
            }
        }
        DaemonAction::Status => {
            let status: DaemonStatus = response
                .into_data()?
                .ok_or_else(|| "Daemon sent no status".to_string())?;
            presenter.daemon_status(&status);
        }
        DaemonAction::List => {
            let state: HistoryState = response.into_data()?.unwrap_or_default();
            presenter.history(&state);
        }
        DaemonAction::SelectRecent { index } | DaemonAction::SelectPinned { index } => {
            let copied: Option<Option<String>> = response.into_data()?;
            match copied.flatten() {
                Some(text) => presenter.success(&format!("Copied: {}", entry_label(&text))),
                None => presenter.warn(&format!("No entry at index {}", index)),
            }
        }
        DaemonAction::Pin => {
            if response.into_data::<bool>()?.unwrap_or(false) {
                presenter.success("Pinned clipboard text");
            } else {
                presenter.warn("Nothing pinned (clipboard empty or already pinned)");
            }
        }
        DaemonAction::Unpin { index } => {
            if response.into_data::<bool>()?.unwrap_or(false) {
                presenter.success(&format!("Unpinned snippet {}", index));
            } else {
                presenter.warn(&format!("No pinned snippet at index {}", index));
            }
        }
        DaemonAction::Clear => {
            response.into_data::<()>()?;
            presenter.success("Cleared recent history");
        }
        DaemonAction::Mode { .. } => {
            let mode: Option<PasteMode> = response.into_data()?;
            if let Some(mode) = mode {
                presenter.success(&format!("Mode: {}", mode.label()));
            }
        }
        DaemonAction::Settings => {
            let settings: AppConfig = response.into_data()?.unwrap_or_default();
            for key in VALID_CONFIG_KEYS {
                let value = config_value(&settings, key).unwrap_or_else(|| "(not set)".to_string());
                presenter.key_value(key, &value);
            }
        }
    }

    Ok(())
}
