//! Config command handler

use crate::application::ports::ConfigStore;
use crate::application::DaemonStatus;
use crate::domain::config::{AppConfig, LinuxConfig};
use crate::domain::error::ConfigError;
use crate::domain::history::{Capacity, PasteMode};
use crate::domain::hotkey::Accelerator;
use crate::infrastructure::ClipboardTool;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::ipc::{DaemonRequest, DaemonResponse, IpcClient};
use super::presenter::Presenter;

/// Keys a running daemon applies without a restart
const LIVE_KEYS: &[&str] = &["hotkey", "max_history_items", "mode"];

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    client: &dyn IpcClient,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => {
            handle_set(store, client, presenter, &key, &value).await
        }
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    client: &dyn IpcClient,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    let partial = partial_config(key, value)?;

    if LIVE_KEYS.contains(&key) && client.is_daemon_running() {
        let request = DaemonRequest::UpdateSettings {
            settings: partial.clone(),
        };
        match client.request(&request).await {
            Ok(DaemonResponse::Ok { .. }) => {
                if key == "hotkey" && daemon_hotkey_registered(client).await == Some(false) {
                    presenter.warn(&format!(
                        "{} = {} saved, but the running daemon could not register it; triggers are disabled",
                        key, value
                    ));
                } else {
                    presenter.success(&format!("{} = {} (applied to running daemon)", key, value));
                }
                return Ok(());
            }
            Ok(DaemonResponse::Error { message }) => {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message,
                });
            }
            Err(e) => {
                presenter.warn(&format!("Could not reach daemon ({}); saving to file only", e));
            }
        }
    }

    store.update(&partial).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

/// Whether the daemon holds its hotkey; `None` when it cannot be asked
async fn daemon_hotkey_registered(client: &dyn IpcClient) -> Option<bool> {
    let response = client.request(&DaemonRequest::Status).await.ok()?;
    let status: DaemonStatus = response.into_data().ok().flatten()?;
    Some(status.hotkey_registered)
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load().await?;
    match config_value(&config, key) {
        Some(v) => presenter.output(&v),
        None => presenter.output("(not set)"),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        let value = config_value(&config, key).unwrap_or_else(|| "(not set)".to_string());
        presenter.key_value(key, &value);
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        })
    }
}

/// Stored value for `key`, rendered for display
pub(crate) fn config_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "hotkey" => config.hotkey.clone(),
        "max_history_items" => config.max_history_items.map(|n| n.to_string()),
        "mode" => config.mode.clone(),
        "poll_interval_ms" => config.poll_interval_ms.map(|n| n.to_string()),
        "notify" => config.notify.map(|b| b.to_string()),
        "linux.clipboard_tool" => config.linux.as_ref().and_then(|l| l.clipboard_tool.clone()),
        _ => None,
    }
}

/// Validate `value` for `key` and build the single-field partial config
fn partial_config(key: &str, value: &str) -> Result<AppConfig, ConfigError> {
    check_key(key)?;

    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    let mut config = AppConfig::empty();
    match key {
        "hotkey" => {
            let accelerator = value
                .parse::<Accelerator>()
                .map_err(|e| invalid(e.to_string()))?;
            config.hotkey = Some(accelerator.to_string());
        }
        "max_history_items" => {
            let capacity = value.parse::<Capacity>().map_err(|e| invalid(e.to_string()))?;
            config.max_history_items = Some(capacity.get() as i64);
        }
        "mode" => {
            let mode = value.parse::<PasteMode>().map_err(|e| invalid(e.to_string()))?;
            config.mode = Some(mode.to_string());
        }
        "poll_interval_ms" => {
            let ms = value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| invalid("Value must be a positive number of milliseconds".to_string()))?;
            config.poll_interval_ms = Some(ms);
        }
        "notify" => {
            let flag = parse_bool(value)
                .map_err(|_| invalid("Value must be 'true' or 'false'".to_string()))?;
            config.notify = Some(flag);
        }
        "linux.clipboard_tool" => {
            let tool = value
                .parse::<ClipboardTool>()
                .map_err(|e| invalid(e.to_string()))?;
            config.linux = Some(LinuxConfig {
                clipboard_tool: Some(tool.to_string()),
            });
        }
        _ => return Err(invalid("Unsupported key".to_string())),
    }

    Ok(config)
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}
