//! Configuration loading and option resolution for the binary

use tracing::warn;

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, LinuxConfig};
use crate::domain::history::{Capacity, PasteMode};
use crate::domain::hotkey::Accelerator;
use crate::infrastructure::{ClipboardTool, XdgConfigStore};

use super::args::{Cli, DaemonOptions};

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Settings given on the command line
pub fn cli_overrides(cli: &Cli) -> AppConfig {
    AppConfig {
        hotkey: cli.hotkey.clone(),
        max_history_items: cli.max_history_items,
        mode: cli.mode.clone(),
        poll_interval_ms: cli.poll_interval_ms,
        notify: if cli.notify { Some(true) } else { None },
        linux: cli.clipboard_tool.clone().map(|tool| LinuxConfig {
            clipboard_tool: Some(tool),
        }),
    }
}

/// Load and merge configuration from file and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %store.path().display(), error = %e, "Ignoring unreadable config file");
            AppConfig::empty()
        }
    };

    // Merge: defaults < file < cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}

/// Validate merged settings into daemon options.
///
/// Unlike the `*_or_default` accessors, an invalid value here is an error
/// the user should see.
pub fn resolve_daemon_options(config: &AppConfig) -> Result<DaemonOptions, String> {
    let mode = match config.mode.as_deref() {
        Some(raw) => raw.parse::<PasteMode>().map_err(|e| e.to_string())?,
        None => PasteMode::default(),
    };

    let hotkey = match config.hotkey.as_deref() {
        Some(raw) => raw.parse::<Accelerator>().map_err(|e| e.to_string())?,
        None => Accelerator::platform_default(),
    };

    let capacity = match config.max_history_items {
        Some(n) => Capacity::new(n).map_err(|e| e.to_string())?,
        None => Capacity::default(),
    };

    let clipboard_tool = config
        .clipboard_tool_or_default()
        .parse::<ClipboardTool>()
        .map_err(|e| e.to_string())?;

    Ok(DaemonOptions {
        mode,
        hotkey,
        capacity,
        poll_interval: config.poll_interval_or_default(),
        notify: config.notify_or_default(),
        clipboard_tool,
    })
}
