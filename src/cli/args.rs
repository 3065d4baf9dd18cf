//! CLI argument definitions using Clap

use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::domain::history::{Capacity, PasteMode};
use crate::domain::hotkey::Accelerator;
use crate::infrastructure::ClipboardTool;

/// Clip Buddy - clipboard history with stack, queue and random paste modes
#[derive(Parser, Debug)]
#[command(name = "clip-buddy")]
#[command(version)]
#[command(about = "Clipboard history daemon with stack, queue and random paste modes")]
#[command(long_about = None)]
pub struct Cli {
    /// Paste mode at startup (default, stack, queue, random)
    #[arg(short = 'm', long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Number of recent entries to keep
    #[arg(short = 'c', long, value_name = "N", allow_negative_numbers = true)]
    pub max_history_items: Option<i64>,

    /// Trigger hotkey (e.g., Control+Alt+V)
    #[arg(short = 'k', long, value_name = "ACCELERATOR")]
    pub hotkey: Option<String>,

    /// Clipboard sampling period in milliseconds
    #[arg(long, value_name = "MS")]
    pub poll_interval_ms: Option<u64>,

    /// Show the history popup as a desktop notification
    #[arg(short = 'n', long)]
    pub notify: bool,

    /// Clipboard backend on Linux (arboard, wl-clipboard)
    #[arg(long, value_name = "TOOL")]
    pub clipboard_tool: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Send commands to running daemon
    Daemon {
        #[command(subcommand)]
        action: DaemonAction,
    },
}

/// Daemon control actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum DaemonAction {
    /// Fire the trigger (bind your hotkey to this)
    Trigger,
    /// Show daemon status
    Status,
    /// List recent entries and pinned snippets
    List,
    /// Copy a recent entry by index (0 is the oldest)
    SelectRecent {
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// Copy a pinned snippet by index
    SelectPinned {
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// Pin the current clipboard text
    Pin,
    /// Remove a pinned snippet by index
    Unpin {
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// Drop all recent entries
    Clear,
    /// Switch paste mode (default, stack, queue, random)
    Mode { mode: String },
    /// Show the daemon's effective settings
    Settings,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed daemon options
#[derive(Debug, Clone)]
pub struct DaemonOptions {
    pub mode: PasteMode,
    pub hotkey: Accelerator,
    pub capacity: Capacity,
    pub poll_interval: Duration,
    pub notify: bool,
    pub clipboard_tool: ClipboardTool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "hotkey",
    "max_history_items",
    "mode",
    "poll_interval_ms",
    "notify",
    "linux.clipboard_tool",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
