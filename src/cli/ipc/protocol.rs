//! Wire format for daemon control
//!
//! One JSON object per line in each direction. Requests are tagged by
//! `command`, responses by `status`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::oneshot;

use crate::domain::config::AppConfig;

/// Request sent by `clip-buddy daemon <action>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum DaemonRequest {
    Trigger,
    Status,
    GetState,
    SelectEphemeral { index: i64 },
    SelectDurable { index: i64 },
    AddDurableFromClipboard,
    RemoveDurable { index: i64 },
    ClearEphemeral,
    SetMode { mode: String },
    GetSettings,
    UpdateSettings { settings: AppConfig },
}

/// Daemon reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DaemonResponse {
    Ok {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<Value>,
    },
    Error {
        message: String,
    },
}

impl DaemonResponse {
    /// Success without a payload
    pub fn ok() -> Self {
        Self::Ok { data: None }
    }

    /// Success carrying `value`
    pub fn with_data<T: Serialize>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(data) => Self::Ok { data: Some(data) },
            Err(e) => Self::error(format!("failed to encode response: {}", e)),
        }
    }

    /// Failure with a message for the user
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Decode the payload as `T`
    pub fn into_data<T: DeserializeOwned>(self) -> Result<Option<T>, String> {
        match self {
            Self::Ok { data: None } => Ok(None),
            Self::Ok { data: Some(value) } => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| format!("unexpected response: {}", e)),
            Self::Error { message } => Err(message),
        }
    }
}

/// A request handed to the daemon loop together with its reply slot
#[derive(Debug)]
pub struct IpcMessage {
    pub request: DaemonRequest,
    pub reply: oneshot::Sender<DaemonResponse>,
}

/// Decode one request line
pub fn parse_request(line: &str) -> Result<DaemonRequest, String> {
    serde_json::from_str(line.trim()).map_err(|e| format!("invalid request: {}", e))
}

/// Encode a message as a single line, newline included
pub fn encode_line<T: Serialize>(message: &T) -> serde_json::Result<String> {
    let mut line = serde_json::to_string(message)?;
    line.push('\n');
    Ok(line)
}
