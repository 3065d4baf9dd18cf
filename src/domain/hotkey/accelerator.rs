//! Hotkey accelerator value object
//!
//! Accepts Electron-style accelerator strings such as `Control+Alt+V` or
//! `CommandOrControl+Shift+Space` and normalizes them to a canonical form.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::AcceleratorParseError;

/// Default accelerator on macOS
pub const DEFAULT_HOTKEY_MACOS: &str = "Command+Alt+V";

/// Default accelerator elsewhere
pub const DEFAULT_HOTKEY: &str = "Control+Alt+V";

/// Named keys accepted in addition to single characters and F1-F24
const NAMED_KEYS: &[&str] = &[
    "Space",
    "Tab",
    "Enter",
    "Escape",
    "Backspace",
    "Insert",
    "Delete",
    "Home",
    "End",
    "PageUp",
    "PageDown",
    "Up",
    "Down",
    "Left",
    "Right",
    "Plus",
];

/// Modifier keys, in canonical display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modifier {
    CommandOrControl,
    Control,
    Super,
    Alt,
    Shift,
}

impl Modifier {
    /// Canonical name used when formatting
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CommandOrControl => "CommandOrControl",
            Self::Control => "Control",
            Self::Super => "Super",
            Self::Alt => "Alt",
            Self::Shift => "Shift",
        }
    }

    fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "commandorcontrol" | "cmdorctrl" => Some(Self::CommandOrControl),
            "control" | "ctrl" => Some(Self::Control),
            "super" | "meta" | "command" | "cmd" | "win" => Some(Self::Super),
            "alt" | "option" | "altgr" => Some(Self::Alt),
            "shift" => Some(Self::Shift),
            _ => None,
        }
    }
}

/// Parsed global hotkey
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Accelerator {
    modifiers: Vec<Modifier>,
    key: String,
}

impl Accelerator {
    /// Platform default accelerator
    pub fn platform_default() -> Self {
        let raw = if cfg!(target_os = "macos") {
            DEFAULT_HOTKEY_MACOS
        } else {
            DEFAULT_HOTKEY
        };
        Self::from_str(raw).unwrap_or_else(|_| Self {
            modifiers: vec![Modifier::Control, Modifier::Alt],
            key: "V".to_string(),
        })
    }

    /// Modifiers in canonical order
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Non-modifier key
    pub fn key(&self) -> &str {
        &self.key
    }

    fn parse_key(token: &str) -> Option<String> {
        let mut chars = token.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if ch.is_ascii_alphanumeric() {
                return Some(ch.to_ascii_uppercase().to_string());
            }
            if ch.is_ascii_punctuation() {
                return Some(ch.to_string());
            }
            return None;
        }

        let lower = token.to_lowercase();
        if let Some(number) = lower.strip_prefix('f') {
            if let Ok(n) = number.parse::<u8>() {
                if (1..=24).contains(&n) {
                    return Some(format!("F{}", n));
                }
            }
        }

        let alias = match lower.as_str() {
            "return" => "enter",
            "esc" => "escape",
            "del" => "delete",
            "arrowup" => "up",
            "arrowdown" => "down",
            "arrowleft" => "left",
            "arrowright" => "right",
            other => other,
        };

        NAMED_KEYS
            .iter()
            .find(|name| name.to_lowercase() == alias)
            .map(|name| name.to_string())
    }
}

impl FromStr for Accelerator {
    type Err = AcceleratorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = |reason: &str| AcceleratorParseError {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let tokens: Vec<&str> = s.trim().split('+').map(str::trim).collect();
        if tokens.iter().any(|t| t.is_empty()) {
            return Err(error("Expected parts joined by '+', e.g. Control+Alt+V"));
        }

        let (key_token, modifier_tokens) = tokens
            .split_last()
            .ok_or_else(|| error("Missing key"))?;

        let mut modifiers = Vec::with_capacity(modifier_tokens.len());
        for token in modifier_tokens {
            let modifier = Modifier::parse(token)
                .ok_or_else(|| error(&format!("Unknown modifier '{}'", token)))?;
            if modifiers.contains(&modifier) {
                return Err(error(&format!("Duplicate modifier '{}'", token)));
            }
            modifiers.push(modifier);
        }
        modifiers.sort();

        if Modifier::parse(key_token).is_some() {
            return Err(error("Accelerator must end with a non-modifier key"));
        }

        let key = Self::parse_key(key_token)
            .ok_or_else(|| error(&format!("Unknown key '{}'", key_token)))?;

        Ok(Self { modifiers, key })
    }
}

impl fmt::Display for Accelerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{}+", modifier.as_str())?;
        }
        write!(f, "{}", self.key)
    }
}
