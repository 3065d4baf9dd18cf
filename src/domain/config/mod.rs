//! Configuration domain

pub mod app_config;

pub use app_config::{AppConfig, LinuxConfig, DEFAULT_POLL_INTERVAL_MS};
