//! Settings storage port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for settings storage
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load settings from storage.
    ///
    /// # Returns
    /// The stored settings (fields are None when the file doesn't exist)
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Save settings to storage, replacing what is there.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Merge `partial` over the stored settings and save the result.
    ///
    /// # Returns
    /// The merged settings as written
    async fn update(&self, partial: &AppConfig) -> Result<AppConfig, ConfigError> {
        let current = self.load().await?;
        let merged = current.merge(partial.clone());
        self.save(&merged).await?;
        Ok(merged)
    }

    /// Get the settings file path.
    fn path(&self) -> PathBuf;

    /// Check if the settings file exists.
    fn exists(&self) -> bool;

    /// Initialize the settings file with defaults.
    /// Fails if file already exists.
    async fn init(&self) -> Result<(), ConfigError>;
}
