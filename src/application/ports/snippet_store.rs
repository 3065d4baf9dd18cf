//! Durable snippet storage port interface

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

/// Snippet storage errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Failed to read snippet file: {0}")]
    ReadFailed(String),

    #[error("Snippet file is malformed: {0}")]
    Malformed(String),

    #[error("Failed to write snippet file: {0}")]
    WriteFailed(String),
}

/// Port for persisting the ordered list of pinned snippets.
///
/// The store only serializes; it never deduplicates or validates.
#[async_trait]
pub trait SnippetStore: Send + Sync {
    /// Load the stored snippets.
    ///
    /// # Returns
    /// The stored list, or an empty list if nothing has been saved yet.
    /// A malformed file is reported as [`StoreError::Malformed`].
    async fn load(&self) -> Result<Vec<String>, StoreError>;

    /// Replace the stored snippets with `snippets`.
    async fn save(&self, snippets: &[String]) -> Result<(), StoreError>;

    /// Location of the backing file.
    fn path(&self) -> PathBuf;
}
