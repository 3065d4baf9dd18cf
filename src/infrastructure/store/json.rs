//! JSON snippet store adapter

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::application::ports::{SnippetStore, StoreError};

/// On-disk layout of the snippets file
#[derive(Debug, Default, Serialize, Deserialize)]
struct SnippetFile {
    #[serde(default)]
    snippets: Vec<String>,
}

/// Snippet store backed by a pretty-printed JSON file in the XDG data dir
pub struct JsonSnippetStore {
    path: PathBuf,
}

impl JsonSnippetStore {
    /// Create a store at the default location
    pub fn new() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("clip-buddy");

        Self {
            path: data_dir.join("snippets.json"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse(content: &str) -> Result<Vec<String>, StoreError> {
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let file: SnippetFile =
            serde_json::from_str(content).map_err(|e| StoreError::Malformed(e.to_string()))?;
        Ok(file.snippets)
    }

    fn render(snippets: &[String]) -> Result<String, StoreError> {
        let file = SnippetFile {
            snippets: snippets.to_vec(),
        };
        serde_json::to_string_pretty(&file).map_err(|e| StoreError::WriteFailed(e.to_string()))
    }
}

impl Default for JsonSnippetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnippetStore for JsonSnippetStore {
    async fn load(&self) -> Result<Vec<String>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?;

        Self::parse(&content)
    }

    async fn save(&self, snippets: &[String]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        }

        let content = Self::render(snippets)?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }
}
