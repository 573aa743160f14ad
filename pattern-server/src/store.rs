//! JSON documents kept as files in one directory.

use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::fs;

pub const PATTERN_INDEX_FILE: &str = "patterns-index.json";
pub const VALUES_FILE: &str = "values.json";
pub const GLOBAL_CONFIG_FILE: &str = "global-config.json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid pattern id {0:?}")]
    InvalidId(String),
    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: {}", .path.display(), .source)]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// File-backed document store. Writes replace whole files; there is no
/// locking, so concurrent writers race and the last one wins.
#[derive(Debug, Clone)]
pub struct PatternStore {
    root: PathBuf,
}

impl PatternStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `pattern-<id>.json`. Ids are limited to ASCII letters, digits, `-`
    /// and `_` so they can never name a file outside the root.
    pub fn pattern_file(id: &str) -> Result<String, StoreError> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidId(id.to_string()));
        }
        Ok(format!("pattern-{id}.json"))
    }

    pub async fn read(&self, file: &str) -> Result<Value, StoreError> {
        let path = self.root.join(file);
        let data = fs::read_to_string(&path)
            .await
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
        serde_json::from_str(&data).map_err(|source| StoreError::Json { path, source })
    }

    /// Read a document, substituting `fallback` for any failure.
    pub async fn read_or(&self, file: &str, fallback: Value) -> Value {
        match self.read(file).await {
            Ok(value) => value,
            Err(err) => {
                if !err.is_not_found() {
                    tracing::warn!(%err, "serving fallback document");
                }
                fallback
            }
        }
    }

    /// Write a document as two-space indented JSON.
    pub async fn write(&self, file: &str, value: &Value) -> Result<(), StoreError> {
        let path = self.root.join(file);
        let data = serde_json::to_string_pretty(value).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, data)
            .await
            .map_err(|source| StoreError::Io { path, source })?;
        tracing::info!(file, "document saved");
        Ok(())
    }

    pub async fn remove(&self, file: &str) -> Result<(), StoreError> {
        let path = self.root.join(file);
        fs::remove_file(&path)
            .await
            .map_err(|source| StoreError::Io { path, source })?;
        tracing::info!(file, "document removed");
        Ok(())
    }
}
