// src/ignore.rs
//! File-backed store of ignored findings.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DesignLintError, Result};
use crate::types::IgnoredError;

#[derive(Debug, Clone, Default)]
pub struct IgnoreStore {
    path: Option<PathBuf>,
    entries: Vec<IgnoredError>,
}

impl IgnoreStore {
    /// In-memory store; `save` is a no-op.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Loads a JSON array of ignored findings. A missing file is an empty store.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn open(path: &Path) -> Result<Self> {
        let entries = if path.exists() {
            let content = fs::read_to_string(path).map_err(|source| DesignLintError::Io {
                source,
                path: path.to_path_buf(),
            })?;
            serde_json::from_str(&content).map_err(|source| DesignLintError::Json {
                source,
                path: path.to_path_buf(),
            })?
        } else {
            Vec::new()
        };
        debug!(path = %path.display(), count = entries.len(), "loaded ignored errors");
        Ok(Self {
            path: Some(path.to_path_buf()),
            entries,
        })
    }

    /// Adds entries not already present. Returns how many were new.
    pub fn extend<I: IntoIterator<Item = IgnoredError>>(&mut self, items: I) -> usize {
        let before = self.entries.len();
        for item in items {
            if !self.entries.contains(&item) {
                self.entries.push(item);
            }
        }
        self.entries.len() - before
    }

    /// Removes one decision. Returns true if it was present.
    pub fn remove(&mut self, item: &IgnoredError) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e != item);
        self.entries.len() != before
    }

    #[must_use]
    pub fn as_slice(&self) -> &[IgnoredError] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// # Errors
    /// Returns error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(path, json).map_err(|source| DesignLintError::Io {
            source,
            path: path.clone(),
        })
    }
}
