// src/theme.rs
//! Approved design-token table.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::error::{DesignLintError, Result};

#[derive(Deserialize)]
#[serde(untagged)]
enum ThemeEntries {
    List(Vec<String>),
    Status(HashMap<String, bool>),
}

#[derive(Deserialize)]
struct ThemeFile {
    theme: ThemeEntries,
}

/// Set of token ids a bound fill variable may reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    approved: HashSet<String>,
}

impl Theme {
    #[must_use]
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            approved: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses `{ "theme": [...] }` or `{ "theme": { "<id>": true } }`.
    ///
    /// # Errors
    /// Returns error if the JSON matches neither shape.
    pub fn from_json(content: &str) -> Result<Self> {
        let file: ThemeFile = serde_json::from_str(content)?;
        let approved = match file.theme {
            ThemeEntries::List(ids) => ids.into_iter().collect(),
            ThemeEntries::Status(map) => map
                .into_iter()
                .filter_map(|(id, ok)| ok.then_some(id))
                .collect(),
        };
        Ok(Self { approved })
    }

    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| DesignLintError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        Self::from_json(&content).map_err(|e| match e {
            DesignLintError::Json { source, .. } => DesignLintError::Json {
                source,
                path: path.to_path_buf(),
            },
            other => other,
        })
    }

    #[must_use]
    pub fn is_approved(&self, id: &str) -> bool {
        self.approved.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.approved.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.approved.is_empty()
    }
}
