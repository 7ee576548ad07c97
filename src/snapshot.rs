// src/snapshot.rs
//! Loads node snapshots exported by the host.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use tracing::{debug, warn};

use crate::error::{DesignLintError, Result};
use crate::node::InspectableNode;

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotFile {
    Bare(Vec<InspectableNode>),
    Wrapped { nodes: Vec<InspectableNode> },
}

/// Parses one snapshot: a JSON array of nodes or `{ "nodes": [...] }`.
///
/// # Errors
/// Returns error if the JSON matches neither shape.
pub fn parse_nodes(content: &str) -> Result<Vec<InspectableNode>> {
    let file: SnapshotFile = serde_json::from_str(content)?;
    Ok(match file {
        SnapshotFile::Bare(nodes) | SnapshotFile::Wrapped { nodes } => nodes,
    })
}

/// Loads nodes from files and directories, in path order.
/// Directories are walked for `*.json` files.
///
/// # Errors
/// Returns error if a file cannot be read or parsed.
pub fn load_nodes(paths: &[PathBuf]) -> Result<Vec<InspectableNode>> {
    let mut nodes = Vec::new();
    for file in expand(paths)? {
        let content = fs::read_to_string(&file).map_err(|source| DesignLintError::Io {
            source,
            path: file.clone(),
        })?;
        let parsed = parse_nodes(&content).map_err(|e| match e {
            DesignLintError::Json { source, .. } => DesignLintError::Json {
                source,
                path: file.clone(),
            },
            other => other,
        })?;
        debug!(path = %file.display(), nodes = parsed.len(), "loaded snapshot");
        nodes.extend(parsed);
    }
    Ok(nodes)
}

fn expand(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found = Vec::new();
            for entry in WalkDir::new(path) {
                let entry = entry?;
                if entry.file_type().is_file() && is_json(entry.path()) {
                    found.push(entry.into_path());
                }
            }
            if found.is_empty() {
                warn!(path = %path.display(), "no .json snapshots in directory");
            }
            found.sort();
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}
