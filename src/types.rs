// src/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DesignLintError;
use crate::node::InspectableNode;

/// Style category a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fill,
    Stroke,
    Radius,
    Effects,
    Text,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Fill,
        Category::Stroke,
        Category::Radius,
        Category::Effects,
        Category::Text,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Stroke => "stroke",
            Self::Radius => "radius",
            Self::Effects => "effects",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DesignLintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DesignLintError::Other(format!("Unknown category '{s}'")))
    }
}

/// A single style violation on one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    #[serde(rename = "type")]
    pub category: Category,
    pub message: String,
    pub node_id: String,
    pub node_name: String,
    pub value: String,
}

impl ErrorRecord {
    #[must_use]
    pub fn new(
        node: &InspectableNode,
        category: Category,
        message: &str,
        value: impl Into<String>,
    ) -> Self {
        Self {
            category,
            message: message.to_string(),
            node_id: node.id.clone(),
            node_name: node.name.clone(),
            value: value.into(),
        }
    }
}

/// All findings for one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeErrors {
    pub id: String,
    pub name: String,
    pub errors: Vec<ErrorRecord>,
}

impl NodeErrors {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A user decision to suppress errors with `value` on `node_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IgnoredError {
    pub node_id: String,
    pub value: String,
}

impl From<&ErrorRecord> for IgnoredError {
    fn from(record: &ErrorRecord) -> Self {
        Self {
            node_id: record.node_id.clone(),
            value: record.value.clone(),
        }
    }
}

/// Identical findings folded across nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkError {
    /// First occurrence; its node is the representative one.
    #[serde(flatten)]
    pub error: ErrorRecord,
    pub nodes: Vec<String>,
    pub count: usize,
}

impl BulkError {
    #[must_use]
    pub fn seed(error: ErrorRecord) -> Self {
        let nodes = vec![error.node_id.clone()];
        Self {
            error,
            nodes,
            count: 1,
        }
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.error.category
    }
}
