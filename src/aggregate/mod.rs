// src/aggregate/mod.rs
//! Folds per-node findings into counted bulk errors.
//!
//! Ignored findings are removed first, per node and by exact value. Surviving
//! findings are grouped by `(category, message, value)`; the result is sorted
//! by count, descending, with ties kept in first-encounter order.

mod filter;

pub use filter::{CategoryFilter, FilterChip};

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::types::{BulkError, Category, ErrorRecord, IgnoredError, NodeErrors};

/// Grouping key for bulk errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BulkKey {
    pub category: Category,
    pub message: String,
    pub value: String,
}

impl From<&ErrorRecord> for BulkKey {
    fn from(e: &ErrorRecord) -> Self {
        Self {
            category: e.category,
            message: e.message.clone(),
            value: e.value.clone(),
        }
    }
}

/// Output of [`aggregate`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct AggregateReport {
    /// Bulk errors, most frequent first.
    pub bulk: Vec<BulkError>,
    /// Nodes that still have at least one non-ignored finding.
    pub nodes: Vec<NodeErrors>,
}

impl AggregateReport {
    /// Total surviving per-node findings.
    #[must_use]
    pub fn total_errors(&self) -> usize {
        self.nodes.iter().map(|n| n.errors.len()).sum()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.bulk.is_empty()
    }
}

/// Node id → ignored values on that node.
#[derive(Debug, Default)]
pub struct IgnoreIndex<'a> {
    by_node: HashMap<&'a str, HashSet<&'a str>>,
}

impl<'a> IgnoreIndex<'a> {
    #[must_use]
    pub fn new(ignored: &'a [IgnoredError]) -> Self {
        let mut by_node: HashMap<&str, HashSet<&str>> = HashMap::new();
        for entry in ignored {
            by_node
                .entry(entry.node_id.as_str())
                .or_default()
                .insert(entry.value.as_str());
        }
        Self { by_node }
    }

    #[must_use]
    pub fn is_ignored(&self, error: &ErrorRecord) -> bool {
        self.by_node
            .get(error.node_id.as_str())
            .is_some_and(|values| values.contains(error.value.as_str()))
    }
}

/// Incremental bulk-error builder.
#[derive(Debug, Default)]
pub struct BulkAggregator {
    index: HashMap<BulkKey, usize>,
    bulk: Vec<BulkError>,
    nodes: Vec<NodeErrors>,
}

impl BulkAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one node's findings, minus the ignored ones.
    pub fn ingest(&mut self, node: &NodeErrors, ignored: &IgnoreIndex) {
        let errors: Vec<ErrorRecord> = node
            .errors
            .iter()
            .filter(|e| !ignored.is_ignored(e))
            .cloned()
            .collect();
        if errors.is_empty() {
            return;
        }

        for error in &errors {
            self.fold(error);
        }
        self.nodes.push(NodeErrors {
            id: node.id.clone(),
            name: node.name.clone(),
            errors,
        });
    }

    fn fold(&mut self, error: &ErrorRecord) {
        let key = BulkKey::from(error);
        if let Some(&slot) = self.index.get(&key) {
            let entry = &mut self.bulk[slot];
            entry.nodes.push(error.node_id.clone());
            entry.count += 1;
        } else {
            self.index.insert(key, self.bulk.len());
            self.bulk.push(BulkError::seed(error.clone()));
        }
    }

    #[must_use]
    pub fn finish(self) -> AggregateReport {
        let mut bulk = self.bulk;
        // `sort_by` is stable: equal counts keep first-encounter order.
        bulk.sort_by(|a, b| b.count.cmp(&a.count));
        AggregateReport {
            bulk,
            nodes: self.nodes,
        }
    }
}

/// Removes ignored findings and groups the rest into bulk errors.
#[must_use]
pub fn aggregate(nodes: &[NodeErrors], ignored: &[IgnoredError]) -> AggregateReport {
    let index = IgnoreIndex::new(ignored);
    let mut agg = BulkAggregator::new();
    for node in nodes {
        agg.ingest(node, &index);
    }
    agg.finish()
}

/// Every surviving finding that shares the bulk error's category and value.
/// The message is not compared.
#[must_use]
pub fn ignore_all<'a>(bulk: &BulkError, nodes: &'a [NodeErrors]) -> Vec<&'a ErrorRecord> {
    nodes
        .iter()
        .flat_map(|n| &n.errors)
        .filter(|e| e.category == bulk.error.category && e.value == bulk.error.value)
        .collect()
}
