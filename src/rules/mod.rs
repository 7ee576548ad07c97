// src/rules/mod.rs
//! Per-category style checks.
//!
//! Each check is a pure function of a node and a [`CheckContext`] and yields
//! at most one [`ErrorRecord`]. The engine composes them per node.

mod effects;
mod fill;
mod radius;
mod stroke;
mod typography;

use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, info};

use crate::config::{Config, Profile, RuleConfig};
use crate::node::InspectableNode;
use crate::theme::Theme;
use crate::types::{ErrorRecord, NodeErrors};

pub use effects::check_effects;
pub use fill::{check_fills, is_overlay};
pub use radius::check_radius;
pub use stroke::check_strokes;
pub use typography::check_type;

/// Everything a check may consult besides the node itself.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    pub profile: Profile,
    pub rules: &'a RuleConfig,
    pub theme: &'a Theme,
}

type Check = fn(&InspectableNode, &CheckContext) -> Option<ErrorRecord>;

const CHECKS: [(&str, Check); 5] = [
    ("fill", check_fills),
    ("stroke", check_strokes),
    ("radius", check_radius),
    ("effects", check_effects),
    ("text", check_type),
];

/// Runs every check against one node.
#[must_use]
pub fn evaluate(node: &InspectableNode, ctx: &CheckContext) -> Vec<ErrorRecord> {
    CHECKS
        .iter()
        .filter_map(|(name, check)| {
            let hit = check(node, ctx);
            if let Some(err) = &hit {
                debug!(node = %node.id, check = name, value = %err.value, "{}", err.message);
            }
            hit
        })
        .collect()
}

/// Evaluates a batch of nodes, keeping input order.
#[must_use]
pub fn evaluate_all(nodes: &[InspectableNode], ctx: &CheckContext) -> Vec<NodeErrors> {
    nodes
        .par_iter()
        .map(|node| NodeErrors {
            id: node.id.clone(),
            name: node.name.clone(),
            errors: evaluate(node, ctx),
        })
        .collect()
}

/// Owns the configuration and token table for repeated scans.
pub struct RuleEngine {
    config: Config,
    theme: Theme,
}

impl RuleEngine {
    #[must_use]
    pub fn new(config: Config, theme: Theme) -> Self {
        Self { config, theme }
    }

    /// Switches the active profile; applies to the next scan.
    pub fn set_profile(&mut self, profile: Profile) {
        self.config.profile = profile;
    }

    #[must_use]
    pub fn context(&self) -> CheckContext<'_> {
        CheckContext {
            profile: self.config.profile,
            rules: &self.config.rules,
            theme: &self.theme,
        }
    }

    #[must_use]
    pub fn scan(&self, nodes: &[InspectableNode]) -> Vec<NodeErrors> {
        let results = evaluate_all(nodes, &self.context());
        let total: usize = results.iter().map(|n| n.errors.len()).sum();
        info!(
            nodes = nodes.len(),
            errors = total,
            profile = %self.config.profile,
            "scan complete"
        );
        results
    }
}
