// src/rules/stroke.rs
use crate::color::{describe_first, format_number};
use crate::node::{InspectableNode, Mixed};
use crate::types::{Category, ErrorRecord};

use super::CheckContext;

const MISSING: &str = "Missing stroke style";

/// Flags visible strokes without a shared stroke style.
/// Value format: `<paint> / <weight> / <ALIGN>`.
pub fn check_strokes(node: &InspectableNode, _ctx: &CheckContext) -> Option<ErrorRecord> {
    if node.strokes.is_empty() || node.bound_variables.strokes.is_some() {
        return None;
    }
    if !node.styles.stroke.is_empty() || !node.visible {
        return None;
    }

    let weight = match node.stroke_weight {
        Mixed::Mixed => {
            return Some(ErrorRecord::new(
                node,
                Category::Stroke,
                MISSING,
                "Mixed sizes or alignment",
            ))
        }
        Mixed::Uniform(w) => w,
    };

    let paint = describe_first(&node.strokes)?;
    let value = format!("{paint} / {} / {}", format_number(weight), node.stroke_align);
    Some(ErrorRecord::new(node, Category::Stroke, MISSING, value))
}
