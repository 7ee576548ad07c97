// src/rules/effects.rs
//! Effects (shadows, blurs) check.

use crate::color::{format_number, to_hex};
use crate::node::{Effect, InspectableNode};
use crate::types::{Category, ErrorRecord};

use super::CheckContext;

/// Flags visible nodes carrying effects without a shared effect style.
/// The last effect in the list is reported as the current style.
pub fn check_effects(node: &InspectableNode, _ctx: &CheckContext) -> Option<ErrorRecord> {
    if !node.visible || !node.styles.effect.is_empty() {
        return None;
    }
    let current = node.effects.last()?;
    Some(ErrorRecord::new(
        node,
        Category::Effects,
        "Missing effects style",
        describe_effect(current),
    ))
}

/// `Drop Shadow #000000 4px X: 0, Y: 2` for shadows, `Layer Blur 4px` for blurs.
#[must_use]
pub fn describe_effect(effect: &Effect) -> String {
    let label = effect.kind.label();
    let radius = format_number(effect.radius);
    match effect.color {
        Some(color) => {
            let offset = effect.offset.unwrap_or_default();
            format!(
                "{label} {} {radius}px X: {}, Y: {}",
                to_hex(&color),
                format_number(offset.x),
                format_number(offset.y)
            )
        }
        None => format!("{label} {radius}px"),
    }
}
