// src/rules/fill.rs
//! Fill check, including token-bound fills and the overlay exemption.

use crate::color::{describe_first, round_to_tenth};
use crate::config::OverlaySignature;
use crate::node::{InspectableNode, Mixed, Paint, PaintKind};
use crate::types::{Category, ErrorRecord};

use super::CheckContext;

const MISSING: &str = "Missing fill style";

pub fn check_fills(node: &InspectableNode, ctx: &CheckContext) -> Option<ErrorRecord> {
    if let Some(vars) = &node.bound_variables.fills {
        if vars.iter().all(|v| ctx.theme.is_approved(&v.id)) {
            return None;
        }
        return Some(ErrorRecord::new(
            node,
            Category::Fill,
            "Wrong fill variable",
            "Replace fill variable",
        ));
    }

    let fills = match &node.fills {
        Mixed::Mixed => return Some(mixed(node)),
        Mixed::Uniform(fills) => fills,
    };
    let first = fills.first()?;
    if !node.visible {
        return None;
    }

    match &node.styles.fill {
        Mixed::Mixed => return Some(mixed(node)),
        Mixed::Uniform(id) if !id.is_empty() => return None,
        Mixed::Uniform(_) => {}
    }

    if first.is_media() || !first.visible {
        return None;
    }
    if is_overlay(first, ctx.rules.overlays.for_profile(ctx.profile)) {
        return None;
    }

    let value = describe_first(fills)?;
    Some(ErrorRecord::new(node, Category::Fill, MISSING, value))
}

/// True when a solid paint matches one of the sanctioned overlay signatures.
#[must_use]
pub fn is_overlay(paint: &Paint, signatures: &[OverlaySignature]) -> bool {
    let PaintKind::Solid { color } = &paint.kind else {
        return false;
    };
    signatures.iter().any(|sig| {
        let opacity_ok = sig
            .opacity
            .map_or(true, |o| round_to_tenth(paint.opacity) == round_to_tenth(o));
        #[allow(clippy::float_cmp)]
        let rgb_ok = color.r == sig.r && color.g == sig.g && color.b == sig.b;
        opacity_ok && rgb_ok
    })
}

fn mixed(node: &InspectableNode) -> ErrorRecord {
    ErrorRecord::new(node, Category::Fill, MISSING, "Mixed values")
}
