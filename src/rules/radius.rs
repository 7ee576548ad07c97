// src/rules/radius.rs
//! Corner radius check.

use crate::color::format_number;
use crate::node::{InspectableNode, Mixed};
use crate::types::{Category, ErrorRecord};

use super::CheckContext;

/// Flags a corner radius outside the approved set.
///
/// Uniform radii of 0 or equal to the node height (pill shapes) always pass,
/// as do radii bound to a design token. Per-corner radii report only the first
/// failing corner.
pub fn check_radius(node: &InspectableNode, ctx: &CheckContext) -> Option<ErrorRecord> {
    let radius = node.corner_radius.as_ref()?;

    if let Mixed::Uniform(r) = radius {
        if *r == 0.0 || (*r - node.height).abs() < f64::EPSILON {
            return None;
        }
    }

    if node.bound_variables.bottom_left_radius.is_some() {
        return None;
    }

    let (message, value) = match radius {
        Mixed::Mixed => first_bad_corner(node, ctx)?,
        Mixed::Uniform(r) if !ctx.rules.is_approved_radius(*r) => ("Incorrect border radius", *r),
        Mixed::Uniform(_) => return None,
    };

    Some(ErrorRecord::new(
        node,
        Category::Radius,
        message,
        format_number(value),
    ))
}

fn first_bad_corner(node: &InspectableNode, ctx: &CheckContext) -> Option<(&'static str, f64)> {
    let c = &node.corners;
    [
        ("Incorrect top left radius", c.top_left_radius),
        ("Incorrect top right radius", c.top_right_radius),
        ("Incorrect bottom left radius", c.bottom_left_radius),
        ("Incorrect bottom right radius", c.bottom_right_radius),
    ]
    .into_iter()
    .find(|(_, v)| !ctx.rules.is_approved_radius(*v))
}
