// src/rules/typography.rs
//! Typography check.
//!
//! Unstyled text gets a "missing text style" finding. Styled text is still
//! checked under the `default` profile: any family outside the brand families
//! and the icon font is flagged even though a shared style is assigned.

use crate::color::format_number;
use crate::config::Profile;
use crate::node::{FontName, InspectableNode, Mixed, TextProps};
use crate::types::{Category, ErrorRecord};

use super::CheckContext;

const MISSING: &str = "Missing text style";

pub fn check_type(node: &InspectableNode, ctx: &CheckContext) -> Option<ErrorRecord> {
    let text = node.text.as_ref()?;

    let unstyled = matches!(&node.styles.text, Mixed::Uniform(id) if id.is_empty());
    if unstyled && node.visible && !is_icon_font(&text.font_name, ctx) {
        return Some(missing_style(node, text));
    }

    match ctx.profile {
        Profile::Default => {
            let Mixed::Uniform(font) = &text.font_name else {
                return Some(mixed_family(node));
            };
            let sanctioned = ctx.rules.brand_families.contains(&font.family)
                || font.family == ctx.rules.icon_font;
            (!sanctioned).then(|| {
                ErrorRecord::new(node, Category::Text, "Invalid text style", font.family.clone())
            })
        }
        Profile::Docv => text.font_name.is_mixed().then(|| mixed_family(node)),
    }
}

fn is_icon_font(font: &Mixed<FontName>, ctx: &CheckContext) -> bool {
    matches!(font, Mixed::Uniform(f) if f.family == ctx.rules.icon_font)
}

fn missing_style(node: &InspectableNode, text: &TextProps) -> ErrorRecord {
    let (Mixed::Uniform(font), Mixed::Uniform(size)) = (&text.font_name, &text.font_size) else {
        return ErrorRecord::new(node, Category::Text, MISSING, "Mixed sizes or families");
    };
    let line_height = text
        .line_height
        .as_uniform()
        .and_then(|lh| lh.value())
        .map_or_else(|| "Auto".to_string(), format_number);
    let value = format!(
        "{} {} / {} ({line_height} line-height)",
        font.family,
        font.style,
        format_number(*size)
    );
    ErrorRecord::new(node, Category::Text, MISSING, value)
}

fn mixed_family(node: &InspectableNode) -> ErrorRecord {
    ErrorRecord::new(
        node,
        Category::Text,
        "Mixed text style",
        "Mixed families (potentially can ignore)",
    )
}
