// src/color.rs
//! Color and value normalization shared by the checks.

use crate::node::{Color, ColorStop, Paint, PaintKind};

/// Converts a `0.0..=1.0` channel to a byte, rounding to nearest.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn channel_to_byte(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Lowercase `#rrggbb`, alpha ignored.
#[must_use]
pub fn to_hex(color: &Color) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        channel_to_byte(color.r),
        channel_to_byte(color.g),
        channel_to_byte(color.b)
    )
}

/// Renders a number the way the host UI prints it (`16`, `1.5`, never `-0`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Rounds to one decimal place.
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Human-readable description of a single paint.
#[must_use]
pub fn describe_paint(paint: &Paint) -> String {
    match &paint.kind {
        PaintKind::Solid { color } => to_hex(color),
        PaintKind::Image { image_hash } => format!("Image - {image_hash}"),
        PaintKind::Video => "Video Fill".to_string(),
        PaintKind::GradientLinear { gradient_stops }
        | PaintKind::GradientRadial { gradient_stops }
        | PaintKind::GradientAngular { gradient_stops }
        | PaintKind::GradientDiamond { gradient_stops } => {
            format!("{} {}", paint.kind.tag(), join_stops(gradient_stops))
        }
    }
}

/// Describes the first paint of a list; later paints are not reported.
#[must_use]
pub fn describe_first(paints: &[Paint]) -> Option<String> {
    paints.first().map(describe_paint)
}

fn join_stops(stops: &[ColorStop]) -> String {
    stops
        .iter()
        .map(|s| to_hex(&s.color))
        .collect::<Vec<_>>()
        .join(",")
}
