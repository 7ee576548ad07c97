// src/node.rs
//! Read-only snapshot of a host design node.
//!
//! The shapes mirror what the host document exposes for a node (camelCase
//! field names, `SOLID`/`GRADIENT_LINEAR` style tags). Properties the host can
//! report as "not uniform across the selection" are wrapped in [`Mixed`].

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire marker for a mixed property value.
pub const MIXED_SENTINEL: &str = "__mixed__";

/// A property that is either one concrete value or mixed.
#[derive(Debug, Clone, PartialEq)]
pub enum Mixed<T> {
    Uniform(T),
    Mixed,
}

impl<T> Mixed<T> {
    #[must_use]
    pub fn is_mixed(&self) -> bool {
        matches!(self, Self::Mixed)
    }

    #[must_use]
    pub fn as_uniform(&self) -> Option<&T> {
        match self {
            Self::Uniform(v) => Some(v),
            Self::Mixed => None,
        }
    }
}

impl<T: Default> Default for Mixed<T> {
    fn default() -> Self {
        Self::Uniform(T::default())
    }
}

impl<T> From<T> for Mixed<T> {
    fn from(value: T) -> Self {
        Self::Uniform(value)
    }
}

#[derive(Deserialize)]
enum Sentinel {
    #[serde(rename = "__mixed__")]
    Mixed,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MixedRepr<T> {
    Sentinel(Sentinel),
    Value(T),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Mixed<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match MixedRepr::<T>::deserialize(deserializer)? {
            MixedRepr::Sentinel(Sentinel::Mixed) => Self::Mixed,
            MixedRepr::Value(v) => Self::Uniform(v),
        })
    }
}

impl<T: Serialize> Serialize for Mixed<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Uniform(v) => v.serialize(serializer),
            Self::Mixed => serializer.serialize_str(MIXED_SENTINEL),
        }
    }
}

const fn default_true() -> bool {
    true
}

const fn default_opacity() -> f64 {
    1.0
}

/// RGB(A) color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "default_opacity")]
    pub a: f64,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub color: Color,
    #[serde(default)]
    pub position: f64,
}

/// A fill or stroke paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    #[serde(flatten)]
    pub kind: PaintKind,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

impl Paint {
    #[must_use]
    pub fn solid(color: Color) -> Self {
        Self {
            kind: PaintKind::Solid { color },
            visible: true,
            opacity: 1.0,
        }
    }

    /// Image and video paints carry media, not a color.
    #[must_use]
    pub fn is_media(&self) -> bool {
        matches!(self.kind, PaintKind::Image { .. } | PaintKind::Video)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintKind {
    Solid {
        color: Color,
    },
    GradientLinear {
        #[serde(rename = "gradientStops")]
        gradient_stops: Vec<ColorStop>,
    },
    GradientRadial {
        #[serde(rename = "gradientStops")]
        gradient_stops: Vec<ColorStop>,
    },
    GradientAngular {
        #[serde(rename = "gradientStops")]
        gradient_stops: Vec<ColorStop>,
    },
    GradientDiamond {
        #[serde(rename = "gradientStops")]
        gradient_stops: Vec<ColorStop>,
    },
    Image {
        #[serde(rename = "imageHash", default)]
        image_hash: String,
    },
    Video,
}

impl PaintKind {
    /// Host type tag, e.g. `GRADIENT_LINEAR`.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Solid { .. } => "SOLID",
            Self::GradientLinear { .. } => "GRADIENT_LINEAR",
            Self::GradientRadial { .. } => "GRADIENT_RADIAL",
            Self::GradientAngular { .. } => "GRADIENT_ANGULAR",
            Self::GradientDiamond { .. } => "GRADIENT_DIAMOND",
            Self::Image { .. } => "IMAGE",
            Self::Video => "VIDEO",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectKind {
    DropShadow,
    InnerShadow,
    LayerBlur,
    /// Any effect type not listed above is reported as a background blur.
    #[serde(other)]
    BackgroundBlur,
}

impl EffectKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::DropShadow => "Drop Shadow",
            Self::InnerShadow => "Inner Shadow",
            Self::LayerBlur => "Layer Blur",
            Self::BackgroundBlur => "Background Blur",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    #[serde(rename = "type")]
    pub kind: EffectKind,
    #[serde(default)]
    pub radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Vector>,
    #[serde(default = "default_true")]
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrokeAlign {
    #[default]
    Inside,
    Outside,
    Center,
}

impl fmt::Display for StrokeAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Inside => "INSIDE",
            Self::Outside => "OUTSIDE",
            Self::Center => "CENTER",
        })
    }
}

/// Per-corner radii; only meaningful when the uniform radius is mixed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CornerRadii {
    #[serde(default)]
    pub top_left_radius: f64,
    #[serde(default)]
    pub top_right_radius: f64,
    #[serde(default)]
    pub bottom_left_radius: f64,
    #[serde(default)]
    pub bottom_right_radius: f64,
}

/// Shared style ids. An empty string means no shared style is assigned.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StyleIds {
    #[serde(default, rename = "fillStyleId")]
    pub fill: Mixed<String>,
    #[serde(default, rename = "strokeStyleId")]
    pub stroke: String,
    #[serde(default, rename = "effectStyleId")]
    pub effect: String,
    #[serde(default, rename = "textStyleId")]
    pub text: Mixed<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableAlias {
    pub id: String,
}

/// Design-token bindings per property.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundVariables {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fills: Option<Vec<VariableAlias>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strokes: Option<Vec<VariableAlias>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_left_radius: Option<VariableAlias>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineHeight {
    #[default]
    Auto,
    Pixels {
        value: f64,
    },
    Percent {
        value: f64,
    },
}

impl LineHeight {
    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Auto => None,
            Self::Pixels { value } | Self::Percent { value } => Some(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProps {
    pub font_name: Mixed<FontName>,
    pub font_size: Mixed<f64>,
    #[serde(default)]
    pub line_height: Mixed<LineHeight>,
}

/// A design node as supplied by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectableNode {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<Mixed<f64>>,
    #[serde(flatten)]
    pub corners: CornerRadii,
    #[serde(default)]
    pub fills: Mixed<Vec<Paint>>,
    #[serde(default)]
    pub strokes: Vec<Paint>,
    #[serde(default)]
    pub stroke_weight: Mixed<f64>,
    #[serde(default)]
    pub stroke_align: StrokeAlign,
    #[serde(default)]
    pub effects: Vec<Effect>,
    #[serde(flatten)]
    pub styles: StyleIds,
    #[serde(default)]
    pub bound_variables: BoundVariables,
    /// Present on text nodes: `fontName`, `fontSize` and `lineHeight` sit on
    /// the node itself.
    #[serde(flatten)]
    pub text: Option<TextProps>,
}

impl InspectableNode {
    /// A visible node with no style properties set.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: String::new(),
            visible: true,
            height: 0.0,
            corner_radius: None,
            corners: CornerRadii::default(),
            fills: Mixed::default(),
            strokes: Vec::new(),
            stroke_weight: Mixed::default(),
            stroke_align: StrokeAlign::default(),
            effects: Vec::new(),
            styles: StyleIds::default(),
            bound_variables: BoundVariables::default(),
            text: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_sentinel_roundtrip() {
        let m: Mixed<f64> = serde_json::from_str("\"__mixed__\"").unwrap();
        assert!(m.is_mixed());
        let u: Mixed<f64> = serde_json::from_str("4").unwrap();
        assert_eq!(u, Mixed::Uniform(4.0));
        assert_eq!(serde_json::to_string(&Mixed::<f64>::Mixed).unwrap(), "\"__mixed__\"");
    }

    #[test]
    fn test_mixed_string_is_not_sentinel() {
        let s: Mixed<String> = serde_json::from_str("\"S:abc\"").unwrap();
        assert_eq!(s.as_uniform().map(String::as_str), Some("S:abc"));
    }

    #[test]
    fn test_node_from_host_shape() {
        let json = r##"{
            "id": "1:2",
            "name": "Card",
            "type": "RECTANGLE",
            "height": 40,
            "cornerRadius": "__mixed__",
            "topLeftRadius": 4,
            "topRightRadius": 8,
            "fills": [{ "type": "SOLID", "color": { "r": 1, "g": 0, "b": 0 } }],
            "fillStyleId": "",
            "effects": [{ "type": "LAYER_BLUR", "radius": 4 }],
            "boundVariables": { "bottomLeftRadius": { "id": "VariableID:1" } }
        }"##;
        let node: InspectableNode = serde_json::from_str(json).unwrap();
        assert!(node.visible);
        assert_eq!(node.corner_radius, Some(Mixed::Mixed));
        assert!((node.corners.top_right_radius - 8.0).abs() < f64::EPSILON);
        let fills = node.fills.as_uniform().unwrap();
        assert_eq!(fills[0].kind.tag(), "SOLID");
        assert!(fills[0].visible);
        assert_eq!(node.effects[0].kind, EffectKind::LayerBlur);
        assert!(node.bound_variables.bottom_left_radius.is_some());
        assert!(node.text.is_none());
    }

    #[test]
    fn test_unlisted_effect_type_reads_as_background_blur() {
        let json = r#"{ "id": "1", "effects": [{ "type": "NOISE", "radius": 2 }] }"#;
        let node: InspectableNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.effects[0].kind, EffectKind::BackgroundBlur);
    }

    #[test]
    fn test_text_props_on_node() {
        let json = r#"{
            "id": "1",
            "type": "TEXT",
            "fontName": { "family": "Inter", "style": "Bold" },
            "fontSize": "__mixed__",
            "lineHeight": { "unit": "AUTO" }
        }"#;
        let node: InspectableNode = serde_json::from_str(json).unwrap();
        let text = node.text.as_ref().unwrap();
        assert_eq!(text.font_size, Mixed::Mixed);
        assert_eq!(text.line_height, Mixed::Uniform(LineHeight::Auto));

        let out = serde_json::to_value(&node).unwrap();
        assert_eq!(out["fontName"]["family"], "Inter");
        assert!(out.get("text").is_none());
    }
}
