use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::DesignLintError;

/// Product profile selecting which rule variants apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Platform design system.
    #[default]
    Default,
    /// DocV mobile SDK.
    Docv,
}

impl Profile {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Docv => "docv",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = DesignLintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "docv" => Ok(Self::Docv),
            other => Err(DesignLintError::UnknownProfile(other.to_string())),
        }
    }
}

/// Color+opacity of a sanctioned overlay fill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlaySignature {
    /// Compared after rounding to one decimal; `None` matches any opacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    #[serde(default = "default_overlays")]
    pub default: Vec<OverlaySignature>,
    #[serde(default = "docv_overlays")]
    pub docv: Vec<OverlaySignature>,
}

impl OverlayConfig {
    #[must_use]
    pub fn for_profile(&self, profile: Profile) -> &[OverlaySignature] {
        match profile {
            Profile::Default => &self.default,
            Profile::Docv => &self.docv,
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            default: default_overlays(),
            docv: docv_overlays(),
        }
    }
}

const OVERLAY_GREY: f64 = 0.070_588_238_537_311_55;
const DOCV_SCRIM_GREY: f64 = 0.207_843_139_767_646_8;

fn default_overlays() -> Vec<OverlaySignature> {
    vec![OverlaySignature {
        opacity: Some(0.2),
        r: OVERLAY_GREY,
        g: OVERLAY_GREY,
        b: OVERLAY_GREY,
    }]
}

fn docv_overlays() -> Vec<OverlaySignature> {
    vec![
        OverlaySignature { opacity: Some(0.5), r: 0.0, g: 0.0, b: 0.0 },
        OverlaySignature {
            opacity: None,
            r: DOCV_SCRIM_GREY,
            g: DOCV_SCRIM_GREY,
            b: DOCV_SCRIM_GREY,
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    #[serde(default = "default_radius_values")]
    pub radius_values: Vec<f64>,
    #[serde(default = "default_brand_families")]
    pub brand_families: Vec<String>,
    #[serde(default = "default_icon_font")]
    pub icon_font: String,
    #[serde(default)]
    pub overlays: OverlayConfig,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            radius_values: default_radius_values(),
            brand_families: default_brand_families(),
            icon_font: default_icon_font(),
            overlays: OverlayConfig::default(),
        }
    }
}

impl RuleConfig {
    #[must_use]
    pub fn is_approved_radius(&self, value: f64) -> bool {
        self.radius_values.iter().any(|v| (v - value).abs() < f64::EPSILON)
    }
}

fn default_radius_values() -> Vec<f64> {
    vec![0.0, 2.0, 4.0, 8.0, 16.0, 24.0, 32.0]
}

fn default_brand_families() -> Vec<String> {
    vec!["Libre Franklin".into()]
}

fn default_icon_font() -> String {
    "Font Awesome 6 Pro".to_string()
}

/// On-disk shape of `designlint.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DesignLintToml {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<PathBuf>,
    #[serde(default)]
    pub rules: RuleConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub profile: Profile,
    pub theme_path: Option<PathBuf>,
    pub rules: RuleConfig,
}
