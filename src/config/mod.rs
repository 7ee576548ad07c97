// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{
    Config, DesignLintToml, OverlayConfig, OverlaySignature, Profile, RuleConfig,
};
use crate::error::{DesignLintError, Result};

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "designlint.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new config and loads local settings (`designlint.toml`).
    /// A missing file leaves the defaults in place.
    ///
    /// # Errors
    /// Returns error if the file exists but is unreadable or invalid,
    /// including an unknown `profile`.
    pub fn load() -> Result<Self> {
        let mut config = Self::new();
        config.load_local_config()?;
        Ok(config)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns error if the approved radius set is empty or an overlay
    /// opacity is outside `0.0..=1.0`.
    pub fn validate(&self) -> Result<()> {
        if self.rules.radius_values.is_empty() {
            return Err(DesignLintError::InvalidConfig(
                "rules.radius_values must not be empty".into(),
            ));
        }
        let overlays = self
            .rules
            .overlays
            .default
            .iter()
            .chain(&self.rules.overlays.docv);
        for sig in overlays {
            if let Some(opacity) = sig.opacity {
                if !(0.0..=1.0).contains(&opacity) {
                    return Err(DesignLintError::InvalidConfig(format!(
                        "overlay opacity {opacity} is outside 0..1"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Overlays `designlint.toml` onto this config.
    ///
    /// # Errors
    /// See [`Config::load`].
    pub fn load_local_config(&mut self) -> Result<()> {
        io::load_toml_config(self)
    }

    /// Parses `designlint.toml` content into this config.
    ///
    /// # Errors
    /// Returns error if the TOML is malformed or names an unknown profile.
    pub fn parse_toml(&mut self, content: &str) -> Result<()> {
        io::parse_toml(self, content)
    }

    /// Renders the effective configuration as TOML.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        io::render_toml(self)
    }
}
