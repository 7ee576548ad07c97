// src/config/io.rs
use std::fs;
use std::path::Path;

use tracing::debug;

use super::types::{Config, DesignLintToml};
use super::CONFIG_FILE;
use crate::error::{DesignLintError, Result};

/// Loads `designlint.toml` from the working directory, if present.
///
/// # Errors
/// Returns error if the file cannot be read or does not parse.
pub fn load_toml_config(config: &mut Config) -> Result<()> {
    let path = Path::new(CONFIG_FILE);
    if !path.exists() {
        debug!("no {CONFIG_FILE} found, using defaults");
        return Ok(());
    }
    let content = fs::read_to_string(path).map_err(|source| DesignLintError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse_toml(config, &content)
}

pub fn parse_toml(config: &mut Config, content: &str) -> Result<()> {
    let parsed: DesignLintToml = toml::from_str(content)?;
    config.profile = parsed.profile;
    config.theme_path = parsed.theme;
    config.rules = parsed.rules;
    Ok(())
}

pub fn render_toml(config: &Config) -> Result<String> {
    let file = DesignLintToml {
        profile: config.profile,
        theme: config.theme_path.clone(),
        rules: config.rules.clone(),
    };
    toml::to_string_pretty(&file).map_err(|e| DesignLintError::Other(e.to_string()))
}
