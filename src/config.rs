use crate::error::{Result, SccError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fail on blocks without a time range instead of dropping them.
    pub strict: bool,
    /// Replace an existing output file.
    pub overwrite: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        // Load from config file if it exists
        if let Some(config_path) = Self::config_file_path() {
            if config_path.exists() {
                config = Self::load_from(&config_path)?;
            }
        }

        config.apply_env(|key| std::env::var(key).ok());

        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str::<Config>(contents)?)
    }

    /// Override fields from `SCCCONV_*` variables. Unparseable values are
    /// ignored.
    pub fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(strict) = var("SCCCONV_STRICT").and_then(|v| parse_flag(&v).ok()) {
            self.strict = strict;
        }
        if let Some(overwrite) = var("SCCCONV_OVERWRITE").and_then(|v| parse_flag(&v).ok()) {
            self.overwrite = overwrite;
        }
    }

    fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sccconv").join("config.toml"))
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SccError::Config(format!(
            "Invalid flag value: {}. Use 'true' or 'false'",
            value
        ))),
    }
}
