use serde::Deserialize;
use std::path::Path;

use crate::error::AppError;

pub const DEFAULT_TAG: &str = "PushMessagingService";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Component tag attached to every sink line.
    pub tag: String,
    /// Base indentation of rendered dumps. Whitespace only.
    pub prefix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_string(),
            prefix: String::new(),
        }
    }
}

/// On-disk shape; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub tag: Option<String>,
    pub prefix: Option<String>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(contents)?)
    }
}

/// Layers `file` and then `overrides` on top of the defaults.
pub fn resolve(file: ConfigFile, overrides: ConfigFile) -> Result<AppConfig, String> {
    let defaults = AppConfig::default();
    let tag = overrides
        .tag
        .or(file.tag)
        .map(|tag| tag.trim().to_string())
        .unwrap_or(defaults.tag);
    if tag.is_empty() {
        return Err("tag cannot be empty".to_string());
    }

    let prefix = overrides.prefix.or(file.prefix).unwrap_or(defaults.prefix);
    if !prefix.chars().all(char::is_whitespace) {
        return Err(format!("prefix must be whitespace only, got '{prefix}'"));
    }

    Ok(AppConfig { tag, prefix })
}
