//! Optional catalog configuration, read from TOML.
//!
//! ```toml
//! color = false
//! log_filter = "design_patterns=debug"
//! banner = true
//! ```

use crate::error::{PatternError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "PATTERNS_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub color: bool,
    pub log_filter: String,
    pub banner: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            color: true,
            log_filter: "warn".to_string(),
            banner: true,
        }
    }
}

impl CatalogConfig {
    /// Explicit path first, then `$PATTERNS_CONFIG`, then defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match std::env::var_os(CONFIG_ENV) {
            Some(value) if !value.is_empty() => Self::from_file(&PathBuf::from(value)),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| PatternError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| PatternError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
