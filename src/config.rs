//! Loader configuration for lang-table
//!
//! Controls where language resources are looked up, which language acts as the
//! base layer, and how large a single resource may be. Every field has a
//! default, so a config file only needs to list what it changes.

use crate::error::{LangError, LangResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Language used as the base layer of every table
pub const DEFAULT_LANGUAGE: &str = "en_us";

/// Maximum size of a single language resource (in bytes) - 1MB
pub const MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Loader configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory that contains the `assets/` tree
    pub assets_root: PathBuf,

    /// Language loaded as the base layer
    pub default_language: String,

    /// Maximum resource size in bytes
    pub max_file_size: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets_root: PathBuf::from("."),
            default_language: DEFAULT_LANGUAGE.to_string(),
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> LangResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LangError::Config(format!("could not read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(content: &str) -> LangResult<Self> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| LangError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Use a different assets root
    pub fn with_assets_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.assets_root = root.into();
        self
    }

    /// Use a different default language
    pub fn with_default_language(mut self, language_id: impl Into<String>) -> Self {
        self.default_language = language_id.into();
        self
    }

    /// Use a different size limit
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    fn validate(&self) -> LangResult<()> {
        if self.default_language.trim().is_empty() {
            return Err(LangError::Config(
                "default_language must not be empty".to_string(),
            ));
        }
        if self.max_file_size == 0 {
            return Err(LangError::Config(
                "max_file_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
