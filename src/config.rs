// Runner configuration loaded from an optional TOML file.
// Command-line flags override whatever the file says.

use crate::catalog::Pattern;
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub format: OutputFormat,
    pub color: bool,
    /// Pattern names to run; empty means the whole catalog.
    pub patterns: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            patterns: Vec::new(),
        }
    }
}

impl CatalogConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Resolves the configured names, failing on the first unknown one.
    pub fn selected_patterns(&self) -> Result<Vec<Pattern>> {
        if self.patterns.is_empty() {
            return Ok(Pattern::ALL.to_vec());
        }
        self.patterns.iter().map(|name| name.parse()).collect()
    }
}
