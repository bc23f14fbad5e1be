// src/config.rs
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stair_ways_core::{Limits, Strategy};
use stair_ways_shared_kernel::{ErrorContext, InfrastructureError, Result};

use crate::options::OutputFormat;

/// Settings read from `--config`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub strategy: Option<Strategy>,
    pub format: Option<OutputFormat>,
    pub limits: Limits,
}

impl FileConfig {
    /// Reads a JSON or YAML config, chosen by file extension.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the file cannot be read, has an unsupported
    /// extension, or does not match the expected shape.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| InfrastructureError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(path, &text).with_context(|| format!("loading config '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }

    fn parse(path: &Path, text: &str) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(serde_json::from_str(text)?),
            #[cfg(feature = "yaml")]
            Some("yaml" | "yml") => Ok(serde_yaml::from_str(text)?),
            _ => Err(InfrastructureError::UnsupportedConfigFormat { path: path.to_path_buf() }.into()),
        }
    }
}

/// Fully resolved run configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    /// Strategy for `count`; `examples` and `verify` always run all of them.
    pub strategy: Strategy,
    pub limits: Limits,
    /// Destination file; stdout when `None`.
    pub output: Option<PathBuf>,
}
