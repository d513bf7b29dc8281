use crate::utils::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based configuration mirroring the CLI flags.
///
/// ```toml
/// [dataset]
/// path = "./data/ports.json"
///
/// [paging]
/// page = 1
/// size = 10
///
/// [deferred]
/// delay_ms = 250
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub dataset: Option<DatasetConfig>,
    pub paging: Option<PagingConfig>,
    pub deferred: Option<DeferredConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PagingConfig {
    pub page: Option<usize>,
    pub size: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeferredConfig {
    pub delay_ms: Option<u64>,
}

impl TomlConfig {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| CatalogError::ConfigError {
            message: format!("{}: {}", path.as_ref().display(), e),
        })
    }
}
