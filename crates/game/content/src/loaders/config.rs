//! Guard configuration loader.

use std::path::Path;

use stealth_core::GuardConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for guard configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GuardConfig::default`] values.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing a GuardConfig
    pub fn load(path: &Path) -> LoadResult<GuardConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate a GuardConfig from TOML text.
    pub fn parse(content: &str) -> LoadResult<GuardConfig> {
        let config: GuardConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse guard config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid guard config: {}", e))?;

        tracing::debug!(
            time_to_detect = config.time_to_detect,
            time_to_lose = config.time_to_lose,
            "Loaded guard config"
        );
        Ok(config)
    }
}
