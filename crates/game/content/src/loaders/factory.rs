//! Content factory for loading guard data from a data directory.

use std::path::{Path, PathBuf};

use stealth_core::{GuardConfig, PatrolRoute};

use crate::loaders::{ConfigLoader, LoadResult, RouteLoader};

/// Content factory that loads guard content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── guard.toml
/// └── routes/
///     ├── courtyard.ron
///     └── gatehouse.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data bundled with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load guard configuration from `guard.toml`.
    pub fn load_config(&self) -> LoadResult<GuardConfig> {
        ConfigLoader::load(&self.data_dir.join("guard.toml"))
    }

    /// Load a route from `routes/{route_name}.ron`.
    pub fn load_route(&self, route_name: &str) -> LoadResult<PatrolRoute> {
        let path = self
            .data_dir
            .join("routes")
            .join(format!("{}.ron", route_name));
        RouteLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
