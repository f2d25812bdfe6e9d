//! Content loaders for reading guard data from files.
//!
//! Guard configuration is TOML, patrol routes are RON. Every loader validates
//! what it reads, so anything returned here can be handed straight to a
//! controller.

pub mod config;
pub mod factory;
pub mod route;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use route::RouteLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
