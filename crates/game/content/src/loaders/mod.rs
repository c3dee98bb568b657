//! Content loaders for reading game data from files.
//!
//! Loaders convert TOML/RON files into the config and oracle values the
//! simulation consumes: TOML for configuration, RON for species tables.

pub mod config;
pub mod species;

pub use config::ConfigLoader;
pub use species::SpeciesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
