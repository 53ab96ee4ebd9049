//! Content loaders for reading game data from files.
//!
//! Each loader parses one data file into the types the engine and the
//! presentation layers consume. Every loader can also parse the copy of its
//! data embedded in the crate, so a binary runs without a data directory.

pub mod classes;
pub mod config;
pub mod enemies;
pub mod factory;
pub mod moves;

pub use classes::ClassLoader;
pub use config::ConfigLoader;
pub use enemies::EnemyLoader;
pub use factory::{Content, ContentFactory};
pub use moves::MoveLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
