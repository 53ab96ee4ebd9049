//! Class preset loader.

use std::path::Path;

use combat_core::GameError;

use crate::classes::ClassRoster;
use crate::loaders::{LoadResult, read_file};

const EMBEDDED: &str = include_str!("../../data/classes.ron");

/// Loader for player class presets.
///
/// File format: a list of `ClassSpec` records; the first is the default class.
pub struct ClassLoader;

impl ClassLoader {
    pub fn load(path: &Path) -> LoadResult<ClassRoster> {
        let content = read_file(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    pub fn embedded() -> LoadResult<ClassRoster> {
        Self::parse(EMBEDDED, "embedded classes.ron")
    }

    /// Parse RON source and check that every preset builds.
    pub fn parse(source: &str, origin: &str) -> LoadResult<ClassRoster> {
        let roster: ClassRoster = ron::from_str(source)
            .map_err(|e| anyhow::anyhow!("Failed to parse class RON at {}: {}", origin, e))?;
        if roster.is_empty() {
            anyhow::bail!("No classes defined in {}", origin);
        }
        for class in roster.iter() {
            class
                .build(class.name.as_str())
                .map_err(|e| {
                    anyhow::anyhow!(
                        "Invalid class {} in {} [{}]: {}",
                        class.name,
                        origin,
                        e.error_code(),
                        e
                    )
                })?;
        }
        tracing::debug!(origin, classes = roster.len(), "class presets loaded");
        Ok(roster)
    }
}
