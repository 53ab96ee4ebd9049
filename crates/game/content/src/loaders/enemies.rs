//! Enemy template loader.

use std::path::Path;

use combat_core::GameError;

use crate::enemies::{EnemyRoster, scale};
use crate::loaders::{LoadResult, read_file};

const EMBEDDED: &str = include_str!("../../data/enemies.ron");

/// Loader for enemy templates and traits.
///
/// Example:
/// ```ron
/// (
///     templates: [
///         (name: "Goblin", hp: 14, ac: 12, to_hit: 3, damage: (min: 1, max: 6)),
///     ],
///     traits: [(name: "cunning", ac: 1)],
/// )
/// ```
pub struct EnemyLoader;

impl EnemyLoader {
    pub fn load(path: &Path) -> LoadResult<EnemyRoster> {
        let content = read_file(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    pub fn embedded() -> LoadResult<EnemyRoster> {
        Self::parse(EMBEDDED, "embedded enemies.ron")
    }

    /// Parse RON source and check that every template builds unscaled.
    pub fn parse(source: &str, origin: &str) -> LoadResult<EnemyRoster> {
        let roster: EnemyRoster = ron::from_str(source)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy RON at {}: {}", origin, e))?;
        if roster.templates.is_empty() {
            anyhow::bail!("No enemy templates defined in {}", origin);
        }
        for template in &roster.templates {
            scale(template, None, 0).map_err(|e| {
                anyhow::anyhow!(
                    "Invalid enemy template {} in {} [{}]: {}",
                    template.name,
                    origin,
                    e.error_code(),
                    e
                )
            })?;
        }
        tracing::debug!(
            origin,
            templates = roster.templates.len(),
            traits = roster.traits.len(),
            "enemy roster loaded"
        );
        Ok(roster)
    }
}
