//! Content factory for loading every data file at once.

use std::path::{Path, PathBuf};

use combat_core::{CombatConfig, MoveCatalog};

use crate::classes::ClassRoster;
use crate::enemies::EnemyRoster;
use crate::loaders::{ClassLoader, ConfigLoader, EnemyLoader, LoadResult, MoveLoader};

/// Everything a session needs besides the dice.
#[derive(Clone, Debug)]
pub struct Content {
    pub moves: MoveCatalog,
    pub classes: ClassRoster,
    pub enemies: EnemyRoster,
}

impl Content {
    /// Content parsed from the copies embedded in the crate.
    pub fn embedded() -> LoadResult<Self> {
        Self::checked(
            MoveLoader::embedded()?,
            ClassLoader::embedded()?,
            EnemyLoader::embedded()?,
        )
    }

    /// Bundle loaded parts, rejecting loadouts that name unknown moves.
    pub fn checked(moves: MoveCatalog, classes: ClassRoster, enemies: EnemyRoster) -> LoadResult<Self> {
        let dangling: Vec<String> = classes
            .unknown_moves(&moves)
            .into_iter()
            .chain(enemies.unknown_moves(&moves))
            .map(|(owner, id)| format!("{owner}: {id}"))
            .collect();
        if !dangling.is_empty() {
            anyhow::bail!("Loadouts reference unknown moves: {}", dangling.join(", "));
        }
        Ok(Self {
            moves,
            classes,
            enemies,
        })
    }
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── combat.toml
/// ├── moves.ron
/// ├── classes.ron
/// └── enemies.ron
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

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load combat tunables from `combat.toml`.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        ConfigLoader::load(&self.data_dir.join("combat.toml"))
    }

    /// Load and cross-check moves, classes and enemies.
    pub fn load_content(&self) -> LoadResult<Content> {
        Content::checked(
            MoveLoader::load(&self.data_dir.join("moves.ron"))?,
            ClassLoader::load(&self.data_dir.join("classes.ron"))?,
            EnemyLoader::load(&self.data_dir.join("enemies.ron"))?,
        )
    }
}
