//! Move catalog loader.

use std::path::Path;

use combat_core::{GameError, Move, MoveCatalog};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

const EMBEDDED: &str = include_str!("../../data/moves.ron");

/// Move catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveFile {
    pub moves: Vec<Move>,
}

/// Loader for the move catalog.
pub struct MoveLoader;

impl MoveLoader {
    /// Load and validate a move catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<MoveCatalog> {
        let content = read_file(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    /// The catalog shipped with the crate.
    pub fn embedded() -> LoadResult<MoveCatalog> {
        Self::parse(EMBEDDED, "embedded moves.ron")
    }

    /// Parse RON source; `origin` names the source in error messages.
    pub fn parse(source: &str, origin: &str) -> LoadResult<MoveCatalog> {
        let file: MoveFile = ron::from_str(source)
            .map_err(|e| anyhow::anyhow!("Failed to parse move catalog RON at {}: {}", origin, e))?;
        let catalog = MoveCatalog::new(file.moves)
            .map_err(|e| {
                anyhow::anyhow!("Invalid move catalog at {} [{}]: {}", origin, e.error_code(), e)
            })?;
        tracing::debug!(origin, moves = catalog.len(), "move catalog loaded");
        Ok(catalog)
    }
}
