//! Move definition oracle.

use crate::action::Move;

/// Oracle providing move definitions.
///
/// Implementations are immutable after construction; the controller only
/// ever looks moves up by id.
pub trait MoveOracle: Send + Sync {
    /// Returns the move registered under `id`, if any.
    fn get_move(&self, id: &str) -> Option<&Move>;
}
