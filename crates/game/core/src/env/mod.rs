//! Collaborators the engine reads from but never mutates.
//!
//! These traits decouple the controller from where data comes from:
//! - [`MoveOracle`]: move definitions (catalog lookup)
//! - [`Dice`]: random rolls (seeded PCG in play, scripted in tests and replays)
mod moves;
mod rng;

pub use moves::MoveOracle;
pub use rng::{Dice, PcgRng, ScriptedDice};
