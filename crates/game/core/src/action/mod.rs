//! Move domain: data-driven move definitions and their effects.
//!
//! - [`Move`]: immutable catalog entry (cost, target, element, effect list)
//! - [`Effect`]: atomic effect a move applies (damage, heal, status)
//! - [`RollSpec`]: stat-scaled random roll shared by damage, heal and regen
//! - [`MoveCatalog`]: validated registry implementing [`crate::env::MoveOracle`]
mod catalog;
mod definition;
mod effect;

pub use catalog::{MoveCatalog, MoveSlots};
pub use definition::{Cost, Move, MoveKind, Pool, Target};
pub use effect::{Effect, RollSpec, StatusSpec};
