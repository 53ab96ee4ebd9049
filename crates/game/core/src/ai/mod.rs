//! Enemy decision making.
//!
//! The policy works in two layers, picking an [`Intent`] by priority and
//! weighted chance, then a concrete move within it. It always produces a
//! [`Decision`]; with nothing usable the enemy falls back to a basic attack.
mod policy;
mod weighted;

pub use policy::{Decision, EnemyPolicy, Intent};
pub use weighted::pick_weighted;
