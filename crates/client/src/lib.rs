//! Terminal driver for a single duel.
//!
//! The binary is the composition root: it loads content and tunables, rolls
//! both combatants from a seed, and feeds stdin commands to the engine's
//! controller. All combat rules live in `combat-core`.

pub mod builder;
pub mod config;
pub mod session;

pub use builder::Duel;
pub use config::CliConfig;
pub use session::{Command, Skirmish};
