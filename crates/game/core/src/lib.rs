//! Deterministic combat rules for a two-combatant, turn-based duel.
//!
//! `combat-core` defines the canonical rules (moves, status effects, the
//! elemental matrix, the enemy policy) and exposes them through a single
//! state machine, [`combat::CombatController`]. All mutation of the two
//! [`Combatant`] records during a session flows through the controller;
//! content crates only construct data and hand it over.
pub mod action;
pub mod ai;
pub mod combat;
pub mod config;
pub mod element;
pub mod env;
pub mod error;
pub mod state;
pub mod status;

pub use action::{
    Cost, Effect, Move, MoveCatalog, MoveKind, MoveSlots, Pool, RollSpec, StatusSpec, Target,
};
pub use ai::{Decision, EnemyPolicy, Intent};
pub use combat::{
    ActionKey, ActionResult, CombatController, CombatantView, LogEntry, Phase, PlayerAction,
    PublicState, Side, Winner,
};
pub use config::{CombatConfig, PolicyConfig};
pub use element::{Element, element_multiplier};
pub use env::{Dice, MoveOracle, PcgRng, ScriptedDice};
pub use error::{BuildError, CatalogError, CombatError, ErrorSeverity, GameError};
pub use state::{
    AiMemory, Attributes, Combatant, CombatantBuilder, DamageRange, Inventory, ItemKind,
    ResourceMeter, Stat,
};
pub use status::{StatusBag, StatusBehavior, StatusData, StatusDuration, StatusInstance, StatusKey};
