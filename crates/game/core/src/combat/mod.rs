//! Combat resolution and the two-combatant turn state machine.
//!
//! # Architecture
//!
//! - **Pure helpers**: `hit` and `damage` resolve a single roll or strike
//! - **Exchange**: one half-turn's action between an actor and its foe
//! - **Controller**: turn order, status ticks, end conditions, public API
//!
//! All randomness flows through [`crate::env::Dice`], so a session is
//! reproducible from its seed or roll script.

pub mod damage;
pub mod hit;

mod controller;
mod exchange;
mod log;
mod result;
mod snapshot;
mod turn;

pub use controller::CombatController;
pub use damage::{Strike, land_strike, strike_element};
pub use hit::{HitCheck, roll_to_hit};
pub use log::{EffectOutcome, LogEntry, MoveFailure, StatusEndReason, TickKind};
pub use result::{ActionKey, ActionResult, PlayerAction};
pub use snapshot::{CombatantView, PublicState};
pub use turn::{Phase, Side, Winner};
