//! Combatant records mutated by the controller.
//!
//! This module owns the data structures that describe one side of a duel:
//! attributes, resource meters, loadout, inventory and enemy memory. Callers
//! build a [`Combatant`] through [`CombatantBuilder`] and lend it to the
//! controller for the length of a session.
mod attributes;
mod combatant;
mod inventory;
mod resources;

pub use attributes::{Attributes, Stat};
pub use combatant::{AiMemory, Combatant, CombatantBuilder};
pub use inventory::{Inventory, InventorySlot, ItemKind};
pub use resources::{DamageRange, ResourceMeter};
