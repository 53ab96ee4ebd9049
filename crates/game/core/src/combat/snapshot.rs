//! Read-only projections handed to presentation layers.

use std::collections::BTreeMap;

use crate::element::Element;
use crate::state::{Attributes, Combatant, DamageRange, Inventory, ResourceMeter};
use crate::status::StatusBag;

use super::{ActionKey, Side, Winner};

/// Owned copy of one combatant's visible state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantView {
    pub name: String,
    pub class: String,
    pub attributes: Attributes,
    pub hp: ResourceMeter,
    pub mp: ResourceMeter,
    pub sp: ResourceMeter,
    /// Armor class including status modifiers.
    pub ac: i32,
    pub base_ac: i32,
    pub to_hit: i32,
    pub damage: DamageRange,
    pub attacks: Vec<String>,
    pub abilities: Vec<String>,
    pub inventory: Inventory,
    pub status: StatusBag,
    pub affinity: Element,
    pub resist: BTreeMap<Element, f64>,
}

impl From<&Combatant> for CombatantView {
    fn from(combatant: &Combatant) -> Self {
        Self {
            name: combatant.name.clone(),
            class: combatant.class.clone(),
            attributes: combatant.attributes,
            hp: combatant.hp,
            mp: combatant.mp,
            sp: combatant.sp,
            ac: combatant.effective_ac(),
            base_ac: combatant.ac,
            to_hit: combatant.to_hit,
            damage: combatant.damage,
            attacks: combatant.attacks.clone(),
            abilities: combatant.abilities.clone(),
            inventory: combatant.inventory.clone(),
            status: combatant.status.clone(),
            affinity: combatant.affinity,
            resist: combatant.resist.clone(),
        }
    }
}

/// Snapshot of a whole session.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PublicState {
    pub player: CombatantView,
    pub enemy: CombatantView,
    pub turn: Side,
    /// False once the session has ended.
    pub active: bool,
    pub winner: Option<Winner>,
    /// Actions the player may take right now; empty outside the player's turn.
    pub available_actions: Vec<ActionKey>,
}
