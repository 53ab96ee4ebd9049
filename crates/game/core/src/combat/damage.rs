//! Damage pipeline shared by basic attacks and damage effects.
//!
//! ```text
//! raw roll → attacker outgoing mods → defender incoming mods
//!          → element multiplier → floor ≥ 0 → subtract → consume-on-hit
//! ```
//!
//! The attacker's outgoing step is applied by the caller (via
//! [`crate::status::StatusBag::outgoing_damage`]) so that a self-targeted
//! strike never needs two borrows of the same combatant.

use crate::element::{Element, scale_damage};
use crate::state::Combatant;
use crate::status::{StatusBag, StatusKey};

/// What a strike did to its defender.
#[derive(Clone, Debug, PartialEq)]
pub struct Strike {
    /// HP actually removed.
    pub amount: u32,
    pub multiplier: f64,
    /// Consume-on-hit statuses removed from the defender.
    pub consumed: Vec<StatusKey>,
}

/// Element of a strike: the caster's enchant override, else the move's own.
pub fn strike_element(caster: &StatusBag, base: Element) -> Element {
    caster.element_override().unwrap_or(base)
}

/// Land `outgoing` damage (already adjusted by the attacker) on `defender`.
///
/// Consume-on-hit statuses are removed only when HP was actually lost.
pub fn land_strike(defender: &mut Combatant, outgoing: u32, element: Element) -> Strike {
    let incoming = defender.status.incoming_damage(outgoing);
    let multiplier = defender.multiplier_for(element);
    let amount = defender.hp.drain(scale_damage(incoming, multiplier));
    let consumed = if amount > 0 {
        defender.status.consume_on_hit()
    } else {
        Vec::new()
    };
    defender.hp.clamp();
    Strike {
        amount,
        multiplier,
        consumed,
    }
}
