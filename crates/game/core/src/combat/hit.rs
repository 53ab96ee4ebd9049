//! d20 to-hit resolution.

use crate::config::CombatConfig;
use crate::env::Dice;

/// Outcome of one to-hit roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitCheck {
    /// Natural d20 result.
    pub roll: i32,
    /// `roll + bonus`.
    pub total: i32,
    pub hit: bool,
    pub crit: bool,
    pub fumble: bool,
}

impl HitCheck {
    /// Classify a natural roll against a target number.
    ///
    /// # Rules
    ///
    /// - natural 1: miss regardless of total (fumble)
    /// - natural 20: hit regardless of armor class (crit)
    /// - otherwise: hit iff `roll + bonus >= armor_class`
    pub fn resolve(roll: i32, bonus: i32, armor_class: i32) -> Self {
        let total = roll + bonus;
        let fumble = roll == CombatConfig::FUMBLE_ROLL;
        let crit = roll == CombatConfig::CRIT_ROLL;
        let hit = !fumble && (crit || total >= armor_class);
        Self {
            roll,
            total,
            hit,
            crit,
            fumble,
        }
    }
}

/// Roll a d20 and resolve it.
///
/// `bonus` is the attacker's to-hit plus its status delta plus any move bonus.
pub fn roll_to_hit(dice: &mut dyn Dice, bonus: i32, armor_class: i32) -> HitCheck {
    let check = HitCheck::resolve(dice.roll_d20(), bonus, armor_class);
    tracing::debug!(
        roll = check.roll,
        total = check.total,
        armor_class,
        hit = check.hit,
        "to-hit roll"
    );
    check
}
