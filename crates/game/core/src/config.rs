/// Combat configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Fraction of incoming damage absorbed by the `defending` stance.
    pub defend_pct: f64,
    /// Inclusive heal range of a single potion.
    pub potion_heal_min: i32,
    pub potion_heal_max: i32,
    /// Flee difficulty is `flee_base_dc + floor(opponent_ac / flee_ac_divisor)`.
    pub flee_base_dc: i32,
    pub flee_ac_divisor: i32,
    /// Enemy decision tunables.
    pub policy: PolicyConfig,
}

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_ATTACKS: usize = 4;
    pub const MAX_INVENTORY_SLOTS: usize = 8;
    pub const ATTRIBUTE_MIN: i32 = -3;
    pub const ATTRIBUTE_MAX: i32 = 20;

    // ===== d20 rules =====
    pub const D20_SIDES: i32 = 20;
    pub const FUMBLE_ROLL: i32 = 1;
    pub const CRIT_ROLL: i32 = 20;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_DEFEND_PCT: f64 = 0.5;
    pub const DEFAULT_POTION_HEAL: (i32, i32) = (4, 8);
    pub const DEFAULT_FLEE_BASE_DC: i32 = 12;
    pub const DEFAULT_FLEE_AC_DIVISOR: i32 = 5;

    pub fn new() -> Self {
        Self {
            defend_pct: Self::DEFAULT_DEFEND_PCT,
            potion_heal_min: Self::DEFAULT_POTION_HEAL.0,
            potion_heal_max: Self::DEFAULT_POTION_HEAL.1,
            flee_base_dc: Self::DEFAULT_FLEE_BASE_DC,
            flee_ac_divisor: Self::DEFAULT_FLEE_AC_DIVISOR,
            policy: PolicyConfig::default(),
        }
    }

    /// Difficulty class for fleeing from an opponent with the given armor class.
    pub fn flee_dc(&self, opponent_ac: i32) -> i32 {
        self.flee_base_dc + opponent_ac.div_euclid(self.flee_ac_divisor.max(1))
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Tunables for the enemy decision procedure.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PolicyConfig {
    /// Probability of wasting the turn on a taunt.
    pub taunt_chance: f64,
    /// Heal priority applies strictly below this HP fraction.
    pub heal_threshold: f64,
    /// Buff probability on the enemy's first turn.
    pub first_turn_buff_chance: f64,
    /// Buff probability is `base + step * turns_since_buff`, capped. The
    /// defaults give 0.35 one turn after a buff.
    pub buff_chance_base: f64,
    pub buff_chance_step: f64,
    pub buff_chance_cap: f64,
    /// Upper bound of the random buff window drawn each turn.
    pub buff_window_max: i32,
    /// Category weights for the final weighted pick.
    pub attack_weight: i32,
    pub debuff_weight: i32,
    pub utility_weight: i32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            taunt_chance: 0.10,
            heal_threshold: 0.5,
            first_turn_buff_chance: 0.9,
            buff_chance_base: 0.2,
            buff_chance_step: 0.15,
            buff_chance_cap: 0.9,
            buff_window_max: 2,
            attack_weight: 8,
            debuff_weight: 3,
            utility_weight: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flee_dc_uses_floored_armor_class() {
        let config = CombatConfig::default();
        assert_eq!(config.flee_dc(10), 14);
        assert_eq!(config.flee_dc(14), 14);
        assert_eq!(config.flee_dc(15), 15);
    }
}
