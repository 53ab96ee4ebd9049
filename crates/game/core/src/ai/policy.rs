//! Randomized priority policy for the enemy side.

use crate::action::{Move, MoveKind, Target};
use crate::config::PolicyConfig;
use crate::env::{Dice, MoveOracle};
use crate::state::{AiMemory, Combatant};

use super::pick_weighted;

/// Why the enemy chose a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum Intent {
    Heal,
    Buff,
    Attack,
    Debuff,
    Utility,
}

/// Action chosen for one enemy turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decision {
    /// Flavor turn, no effect.
    Taunt,
    Move { id: String, intent: Intent },
    BasicAttack,
}

/// Enemy decision procedure.
///
/// # Priority
///
/// 1. taunt with a small chance
/// 2. heal when below the HP threshold (strict) and a heal is affordable
/// 3. buff self, near-certain on turn 1 and increasingly likely afterwards
/// 4. weighted category pick among attack / debuff / utility
/// 5. basic attack
#[derive(Clone, Debug, Default)]
pub struct EnemyPolicy {
    config: PolicyConfig,
}

impl EnemyPolicy {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Choose the enemy's action and update its turn memory.
    pub fn decide(
        &self,
        enemy: &mut Combatant,
        moves: &dyn MoveOracle,
        dice: &mut dyn Dice,
    ) -> Decision {
        let memory = enemy.ai.get_or_insert_with(AiMemory::default);
        memory.turns_taken += 1;
        let AiMemory {
            turns_taken: turn,
            last_buff_turn,
        } = *memory;

        if dice.chance(self.config.taunt_chance) {
            tracing::debug!(enemy = %enemy.name, turn, "taunt");
            return Decision::Taunt;
        }

        let options = affordable_moves(enemy, moves);
        let of_kind = |kind: MoveKind, weigh: fn(&Move) -> i32| -> Vec<(&Move, i32)> {
            options
                .iter()
                .filter(|definition| definition.kind == kind)
                .map(|definition| (*definition, weigh(definition)))
                .collect()
        };

        let hp_fraction = enemy.hp.fraction();
        if hp_fraction < self.config.heal_threshold {
            let heals = of_kind(MoveKind::Heal, |_| 1);
            if let Some(definition) = pick_weighted(&heals, dice) {
                tracing::debug!(enemy = %enemy.name, hp_fraction, id = %definition.id, "heal");
                return Decision::Move {
                    id: definition.id.clone(),
                    intent: Intent::Heal,
                };
            }
        }

        let buffs: Vec<(&Move, i32)> = of_kind(MoveKind::Buff, |_| 1)
            .into_iter()
            .filter(|(definition, _)| definition.target == Target::Caster)
            .collect();
        if !buffs.is_empty()
            && self.wants_buff(turn, last_buff_turn, dice)
            && let Some(definition) = pick_weighted(&buffs, dice)
        {
            if let Some(memory) = enemy.ai.as_mut() {
                memory.last_buff_turn = turn;
            }
            tracing::debug!(enemy = %enemy.name, turn, id = %definition.id, "buff");
            return Decision::Move {
                id: definition.id.clone(),
                intent: Intent::Buff,
            };
        }

        // heavier specials weigh slightly more
        let attacks = of_kind(MoveKind::Attack, |definition| {
            1 + definition.cost.amount as i32
        });
        let debuffs = of_kind(MoveKind::Debuff, |_| 1);
        let utility = of_kind(MoveKind::Utility, |_| 1);

        let categories: Vec<(Intent, i32)> = [
            (Intent::Attack, self.config.attack_weight, &attacks),
            (Intent::Debuff, self.config.debuff_weight, &debuffs),
            (Intent::Utility, self.config.utility_weight, &utility),
        ]
        .into_iter()
        .filter(|(_, _, pool)| !pool.is_empty())
        .map(|(intent, weight, _)| (intent, weight))
        .collect();

        let Some(&intent) = pick_weighted(&categories, dice) else {
            tracing::debug!(enemy = %enemy.name, "no usable moves, basic attack");
            return Decision::BasicAttack;
        };
        let pool = match intent {
            Intent::Debuff => &debuffs,
            Intent::Utility => &utility,
            _ => &attacks,
        };
        match pick_weighted(pool, dice) {
            Some(definition) => {
                tracing::debug!(enemy = %enemy.name, %intent, id = %definition.id, "move");
                Decision::Move {
                    id: definition.id.clone(),
                    intent,
                }
            }
            None => Decision::BasicAttack,
        }
    }

    /// Buff cadence: probable on turn 1, then gated by a random 0..=N window
    /// and a chance that grows with turns since the last buff.
    fn wants_buff(&self, turn: u32, last_buff_turn: u32, dice: &mut dyn Dice) -> bool {
        if turn <= 1 {
            return dice.chance(self.config.first_turn_buff_chance);
        }
        let since = turn.saturating_sub(last_buff_turn);
        let window = dice.range(0, self.config.buff_window_max);
        if (since as i32) < window {
            return false;
        }
        let chance = (self.config.buff_chance_base + self.config.buff_chance_step * f64::from(since))
            .min(self.config.buff_chance_cap);
        dice.chance(chance)
    }
}

/// Loadout moves present in the catalog whose cost the enemy can pay now.
fn affordable_moves<'m>(enemy: &Combatant, moves: &'m dyn MoveOracle) -> Vec<&'m Move> {
    let mut options: Vec<&Move> = Vec::new();
    for id in enemy.loadout() {
        let Some(definition) = moves.get_move(id) else {
            continue;
        };
        let affordable = enemy
            .pool(definition.cost.pool)
            .can_afford(definition.cost.amount);
        if affordable && !options.iter().any(|known| known.id == definition.id) {
            options.push(definition);
        }
    }
    options
}
