//! One half-turn action resolved between the acting side and its foe.
//!
//! The controller splits its borrows into an [`Exchange`] so that action code
//! can mutate both combatants, the dice and the log at once without going
//! back through the controller.

use crate::action::{Effect, Move, Target};
use crate::config::CombatConfig;
use crate::element::Element;
use crate::env::{Dice, MoveOracle};
use crate::state::{Combatant, DamageRange, ItemKind};
use crate::status::{StatusData, StatusInstance, StatusKey};

use super::damage::{land_strike, strike_element};
use super::hit::roll_to_hit;
use super::log::{EffectOutcome, LogEntry, MoveFailure, StatusEndReason};
use super::Side;

/// How an action left the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Resolution {
    Continue,
    /// The given side brought the other to 0 HP.
    Victory(Side),
    Fled,
}

pub(super) struct Exchange<'s> {
    pub side: Side,
    pub actor: &'s mut Combatant,
    pub foe: &'s mut Combatant,
    pub moves: &'s dyn MoveOracle,
    pub dice: &'s mut dyn Dice,
    pub config: &'s CombatConfig,
    pub log: &'s mut Vec<LogEntry>,
}

impl Exchange<'_> {
    fn opponent(&self) -> Side {
        self.side.opponent()
    }

    fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        if side == self.side {
            &mut *self.actor
        } else {
            &mut *self.foe
        }
    }

    fn check_defeat(&self) -> Resolution {
        if self.foe.is_defeated() {
            Resolution::Victory(self.side)
        } else if self.actor.is_defeated() {
            Resolution::Victory(self.opponent())
        } else {
            Resolution::Continue
        }
    }

    fn roll_weapon(&mut self, range: DamageRange) -> u32 {
        self.dice.range(range.min, range.max).max(0) as u32
    }

    fn log_consumed(&mut self, who: Side, keys: Vec<StatusKey>) {
        for key in keys {
            self.log.push(LogEntry::StatusEnd {
                who,
                key,
                reason: StatusEndReason::Consumed,
            });
        }
    }

    fn fail_move(&mut self, id: &str, reason: MoveFailure) {
        tracing::debug!(side = %self.side, id, ?reason, "move failed");
        self.log.push(LogEntry::MoveFail {
            by: self.side,
            id: id.to_owned(),
            reason,
        });
    }

    /// Basic weapon strike.
    pub fn basic_attack(&mut self) -> Resolution {
        let bonus = self.actor.to_hit + self.actor.to_hit_delta();
        let check = roll_to_hit(&mut *self.dice, bonus, self.foe.effective_ac());

        let mut damage = 0;
        let mut consumed = Vec::new();
        if check.hit {
            let range = self.actor.damage;
            let mut raw = self.roll_weapon(range);
            if check.crit {
                raw += self.roll_weapon(range);
            }
            let outgoing = self.actor.status.outgoing_damage(raw);
            let element = strike_element(&self.actor.status, Element::Physical);
            let strike = land_strike(&mut *self.foe, outgoing, element);
            damage = strike.amount;
            consumed = strike.consumed;
        }

        self.log.push(LogEntry::Attack {
            by: self.side,
            check,
            damage,
            target_hp: self.foe.hp.current,
        });
        self.log_consumed(self.opponent(), consumed);
        self.check_defeat()
    }

    /// Resolve a catalog move from the actor's loadout.
    ///
    /// Unknown, unlearned and unaffordable moves fail before anything is
    /// deducted; the turn is spent either way.
    pub fn use_move(&mut self, id: &str) -> Resolution {
        let moves = self.moves;
        let Some(definition) = moves.get_move(id) else {
            self.fail_move(id, MoveFailure::UnknownMove);
            return Resolution::Continue;
        };
        if !self.actor.knows_move(id) {
            self.fail_move(id, MoveFailure::NotInLoadout);
            return Resolution::Continue;
        }

        let cost = definition.cost;
        let pool = self.actor.pool_mut(cost.pool);
        if !pool.can_afford(cost.amount) {
            let available = pool.current;
            self.fail_move(
                id,
                MoveFailure::InsufficientCost {
                    pool: cost.pool,
                    cost: cost.amount,
                    available,
                },
            );
            return Resolution::Continue;
        }
        pool.drain(cost.amount);

        let check = if definition.requires_roll() {
            let bonus = self.actor.to_hit + self.actor.to_hit_delta() + definition.to_hit_bonus;
            Some(roll_to_hit(&mut *self.dice, bonus, self.foe.effective_ac()))
        } else {
            None
        };

        self.log.push(LogEntry::Move {
            by: self.side,
            id: definition.id.clone(),
            name: definition.name.clone(),
            kind: definition.kind,
            element: strike_element(&self.actor.status, definition.element),
            check,
            mp: self.actor.mp.current,
            sp: self.actor.sp.current,
        });

        if check.is_some_and(|check| !check.hit) {
            return Resolution::Continue;
        }
        let crit = check.is_some_and(|check| check.crit);

        for effect in definition.all_effects() {
            let resolution = self.apply_effect(definition, effect, crit);
            if resolution != Resolution::Continue {
                return resolution;
            }
        }
        Resolution::Continue
    }

    fn apply_effect(&mut self, definition: &Move, effect: &Effect, crit: bool) -> Resolution {
        let target = match definition.target {
            Target::Caster => self.side,
            Target::Enemy => self.opponent(),
        };

        let mut consumed = Vec::new();
        let outcome = match effect {
            Effect::Damage { roll } => {
                let mut raw = roll.roll(&self.actor.attributes, &mut *self.dice);
                if crit {
                    raw = raw.saturating_mul(2);
                }
                let outgoing = self.actor.status.outgoing_damage(raw);
                let element = strike_element(&self.actor.status, definition.element);
                let defender = self.combatant_mut(target);
                let strike = land_strike(defender, outgoing, element);
                consumed = strike.consumed;
                EffectOutcome::Damage {
                    amount: strike.amount,
                    multiplier: strike.multiplier,
                    hp: defender.hp.current,
                }
            }
            Effect::Heal { roll } => {
                let amount = roll.roll(&self.actor.attributes, &mut *self.dice);
                let recipient = self.combatant_mut(target);
                let healed = recipient.hp.restore(amount);
                EffectOutcome::Heal {
                    amount: healed,
                    hp: recipient.hp.current,
                }
            }
            Effect::ApplyStatus { status, chance } => {
                if let Some(chance) = chance
                    && !self.dice.chance(*chance)
                {
                    EffectOutcome::StatusResisted { key: status.key }
                } else {
                    self.combatant_mut(target)
                        .status
                        .insert(status.key, status.instance());
                    EffectOutcome::Status {
                        key: status.key,
                        duration: status.duration,
                    }
                }
            }
        };

        self.log.push(LogEntry::MoveEffect {
            by: self.side,
            target,
            outcome,
        });
        self.log_consumed(target, consumed);
        self.check_defeat()
    }

    /// One-turn `defending` stance, consumed by the next damaging hit.
    pub fn defend(&mut self) -> Resolution {
        let data = StatusData {
            pct: Some(self.config.defend_pct),
            ..StatusData::default()
        };
        self.actor
            .status
            .insert(StatusKey::Defending, StatusInstance::turns(1, data));
        self.log.push(LogEntry::Defend);
        Resolution::Continue
    }

    /// Consume one item by name. Unknown or missing items fail without effect.
    pub fn use_item(&mut self, name: &str) -> Resolution {
        let item = match name.parse::<ItemKind>() {
            Ok(item) if self.actor.inventory.take(item) => item,
            _ => {
                self.log.push(LogEntry::ItemFail {
                    item: name.to_owned(),
                });
                return Resolution::Continue;
            }
        };

        let healed = match item {
            ItemKind::Potion => {
                let amount = self
                    .dice
                    .range(self.config.potion_heal_min, self.config.potion_heal_max)
                    .max(0) as u32;
                self.actor.hp.restore(amount)
            }
        };
        self.log.push(LogEntry::Item {
            item: item.to_string(),
            healed,
            hp: self.actor.hp.current,
        });
        Resolution::Continue
    }

    /// `d20 + CHA` against a difficulty derived from the foe's base armor class.
    pub fn flee(&mut self) -> Resolution {
        let roll = self.dice.roll_d20();
        let total = roll + self.actor.attributes.cha;
        let dc = self.config.flee_dc(self.foe.ac);
        let success = total >= dc;
        self.log.push(LogEntry::Flee {
            roll,
            total,
            dc,
            success,
        });
        if success {
            Resolution::Fled
        } else {
            Resolution::Continue
        }
    }

    /// The enemy wastes its turn.
    pub fn taunt(&mut self) -> Resolution {
        self.log.push(LogEntry::Taunt);
        Resolution::Continue
    }
}
