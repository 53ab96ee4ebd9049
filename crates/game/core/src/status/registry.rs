//! Per-key status behavior.
//!
//! Each [`StatusKey`] maps to one [`StatusBehavior`] implementation. Hooks a
//! behavior does not override fall back to the identity defaults, so a key
//! only declares what it actually changes.

use crate::combat::{LogEntry, Side, TickKind};
use crate::config::CombatConfig;
use crate::element::Element;
use crate::env::Dice;
use crate::state::{Attributes, ResourceMeter};

use super::{StatusData, StatusInstance, StatusKey};

/// Everything a turn-start tick may touch on the status owner.
pub struct TickContext<'a> {
    pub who: Side,
    pub key: StatusKey,
    pub hp: &'a mut ResourceMeter,
    pub attributes: &'a Attributes,
    pub dice: &'a mut dyn Dice,
    pub log: &'a mut Vec<LogEntry>,
}

impl TickContext<'_> {
    fn record(&mut self, tick: TickKind, amount: u32) {
        self.log.push(LogEntry::StatusTick {
            who: self.who,
            key: self.key,
            tick,
            amount,
            hp: self.hp.current,
        });
    }
}

/// Hooks a status may contribute to the turn pipeline.
pub trait StatusBehavior: Send + Sync {
    /// Runs once per owner turn, before the owner acts or is checked for defeat.
    fn on_tick(&self, _ctx: &mut TickContext<'_>, _instance: &StatusInstance) {}

    /// Damage dealt by the bearer.
    fn modify_outgoing_damage(&self, amount: u32, _data: &StatusData) -> u32 {
        amount
    }

    /// Damage received by the bearer.
    fn modify_incoming_damage(&self, amount: u32, _data: &StatusData) -> u32 {
        amount
    }

    fn modify_ac(&self, ac: i32, _data: &StatusData) -> i32 {
        ac
    }

    fn modify_to_hit(&self, delta: i32, _data: &StatusData) -> i32 {
        delta
    }

    /// Bearer skips its action while this status is active.
    fn blocks_action(&self) -> bool {
        false
    }

    /// Removed the first time the bearer takes a damaging hit.
    fn consume_on_hit(&self) -> bool {
        false
    }

    fn element_override(&self, _data: &StatusData) -> Option<Element> {
        None
    }
}

/// `floor(amount * (1 - pct))`, never negative.
fn reduce_by_pct(amount: u32, pct: f64) -> u32 {
    (f64::from(amount) * (1.0 - pct)).floor().max(0.0) as u32
}

struct Defending;

impl StatusBehavior for Defending {
    fn modify_incoming_damage(&self, amount: u32, data: &StatusData) -> u32 {
        reduce_by_pct(amount, data.pct.unwrap_or(CombatConfig::DEFAULT_DEFEND_PCT))
    }

    fn consume_on_hit(&self) -> bool {
        true
    }
}

struct Wounded;

impl StatusBehavior for Wounded {
    fn modify_outgoing_damage(&self, amount: u32, data: &StatusData) -> u32 {
        let reduced = reduce_by_pct(amount, data.pct.unwrap_or(0.0));
        let flat = i64::from(data.flat.unwrap_or(0));
        (i64::from(reduced) - flat).clamp(0, i64::from(u32::MAX)) as u32
    }
}

/// Poison, bleeding and burning.
struct DamageOverTime;

impl StatusBehavior for DamageOverTime {
    fn on_tick(&self, ctx: &mut TickContext<'_>, instance: &StatusInstance) {
        let lost = ctx.hp.drain(instance.data.damage.unwrap_or(0));
        ctx.record(TickKind::Damage, lost);
    }
}

struct Regen;

impl StatusBehavior for Regen {
    fn on_tick(&self, ctx: &mut TickContext<'_>, instance: &StatusInstance) {
        let rolled = match &instance.data.heal {
            Some(spec) => spec.roll(ctx.attributes, &mut *ctx.dice),
            None => 0,
        };
        let healed = ctx.hp.restore(rolled);
        ctx.record(TickKind::Heal, healed);
    }
}

struct ArmorUp;

impl StatusBehavior for ArmorUp {
    fn modify_ac(&self, ac: i32, data: &StatusData) -> i32 {
        ac + data.ac_delta.unwrap_or(0)
    }
}

struct Slowed;

impl StatusBehavior for Slowed {
    fn modify_to_hit(&self, delta: i32, data: &StatusData) -> i32 {
        delta + data.to_hit_delta.unwrap_or(0)
    }
}

/// Stunned and frozen.
struct ControlLock;

impl StatusBehavior for ControlLock {
    fn on_tick(&self, ctx: &mut TickContext<'_>, _instance: &StatusInstance) {
        ctx.record(TickKind::Info, 0);
    }

    fn blocks_action(&self) -> bool {
        true
    }
}

struct Enchant;

impl StatusBehavior for Enchant {
    fn element_override(&self, data: &StatusData) -> Option<Element> {
        data.element
    }
}

/// Behavior registered for `key`.
pub fn behavior(key: StatusKey) -> &'static dyn StatusBehavior {
    match key {
        StatusKey::Defending => &Defending,
        StatusKey::Wounded => &Wounded,
        StatusKey::Poison | StatusKey::Bleeding | StatusKey::Burning => &DamageOverTime,
        StatusKey::Regen => &Regen,
        StatusKey::AcUp => &ArmorUp,
        StatusKey::Slowed => &Slowed,
        StatusKey::Stunned | StatusKey::Frozen => &ControlLock,
        StatusKey::Enchant => &Enchant,
    }
}
