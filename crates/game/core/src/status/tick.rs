//! Turn-start status tick.

use strum::IntoEnumIterator;

use crate::combat::{LogEntry, Side, StatusEndReason};
use crate::env::Dice;
use crate::state::Combatant;

use super::{StatusKey, TickContext, behavior};

/// Run every `on_tick` hook on `owner`, then decrement and expire durations.
///
/// Hooks run in key order against the bag as it stood when the tick began;
/// expiry happens afterwards, so a one-turn status still ticks once.
pub fn tick_statuses(
    owner: &mut Combatant,
    who: Side,
    dice: &mut dyn Dice,
    log: &mut Vec<LogEntry>,
) {
    let Combatant {
        status,
        hp,
        attributes,
        ..
    } = owner;

    for key in StatusKey::iter() {
        let Some(instance) = status.get(key) else {
            continue;
        };
        let mut ctx = TickContext {
            who,
            key,
            hp: &mut *hp,
            attributes: &*attributes,
            dice: &mut *dice,
            log: &mut *log,
        };
        behavior(key).on_tick(&mut ctx, instance);
    }

    for key in status.decrement() {
        tracing::debug!(%who, %key, "status expired");
        log.push(LogEntry::StatusEnd {
            who,
            key,
            reason: StatusEndReason::Expired,
        });
    }
    hp.clamp();
}
