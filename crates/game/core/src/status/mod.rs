//! Status effects: keys, instances, and the per-combatant bag.
//!
//! A [`StatusBag`] holds one slot per [`StatusKey`], so "at most one instance
//! per key" is a property of the type and reapplying a status overwrites it.
//! Behavior for each key lives in [`registry`]; the turn-start tick lives in
//! [`tick`].
mod registry;
mod tick;

use std::collections::BTreeMap;

use strum::{EnumCount, IntoEnumIterator};

use crate::action::RollSpec;
use crate::element::Element;

pub use registry::{StatusBehavior, TickContext, behavior};
pub use tick::tick_statuses;

/// Closed set of status keys, in hook application order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum StatusKey {
    Defending,
    Wounded,
    Poison,
    Bleeding,
    Burning,
    Regen,
    AcUp,
    Slowed,
    Stunned,
    Frozen,
    Enchant,
}

impl StatusKey {
    const fn slot(self) -> usize {
        self as usize
    }
}

/// How long an instance lasts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusDuration {
    /// Removed when the owner's tick brings the count to 0.
    Turns(u32),
    /// Never decremented.
    Infinite,
}

impl Default for StatusDuration {
    fn default() -> Self {
        Self::Turns(1)
    }
}

impl core::fmt::Display for StatusDuration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Turns(turns) => write!(f, "{turns} turns"),
            Self::Infinite => f.write_str("infinite"),
        }
    }
}

/// Behavior-specific payload. Every field is optional; each behavior reads
/// only the ones it understands.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatusData {
    /// Fractional damage reduction (`wounded`, `defending`).
    pub pct: Option<f64>,
    /// Flat damage reduction applied after `pct` (`wounded`).
    pub flat: Option<i32>,
    pub ac_delta: Option<i32>,
    pub to_hit_delta: Option<i32>,
    /// Damage per tick (`poison`, `bleeding`, `burning`).
    pub damage: Option<u32>,
    /// Heal roll per tick (`regen`).
    pub heal: Option<RollSpec>,
    /// Strike element override (`enchant`).
    pub element: Option<Element>,
}

/// An active status on a combatant.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusInstance {
    pub duration: StatusDuration,
    /// Persistent instances are never decremented.
    #[cfg_attr(feature = "serde", serde(default))]
    pub persistent: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub data: StatusData,
}

impl StatusInstance {
    pub fn turns(turns: u32, data: StatusData) -> Self {
        Self {
            duration: StatusDuration::Turns(turns),
            persistent: false,
            data,
        }
    }

    pub fn infinite(data: StatusData) -> Self {
        Self {
            duration: StatusDuration::Infinite,
            persistent: false,
            data,
        }
    }

    /// True if the owner's tick decrements this instance.
    pub fn counts_down(&self) -> bool {
        !self.persistent && matches!(self.duration, StatusDuration::Turns(_))
    }
}

/// One optional instance per status key.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "BTreeMap<StatusKey, StatusInstance>",
        into = "BTreeMap<StatusKey, StatusInstance>"
    )
)]
pub struct StatusBag {
    slots: [Option<StatusInstance>; StatusKey::COUNT],
}

impl StatusBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `instance` under `key`, returning the instance it replaced.
    pub fn insert(&mut self, key: StatusKey, instance: StatusInstance) -> Option<StatusInstance> {
        self.slots[key.slot()].replace(instance)
    }

    pub fn get(&self, key: StatusKey) -> Option<&StatusInstance> {
        self.slots[key.slot()].as_ref()
    }

    pub fn get_mut(&mut self, key: StatusKey) -> Option<&mut StatusInstance> {
        self.slots[key.slot()].as_mut()
    }

    pub fn contains(&self, key: StatusKey) -> bool {
        self.slots[key.slot()].is_some()
    }

    pub fn remove(&mut self, key: StatusKey) -> Option<StatusInstance> {
        self.slots[key.slot()].take()
    }

    pub fn clear(&mut self) {
        self.slots = Default::default();
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Active statuses in key order.
    pub fn iter(&self) -> impl Iterator<Item = (StatusKey, &StatusInstance)> {
        StatusKey::iter().filter_map(|key| self.get(key).map(|instance| (key, instance)))
    }

    pub fn keys(&self) -> impl Iterator<Item = StatusKey> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Decrement every counting instance; returns keys that expired.
    pub fn decrement(&mut self) -> Vec<StatusKey> {
        let mut expired = Vec::new();
        for key in StatusKey::iter() {
            let slot = &mut self.slots[key.slot()];
            let Some(instance) = slot.as_mut() else {
                continue;
            };
            if !instance.counts_down() {
                continue;
            }
            if let StatusDuration::Turns(turns) = &mut instance.duration {
                *turns = turns.saturating_sub(1);
                if *turns == 0 {
                    *slot = None;
                    expired.push(key);
                }
            }
        }
        expired
    }

    // ===== hook folds =====

    /// Apply every outgoing-damage modifier, flooring at 0 after each step.
    pub fn outgoing_damage(&self, amount: u32) -> u32 {
        self.iter().fold(amount, |amount, (key, instance)| {
            behavior(key).modify_outgoing_damage(amount, &instance.data)
        })
    }

    /// Apply every incoming-damage modifier, flooring at 0 after each step.
    pub fn incoming_damage(&self, amount: u32) -> u32 {
        self.iter().fold(amount, |amount, (key, instance)| {
            behavior(key).modify_incoming_damage(amount, &instance.data)
        })
    }

    pub fn armor_class(&self, base: i32) -> i32 {
        self.iter().fold(base, |ac, (key, instance)| {
            behavior(key).modify_ac(ac, &instance.data)
        })
    }

    pub fn to_hit_delta(&self) -> i32 {
        self.iter().fold(0, |delta, (key, instance)| {
            behavior(key).modify_to_hit(delta, &instance.data)
        })
    }

    /// First active status that prevents acting.
    pub fn blocking_key(&self) -> Option<StatusKey> {
        self.keys().find(|key| behavior(*key).blocks_action())
    }

    /// Remove every consume-on-hit instance; returns the removed keys.
    pub fn consume_on_hit(&mut self) -> Vec<StatusKey> {
        let consumed: Vec<StatusKey> = self
            .keys()
            .filter(|key| behavior(*key).consume_on_hit())
            .collect();
        for key in &consumed {
            self.remove(*key);
        }
        consumed
    }

    /// Element override carried by an `enchant`-style status.
    pub fn element_override(&self) -> Option<Element> {
        self.iter().find_map(|(key, instance)| {
            behavior(key).element_override(&instance.data)
        })
    }
}

impl From<BTreeMap<StatusKey, StatusInstance>> for StatusBag {
    fn from(map: BTreeMap<StatusKey, StatusInstance>) -> Self {
        let mut bag = Self::new();
        for (key, instance) in map {
            bag.insert(key, instance);
        }
        bag
    }
}

impl From<StatusBag> for BTreeMap<StatusKey, StatusInstance> {
    fn from(bag: StatusBag) -> Self {
        StatusKey::iter()
            .zip(bag.slots)
            .filter_map(|(key, slot)| slot.map(|instance| (key, instance)))
            .collect()
    }
}
