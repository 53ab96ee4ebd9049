//! One side of a duel and its fail-fast builder.

use std::collections::BTreeMap;

use crate::action::Pool;
use crate::config::CombatConfig;
use crate::element::{Element, element_multiplier};
use crate::error::BuildError;
use crate::status::StatusBag;

use super::{Attributes, DamageRange, Inventory, ItemKind, ResourceMeter, Stat};

/// Enemy decision memory, carried between enemy turns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AiMemory {
    /// Enemy turns on which the policy ran, the current one included.
    pub turns_taken: u32,
    /// Turn number of the most recent buff, 0 if none yet.
    pub last_buff_turn: u32,
}

/// A player or enemy combatant.
///
/// Fields are public so callers can inspect (and between sessions adjust) the
/// record; during a session the controller is the only mutator.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub name: String,
    pub class: String,
    pub attributes: Attributes,
    pub hp: ResourceMeter,
    pub mp: ResourceMeter,
    pub sp: ResourceMeter,
    /// Base armor class, before status modifiers.
    pub ac: i32,
    pub to_hit: i32,
    pub damage: DamageRange,
    pub attacks: Vec<String>,
    pub abilities: Vec<String>,
    pub inventory: Inventory,
    pub status: StatusBag,
    pub affinity: Element,
    pub resist: BTreeMap<Element, f64>,
    pub ai: Option<AiMemory>,
}

impl Combatant {
    pub fn builder(name: impl Into<String>, class: impl Into<String>) -> CombatantBuilder {
        CombatantBuilder::new(name, class)
    }

    pub fn pool(&self, pool: Pool) -> &ResourceMeter {
        match pool {
            Pool::Mp => &self.mp,
            Pool::Sp => &self.sp,
        }
    }

    pub fn pool_mut(&mut self, pool: Pool) -> &mut ResourceMeter {
        match pool {
            Pool::Mp => &mut self.mp,
            Pool::Sp => &mut self.sp,
        }
    }

    /// True if `id` is in either the attack or ability loadout.
    pub fn knows_move(&self, id: &str) -> bool {
        self.attacks.iter().chain(&self.abilities).any(|known| known == id)
    }

    /// Move ids across both loadouts, attacks first.
    pub fn loadout(&self) -> impl Iterator<Item = &str> {
        self.attacks
            .iter()
            .chain(&self.abilities)
            .map(String::as_str)
    }

    pub fn clamp_resources(&mut self) {
        self.hp.clamp();
        self.mp.clamp();
        self.sp.clamp();
    }

    /// Armor class after every active status modifier.
    pub fn effective_ac(&self) -> i32 {
        self.status.armor_class(self.ac)
    }

    /// Sum of status to-hit adjustments.
    pub fn to_hit_delta(&self) -> i32 {
        self.status.to_hit_delta()
    }

    /// Damage multiplier for a strike of `element` landing on this combatant.
    pub fn multiplier_for(&self, element: Element) -> f64 {
        element_multiplier(self.affinity, &self.resist, element)
    }

    pub fn is_defeated(&self) -> bool {
        self.hp.is_empty()
    }
}

/// Builder for constructing a validated [`Combatant`].
#[derive(Clone, Debug)]
pub struct CombatantBuilder {
    name: String,
    class: String,
    attributes: Attributes,
    hp: u32,
    mp: u32,
    sp: u32,
    ac: i32,
    to_hit: i32,
    damage: DamageRange,
    attacks: Vec<String>,
    abilities: Vec<String>,
    items: Vec<(ItemKind, u16)>,
    affinity: Element,
    resist: BTreeMap<Element, f64>,
    enemy: bool,
}

impl CombatantBuilder {
    pub fn new(name: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            attributes: Attributes::default(),
            hp: 10,
            mp: 0,
            sp: 0,
            ac: 10,
            to_hit: 0,
            damage: DamageRange::default(),
            attacks: Vec::new(),
            abilities: Vec::new(),
            items: Vec::new(),
            affinity: Element::Physical,
            resist: BTreeMap::new(),
            enemy: false,
        }
    }

    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Maximum HP; the combatant starts at full health.
    pub fn hp(mut self, maximum: u32) -> Self {
        self.hp = maximum;
        self
    }

    pub fn mp(mut self, maximum: u32) -> Self {
        self.mp = maximum;
        self
    }

    pub fn sp(mut self, maximum: u32) -> Self {
        self.sp = maximum;
        self
    }

    pub fn ac(mut self, ac: i32) -> Self {
        self.ac = ac;
        self
    }

    pub fn to_hit(mut self, to_hit: i32) -> Self {
        self.to_hit = to_hit;
        self
    }

    pub fn damage(mut self, min: i32, max: i32) -> Self {
        self.damage = DamageRange::new(min, max);
        self
    }

    pub fn attacks<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attacks = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn abilities<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.abilities = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn item(mut self, item: ItemKind, quantity: u16) -> Self {
        self.items.push((item, quantity));
        self
    }

    pub fn affinity(mut self, affinity: Element) -> Self {
        self.affinity = affinity;
        self
    }

    pub fn resist(mut self, element: Element, multiplier: f64) -> Self {
        self.resist.insert(element, multiplier);
        self
    }

    /// Mark the combatant as enemy-controlled (allocates AI memory).
    pub fn enemy(mut self) -> Self {
        self.enemy = true;
        self
    }

    /// Validate and construct the combatant.
    ///
    /// Negative resist multipliers are treated as data defects: they are
    /// clamped to 0 with a warning instead of rejecting the record.
    pub fn build(self) -> Result<Combatant, BuildError> {
        if self.name.trim().is_empty() {
            return Err(BuildError::EmptyName);
        }
        for (stat, value) in self.attributes.iter() {
            check_attribute(stat, value)?;
        }
        if !self.damage.is_valid() {
            return Err(BuildError::InvalidDamageRange {
                min: self.damage.min,
                max: self.damage.max,
            });
        }
        if self.hp == 0 {
            return Err(BuildError::NoHealth);
        }
        if self.attacks.len() > CombatConfig::MAX_ATTACKS {
            return Err(BuildError::LoadoutTooLarge {
                len: self.attacks.len(),
                max: CombatConfig::MAX_ATTACKS,
            });
        }

        let mut inventory = Inventory::empty();
        for (item, quantity) in self.items {
            inventory.add(item, quantity)?;
        }

        let mut resist = self.resist;
        for (element, multiplier) in resist.iter_mut() {
            if *multiplier < 0.0 {
                tracing::warn!(
                    combatant = %self.name,
                    %element,
                    multiplier = *multiplier,
                    "negative resist multiplier clamped to 0"
                );
                *multiplier = 0.0;
            }
        }

        Ok(Combatant {
            name: self.name,
            class: self.class,
            attributes: self.attributes,
            hp: ResourceMeter::full(self.hp),
            mp: ResourceMeter::full(self.mp),
            sp: ResourceMeter::full(self.sp),
            ac: self.ac,
            to_hit: self.to_hit,
            damage: self.damage,
            attacks: self.attacks,
            abilities: self.abilities,
            inventory,
            status: StatusBag::new(),
            affinity: self.affinity,
            resist,
            ai: self.enemy.then(AiMemory::default),
        })
    }
}

fn check_attribute(stat: Stat, value: i32) -> Result<(), BuildError> {
    if (CombatConfig::ATTRIBUTE_MIN..=CombatConfig::ATTRIBUTE_MAX).contains(&value) {
        Ok(())
    } else {
        Err(BuildError::AttributeOutOfRange {
            stat,
            value,
            min: CombatConfig::ATTRIBUTE_MIN,
            max: CombatConfig::ATTRIBUTE_MAX,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_rejects_out_of_range_attribute() {
        let result = Combatant::builder("Ash", "Warrior")
            .attributes(Attributes::new(21, 0, 0, 0, 0))
            .build();
        assert_eq!(
            result.unwrap_err(),
            BuildError::AttributeOutOfRange {
                stat: Stat::Str,
                value: 21,
                min: -3,
                max: 20,
            }
        );
    }

    #[test]
    fn build_rejects_inverted_damage_and_oversized_loadout() {
        let inverted = Combatant::builder("Ash", "Warrior").damage(8, 2).build();
        assert!(matches!(inverted, Err(BuildError::InvalidDamageRange { .. })));

        let oversized = Combatant::builder("Ash", "Warrior")
            .attacks(["a", "b", "c", "d", "e"])
            .build();
        assert!(matches!(oversized, Err(BuildError::LoadoutTooLarge { len: 5, .. })));
    }

    #[test]
    fn negative_resist_is_clamped() {
        let goblin = Combatant::builder("Goblin", "Goblin")
            .resist(Element::Holy, -1.5)
            .enemy()
            .build()
            .unwrap();
        assert_eq!(goblin.resist[&Element::Holy], 0.0);
        assert_eq!(goblin.ai, Some(AiMemory::default()));
    }

    #[test]
    fn pools_and_loadout_lookups() {
        let mut wizard = Combatant::builder("Ren", "Wizard")
            .mp(6)
            .sp(2)
            .attacks(["firebolt"])
            .abilities(["regen"])
            .build()
            .unwrap();
        assert!(wizard.knows_move("regen"));
        assert!(!wizard.knows_move("heal"));
        assert_eq!(wizard.pool_mut(Pool::Mp).drain(2), 2);
        assert_eq!(wizard.pool(Pool::Mp).current, 4);
        assert_eq!(wizard.loadout().collect::<Vec<_>>(), vec!["firebolt", "regen"]);
    }
}
