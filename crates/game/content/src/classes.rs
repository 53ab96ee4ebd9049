//! Player class presets.
//!
//! A preset fixes the starting attributes, combat stats and default loadout
//! of a class. Presets are plain data; [`ClassSpec::build`] turns one into a
//! validated [`Combatant`].

use combat_core::{
    Attributes, BuildError, Combatant, DamageRange, Dice, Element, ItemKind, MoveOracle,
};

const NAME_PREFIXES: [&str; 15] = [
    "Bel", "Ash", "Mor", "Ka", "El", "Yor", "Thal", "Ren", "Ruth", "Luk", "Jer", "Tim", "Jo",
    "Jam", "Bil",
];
const NAME_SUFFIXES: [&str; 15] = [
    "dor", "rin", "th", "mar", "ion", "vis", "ael", "en", "os", "rak", "ith", "mey", "as", "is",
    "bor",
];

/// Two-syllable random hero name.
pub fn random_name(dice: &mut dyn Dice) -> String {
    let prefix = dice.range(0, NAME_PREFIXES.len() as i32 - 1) as usize;
    let suffix = dice.range(0, NAME_SUFFIXES.len() as i32 - 1) as usize;
    format!("{}{}", NAME_PREFIXES[prefix], NAME_SUFFIXES[suffix])
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassSpec {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: Attributes,
    pub hp: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mp: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sp: u32,
    pub ac: i32,
    pub to_hit: i32,
    pub damage: DamageRange,
    /// Default basic loadout (at most four).
    #[cfg_attr(feature = "serde", serde(default))]
    pub attacks: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub abilities: Vec<String>,
    /// Moves a new character of this class may pick its basics from.
    #[cfg_attr(feature = "serde", serde(default))]
    pub basic_pool: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub potions: u16,
    #[cfg_attr(feature = "serde", serde(default))]
    pub affinity: Element,
}

impl ClassSpec {
    /// Build a fresh character of this class with the default loadout.
    pub fn build(&self, name: impl Into<String>) -> Result<Combatant, BuildError> {
        let mut builder = Combatant::builder(name, self.name.as_str())
            .attributes(self.attributes)
            .hp(self.hp)
            .mp(self.mp)
            .sp(self.sp)
            .ac(self.ac)
            .to_hit(self.to_hit)
            .damage(self.damage.min, self.damage.max)
            .attacks(self.attacks.iter().map(String::as_str))
            .abilities(self.abilities.iter().map(String::as_str))
            .affinity(self.affinity);
        if self.potions > 0 {
            builder = builder.item(ItemKind::Potion, self.potions);
        }
        builder.build()
    }

    /// Every move id the preset refers to.
    pub fn move_ids(&self) -> impl Iterator<Item = &str> {
        self.attacks
            .iter()
            .chain(&self.abilities)
            .chain(&self.basic_pool)
            .map(String::as_str)
    }
}

/// Ordered set of class presets. The first entry is the default class.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ClassRoster {
    classes: Vec<ClassSpec>,
}

impl ClassRoster {
    pub fn new(classes: Vec<ClassSpec>) -> Self {
        Self { classes }
    }

    /// Case-insensitive lookup by class name.
    pub fn get(&self, name: &str) -> Option<&ClassSpec> {
        let name = name.trim();
        self.classes
            .iter()
            .find(|class| class.name.eq_ignore_ascii_case(name))
    }

    pub fn default_class(&self) -> Option<&ClassSpec> {
        self.classes.first()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|class| class.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassSpec> {
        self.classes.iter()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// `(class, move id)` pairs naming moves the oracle does not know.
    pub fn unknown_moves<'a>(&'a self, moves: &dyn MoveOracle) -> Vec<(&'a str, &'a str)> {
        self.classes
            .iter()
            .flat_map(|class| class.move_ids().map(move |id| (class.name.as_str(), id)))
            .filter(|(_, id)| moves.get_move(id).is_none())
            .collect()
    }
}
