//! Enemy templates, traits, and difficulty scaling.
//!
//! An encounter enemy is a template rolled together with one trait and
//! scaled by a difficulty level:
//!
//! ```text
//! hp     = max(6,  base_hp + 3 * difficulty + trait.hp)
//! ac     = max(10, base_ac + difficulty / 2 + trait.ac)
//! to_hit =         to_hit  + difficulty / 2 + trait.to_hit
//! damage = [min, max + trait.damage_max]
//! ```

use std::collections::BTreeMap;

use combat_core::{
    Attributes, BuildError, Combatant, DamageRange, Dice, Element, MoveOracle,
};

/// Floor applied to scaled enemy HP.
pub const MIN_ENEMY_HP: i64 = 6;
/// Floor applied to scaled enemy armor class.
pub const MIN_ENEMY_AC: i32 = 10;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub name: String,
    pub hp: u32,
    pub ac: i32,
    pub to_hit: i32,
    pub damage: DamageRange,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: Attributes,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mp: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sp: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attacks: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub affinity: Element,
    #[cfg_attr(feature = "serde", serde(default))]
    pub resist: BTreeMap<Element, f64>,
}

/// Stat modifier rolled onto a template.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnemyTrait {
    pub name: String,
    pub hp: i32,
    pub ac: i32,
    pub to_hit: i32,
    /// Added to the upper damage bound.
    pub damage_max: i32,
}

/// Templates and traits available to encounters.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyRoster {
    pub templates: Vec<EnemyTemplate>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub traits: Vec<EnemyTrait>,
}

impl EnemyRoster {
    /// Case-insensitive template lookup.
    pub fn template(&self, name: &str) -> Option<&EnemyTemplate> {
        let name = name.trim();
        self.templates
            .iter()
            .find(|template| template.name.eq_ignore_ascii_case(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|template| template.name.as_str())
    }

    /// Roll an enemy for an encounter.
    ///
    /// `kind: None` picks a random template; an unknown kind falls back to the
    /// first template. The template is drawn before the trait.
    pub fn generate(
        &self,
        kind: Option<&str>,
        difficulty: u32,
        dice: &mut dyn Dice,
    ) -> Result<Option<Combatant>, BuildError> {
        let template = match kind {
            None => pick(&self.templates, dice),
            Some(kind) => self.template(kind).or_else(|| {
                tracing::warn!(kind, "unknown enemy template, using the default");
                self.templates.first()
            }),
        };
        let Some(template) = template else {
            return Ok(None);
        };
        let quirk = pick(&self.traits, dice);
        scale(template, quirk, difficulty).map(Some)
    }

    /// `(template, move id)` pairs naming moves the oracle does not know.
    pub fn unknown_moves<'a>(&'a self, moves: &dyn MoveOracle) -> Vec<(&'a str, &'a str)> {
        self.templates
            .iter()
            .flat_map(|template| {
                template
                    .attacks
                    .iter()
                    .map(move |id| (template.name.as_str(), id.as_str()))
            })
            .filter(|(_, id)| moves.get_move(id).is_none())
            .collect()
    }
}

fn pick<'t, T>(items: &'t [T], dice: &mut dyn Dice) -> Option<&'t T> {
    if items.is_empty() {
        return None;
    }
    let index = dice.range(0, items.len() as i32 - 1) as usize;
    items.get(index)
}

/// Apply a trait and difficulty to a template.
pub fn scale(
    template: &EnemyTemplate,
    quirk: Option<&EnemyTrait>,
    difficulty: u32,
) -> Result<Combatant, BuildError> {
    let neutral = EnemyTrait::default();
    let quirk = quirk.unwrap_or(&neutral);
    let level = i64::from(difficulty);
    let half = (difficulty / 2) as i32;

    let hp = (i64::from(template.hp) + 3 * level + i64::from(quirk.hp)).max(MIN_ENEMY_HP);
    let ac = (template.ac + half + quirk.ac).max(MIN_ENEMY_AC);
    let to_hit = template.to_hit + half + quirk.to_hit;
    let damage_max = template.damage.max + quirk.damage_max;

    let name = if quirk.name.is_empty() {
        format!("{} (Lv {})", template.name, level + 1)
    } else {
        format!("{} ({}, Lv {})", template.name, quirk.name, level + 1)
    };
    tracing::debug!(%name, hp, ac, to_hit, "enemy generated");

    let mut builder = Combatant::builder(name, template.name.as_str())
        .attributes(template.attributes)
        .hp(u32::try_from(hp).unwrap_or(u32::MAX))
        .mp(template.mp)
        .sp(template.sp)
        .ac(ac)
        .to_hit(to_hit)
        .damage(template.damage.min, damage_max)
        .attacks(template.attacks.iter().map(String::as_str))
        .affinity(template.affinity)
        .enemy();
    for (element, multiplier) in &template.resist {
        builder = builder.resist(*element, *multiplier);
    }
    builder.build()
}
