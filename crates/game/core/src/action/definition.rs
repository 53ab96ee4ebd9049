//! Move definitions.

use crate::element::Element;
use crate::error::CatalogError;

use super::Effect;

/// Resource pool a move draws from.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Pool {
    Mp,
    Sp,
}

/// Move category, used by the enemy policy to bucket its options.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum MoveKind {
    Attack,
    Buff,
    Debuff,
    Heal,
    Utility,
}

/// Who a move's effects land on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    /// The caster.
    #[strum(to_string = "self")]
    #[cfg_attr(feature = "serde", serde(rename = "self"))]
    Caster,
    #[strum(to_string = "enemy")]
    #[cfg_attr(feature = "serde", serde(rename = "enemy"))]
    Enemy,
}

/// Resource cost paid before any effect resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cost {
    pub pool: Pool,
    pub amount: u32,
}

impl Cost {
    pub fn new(pool: Pool, amount: u32) -> Self {
        Self { pool, amount }
    }
}

/// Immutable catalog entry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub element: Element,
    pub kind: MoveKind,
    pub target: Target,
    #[cfg_attr(feature = "serde", serde(default))]
    pub to_hit_bonus: i32,
    pub cost: Cost,
    pub effects: Vec<Effect>,
    /// Riders applied after `effects`, gated by the same to-hit roll.
    #[cfg_attr(feature = "serde", serde(default))]
    pub on_hit: Vec<Effect>,
}

impl Move {
    /// A move needs a to-hit roll iff it targets the enemy and deals damage.
    pub fn requires_roll(&self) -> bool {
        self.target == Target::Enemy
            && self
                .effects
                .iter()
                .any(|effect| matches!(effect, Effect::Damage { .. }))
    }

    /// `effects` followed by `on_hit`, in declared order.
    pub fn all_effects(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter().chain(&self.on_hit)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.id.trim().is_empty() {
            return Err(CatalogError::EmptyId);
        }
        if self.effects.is_empty() {
            return Err(CatalogError::NoEffects {
                id: self.id.clone(),
            });
        }
        self.all_effects()
            .try_for_each(|effect| effect.validate(&self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{RollSpec, StatusSpec};
    use crate::status::StatusKey;

    fn bolt(target: Target, effects: Vec<Effect>) -> Move {
        Move {
            id: "bolt".into(),
            name: "Bolt".into(),
            description: String::new(),
            element: Element::Lightning,
            kind: MoveKind::Attack,
            target,
            to_hit_bonus: 0,
            cost: Cost::new(Pool::Mp, 2),
            effects,
            on_hit: Vec::new(),
        }
    }

    #[test]
    fn roll_required_only_for_enemy_damage() {
        let damage = Effect::Damage {
            roll: RollSpec::new(1, 4),
        };
        let status = Effect::ApplyStatus {
            status: StatusSpec::turns(StatusKey::Burning, 3),
            chance: None,
        };
        assert!(bolt(Target::Enemy, vec![damage.clone()]).requires_roll());
        assert!(!bolt(Target::Caster, vec![damage]).requires_roll());
        assert!(!bolt(Target::Enemy, vec![status]).requires_roll());
    }

    #[test]
    fn validate_rejects_empty_effects_and_bad_rolls() {
        assert_eq!(
            bolt(Target::Enemy, Vec::new()).validate(),
            Err(CatalogError::NoEffects { id: "bolt".into() })
        );
        let inverted = Effect::Heal {
            roll: RollSpec::new(6, 2),
        };
        assert_eq!(
            bolt(Target::Caster, vec![inverted]).validate(),
            Err(CatalogError::InvalidRoll {
                id: "bolt".into(),
                min: 6,
                max: 2,
            })
        );
    }

    #[test]
    fn target_names_match_content_data() {
        assert_eq!(Target::Caster.to_string(), "self");
        assert_eq!("enemy".parse::<Target>(), Ok(Target::Enemy));
        assert_eq!(Pool::Sp.to_string(), "SP");
    }
}
