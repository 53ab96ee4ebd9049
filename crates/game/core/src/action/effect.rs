//! Effects a move applies, and the stat-scaled roll they share.

use std::collections::BTreeMap;

use crate::env::Dice;
use crate::error::CatalogError;
use crate::state::{Attributes, Stat};
use crate::status::{StatusData, StatusDuration, StatusInstance, StatusKey};

/// Uniform roll in `[min, max]` plus stat scaling.
///
/// Two scaling forms are accepted: a map of `adds` (each contributing
/// `floor(stat * coefficient)`), or the older single `stat` + `scale` pair,
/// used only when `adds` is empty. Missing fields deserialize to 0.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RollSpec {
    pub min: i32,
    pub max: i32,
    pub adds: BTreeMap<Stat, f64>,
    pub stat: Option<Stat>,
    pub scale: f64,
}

impl RollSpec {
    pub fn new(min: i32, max: i32) -> Self {
        Self {
            min,
            max,
            ..Self::default()
        }
    }

    pub fn with_add(mut self, stat: Stat, coefficient: f64) -> Self {
        self.adds.insert(stat, coefficient);
        self
    }

    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    /// Stat contribution, without the random part.
    pub fn scaling(&self, attributes: &Attributes) -> i32 {
        fn scaled(value: i32, coefficient: f64) -> i32 {
            (f64::from(value) * coefficient).floor() as i32
        }

        if self.adds.is_empty() {
            return self
                .stat
                .map_or(0, |stat| scaled(attributes.get(stat), self.scale));
        }
        self.adds
            .iter()
            .map(|(stat, coefficient)| scaled(attributes.get(*stat), *coefficient))
            .sum()
    }

    /// Roll once, floored at 0.
    pub fn roll(&self, attributes: &Attributes, dice: &mut dyn Dice) -> u32 {
        let base = dice.range(self.min, self.max);
        (base + self.scaling(attributes)).max(0) as u32
    }
}

/// Status a move installs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusSpec {
    pub key: StatusKey,
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: StatusDuration,
    #[cfg_attr(feature = "serde", serde(default))]
    pub persistent: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub data: StatusData,
}

impl StatusSpec {
    pub fn turns(key: StatusKey, turns: u32) -> Self {
        Self {
            key,
            duration: StatusDuration::Turns(turns),
            persistent: false,
            data: StatusData::default(),
        }
    }

    pub fn with_data(mut self, data: StatusData) -> Self {
        self.data = data;
        self
    }

    pub fn instance(&self) -> StatusInstance {
        StatusInstance {
            duration: self.duration,
            persistent: self.persistent,
            data: self.data.clone(),
        }
    }
}

/// Atomic effect of a move.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    Damage {
        roll: RollSpec,
    },
    Heal {
        roll: RollSpec,
    },
    ApplyStatus {
        status: StatusSpec,
        /// Trigger probability; absent means always.
        #[cfg_attr(feature = "serde", serde(default))]
        chance: Option<f64>,
    },
}

impl Effect {
    pub(crate) fn validate(&self, id: &str) -> Result<(), CatalogError> {
        let check_roll = |roll: &RollSpec| {
            if roll.is_valid() {
                Ok(())
            } else {
                Err(CatalogError::InvalidRoll {
                    id: id.to_owned(),
                    min: roll.min,
                    max: roll.max,
                })
            }
        };

        match self {
            Self::Damage { roll } | Self::Heal { roll } => check_roll(roll),
            Self::ApplyStatus { status, chance } => {
                if let Some(chance) = chance
                    && !(0.0..=1.0).contains(chance)
                {
                    return Err(CatalogError::InvalidChance {
                        id: id.to_owned(),
                        chance: *chance,
                    });
                }
                status.data.heal.as_ref().map_or(Ok(()), check_roll)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedDice;

    #[test]
    fn adds_floor_each_contribution() {
        let spec = RollSpec::new(2, 6)
            .with_add(Stat::Str, 0.5)
            .with_add(Stat::Dex, 0.4);
        let attributes = Attributes::new(3, 0, 0, 0, 2);
        // floor(1.5) + floor(0.8)
        assert_eq!(spec.scaling(&attributes), 1);
        assert_eq!(spec.roll(&attributes, &mut ScriptedDice::new([5])), 6);
    }

    #[test]
    fn legacy_pair_applies_only_without_adds() {
        let mut spec = RollSpec::new(1, 1);
        spec.stat = Some(Stat::Int);
        spec.scale = 2.0;
        let attributes = Attributes::new(0, 3, 0, 0, 0);
        assert_eq!(spec.scaling(&attributes), 6);

        let spec = spec.with_add(Stat::Int, 1.0);
        assert_eq!(spec.scaling(&attributes), 3);
    }

    #[test]
    fn negative_totals_floor_at_zero() {
        let spec = RollSpec::new(1, 2).with_add(Stat::Str, 1.0);
        let weak = Attributes::new(-3, 0, 0, 0, 0);
        assert_eq!(spec.roll(&weak, &mut ScriptedDice::new([1])), 0);
    }

    #[test]
    fn chance_outside_unit_interval_is_rejected() {
        let effect = Effect::ApplyStatus {
            status: StatusSpec::turns(StatusKey::Stunned, 1),
            chance: Some(1.5),
        };
        assert!(matches!(
            effect.validate("kidneyshot"),
            Err(CatalogError::InvalidChance { .. })
        ));
    }
}
