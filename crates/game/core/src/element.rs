//! Elemental affinities and the damage multiplier matrix.

use std::collections::BTreeMap;

/// Element of a strike and elemental alignment of a combatant.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Element {
    #[default]
    Physical,
    Fire,
    Ice,
    Lightning,
    Holy,
    Poison,
}

/// One attacker row of the matrix: explicit defender entries plus a fallback.
struct MatrixRow {
    entries: &'static [(Element, f64)],
    default: f64,
}

const NEUTRAL: f64 = 1.0;

/// Attacker element → row of defender-affinity multipliers.
///
/// Strong matchups sit at 1.5, self-resist at 0.5.
const fn row(attacker: Element) -> MatrixRow {
    use Element::*;
    match attacker {
        Physical => MatrixRow {
            entries: &[],
            default: NEUTRAL,
        },
        Fire => MatrixRow {
            entries: &[(Ice, 1.5), (Fire, 0.5), (Poison, 1.25)],
            default: NEUTRAL,
        },
        Ice => MatrixRow {
            entries: &[(Lightning, 1.25), (Ice, 0.5), (Fire, 0.75)],
            default: NEUTRAL,
        },
        Lightning => MatrixRow {
            entries: &[(Ice, 1.5), (Lightning, 0.5)],
            default: NEUTRAL,
        },
        Holy => MatrixRow {
            entries: &[(Poison, 1.5), (Holy, 0.5)],
            default: NEUTRAL,
        },
        Poison => MatrixRow {
            entries: &[(Holy, 0.5), (Poison, 0.5)],
            default: NEUTRAL,
        },
    }
}

/// Matrix lookup without per-target overrides.
pub fn matrix_multiplier(attacker: Element, affinity: Element) -> f64 {
    let row = row(attacker);
    row.entries
        .iter()
        .find(|(defender, _)| *defender == affinity)
        .map(|(_, multiplier)| *multiplier)
        .unwrap_or(row.default)
}

/// Resolve the multiplier for `element` landing on a target.
///
/// # Resolution
///
/// 1. An explicit `resist[element]` wins (0 = immune, > 1 = weak, < 1 = resistant).
/// 2. Otherwise the matrix entry for the target's affinity.
/// 3. Otherwise the row default.
pub fn element_multiplier(affinity: Element, resist: &BTreeMap<Element, f64>, element: Element) -> f64 {
    match resist.get(&element) {
        Some(multiplier) => multiplier.max(0.0),
        None => matrix_multiplier(element, affinity),
    }
}

/// Apply a multiplier to a damage amount, flooring at 0.
pub fn scale_damage(amount: u32, multiplier: f64) -> u32 {
    (f64::from(amount) * multiplier).floor().max(0.0) as u32
}
