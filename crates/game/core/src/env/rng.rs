//! Random roll sources for combat mechanics.
//!
//! Every random decision in the engine (to-hit rolls, damage variance, status
//! trigger chances, enemy choices) goes through the [`Dice`] trait, so a
//! session is fully reproducible from a seed or from a recorded roll script.

use std::collections::VecDeque;

use crate::config::CombatConfig;

/// Source of uniformly distributed integer rolls.
///
/// Only [`Dice::range`] must be implemented; everything else is derived from it
/// so scripted implementations see exactly one draw per roll.
pub trait Dice {
    /// Returns a value in `[min, max]` inclusive. `min >= max` yields `min`.
    fn range(&mut self, min: i32, max: i32) -> i32;

    /// Roll a d20 (1-20 inclusive).
    fn roll_d20(&mut self) -> i32 {
        self.range(1, CombatConfig::D20_SIDES)
    }

    /// Returns true with the given probability.
    ///
    /// Probabilities at or below 0 and at or above 1 are decided without a draw.
    fn chance(&mut self, probability: f64) -> bool {
        if probability <= 0.0 {
            return false;
        }
        if probability >= 1.0 {
            return true;
        }
        let draw = self.range(0, 9_999);
        (draw as f64) < probability * 10_000.0
    }
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn range(&mut self, min: i32, max: i32) -> i32 {
        (**self).range(min, max)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state. Same seed, same sequence.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator from a seed.
    pub fn seeded(seed: u64) -> Self {
        let mut rng = Self { state: 0 };
        rng.state = Self::pcg_step(rng.state.wrapping_add(seed));
        rng
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Generate the next raw 32-bit value.
    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

impl Dice for PcgRng {
    fn range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (i64::from(max) - i64::from(min) + 1) as u64;
        let offset = u64::from(self.next_u32()) % span;
        (i64::from(min) + offset as i64) as i32
    }
}

/// Replays a fixed sequence of rolls.
///
/// Each draw pops the next queued value and clamps it into the requested
/// range. An exhausted script yields the lower bound. Useful for replaying a
/// recorded session and for pinning exact outcomes in tests.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<i32>,
}

impl ScriptedDice {
    pub fn new(rolls: impl IntoIterator<Item = i32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Queue another roll at the end of the script.
    pub fn push(&mut self, roll: i32) {
        self.rolls.push_back(roll);
    }

    /// Queue several rolls at the end of the script.
    pub fn extend(&mut self, rolls: impl IntoIterator<Item = i32>) {
        self.rolls.extend(rolls);
    }

    /// Number of rolls not yet consumed.
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl Dice for ScriptedDice {
    fn range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        match self.rolls.pop_front() {
            Some(roll) => roll.clamp(min, max),
            None => min,
        }
    }
}
