//! Resource meters (HP, MP, SP) and the weapon damage range.
//!
//! A meter stores both its current and maximum value. Every mutating method
//! keeps `current <= maximum`; values are unsigned, so the lower bound holds
//! by construction.

/// Current/maximum pair for one resource pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    /// A meter filled to `maximum`.
    pub fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    /// A meter at `current`, clamped to `maximum`.
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    /// Remove up to `amount`; returns how much was actually removed.
    pub fn drain(&mut self, amount: u32) -> u32 {
        let removed = amount.min(self.current);
        self.current -= removed;
        removed
    }

    /// Add up to `amount` without exceeding the maximum; returns the delta.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_add(amount).min(self.maximum);
        self.current - before
    }

    pub fn clamp(&mut self) {
        self.current = self.current.min(self.maximum);
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    pub fn can_afford(&self, amount: u32) -> bool {
        self.current >= amount
    }

    /// `current / maximum`, or 0 for a zero-capacity meter.
    pub fn fraction(&self) -> f64 {
        if self.maximum == 0 {
            0.0
        } else {
            f64::from(self.current) / f64::from(self.maximum)
        }
    }
}

/// Inclusive weapon damage range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageRange {
    pub min: i32,
    pub max: i32,
}

impl DamageRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

impl Default for DamageRange {
    fn default() -> Self {
        Self { min: 1, max: 4 }
    }
}
