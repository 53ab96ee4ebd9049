//! Consumable inventory.

use arrayvec::ArrayVec;

use crate::config::CombatConfig;
use crate::error::BuildError;

/// Known consumables.
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
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ItemKind {
    Potion,
}

/// Inventory slot containing an item and its quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventorySlot {
    pub item: ItemKind,
    pub quantity: u16,
}

impl InventorySlot {
    pub fn new(item: ItemKind, quantity: u16) -> Self {
        Self { item, quantity }
    }
}

/// Stacked consumables, at most [`CombatConfig::MAX_INVENTORY_SLOTS`] slots.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    slots: ArrayVec<InventorySlot, { CombatConfig::MAX_INVENTORY_SLOTS }>,
}

impl Inventory {
    pub fn empty() -> Self {
        Self {
            slots: ArrayVec::new(),
        }
    }

    /// Add `quantity` of `item`, stacking onto an existing slot when present.
    pub fn add(&mut self, item: ItemKind, quantity: u16) -> Result<(), BuildError> {
        if quantity == 0 {
            return Ok(());
        }
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.item == item) {
            slot.quantity = slot.quantity.saturating_add(quantity);
            return Ok(());
        }
        self.slots
            .try_push(InventorySlot::new(item, quantity))
            .map_err(|_| BuildError::InventoryFull {
                max: CombatConfig::MAX_INVENTORY_SLOTS,
            })
    }

    /// Remove one `item`. Returns false if none is held.
    pub fn take(&mut self, item: ItemKind) -> bool {
        let Some(index) = self.slots.iter().position(|slot| slot.item == item) else {
            return false;
        };
        let slot = &mut self.slots[index];
        slot.quantity -= 1;
        if slot.quantity == 0 {
            self.slots.remove(index);
        }
        true
    }

    pub fn count(&self, item: ItemKind) -> u16 {
        self.slots
            .iter()
            .find(|slot| slot.item == item)
            .map_or(0, |slot| slot.quantity)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventorySlot> {
        self.slots.iter()
    }
}
