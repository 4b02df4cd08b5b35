//! Enchantment descriptors

use serde::{Deserialize, Serialize};

/// Number of effect slots on one enchantment
pub const MAX_ENCHANT_EFFECTS: usize = 3;

/// How an enchantment slot is displayed and applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnchantDisplay {
    #[default]
    None,
    CombatSpell,
    Damage,
    EquipSpell,
    Resistance,
    /// Flat stat; the slot's linked id is an item stat kind
    Stat,
    Totem,
    UseSpell,
    PrismaticSocket,
}

/// One effect slot of an enchantment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnchantSlot {
    pub display: EnchantDisplay,
    pub amount: u32,
    /// Ability id, or item stat kind id for `Stat` slots
    pub linked_id: u32,
}

impl EnchantSlot {
    pub fn new(display: EnchantDisplay, amount: u32, linked_id: u32) -> Self {
        EnchantSlot {
            display,
            amount,
            linked_id,
        }
    }
}

/// Static attributes of one enchantment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnchantmentInfo {
    pub id: u32,
    pub name: String,
    pub slots: Vec<EnchantSlot>,
}

impl EnchantmentInfo {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        EnchantmentInfo {
            id,
            name: name.into(),
            slots: Vec::new(),
        }
    }

    pub fn with_slot(mut self, slot: EnchantSlot) -> Self {
        self.slots.push(slot);
        self
    }
}
