//! Read-only game data: item, ability and enchantment descriptors and the
//! stores that resolve numeric ids to them

mod ability;
mod enchant;
mod item;

pub use ability::{AbilityEffect, AbilityInfo, AuraKind, CombatRatings, EffectKind, MAX_ABILITY_EFFECTS};
pub use enchant::{EnchantDisplay, EnchantSlot, EnchantmentInfo, MAX_ENCHANT_EFFECTS};
pub use item::{ItemSpell, ItemStat, ItemStatKind, ItemTemplate, MAX_ITEM_SPELLS};

use std::collections::HashMap;

/// Resolves item ids to item templates
pub trait ItemStore {
    fn item(&self, id: u32) -> Option<&ItemTemplate>;
}

/// Resolves ability ids to ability descriptors
pub trait AbilityStore {
    fn ability(&self, id: u32) -> Option<&AbilityInfo>;
}

/// Resolves enchantment ids to enchantment descriptors
pub trait EnchantmentStore {
    fn enchantment(&self, id: u32) -> Option<&EnchantmentInfo>;
}

/// Everything the scorer reads
pub trait GameData: ItemStore + AbilityStore + EnchantmentStore {}

impl<T: ItemStore + AbilityStore + EnchantmentStore> GameData for T {}

/// In-memory store for all three descriptor kinds
#[derive(Debug, Clone, Default)]
pub struct GameDatabase {
    items: HashMap<u32, ItemTemplate>,
    abilities: HashMap<u32, AbilityInfo>,
    enchantments: HashMap<u32, EnchantmentInfo>,
}

impl GameDatabase {
    /// Create a new empty database
    pub fn new() -> Self {
        GameDatabase::default()
    }

    /// Register an item, replacing any previous entry with the same id
    pub fn insert_item(&mut self, item: ItemTemplate) -> Option<ItemTemplate> {
        self.items.insert(item.id, item)
    }

    pub fn insert_ability(&mut self, ability: AbilityInfo) -> Option<AbilityInfo> {
        self.abilities.insert(ability.id, ability)
    }

    pub fn insert_enchantment(&mut self, enchantment: EnchantmentInfo) -> Option<EnchantmentInfo> {
        self.enchantments.insert(enchantment.id, enchantment)
    }

    pub fn with_item(mut self, item: ItemTemplate) -> Self {
        self.insert_item(item);
        self
    }

    pub fn with_ability(mut self, ability: AbilityInfo) -> Self {
        self.insert_ability(ability);
        self
    }

    pub fn with_enchantment(mut self, enchantment: EnchantmentInfo) -> Self {
        self.insert_enchantment(enchantment);
        self
    }

    /// All registered items, in no particular order
    pub fn items(&self) -> impl Iterator<Item = &ItemTemplate> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len() + self.abilities.len() + self.enchantments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ItemStore for GameDatabase {
    fn item(&self, id: u32) -> Option<&ItemTemplate> {
        self.items.get(&id)
    }
}

impl AbilityStore for GameDatabase {
    fn ability(&self, id: u32) -> Option<&AbilityInfo> {
        self.abilities.get(&id)
    }
}

impl EnchantmentStore for GameDatabase {
    fn enchantment(&self, id: u32) -> Option<&EnchantmentInfo> {
        self.enchantments.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemCategory;

    #[test]
    fn test_insert_and_lookup() {
        let db = GameDatabase::new()
            .with_item(ItemTemplate::new(1, "Ring", ItemCategory::Other))
            .with_ability(AbilityInfo::new(2, "Proc"))
            .with_enchantment(EnchantmentInfo::new(3, "Crusader"));

        assert_eq!(db.item(1).map(|i| i.name.as_str()), Some("Ring"));
        assert!(db.ability(2).is_some());
        assert!(db.enchantment(3).is_some());
        assert!(db.item(2).is_none());
        assert_eq!(db.len(), 3);
    }

    #[test]
    fn test_insert_replaces() {
        let mut db = GameDatabase::new();
        assert!(db.insert_item(ItemTemplate::new(1, "Old", ItemCategory::Other)).is_none());
        let old = db.insert_item(ItemTemplate::new(1, "New", ItemCategory::Other));
        assert_eq!(old.map(|i| i.name), Some("Old".to_string()));
        assert_eq!(db.item(1).map(|i| i.name.as_str()), Some("New"));
    }
}
