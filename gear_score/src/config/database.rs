//! Game data loading

use super::ConfigError;
use crate::data::{
    AbilityInfo, EnchantmentInfo, GameDatabase, ItemTemplate, MAX_ABILITY_EFFECTS,
    MAX_ENCHANT_EFFECTS, MAX_ITEM_SPELLS,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Container for item, ability and enchantment descriptors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseFile {
    pub items: Vec<ItemTemplate>,
    pub abilities: Vec<AbilityInfo>,
    pub enchantments: Vec<EnchantmentInfo>,
}

impl DatabaseFile {
    /// Validate slot counts and id uniqueness, then build the lookup store
    pub fn into_database(self) -> Result<GameDatabase, ConfigError> {
        check_unique("item", self.items.iter().map(|i| i.id))?;
        check_unique("ability", self.abilities.iter().map(|a| a.id))?;
        check_unique("enchantment", self.enchantments.iter().map(|e| e.id))?;

        let mut db = GameDatabase::new();
        for item in self.items {
            if item.spells.len() > MAX_ITEM_SPELLS {
                return Err(ConfigError::ValidationError(format!(
                    "item {} has {} spells, at most {} allowed",
                    item.id,
                    item.spells.len(),
                    MAX_ITEM_SPELLS
                )));
            }
            db.insert_item(item);
        }
        for ability in self.abilities {
            if ability.effects.len() > MAX_ABILITY_EFFECTS {
                return Err(ConfigError::ValidationError(format!(
                    "ability {} has {} effects, at most {} allowed",
                    ability.id,
                    ability.effects.len(),
                    MAX_ABILITY_EFFECTS
                )));
            }
            db.insert_ability(ability);
        }
        for enchantment in self.enchantments {
            if enchantment.slots.len() > MAX_ENCHANT_EFFECTS {
                return Err(ConfigError::ValidationError(format!(
                    "enchantment {} has {} slots, at most {} allowed",
                    enchantment.id,
                    enchantment.slots.len(),
                    MAX_ENCHANT_EFFECTS
                )));
            }
            db.insert_enchantment(enchantment);
        }
        Ok(db)
    }
}

fn check_unique(kind: &str, ids: impl Iterator<Item = u32>) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ConfigError::ValidationError(format!("duplicate {} id {}", kind, id)));
        }
    }
    Ok(())
}

/// Load game data from a TOML file
pub fn load_database(path: &Path) -> Result<GameDatabase, ConfigError> {
    let file: DatabaseFile = super::load_toml(path)?;
    file.into_database()
}

/// Load game data from a TOML string
pub fn parse_database(content: &str) -> Result<GameDatabase, ConfigError> {
    let file: DatabaseFile = super::parse_toml(content)?;
    file.into_database()
}

/// Load game data from a JSON string
pub fn parse_database_json(content: &str) -> Result<GameDatabase, ConfigError> {
    let file: DatabaseFile = super::parse_json(content)?;
    file.into_database()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{AbilityStore, AuraKind, EnchantDisplay, EnchantmentStore, ItemStatKind, ItemStore};
    use crate::types::{ItemCategory, SpellTrigger, WeaponSubclass};

    #[test]
    fn test_parse_database() {
        let toml = r#"
[[items]]
id = 28773
name = "Gorehowl"
category = { weapon = "two_hand_axe" }
damage_min = 345
damage_max = 518
speed = 3.6

[[items.stats]]
kind = "strength"
value = 49

[[items.spells]]
ability_id = 9000
trigger = "chance_on_hit"

[[abilities]]
id = 9000
name = "Proc"

[[abilities.effects]]
kind = "apply_aura"
aura = "mod_attack_power"
base_points = 99

[[enchantments]]
id = 1900
name = "Crusader"

[[enchantments.slots]]
display = "combat_spell"
linked_id = 20007
"#;

        let db = parse_database(toml).unwrap();
        let item = db.item(28773).unwrap();
        assert_eq!(item.category, ItemCategory::Weapon(WeaponSubclass::TwoHandAxe));
        assert_eq!(item.spells[0].trigger, SpellTrigger::ChanceOnHit);
        assert!((item.speed - 3.6).abs() < f64::EPSILON);

        let ability = db.ability(9000).unwrap();
        assert_eq!(ability.effects[0].aura, AuraKind::ModAttackPower);

        let enchant = db.enchantment(1900).unwrap();
        assert_eq!(enchant.slots[0].display, EnchantDisplay::CombatSpell);
        assert_eq!(enchant.slots[0].amount, 0);
    }

    #[test]
    fn test_parse_database_json() {
        let json = r#"{
            "items": [{ "id": 1, "name": "Cloak", "category": { "armor": "cloth" }, "armor": 120 }]
        }"#;
        let db = parse_database_json(json).unwrap();
        assert_eq!(db.item(1).map(|i| i.armor), Some(120));
    }

    #[test]
    fn test_numeric_and_unknown_stat_kinds() {
        let toml = r#"
[[items]]
id = 7
name = "Band of Oddities"

[[items.stats]]
kind = 38
value = 40

[[items.stats]]
kind = 99
value = 500

[[items.stats]]
kind = "stamina"
value = 12
"#;
        let db = parse_database(toml).unwrap();
        let kinds: Vec<_> = db.item(7).unwrap().stats.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, [ItemStatKind::AttackPower, ItemStatKind::Stamina]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let toml = r#"
[[items]]
id = 5

[[items]]
id = 5
"#;
        let err = parse_database(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("duplicate item id 5"));
    }

    #[test]
    fn test_too_many_effects_rejected() {
        let mut file = DatabaseFile::default();
        let mut ability = AbilityInfo::new(1, "Overfull");
        for _ in 0..=MAX_ABILITY_EFFECTS {
            ability = ability.with_effect(Default::default());
        }
        file.abilities.push(ability);
        assert!(file.into_database().is_err());
    }
}
