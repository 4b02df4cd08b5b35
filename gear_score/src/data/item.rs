//! Equipment item descriptors

use crate::error::ScoreError;
use crate::types::{ArmorSubclass, ItemCategory, SpellTrigger, WeaponSubclass};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use strum::EnumString;

/// Maximum number of embedded ability triggers on one item
pub const MAX_ITEM_SPELLS: usize = 5;

/// Kind of a stat modifier on an item or a stat enchantment
///
/// Discriminants are the numeric ids used by the game data, so an
/// enchantment slot can carry the kind as a raw id. Serializes as its
/// snake_case name and deserializes from either the name or the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "snake_case", try_from = "StatKey")]
#[strum(serialize_all = "snake_case")]
pub enum ItemStatKind {
    Mana = 0,
    Health = 1,
    Agility = 3,
    Strength = 4,
    Intellect = 5,
    Spirit = 6,
    Stamina = 7,
    DefenseSkillRating = 12,
    DodgeRating = 13,
    ParryRating = 14,
    BlockRating = 15,
    HitMeleeRating = 16,
    HitRangedRating = 17,
    HitSpellRating = 18,
    CritMeleeRating = 19,
    CritRangedRating = 20,
    CritSpellRating = 21,
    HitTakenMeleeRating = 22,
    HitTakenRangedRating = 23,
    HitTakenSpellRating = 24,
    CritTakenMeleeRating = 25,
    CritTakenRangedRating = 26,
    CritTakenSpellRating = 27,
    HasteMeleeRating = 28,
    HasteRangedRating = 29,
    HasteSpellRating = 30,
    HitRating = 31,
    CritRating = 32,
    HitTakenRating = 33,
    CritTakenRating = 34,
    ResilienceRating = 35,
    HasteRating = 36,
    ExpertiseRating = 37,
    AttackPower = 38,
    RangedAttackPower = 39,
    FeralAttackPower = 40,
    /// Deprecated, superseded by spell power
    SpellHealingDone = 41,
    /// Deprecated, superseded by spell power
    SpellDamageDone = 42,
    ManaRegeneration = 43,
    ArmorPenetrationRating = 44,
    SpellPower = 45,
    HealthRegen = 46,
    SpellPenetration = 47,
    BlockValue = 48,
}

impl ItemStatKind {
    const ALL: [ItemStatKind; 44] = [
        ItemStatKind::Mana,
        ItemStatKind::Health,
        ItemStatKind::Agility,
        ItemStatKind::Strength,
        ItemStatKind::Intellect,
        ItemStatKind::Spirit,
        ItemStatKind::Stamina,
        ItemStatKind::DefenseSkillRating,
        ItemStatKind::DodgeRating,
        ItemStatKind::ParryRating,
        ItemStatKind::BlockRating,
        ItemStatKind::HitMeleeRating,
        ItemStatKind::HitRangedRating,
        ItemStatKind::HitSpellRating,
        ItemStatKind::CritMeleeRating,
        ItemStatKind::CritRangedRating,
        ItemStatKind::CritSpellRating,
        ItemStatKind::HitTakenMeleeRating,
        ItemStatKind::HitTakenRangedRating,
        ItemStatKind::HitTakenSpellRating,
        ItemStatKind::CritTakenMeleeRating,
        ItemStatKind::CritTakenRangedRating,
        ItemStatKind::CritTakenSpellRating,
        ItemStatKind::HasteMeleeRating,
        ItemStatKind::HasteRangedRating,
        ItemStatKind::HasteSpellRating,
        ItemStatKind::HitRating,
        ItemStatKind::CritRating,
        ItemStatKind::HitTakenRating,
        ItemStatKind::CritTakenRating,
        ItemStatKind::ResilienceRating,
        ItemStatKind::HasteRating,
        ItemStatKind::ExpertiseRating,
        ItemStatKind::AttackPower,
        ItemStatKind::RangedAttackPower,
        ItemStatKind::FeralAttackPower,
        ItemStatKind::SpellHealingDone,
        ItemStatKind::SpellDamageDone,
        ItemStatKind::ManaRegeneration,
        ItemStatKind::ArmorPenetrationRating,
        ItemStatKind::SpellPower,
        ItemStatKind::HealthRegen,
        ItemStatKind::SpellPenetration,
        ItemStatKind::BlockValue,
    ];

    /// Numeric id used by the game data
    pub fn id(self) -> u32 {
        self as u32
    }

    /// Look up a kind by numeric id
    pub fn from_id(id: u32) -> Option<ItemStatKind> {
        Self::ALL.iter().copied().find(|kind| kind.id() == id)
    }
}

/// A stat kind as written in game data files
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StatKey {
    Id(u32),
    Name(String),
}

impl TryFrom<StatKey> for ItemStatKind {
    type Error = String;

    fn try_from(key: StatKey) -> Result<Self, Self::Error> {
        match key {
            StatKey::Id(id) => {
                ItemStatKind::from_id(id).ok_or_else(|| format!("unknown stat id {}", id))
            }
            StatKey::Name(name) => {
                ItemStatKind::from_str(&name).map_err(|_| format!("unknown stat kind '{}'", name))
            }
        }
    }
}

/// One stat modifier pair on an item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemStat {
    pub kind: ItemStatKind,
    pub value: i32,
}

#[derive(Deserialize)]
struct RawItemStat {
    kind: StatKey,
    value: i32,
}

/// Item stat lists drop kinds the scorer does not know instead of failing
fn deserialize_stats<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<ItemStat>, D::Error> {
    let raw = Vec::<RawItemStat>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|stat| match ItemStatKind::try_from(stat.kind) {
            Ok(kind) => Some(ItemStat {
                kind,
                value: stat.value,
            }),
            Err(e) => {
                tracing::trace!("{}, skipping", e);
                None
            }
        })
        .collect())
}

/// An ability embedded in an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpell {
    /// Ability id; 0 marks an empty slot
    pub ability_id: u32,
    #[serde(default)]
    pub trigger: SpellTrigger,
}

/// Static attributes of one equipment item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemTemplate {
    pub id: u32,
    pub name: String,
    pub category: ItemCategory,
    pub damage_min: f64,
    pub damage_max: f64,
    /// Weapon attack speed; zero when the item is not a weapon
    pub speed: f64,
    pub armor: u32,
    pub block: u32,
    #[serde(deserialize_with = "deserialize_stats")]
    pub stats: Vec<ItemStat>,
    pub spells: Vec<ItemSpell>,
}

impl ItemTemplate {
    /// Create an item of the given category with no attributes
    pub fn new(id: u32, name: impl Into<String>, category: ItemCategory) -> Self {
        ItemTemplate {
            id,
            name: name.into(),
            category,
            ..Default::default()
        }
    }

    /// Set weapon damage range and speed
    pub fn with_damage(mut self, min: f64, max: f64, speed: f64) -> Self {
        self.damage_min = min;
        self.damage_max = max;
        self.speed = speed;
        self
    }

    pub fn with_armor(mut self, armor: u32) -> Self {
        self.armor = armor;
        self
    }

    pub fn with_block(mut self, block: u32) -> Self {
        self.block = block;
        self
    }

    pub fn with_stat(mut self, kind: ItemStatKind, value: i32) -> Self {
        self.stats.push(ItemStat { kind, value });
        self
    }

    pub fn with_spell(mut self, ability_id: u32, trigger: SpellTrigger) -> Self {
        self.spells.push(ItemSpell { ability_id, trigger });
        self
    }

    pub fn weapon_subclass(&self) -> Option<WeaponSubclass> {
        match self.category {
            ItemCategory::Weapon(subclass) => Some(subclass),
            _ => None,
        }
    }

    pub fn armor_subclass(&self) -> Option<ArmorSubclass> {
        match self.category {
            ItemCategory::Armor(subclass) => Some(subclass),
            _ => None,
        }
    }

    pub fn is_weapon(&self) -> bool {
        self.weapon_subclass().is_some()
    }

    /// Bow, gun or crossbow
    pub fn is_ranged_weapon(&self) -> bool {
        self.weapon_subclass().is_some_and(WeaponSubclass::is_ranged_weapon)
    }

    pub fn is_two_handed(&self) -> bool {
        self.weapon_subclass().is_some_and(WeaponSubclass::is_two_handed)
    }

    /// Damage-per-second estimate: `(min + max) * 1000 / 2 / speed`
    ///
    /// Fails when the speed is zero, negative or not finite.
    pub fn weapon_dps(&self) -> Result<f64, ScoreError> {
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(ScoreError::InvalidWeaponSpeed {
                item_id: self.id,
                speed: self.speed,
            });
        }
        Ok((self.damage_min + self.damage_max) * 1000.0 / 2.0 / self.speed)
    }
}
