//! Core game enumerations shared by the aggregator, weight generator and scorer

use serde::{Deserialize, Serialize};

/// Playable class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Class {
    Warrior,
    Paladin,
    Hunter,
    Rogue,
    Priest,
    DeathKnight,
    Shaman,
    Mage,
    Warlock,
    Druid,
}

impl Class {
    /// Get all classes
    pub fn all() -> &'static [Class] {
        &[
            Class::Warrior,
            Class::Paladin,
            Class::Hunter,
            Class::Rogue,
            Class::Priest,
            Class::DeathKnight,
            Class::Shaman,
            Class::Mage,
            Class::Warlock,
            Class::Druid,
        ]
    }

    /// The three specializations of this class, in talent tab order
    pub fn specs(self) -> [Spec; 3] {
        match self {
            Class::Warrior => [Spec::WarriorArms, Spec::WarriorFury, Spec::WarriorProtection],
            Class::Paladin => [Spec::PaladinHoly, Spec::PaladinProtection, Spec::PaladinRetribution],
            Class::Hunter => [Spec::HunterBeastMastery, Spec::HunterMarksmanship, Spec::HunterSurvival],
            Class::Rogue => [Spec::RogueAssassination, Spec::RogueCombat, Spec::RogueSubtlety],
            Class::Priest => [Spec::PriestDiscipline, Spec::PriestHoly, Spec::PriestShadow],
            Class::DeathKnight => [Spec::DeathKnightBlood, Spec::DeathKnightFrost, Spec::DeathKnightUnholy],
            Class::Shaman => [Spec::ShamanElemental, Spec::ShamanEnhancement, Spec::ShamanRestoration],
            Class::Mage => [Spec::MageArcane, Spec::MageFire, Spec::MageFrost],
            Class::Warlock => [Spec::WarlockAffliction, Spec::WarlockDemonology, Spec::WarlockDestruction],
            Class::Druid => [Spec::DruidBalance, Spec::DruidFeral, Spec::DruidRestoration],
        }
    }
}

/// Class-qualified specialization (talent tab)
///
/// Every variant belongs to exactly one class, so a `(class, tab)` pair that
/// does not exist cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spec {
    WarriorArms,
    WarriorFury,
    WarriorProtection,
    PaladinHoly,
    PaladinProtection,
    PaladinRetribution,
    HunterBeastMastery,
    HunterMarksmanship,
    HunterSurvival,
    RogueAssassination,
    RogueCombat,
    RogueSubtlety,
    PriestDiscipline,
    PriestHoly,
    PriestShadow,
    DeathKnightBlood,
    DeathKnightFrost,
    DeathKnightUnholy,
    ShamanElemental,
    ShamanEnhancement,
    ShamanRestoration,
    MageArcane,
    MageFire,
    MageFrost,
    WarlockAffliction,
    WarlockDemonology,
    WarlockDestruction,
    DruidBalance,
    DruidFeral,
    DruidRestoration,
}

impl Spec {
    /// Owning class
    pub fn class(self) -> Class {
        use Spec::*;
        match self {
            WarriorArms | WarriorFury | WarriorProtection => Class::Warrior,
            PaladinHoly | PaladinProtection | PaladinRetribution => Class::Paladin,
            HunterBeastMastery | HunterMarksmanship | HunterSurvival => Class::Hunter,
            RogueAssassination | RogueCombat | RogueSubtlety => Class::Rogue,
            PriestDiscipline | PriestHoly | PriestShadow => Class::Priest,
            DeathKnightBlood | DeathKnightFrost | DeathKnightUnholy => Class::DeathKnight,
            ShamanElemental | ShamanEnhancement | ShamanRestoration => Class::Shaman,
            MageArcane | MageFire | MageFrost => Class::Mage,
            WarlockAffliction | WarlockDemonology | WarlockDestruction => Class::Warlock,
            DruidBalance | DruidFeral | DruidRestoration => Class::Druid,
        }
    }

    /// Talent tab index (0..=2) within the owning class
    pub fn tab(self) -> u8 {
        let specs = self.class().specs();
        // Every spec appears in its own class list
        specs.iter().position(|s| *s == self).unwrap_or(0) as u8
    }

    /// Resolve a `(class, tab)` pair as reported by the combatant-state provider
    pub fn from_class_tab(class: Class, tab: u8) -> Option<Spec> {
        class.specs().get(tab as usize).copied()
    }
}

/// Coarse combat role used to gate role-specific rating domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatRole {
    /// Melee physical damage or melee tank
    Melee,
    /// Ranged physical damage
    Ranged,
    /// Spellcaster (damage or healing)
    Spell,
}

/// Weapon subclass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponSubclass {
    Axe,
    TwoHandAxe,
    Bow,
    Gun,
    Mace,
    TwoHandMace,
    Polearm,
    Sword,
    TwoHandSword,
    Staff,
    Exotic,
    TwoHandExotic,
    Fist,
    Misc,
    Dagger,
    Thrown,
    Spear,
    Crossbow,
    Wand,
    FishingPole,
}

impl WeaponSubclass {
    /// Subclasses that can be wielded in one hand
    pub fn is_single_hand(self) -> bool {
        matches!(
            self,
            WeaponSubclass::Axe
                | WeaponSubclass::Mace
                | WeaponSubclass::Sword
                | WeaponSubclass::Dagger
                | WeaponSubclass::Fist
        )
    }

    /// Subclasses occupying the ranged slot (including thrown and wands)
    pub fn is_ranged_slot(self) -> bool {
        matches!(
            self,
            WeaponSubclass::Bow
                | WeaponSubclass::Gun
                | WeaponSubclass::Thrown
                | WeaponSubclass::Crossbow
                | WeaponSubclass::Wand
        )
    }

    /// Subclasses whose damage counts as ranged DPS
    pub fn is_ranged_weapon(self) -> bool {
        matches!(
            self,
            WeaponSubclass::Bow | WeaponSubclass::Gun | WeaponSubclass::Crossbow
        )
    }

    /// Neither single-hand capable nor a ranged-slot weapon
    pub fn is_two_handed(self) -> bool {
        !self.is_single_hand() && !self.is_ranged_slot()
    }
}

/// Armor subclass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorSubclass {
    Misc,
    Cloth,
    Leather,
    Mail,
    Plate,
    Buckler,
    Shield,
    Libram,
    Idol,
    Totem,
    Sigil,
}

impl ArmorSubclass {
    /// Cloth, leather, mail or plate
    pub fn is_body_armor(self) -> bool {
        matches!(
            self,
            ArmorSubclass::Cloth | ArmorSubclass::Leather | ArmorSubclass::Mail | ArmorSubclass::Plate
        )
    }
}

/// Top-level item category with its subclass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Weapon(WeaponSubclass),
    Armor(ArmorSubclass),
    /// Consumables, trade goods, quest items and anything else
    #[default]
    Other,
}

/// Armor mastery a combatant can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorProficiency {
    Cloth,
    Leather,
    Mail,
    Plate,
}

/// How an ability embedded in an item is triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpellTrigger {
    #[default]
    OnUse,
    /// Passive, active for as long as the item is worn
    OnEquip,
    ChanceOnHit,
    Soulstone,
    OnNoDelayUse,
    LearnSpell,
}

impl SpellTrigger {
    /// Whether the effect is permanently active while equipped
    pub fn is_passive(self) -> bool {
        self == SpellTrigger::OnEquip
    }
}
