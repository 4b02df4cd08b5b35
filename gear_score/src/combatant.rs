//! CombatantProfile - Snapshot of the combatant an item is scored for

use crate::types::{ArmorProficiency, ArmorSubclass, Class, CombatRole, Spec};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Class, specialization, capabilities and active auras of one combatant
///
/// Supplied by the combatant-state provider; the scorer only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantProfile {
    pub spec: Spec,
    pub role: CombatRole,
    /// Whether the combatant is currently tanking (distinguishes bear from cat)
    #[serde(default)]
    pub is_tank: bool,
    #[serde(default)]
    pub armor_proficiencies: BTreeSet<ArmorProficiency>,
    #[serde(default)]
    pub can_dual_wield: bool,
    /// Can wield two-handed weapons in one hand
    #[serde(default)]
    pub can_titan_grip: bool,
    #[serde(default)]
    pub active_auras: BTreeSet<u32>,
}

impl CombatantProfile {
    /// Create a profile with no proficiencies, capabilities or auras
    pub fn new(spec: Spec, role: CombatRole) -> Self {
        CombatantProfile {
            spec,
            role,
            is_tank: false,
            armor_proficiencies: BTreeSet::new(),
            can_dual_wield: false,
            can_titan_grip: false,
            active_auras: BTreeSet::new(),
        }
    }

    /// Create a profile with the usual role and armor proficiencies of a spec
    pub fn for_spec(spec: Spec) -> Self {
        let role = typical_role(spec);
        let mut profile = Self::new(spec, role);
        profile.is_tank = matches!(
            spec,
            Spec::WarriorProtection | Spec::PaladinProtection | Spec::DeathKnightBlood
        );
        profile.armor_proficiencies = class_proficiencies(spec.class()).iter().copied().collect();
        profile
    }

    pub fn with_tank(mut self, is_tank: bool) -> Self {
        self.is_tank = is_tank;
        self
    }

    pub fn with_proficiency(mut self, proficiency: ArmorProficiency) -> Self {
        self.armor_proficiencies.insert(proficiency);
        self
    }

    pub fn with_dual_wield(mut self, can_dual_wield: bool) -> Self {
        self.can_dual_wield = can_dual_wield;
        self
    }

    pub fn with_titan_grip(mut self, can_titan_grip: bool) -> Self {
        self.can_titan_grip = can_titan_grip;
        self
    }

    pub fn with_aura(mut self, aura_id: u32) -> Self {
        self.active_auras.insert(aura_id);
        self
    }

    pub fn class(&self) -> Class {
        self.spec.class()
    }

    pub fn has_aura(&self, aura_id: u32) -> bool {
        self.active_auras.contains(&aura_id)
    }

    pub fn has_proficiency(&self, proficiency: ArmorProficiency) -> bool {
        self.armor_proficiencies.contains(&proficiency)
    }

    /// Whether a better armor type than `subclass` is available to this combatant
    ///
    /// The highest held mastery among plate, mail and leather is the preferred
    /// type; anything else is penalized. Cloth-only wearers have no preference.
    pub fn prefers_other_armor(&self, subclass: ArmorSubclass) -> bool {
        if self.has_proficiency(ArmorProficiency::Plate) {
            return subclass != ArmorSubclass::Plate;
        }
        if self.has_proficiency(ArmorProficiency::Mail) {
            return subclass != ArmorSubclass::Mail;
        }
        if self.has_proficiency(ArmorProficiency::Leather) {
            return subclass != ArmorSubclass::Leather;
        }
        false
    }
}

fn typical_role(spec: Spec) -> CombatRole {
    use Spec::*;
    match spec {
        HunterBeastMastery | HunterMarksmanship | HunterSurvival => CombatRole::Ranged,
        PaladinHoly | PriestDiscipline | PriestHoly | PriestShadow | ShamanElemental
        | ShamanRestoration | MageArcane | MageFire | MageFrost | WarlockAffliction
        | WarlockDemonology | WarlockDestruction | DruidBalance | DruidRestoration => CombatRole::Spell,
        _ => CombatRole::Melee,
    }
}

fn class_proficiencies(class: Class) -> &'static [ArmorProficiency] {
    use ArmorProficiency::*;
    match class {
        Class::Warrior | Class::Paladin | Class::DeathKnight => &[Cloth, Leather, Mail, Plate],
        Class::Hunter | Class::Shaman => &[Cloth, Leather, Mail],
        Class::Rogue | Class::Druid => &[Cloth, Leather],
        Class::Priest | Class::Mage | Class::Warlock => &[Cloth],
    }
}
