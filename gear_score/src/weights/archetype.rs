//! Archetype - First-match weight table keyed on specialization

use crate::combatant::CombatantProfile;
use crate::stats::StatDomain;
use crate::types::{Class, Spec};
use serde::Serialize;

use StatDomain::*;

/// Weight archetype a combatant resolves to
///
/// Variants are listed in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    /// Hunters
    RangedPhysical,
    /// Rogues and cat druids
    AgilityMelee,
    /// Retribution, arms/fury, frost/unholy
    StrengthMelee,
    /// Enhancement shamans
    HybridMelee,
    CasterDps,
    Healer,
    /// Protection warriors and paladins
    ShieldTank,
    DeathKnightTank,
    /// Bear druids
    BearTank,
}

const RANGED_PHYSICAL: &[(StatDomain, f64)] = &[
    (Agility, 2.5),
    (AttackPower, 1.0),
    (ArmorPenetration, 2.0),
    (Hit, 2.0),
    (Crit, 2.0),
    (Haste, 2.0),
    (RangedDps, 5.0),
];

const AGILITY_MELEE: &[(StatDomain, f64)] = &[
    (Agility, 2.0),
    (Strength, 1.0),
    (AttackPower, 1.0),
    (ArmorPenetration, 1.0),
    (Hit, 1.5),
    (Crit, 1.5),
    (Haste, 1.5),
    (Expertise, 2.5),
    (MeleeDps, 5.0),
];

const STRENGTH_MELEE: &[(StatDomain, f64)] = &[
    (Agility, 1.0),
    (Strength, 2.0),
    (AttackPower, 1.0),
    (ArmorPenetration, 1.0),
    (Hit, 1.5),
    (Crit, 1.5),
    (Haste, 1.5),
    (Expertise, 2.0),
    (MeleeDps, 5.0),
];

const HYBRID_MELEE: &[(StatDomain, f64)] = &[
    (Agility, 1.5),
    (Strength, 1.0),
    (Intellect, 0.5),
    (AttackPower, 1.0),
    (SpellPower, 1.5),
    (ArmorPenetration, 1.5),
    (Hit, 1.5),
    (Crit, 1.5),
    (Haste, 1.5),
    (Expertise, 2.0),
    (MeleeDps, 5.0),
];

const CASTER_DPS: &[(StatDomain, f64)] = &[
    (Intellect, 0.5),
    (Spirit, 0.5),
    (SpellPower, 1.0),
    (SpellPenetration, 1.0),
    (Hit, 1.0),
    (Crit, 1.0),
    (Haste, 1.0),
    (RangedDps, 1.0),
];

const HEALER: &[(StatDomain, f64)] = &[
    (Intellect, 0.5),
    (Spirit, 0.5),
    (SpellPower, 1.0),
    (ManaRegeneration, 0.5),
    (Crit, 0.5),
    (Haste, 1.0),
    (RangedDps, 1.0),
];

const SHIELD_TANK: &[(StatDomain, f64)] = &[
    (Agility, 2.0),
    (Strength, 1.0),
    (Stamina, 3.0),
    (AttackPower, 0.2),
    (Defense, 2.5),
    (Parry, 2.0),
    (Dodge, 2.0),
    (Resilience, 2.0),
    (Block, 2.0),
    (Armor, 0.3),
    (Hit, 0.5),
    (Crit, 0.2),
    (Haste, 0.5),
    (Expertise, 3.0),
    (MeleeDps, 2.0),
];

const DEATH_KNIGHT_TANK: &[(StatDomain, f64)] = &[
    (Agility, 2.0),
    (Strength, 1.0),
    (Stamina, 2.5),
    (AttackPower, 0.2),
    (Defense, 3.5),
    (Parry, 2.0),
    (Dodge, 2.0),
    (Resilience, 2.0),
    (Armor, 0.3),
    (Hit, 0.5),
    (Crit, 0.5),
    (Haste, 0.5),
    (Expertise, 3.5),
    (MeleeDps, 2.0),
];

const BEAR_TANK: &[(StatDomain, f64)] = &[
    (Agility, 1.5),
    (Strength, 1.0),
    (Stamina, 1.5),
    (AttackPower, 0.2),
    (Defense, 2.0),
    (Dodge, 2.0),
    (Resilience, 2.0),
    (Armor, 0.3),
    (Hit, 0.5),
    (Crit, 0.5),
    (Haste, 0.5),
    (Expertise, 3.0),
    (MeleeDps, 2.0),
];

impl Archetype {
    /// All archetypes in match priority order
    pub fn all() -> &'static [Archetype] {
        &[
            Archetype::RangedPhysical,
            Archetype::AgilityMelee,
            Archetype::StrengthMelee,
            Archetype::HybridMelee,
            Archetype::CasterDps,
            Archetype::Healer,
            Archetype::ShieldTank,
            Archetype::DeathKnightTank,
            Archetype::BearTank,
        ]
    }

    /// Resolve the first matching archetype for a combatant
    ///
    /// Only feral druids depend on anything but the spec: they resolve to
    /// [`Archetype::BearTank`] when tanking.
    pub fn for_profile(profile: &CombatantProfile) -> Archetype {
        use Spec::*;
        match profile.spec {
            spec if spec.class() == Class::Hunter => Archetype::RangedPhysical,
            RogueAssassination | RogueCombat | RogueSubtlety => Archetype::AgilityMelee,
            DruidFeral if !profile.is_tank => Archetype::AgilityMelee,
            PaladinRetribution | WarriorArms | WarriorFury | DeathKnightFrost
            | DeathKnightUnholy => Archetype::StrengthMelee,
            ShamanEnhancement => Archetype::HybridMelee,
            WarlockAffliction | WarlockDemonology | WarlockDestruction | MageArcane | MageFire
            | MageFrost | PriestShadow | ShamanElemental | DruidBalance => Archetype::CasterDps,
            PaladinHoly | PriestDiscipline | PriestHoly | ShamanRestoration | DruidRestoration => {
                Archetype::Healer
            }
            WarriorProtection | PaladinProtection => Archetype::ShieldTank,
            DeathKnightBlood => Archetype::DeathKnightTank,
            _ => Archetype::BearTank,
        }
    }

    /// Domains this archetype weights; every other domain gets nothing
    pub fn weights(self) -> &'static [(StatDomain, f64)] {
        match self {
            Archetype::RangedPhysical => RANGED_PHYSICAL,
            Archetype::AgilityMelee => AGILITY_MELEE,
            Archetype::StrengthMelee => STRENGTH_MELEE,
            Archetype::HybridMelee => HYBRID_MELEE,
            Archetype::CasterDps => CASTER_DPS,
            Archetype::Healer => HEALER,
            Archetype::ShieldTank => SHIELD_TANK,
            Archetype::DeathKnightTank => DEATH_KNIGHT_TANK,
            Archetype::BearTank => BEAR_TANK,
        }
    }
}
