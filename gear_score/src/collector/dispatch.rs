//! Role-gated mapping from item stat kinds and combat ratings to stat domains

use crate::data::{CombatRatings, ItemStatKind};
use crate::stats::StatDomain;
use crate::types::CombatRole;

/// Domain a generic item or enchantment stat accumulates into, if any
///
/// Role-specific hit, crit and haste ratings only count for the matching
/// role; the aggregate ratings count for everyone.
pub fn item_stat_domain(kind: ItemStatKind, role: CombatRole) -> Option<StatDomain> {
    use CombatRole::*;
    use ItemStatKind::*;
    let domain = match kind {
        Agility => StatDomain::Agility,
        Strength => StatDomain::Strength,
        Intellect => StatDomain::Intellect,
        Spirit => StatDomain::Spirit,
        Stamina => StatDomain::Stamina,

        DefenseSkillRating => StatDomain::Defense,
        DodgeRating => StatDomain::Dodge,
        ParryRating => StatDomain::Parry,
        BlockRating | BlockValue => StatDomain::Block,

        HitMeleeRating if role == Melee => StatDomain::Hit,
        HitRangedRating if role == Ranged => StatDomain::Hit,
        HitSpellRating if role == Spell => StatDomain::Hit,
        CritMeleeRating if role == Melee => StatDomain::Crit,
        CritRangedRating if role == Ranged => StatDomain::Crit,
        CritSpellRating if role == Spell => StatDomain::Crit,
        HasteMeleeRating if role == Melee => StatDomain::Haste,
        HasteRangedRating if role == Ranged => StatDomain::Haste,
        HasteSpellRating if role == Spell => StatDomain::Haste,

        HitRating => StatDomain::Hit,
        CritRating => StatDomain::Crit,
        HasteRating => StatDomain::Haste,

        ResilienceRating => StatDomain::Resilience,
        ExpertiseRating => StatDomain::Expertise,
        ArmorPenetrationRating => StatDomain::ArmorPenetration,
        AttackPower => StatDomain::AttackPower,
        RangedAttackPower if role == Ranged => StatDomain::AttackPower,
        SpellPower => StatDomain::SpellPower,
        SpellPenetration => StatDomain::SpellPenetration,
        ManaRegeneration => StatDomain::ManaRegeneration,
        HealthRegen => StatDomain::HealthRegeneration,

        // Flat mana and health, deprecated spell kinds, "taken" ratings,
        // feral AP and role-gated kinds for another role
        _ => return None,
    };
    Some(domain)
}

/// Combat ratings that contribute, with the role they are gated on
const RATING_TABLE: [(CombatRatings, StatDomain, Option<CombatRole>); 15] = [
    (CombatRatings::DEFENSE_SKILL, StatDomain::Defense, None),
    (CombatRatings::DODGE, StatDomain::Dodge, None),
    (CombatRatings::PARRY, StatDomain::Parry, None),
    (CombatRatings::BLOCK, StatDomain::Block, None),
    (CombatRatings::EXPERTISE, StatDomain::Expertise, None),
    (CombatRatings::ARMOR_PENETRATION, StatDomain::ArmorPenetration, None),
    (CombatRatings::HIT_MELEE, StatDomain::Hit, Some(CombatRole::Melee)),
    (CombatRatings::HIT_RANGED, StatDomain::Hit, Some(CombatRole::Ranged)),
    (CombatRatings::HIT_SPELL, StatDomain::Hit, Some(CombatRole::Spell)),
    (CombatRatings::CRIT_MELEE, StatDomain::Crit, Some(CombatRole::Melee)),
    (CombatRatings::CRIT_RANGED, StatDomain::Crit, Some(CombatRole::Ranged)),
    (CombatRatings::CRIT_SPELL, StatDomain::Crit, Some(CombatRole::Spell)),
    (CombatRatings::HASTE_MELEE, StatDomain::Haste, Some(CombatRole::Melee)),
    (CombatRatings::HASTE_RANGED, StatDomain::Haste, Some(CombatRole::Ranged)),
    (CombatRatings::HASTE_SPELL, StatDomain::Haste, Some(CombatRole::Spell)),
];

/// Domain a single combat rating accumulates into, if any
pub fn rating_domain(rating: CombatRatings, role: CombatRole) -> Option<StatDomain> {
    RATING_TABLE
        .iter()
        .find(|(r, _, _)| *r == rating)
        .filter(|(_, _, gate)| gate.map_or(true, |required| required == role))
        .map(|(_, domain, _)| *domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_attributes_are_role_agnostic() {
        for role in [CombatRole::Melee, CombatRole::Ranged, CombatRole::Spell] {
            assert_eq!(item_stat_domain(ItemStatKind::Spirit, role), Some(StatDomain::Spirit));
            assert_eq!(item_stat_domain(ItemStatKind::DodgeRating, role), Some(StatDomain::Dodge));
            assert_eq!(item_stat_domain(ItemStatKind::HasteRating, role), Some(StatDomain::Haste));
        }
    }

    #[test]
    fn test_role_specific_ratings() {
        assert_eq!(
            item_stat_domain(ItemStatKind::CritSpellRating, CombatRole::Spell),
            Some(StatDomain::Crit)
        );
        assert_eq!(item_stat_domain(ItemStatKind::CritSpellRating, CombatRole::Melee), None);
        assert_eq!(item_stat_domain(ItemStatKind::HitRangedRating, CombatRole::Spell), None);
        assert_eq!(
            item_stat_domain(ItemStatKind::HasteMeleeRating, CombatRole::Melee),
            Some(StatDomain::Haste)
        );
    }

    #[test]
    fn test_ranged_attack_power_only_for_ranged() {
        assert_eq!(
            item_stat_domain(ItemStatKind::RangedAttackPower, CombatRole::Ranged),
            Some(StatDomain::AttackPower)
        );
        assert_eq!(item_stat_domain(ItemStatKind::RangedAttackPower, CombatRole::Melee), None);
    }

    #[test]
    fn test_ignored_kinds() {
        for kind in [
            ItemStatKind::Mana,
            ItemStatKind::Health,
            ItemStatKind::SpellDamageDone,
            ItemStatKind::SpellHealingDone,
        ] {
            assert_eq!(item_stat_domain(kind, CombatRole::Spell), None);
        }
    }

    #[test]
    fn test_rating_domain_gating() {
        assert_eq!(
            rating_domain(CombatRatings::HIT_MELEE, CombatRole::Melee),
            Some(StatDomain::Hit)
        );
        assert_eq!(rating_domain(CombatRatings::HIT_MELEE, CombatRole::Ranged), None);
        assert_eq!(rating_domain(CombatRatings::HIT_MELEE, CombatRole::Spell), None);
        assert_eq!(
            rating_domain(CombatRatings::ARMOR_PENETRATION, CombatRole::Spell),
            Some(StatDomain::ArmorPenetration)
        );
        assert_eq!(rating_domain(CombatRatings::WEAPON_SKILL, CombatRole::Melee), None);
    }
}
