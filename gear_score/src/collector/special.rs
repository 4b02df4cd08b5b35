//! Hardcoded proc and enchantment abilities whose value generic effect
//! collection cannot see

use crate::stats::{StatDomain, StatVector};
use crate::types::CombatRole;

/// A proc worth a flat bonus to one domain, for melee combatants only
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcBonus {
    pub ability_id: u32,
    pub name: &'static str,
    pub domain: StatDomain,
    pub amount: f64,
}

/// Named melee procs
pub const MELEE_PROCS: [ProcBonus; 5] = [
    ProcBonus { ability_id: 28093, name: "Mongoose", domain: StatDomain::Agility, amount: 40.0 },
    ProcBonus { ability_id: 20007, name: "Crusader", domain: StatDomain::Strength, amount: 30.0 },
    ProcBonus { ability_id: 59620, name: "Berserk", domain: StatDomain::AttackPower, amount: 120.0 },
    ProcBonus { ability_id: 64440, name: "Blade Warding", domain: StatDomain::Parry, amount: 50.0 },
    ProcBonus { ability_id: 64571, name: "Stamina Proc", domain: StatDomain::Stamina, amount: 50.0 },
];

/// Legacy "+N all stats" enchantment abilities
pub const ALL_STATS_ENCHANTS: [(u32, f64); 11] = [
    (13624, 1.0),
    (13625, 2.0),
    (13824, 3.0),
    (19988, 4.0),
    (44627, 4.0),
    (56527, 4.0),
    (27959, 6.0),
    (56529, 6.0),
    (44624, 8.0),
    (60694, 10.0),
    (68251, 10.0),
];

/// A matched special case
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpecialCase {
    Proc(ProcBonus),
    AllStats(f64),
}

impl SpecialCase {
    /// Look up an ability id in the proc table, then the all-stats table
    pub fn lookup(ability_id: u32) -> Option<SpecialCase> {
        if let Some(bonus) = MELEE_PROCS.iter().find(|p| p.ability_id == ability_id) {
            return Some(SpecialCase::Proc(*bonus));
        }
        ALL_STATS_ENCHANTS
            .iter()
            .find(|(id, _)| *id == ability_id)
            .map(|(_, amount)| SpecialCase::AllStats(*amount))
    }

    /// Apply the bonus; procs are matched for every role but only pay out for melee
    pub fn apply(&self, role: CombatRole, stats: &mut StatVector) {
        match self {
            SpecialCase::Proc(bonus) => {
                if role == CombatRole::Melee {
                    stats.add(bonus.domain, bonus.amount);
                }
            }
            SpecialCase::AllStats(amount) => stats.add_all(&StatDomain::PRIMARY, *amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_proc() {
        match SpecialCase::lookup(28093) {
            Some(SpecialCase::Proc(bonus)) => {
                assert_eq!(bonus.domain, StatDomain::Agility);
                assert!((bonus.amount - 40.0).abs() < f64::EPSILON);
            }
            other => panic!("expected Mongoose, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_all_stats() {
        assert_eq!(SpecialCase::lookup(44627), Some(SpecialCase::AllStats(4.0)));
        assert_eq!(SpecialCase::lookup(68251), Some(SpecialCase::AllStats(10.0)));
        assert_eq!(SpecialCase::lookup(0), None);
        assert_eq!(SpecialCase::lookup(12345), None);
    }

    #[test]
    fn test_proc_gated_to_melee() {
        let crusader = SpecialCase::lookup(20007).unwrap();

        let mut stats = StatVector::new();
        crusader.apply(CombatRole::Spell, &mut stats);
        assert!(stats.is_zero());

        crusader.apply(CombatRole::Melee, &mut stats);
        assert!((stats[StatDomain::Strength] - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_all_stats_ignores_role() {
        let mut stats = StatVector::new();
        SpecialCase::AllStats(4.0).apply(CombatRole::Ranged, &mut stats);
        for domain in StatDomain::PRIMARY {
            assert!((stats[domain] - 4.0).abs() < f64::EPSILON);
        }
        assert_eq!(stats.nonzero().count(), 5);
    }
}
