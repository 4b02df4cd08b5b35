//! PenaltyCascade - Ordered multiplicative fit adjustments
//!
//! Rules are independent: every matching rule applies, in table order.

use crate::combatant::CombatantProfile;
use crate::config::PenaltyFactors;
use crate::data::ItemTemplate;
use crate::types::{Class, Spec, WeaponSubclass};
use serde::Serialize;
use std::fmt;

/// What a penalty predicate sees
#[derive(Debug, Clone, Copy)]
pub struct PenaltyContext<'a> {
    pub profile: &'a CombatantProfile,
    pub item: &'a ItemTemplate,
}

impl<'a> PenaltyContext<'a> {
    pub fn new(profile: &'a CombatantProfile, item: &'a ItemTemplate) -> Self {
        PenaltyContext { profile, item }
    }

    fn two_handed(&self) -> bool {
        self.item.is_two_handed()
    }

    fn spec(&self) -> Spec {
        self.profile.spec
    }
}

pub type PenaltyPredicate = fn(&PenaltyContext<'_>) -> bool;

/// One named `(predicate, factor)` entry of a cascade
#[derive(Clone, Copy)]
pub struct PenaltyRule {
    pub name: &'static str,
    pub predicate: PenaltyPredicate,
    pub factor: f64,
}

impl PenaltyRule {
    pub fn new(name: &'static str, predicate: PenaltyPredicate, factor: f64) -> Self {
        PenaltyRule {
            name,
            predicate,
            factor,
        }
    }

    pub fn matches(&self, ctx: &PenaltyContext<'_>) -> bool {
        (self.predicate)(ctx)
    }
}

impl fmt::Debug for PenaltyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PenaltyRule")
            .field("name", &self.name)
            .field("factor", &self.factor)
            .finish()
    }
}

/// A rule that matched, with the factor it applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AppliedPenalty {
    pub rule: &'static str,
    pub factor: f64,
}

/// Ordered penalty rules
#[derive(Debug, Clone)]
pub struct PenaltyCascade {
    rules: Vec<PenaltyRule>,
}

impl PenaltyCascade {
    pub fn new(rules: Vec<PenaltyRule>) -> Self {
        PenaltyCascade { rules }
    }

    /// The armor, handedness and weapon-type rules with the given factors
    pub fn standard(factors: &PenaltyFactors) -> Self {
        PenaltyCascade::new(vec![
            PenaltyRule::new("wrong_armor", wrong_armor, factors.wrong_armor),
            PenaltyRule::new("two_hand", two_hand, factors.two_hand),
            PenaltyRule::new("two_hand_disfavored", two_hand_disfavored, factors.two_hand_disfavored),
            PenaltyRule::new("two_hand_favored", two_hand_favored, factors.two_hand_favored),
            PenaltyRule::new("titan_grip", titan_grip, factors.titan_grip),
            PenaltyRule::new("hunter_thrown", hunter_thrown, factors.hunter_thrown),
            PenaltyRule::new("off_spec_weapon", off_spec_weapon, factors.off_spec_weapon),
        ])
    }

    pub fn rules(&self) -> &[PenaltyRule] {
        &self.rules
    }

    /// Rules matching this context, in order
    pub fn matching(&self, ctx: &PenaltyContext<'_>) -> Vec<AppliedPenalty> {
        self.rules
            .iter()
            .filter(|rule| rule.matches(ctx))
            .map(|rule| AppliedPenalty {
                rule: rule.name,
                factor: rule.factor,
            })
            .collect()
    }

    /// Multiply `raw` by every matching factor, in order
    pub fn apply(&self, ctx: &PenaltyContext<'_>, raw: f64) -> f64 {
        self.rules
            .iter()
            .filter(|rule| rule.matches(ctx))
            .fold(raw, |score, rule| {
                tracing::debug!(
                    "item {}: penalty {} x{}",
                    ctx.item.id,
                    rule.name,
                    rule.factor
                );
                score * rule.factor
            })
    }
}

/// Body armor of a lower type than the best one the combatant can wear
fn wrong_armor(ctx: &PenaltyContext<'_>) -> bool {
    ctx.item
        .armor_subclass()
        .is_some_and(|subclass| subclass.is_body_armor() && ctx.profile.prefers_other_armor(subclass))
}

fn two_hand(ctx: &PenaltyContext<'_>) -> bool {
    ctx.two_handed()
}

fn two_hand_disfavored(ctx: &PenaltyContext<'_>) -> bool {
    ctx.two_handed() && disfavors_two_hand(ctx.profile)
}

fn two_hand_favored(ctx: &PenaltyContext<'_>) -> bool {
    ctx.two_handed() && favors_two_hand(ctx.profile)
}

fn titan_grip(ctx: &PenaltyContext<'_>) -> bool {
    ctx.two_handed()
        && ctx.item.weapon_subclass() != Some(WeaponSubclass::Polearm)
        && ctx.spec() == Spec::WarriorFury
        && ctx.profile.can_titan_grip
}

fn hunter_thrown(ctx: &PenaltyContext<'_>) -> bool {
    ctx.profile.class() == Class::Hunter && ctx.item.weapon_subclass() == Some(WeaponSubclass::Thrown)
}

/// Assassination rogues fight with daggers only
fn off_spec_weapon(ctx: &PenaltyContext<'_>) -> bool {
    ctx.spec() == Spec::RogueAssassination
        && ctx
            .item
            .weapon_subclass()
            .is_some_and(|subclass| subclass != WeaponSubclass::Dagger)
}

/// Specs that fight with one-handers or an off-hand
pub fn disfavors_two_hand(profile: &CombatantProfile) -> bool {
    match profile.spec {
        Spec::ShamanEnhancement => profile.can_dual_wield,
        Spec::RogueAssassination | Spec::RogueCombat | Spec::RogueSubtlety => true,
        Spec::DeathKnightFrost | Spec::DeathKnightUnholy => true,
        Spec::WarriorFury => profile.can_dual_wield && !profile.can_titan_grip,
        Spec::WarriorProtection | Spec::PaladinProtection => true,
        _ => false,
    }
}

/// Specs that fight with a single two-hander
pub fn favors_two_hand(profile: &CombatantProfile) -> bool {
    match profile.spec {
        Spec::WarriorFury | Spec::ShamanEnhancement => !profile.can_dual_wield,
        Spec::WarriorArms
        | Spec::DruidFeral
        | Spec::PaladinRetribution
        | Spec::DeathKnightBlood => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ArmorSubclass, ItemCategory};

    const EPS: f64 = 1e-9;

    fn weapon(subclass: WeaponSubclass) -> ItemTemplate {
        ItemTemplate::new(1, "Weapon", ItemCategory::Weapon(subclass)).with_damage(100.0, 200.0, 3.0)
    }

    fn armor(subclass: ArmorSubclass) -> ItemTemplate {
        ItemTemplate::new(2, "Armor", ItemCategory::Armor(subclass)).with_armor(400)
    }

    fn factor(profile: &CombatantProfile, item: &ItemTemplate) -> f64 {
        let cascade = PenaltyCascade::standard(&PenaltyFactors::default());
        cascade.apply(&PenaltyContext::new(profile, item), 1.0)
    }

    fn fury(can_dual_wield: bool, can_titan_grip: bool) -> CombatantProfile {
        CombatantProfile::for_spec(Spec::WarriorFury)
            .with_dual_wield(can_dual_wield)
            .with_titan_grip(can_titan_grip)
    }

    #[test]
    fn test_standard_rule_order() {
        let cascade = PenaltyCascade::standard(&PenaltyFactors::default());
        let names: Vec<_> = cascade.rules().iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            [
                "wrong_armor",
                "two_hand",
                "two_hand_disfavored",
                "two_hand_favored",
                "titan_grip",
                "hunter_thrown",
                "off_spec_weapon",
            ]
        );
    }

    #[test]
    fn test_wrong_armor() {
        let paladin = CombatantProfile::for_spec(Spec::PaladinHoly);
        assert!((factor(&paladin, &armor(ArmorSubclass::Cloth)) - 0.8).abs() < EPS);
        assert!((factor(&paladin, &armor(ArmorSubclass::Plate)) - 1.0).abs() < EPS);

        // Shields and relics are never compared against body armor
        assert!((factor(&paladin, &armor(ArmorSubclass::Shield)) - 1.0).abs() < EPS);
        assert!((factor(&paladin, &armor(ArmorSubclass::Libram)) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_one_handers_untouched() {
        let arms = CombatantProfile::for_spec(Spec::WarriorArms);
        assert!((factor(&arms, &weapon(WeaponSubclass::Sword)) - 1.0).abs() < EPS);
        assert!((factor(&arms, &weapon(WeaponSubclass::Bow)) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_two_hander_favored() {
        let arms = CombatantProfile::for_spec(Spec::WarriorArms);
        assert!((factor(&arms, &weapon(WeaponSubclass::TwoHandSword)) - 5.0).abs() < EPS);
    }

    #[test]
    fn test_two_hander_disfavored() {
        let rogue = CombatantProfile::for_spec(Spec::RogueCombat);
        assert!((factor(&rogue, &weapon(WeaponSubclass::Staff)) - 0.05).abs() < EPS);

        let prot = CombatantProfile::for_spec(Spec::PaladinProtection);
        assert!((factor(&prot, &weapon(WeaponSubclass::TwoHandMace)) - 0.05).abs() < EPS);
    }

    #[test]
    fn test_death_knight_handedness() {
        let sword = weapon(WeaponSubclass::TwoHandSword);
        let frost = CombatantProfile::for_spec(Spec::DeathKnightFrost);
        let unholy = CombatantProfile::for_spec(Spec::DeathKnightUnholy);
        let blood = CombatantProfile::for_spec(Spec::DeathKnightBlood);
        assert!((factor(&frost, &sword) - 0.05).abs() < EPS);
        assert!((factor(&unholy, &sword) - 0.05).abs() < EPS);
        assert!((factor(&blood, &sword) - 5.0).abs() < EPS);
    }

    #[test]
    fn test_feral_and_ret_favor_two_handers() {
        let feral = CombatantProfile::for_spec(Spec::DruidFeral);
        assert!((factor(&feral, &weapon(WeaponSubclass::Staff)) - 5.0).abs() < EPS);

        let ret = CombatantProfile::for_spec(Spec::PaladinRetribution);
        let polearm = weapon(WeaponSubclass::Polearm);
        let applied = PenaltyCascade::standard(&PenaltyFactors::default())
            .matching(&PenaltyContext::new(&ret, &polearm));
        let rules: Vec<_> = applied.iter().map(|p| p.rule).collect();
        assert_eq!(rules, ["two_hand", "two_hand_favored"]);
        assert!((factor(&ret, &polearm) - 5.0).abs() < EPS);
    }

    #[test]
    fn test_two_hander_neutral_spec() {
        let mage = CombatantProfile::for_spec(Spec::MageFrost);
        assert!((factor(&mage, &weapon(WeaponSubclass::Staff)) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_fury_handedness() {
        let sword = weapon(WeaponSubclass::TwoHandSword);
        assert!((factor(&fury(false, false), &sword) - 5.0).abs() < EPS);
        assert!((factor(&fury(true, false), &sword) - 0.05).abs() < EPS);
        assert!((factor(&fury(true, true), &sword) - 5.0).abs() < EPS);
    }

    #[test]
    fn test_titan_grip_excludes_polearm() {
        let profile = fury(true, true);
        let polearm = weapon(WeaponSubclass::Polearm);
        let ctx = PenaltyContext::new(&profile, &polearm);
        let cascade = PenaltyCascade::standard(&PenaltyFactors::default());

        let applied = cascade.matching(&ctx);
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].rule, "two_hand");
        assert!((cascade.apply(&ctx, 1.0) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_enhancement_dual_wield() {
        let axe = weapon(WeaponSubclass::TwoHandAxe);
        let dw = CombatantProfile::for_spec(Spec::ShamanEnhancement).with_dual_wield(true);
        let no_dw = CombatantProfile::for_spec(Spec::ShamanEnhancement);
        assert!((factor(&dw, &axe) - 0.05).abs() < EPS);
        assert!((factor(&no_dw, &axe) - 5.0).abs() < EPS);
    }

    #[test]
    fn test_hunter_thrown() {
        let hunter = CombatantProfile::for_spec(Spec::HunterBeastMastery);
        assert!((factor(&hunter, &weapon(WeaponSubclass::Thrown)) - 0.1).abs() < EPS);
        assert!((factor(&hunter, &weapon(WeaponSubclass::Gun)) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_assassination_wants_daggers() {
        let rogue = CombatantProfile::for_spec(Spec::RogueAssassination);
        assert!((factor(&rogue, &weapon(WeaponSubclass::Dagger)) - 1.0).abs() < EPS);
        assert!((factor(&rogue, &weapon(WeaponSubclass::Sword)) - 0.1).abs() < EPS);
        // Armor is not a weapon subtype
        assert!((factor(&rogue, &armor(ArmorSubclass::Leather)) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_overlapping_rules_multiply_in_order() {
        fn always(_: &PenaltyContext<'_>) -> bool {
            true
        }
        let cascade = PenaltyCascade::new(vec![
            PenaltyRule::new("two_hand", two_hand, 0.5),
            PenaltyRule::new("disfavored", always, 0.1),
            PenaltyRule::new("favored", always, 10.0),
        ]);
        let profile = CombatantProfile::for_spec(Spec::WarriorArms);
        let item = weapon(WeaponSubclass::TwoHandAxe);
        let ctx = PenaltyContext::new(&profile, &item);

        let applied = cascade.matching(&ctx);
        let factors: Vec<_> = applied.iter().map(|p| p.factor).collect();
        assert_eq!(factors, [0.5, 0.1, 10.0]);
        assert!((cascade.apply(&ctx, 100.0) - 100.0 * 0.5 * 0.1 * 10.0).abs() < EPS);
    }
}
