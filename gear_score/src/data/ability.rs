//! Ability (spell) effect descriptors

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Number of effect slots on one ability
pub const MAX_ABILITY_EFFECTS: usize = 3;

bitflags! {
    /// Combat ratings selected by a rating-modifier effect.
    ///
    /// Bit positions follow the game's combat-rating indices.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct CombatRatings: u32 {
        const WEAPON_SKILL          = 1 << 0;
        const DEFENSE_SKILL         = 1 << 1;
        const DODGE                 = 1 << 2;
        const PARRY                 = 1 << 3;
        const BLOCK                 = 1 << 4;
        const HIT_MELEE             = 1 << 5;
        const HIT_RANGED            = 1 << 6;
        const HIT_SPELL             = 1 << 7;
        const CRIT_MELEE            = 1 << 8;
        const CRIT_RANGED           = 1 << 9;
        const CRIT_SPELL            = 1 << 10;
        const HIT_TAKEN_MELEE       = 1 << 11;
        const HIT_TAKEN_RANGED      = 1 << 12;
        const HIT_TAKEN_SPELL       = 1 << 13;
        const CRIT_TAKEN_MELEE      = 1 << 14;
        const CRIT_TAKEN_RANGED     = 1 << 15;
        const CRIT_TAKEN_SPELL      = 1 << 16;
        const HASTE_MELEE           = 1 << 17;
        const HASTE_RANGED          = 1 << 18;
        const HASTE_SPELL           = 1 << 19;
        const WEAPON_SKILL_MAINHAND = 1 << 20;
        const WEAPON_SKILL_OFFHAND  = 1 << 21;
        const WEAPON_SKILL_RANGED   = 1 << 22;
        const EXPERTISE             = 1 << 23;
        const ARMOR_PENETRATION     = 1 << 24;
    }
}

/// What an effect slot does when the ability is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Empty slot
    #[default]
    None,
    /// Apply a persistent modifier (aura)
    ApplyAura,
    SchoolDamage,
    Heal,
    Dummy,
    TriggerSpell,
    Energize,
}

/// Modifier kind carried by an aura effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuraKind {
    #[default]
    None,
    /// Spell damage and healing done
    ModDamageDone,
    ModAttackPower,
    ModRangedAttackPower,
    ModShieldBlockValue,
    /// Bundle of combat ratings selected by the effect's rating mask
    ModRating,
    /// Proc that casts another ability
    ProcTriggerSpell,
    ModStat,
    ModResistance,
    ModIncreaseSpeed,
    PeriodicDamage,
}

/// One effect slot of an ability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityEffect {
    pub kind: EffectKind,
    pub aura: AuraKind,
    /// Stored magnitude; the applied magnitude is one higher
    pub base_points: i32,
    /// Aura-specific parameter; a rating bitmask for `ModRating`
    pub misc_value: u32,
    /// Ability cast by a `ProcTriggerSpell` aura; 0 when unset
    pub trigger_ability: u32,
}

impl AbilityEffect {
    /// An aura effect with the given magnitude
    pub fn aura(aura: AuraKind, base_points: i32) -> Self {
        AbilityEffect {
            kind: EffectKind::ApplyAura,
            aura,
            base_points,
            ..Default::default()
        }
    }

    /// A rating-bundle aura over the given ratings
    pub fn rating(ratings: CombatRatings, base_points: i32) -> Self {
        AbilityEffect {
            misc_value: ratings.bits(),
            ..Self::aura(AuraKind::ModRating, base_points)
        }
    }

    /// A proc aura that triggers another ability
    pub fn proc_trigger(trigger_ability: u32) -> Self {
        AbilityEffect {
            trigger_ability,
            ..Self::aura(AuraKind::ProcTriggerSpell, 0)
        }
    }

    /// Applied magnitude before any uptime multiplier
    pub fn magnitude(&self) -> f64 {
        (self.base_points as f64) + 1.0
    }

    /// Rating mask, unknown bits retained
    pub fn ratings(&self) -> CombatRatings {
        CombatRatings::from_bits_retain(self.misc_value)
    }

    pub fn triggered_ability(&self) -> Option<u32> {
        (self.trigger_ability != 0).then_some(self.trigger_ability)
    }
}

/// Static attributes of one ability
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityInfo {
    pub id: u32,
    pub name: String,
    pub effects: Vec<AbilityEffect>,
}

impl AbilityInfo {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        AbilityInfo {
            id,
            name: name.into(),
            effects: Vec::new(),
        }
    }

    pub fn with_effect(mut self, effect: AbilityEffect) -> Self {
        self.effects.push(effect);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_adds_one() {
        let effect = AbilityEffect::aura(AuraKind::ModAttackPower, 39);
        assert!((effect.magnitude() - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rating_mask() {
        let effect = AbilityEffect::rating(CombatRatings::DODGE | CombatRatings::PARRY, 9);
        assert_eq!(effect.misc_value, (1 << 2) | (1 << 3));
        assert!(effect.ratings().contains(CombatRatings::PARRY));
        assert!(!effect.ratings().contains(CombatRatings::HIT_MELEE));
    }

    #[test]
    fn test_triggered_ability() {
        assert_eq!(AbilityEffect::proc_trigger(28093).triggered_ability(), Some(28093));
        assert_eq!(AbilityEffect::default().triggered_ability(), None);
    }
}
