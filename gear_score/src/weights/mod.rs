//! WeightProfileGenerator - Per-combatant value of each stat domain
//!
//! Weights are the sum of:
//! - baseline stamina and armor weights every combatant receives
//! - exactly one [`Archetype`] table
//! - flat bonuses for specific class auras (see [`AURA_BONUSES`])

mod archetype;

pub use archetype::Archetype;

use crate::combatant::CombatantProfile;
use crate::config::ScoringConstants;
use crate::stats::{StatDomain, WeightVector};
use crate::types::Class;

/// Bonus granted while a class has a specific aura active
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuraBonus {
    pub class: Class,
    pub aura_id: u32,
    pub domain: StatDomain,
    pub amount: f64,
}

/// Aura-gated weight bonuses, applied on top of any archetype
pub const AURA_BONUSES: [AuraBonus; 3] = [
    AuraBonus { class: Class::Hunter, aura_id: 34484, domain: StatDomain::Intellect, amount: 1.0 },
    AuraBonus { class: Class::Warrior, aura_id: 61222, domain: StatDomain::Armor, amount: 0.03 },
    AuraBonus { class: Class::Shaman, aura_id: 51885, domain: StatDomain::Intellect, amount: 1.0 },
];

/// Compute the weight vector for one combatant
pub fn generate_weights(profile: &CombatantProfile, constants: &ScoringConstants) -> WeightVector {
    let archetype = Archetype::for_profile(profile);

    let mut weights = WeightVector::new();
    weights.add(StatDomain::Stamina, constants.baseline.stamina);
    weights.add(StatDomain::Armor, constants.baseline.armor);
    weights.add_pairs(archetype.weights());

    for bonus in &AURA_BONUSES {
        if profile.class() == bonus.class && profile.has_aura(bonus.aura_id) {
            weights.add(bonus.domain, bonus.amount);
        }
    }

    tracing::debug!(
        "weights for {:?}: archetype {:?}",
        profile.spec,
        archetype
    );
    weights
}
