//! StatDomain - One scoring dimension

use serde::Serialize;
use strum::{EnumCount, EnumIter};

/// A discrete combat-relevant quantity an item can contribute to
///
/// The discriminant is the stable index into [`StatVector`](super::StatVector)
/// and [`WeightVector`](super::WeightVector).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, EnumCount, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum StatDomain {
    // === Primary attributes ===
    Agility,
    Strength,
    Intellect,
    Spirit,
    Stamina,

    // === Combat ratings ===
    Hit,
    Crit,
    Haste,
    ArmorPenetration,
    Expertise,
    Defense,
    Dodge,
    Parry,
    Block,
    Resilience,

    // === Derived outputs ===
    AttackPower,
    SpellPower,
    SpellPenetration,
    ManaRegeneration,
    HealthRegeneration,
    Armor,
    MeleeDps,
    RangedDps,
}

impl StatDomain {
    /// The five primary attributes, in declaration order
    pub const PRIMARY: [StatDomain; 5] = [
        StatDomain::Agility,
        StatDomain::Strength,
        StatDomain::Intellect,
        StatDomain::Spirit,
        StatDomain::Stamina,
    ];

    /// Stable index into domain-shaped vectors
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_primary(self) -> bool {
        Self::PRIMARY.contains(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_indices_are_dense() {
        for (i, domain) in StatDomain::iter().enumerate() {
            assert_eq!(domain.index(), i);
        }
        assert_eq!(StatDomain::iter().count(), StatDomain::COUNT);
    }

    #[test]
    fn test_primary_attributes() {
        assert!(StatDomain::Stamina.is_primary());
        assert!(!StatDomain::Hit.is_primary());
        assert_eq!(StatDomain::iter().filter(|d| d.is_primary()).count(), 5);
    }
}
