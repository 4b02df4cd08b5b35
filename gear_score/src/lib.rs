//! gear_score - Equipment scoring for automated combatants
//!
//! This library provides:
//! - StatAggregator: Item, ability and enchantment stats collected into a StatVector
//! - WeightProfileGenerator: Per-combatant stat weights from a first-match archetype table
//! - ItemScorer: Weighted score with an ordered penalty cascade for armor and weapon fit
//! - Config: Tunable constants and game data loaded from TOML or JSON

pub mod collector;
pub mod combatant;
pub mod config;
pub mod data;
pub mod error;
pub mod prelude;
pub mod scorer;
pub mod stats;
pub mod types;
pub mod weights;

// Re-export core types for convenience
pub use collector::StatAggregator;
pub use combatant::CombatantProfile;
pub use config::{default_constants, load_constants, ConfigError, ScoringConstants};
pub use data::{GameData, GameDatabase, ItemTemplate};
pub use error::ScoreError;
pub use scorer::{AppliedPenalty, ItemScorer, PenaltyCascade, PenaltyRule, ScoreBreakdown};
pub use stats::{StatDomain, StatVector, WeightVector};
pub use types::{ArmorSubclass, Class, CombatRole, ItemCategory, Spec, SpellTrigger, WeaponSubclass};
pub use weights::{generate_weights, Archetype};
