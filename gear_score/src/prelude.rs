//! Prelude module for convenient imports
//!
//! ```rust
//! use gear_score::prelude::*;
//! ```

// Core types
pub use crate::stats::{StatDomain, StatVector, WeightVector};
pub use crate::types::{ArmorProficiency, ArmorSubclass, Class, CombatRole, ItemCategory, Spec, SpellTrigger, WeaponSubclass};

// Game data
pub use crate::data::{AbilityStore, EnchantmentStore, GameData, GameDatabase, ItemStore, ItemTemplate};

// Scoring
pub use crate::collector::StatAggregator;
pub use crate::combatant::CombatantProfile;
pub use crate::scorer::{ItemScorer, PenaltyCascade, ScoreBreakdown};
pub use crate::weights::{generate_weights, Archetype};

// Config
pub use crate::config::{
    default_constants, load_constants, load_database, parse_constants, parse_database, ConfigError,
    ScoringConstants,
};
pub use crate::error::ScoreError;
