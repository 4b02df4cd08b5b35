//! ItemScorer - Reduces an item to one comparable number for one combatant
//!
//! `score = (stats . weights) * penalties`, where `stats` is collected fresh
//! for every call and `weights` is fixed when the scorer is built.

mod penalty;

pub use penalty::{
    disfavors_two_hand, favors_two_hand, AppliedPenalty, PenaltyCascade, PenaltyContext,
    PenaltyPredicate, PenaltyRule,
};

use crate::collector::StatAggregator;
use crate::combatant::CombatantProfile;
use crate::config::{default_constants, ConfigError, ScoringConstants};
use crate::data::{GameData, ItemTemplate};
use crate::error::ScoreError;
use crate::stats::{StatDomain, StatVector, WeightVector};
use crate::weights::{generate_weights, Archetype};
use serde::Serialize;

/// Everything that went into one item's score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub item_id: u32,
    pub item_name: String,
    pub archetype: Archetype,
    pub stats: StatVector,
    /// Nonzero weights the item was scored against
    pub weights: WeightVector,
    /// Nonzero per-domain `stat * weight` products
    pub contributions: Vec<(StatDomain, f64)>,
    pub raw_score: f64,
    pub penalties: Vec<AppliedPenalty>,
    pub final_score: f64,
}

/// Scores items for one combatant snapshot
///
/// Weights and the penalty cascade are computed once on construction. Scoring
/// only reads shared state, so one scorer can serve several threads.
pub struct ItemScorer<'a, D: GameData + ?Sized> {
    data: &'a D,
    profile: CombatantProfile,
    archetype: Archetype,
    constants: ScoringConstants,
    weights: WeightVector,
    cascade: PenaltyCascade,
}

impl<'a, D: GameData + ?Sized> ItemScorer<'a, D> {
    /// Create a scorer using the bundled constants
    pub fn new(data: &'a D, profile: CombatantProfile) -> Self {
        Self::build(data, profile, default_constants())
    }

    /// Create a scorer using custom constants
    ///
    /// Fails if any constant is negative or not finite.
    pub fn with_constants(
        data: &'a D,
        profile: CombatantProfile,
        constants: ScoringConstants,
    ) -> Result<Self, ConfigError> {
        constants.validate()?;
        Ok(Self::build(data, profile, constants))
    }

    fn build(data: &'a D, profile: CombatantProfile, constants: ScoringConstants) -> Self {
        let archetype = Archetype::for_profile(&profile);
        let weights = generate_weights(&profile, &constants);
        let cascade = PenaltyCascade::standard(&constants.penalties);
        ItemScorer {
            data,
            profile,
            archetype,
            constants,
            weights,
            cascade,
        }
    }

    /// Replace the penalty cascade
    pub fn with_cascade(mut self, cascade: PenaltyCascade) -> Self {
        self.cascade = cascade;
        self
    }

    pub fn profile(&self) -> &CombatantProfile {
        &self.profile
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }

    pub fn cascade(&self) -> &PenaltyCascade {
        &self.cascade
    }

    pub fn constants(&self) -> &ScoringConstants {
        &self.constants
    }

    /// Aggregator bound to this combatant's role and multipliers
    pub fn aggregator(&self) -> StatAggregator<'a, D> {
        StatAggregator::new(self.data, self.profile.role)
            .with_multipliers(self.constants.multipliers.clone())
    }

    /// Score an item with no enchantments
    pub fn score(&self, item_id: u32) -> Result<f64, ScoreError> {
        self.score_with_enchants(item_id, &[])
    }

    /// Score an item with enchantments applied on top
    pub fn score_with_enchants(&self, item_id: u32, enchants: &[u32]) -> Result<f64, ScoreError> {
        let item = self.item(item_id)?;
        let stats = self.collect(item, enchants)?;

        let raw = self.weights.dot(&stats);
        let score = self.cascade.apply(&PenaltyContext::new(&self.profile, item), raw);
        tracing::debug!("item {}: raw {:.3} final {:.3}", item_id, raw, score);
        Ok(score)
    }

    /// Score an item and report how the score was reached
    pub fn explain(&self, item_id: u32, enchants: &[u32]) -> Result<ScoreBreakdown, ScoreError> {
        let item = self.item(item_id)?;
        let stats = self.collect(item, enchants)?;

        let ctx = PenaltyContext::new(&self.profile, item);
        let raw_score = self.weights.dot(&stats);
        let final_score = self.cascade.apply(&ctx, raw_score);

        Ok(ScoreBreakdown {
            item_id,
            item_name: item.name.clone(),
            archetype: self.archetype,
            stats,
            weights: self.weights,
            contributions: self.weights.contributions(&stats).collect(),
            raw_score,
            penalties: self.cascade.matching(&ctx),
            final_score,
        })
    }

    /// Score several items, best first
    ///
    /// Fails on the first item that cannot be scored.
    pub fn rank(&self, item_ids: &[u32]) -> Result<Vec<(u32, f64)>, ScoreError> {
        let mut ranked = item_ids
            .iter()
            .map(|&id| self.score(id).map(|score| (id, score)))
            .collect::<Result<Vec<_>, _>>()?;
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        Ok(ranked)
    }

    fn item(&self, item_id: u32) -> Result<&'a ItemTemplate, ScoreError> {
        self.data.item(item_id).ok_or(ScoreError::UnknownItem(item_id))
    }

    fn collect(&self, item: &ItemTemplate, enchants: &[u32]) -> Result<StatVector, ScoreError> {
        let aggregator = self.aggregator();
        let mut stats = StatVector::new();
        aggregator.collect_item(item, &mut stats)?;
        for enchant_id in enchants {
            aggregator.collect_enchant(*enchant_id, &mut stats);
        }
        Ok(stats)
    }
}
