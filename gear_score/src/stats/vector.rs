//! StatVector and WeightVector - Fixed-shape values indexed by StatDomain

use super::StatDomain;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::ops::Index;
use strum::{EnumCount, IntoEnumIterator};

/// Accumulated magnitudes for one item, one value per [`StatDomain`]
///
/// Starts at all-zero and is only ever added to during a collection pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatVector {
    values: [f64; StatDomain::COUNT],
}

impl Default for StatVector {
    fn default() -> Self {
        Self::new()
    }
}

impl StatVector {
    /// Create a new all-zero vector
    pub fn new() -> Self {
        StatVector {
            values: [0.0; StatDomain::COUNT],
        }
    }

    /// Zero every domain
    pub fn reset(&mut self) {
        self.values = [0.0; StatDomain::COUNT];
    }

    /// Accumulate into a domain
    pub fn add(&mut self, domain: StatDomain, value: f64) {
        self.values[domain.index()] += value;
    }

    /// Accumulate the same amount into several domains
    pub fn add_all(&mut self, domains: &[StatDomain], value: f64) {
        for domain in domains {
            self.add(*domain, value);
        }
    }

    pub fn get(&self, domain: StatDomain) -> f64 {
        self.values[domain.index()]
    }

    /// Iterate `(domain, value)` pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (StatDomain, f64)> + '_ {
        StatDomain::iter().map(move |d| (d, self.values[d.index()]))
    }

    /// Iterate only domains with a nonzero value
    pub fn nonzero(&self) -> impl Iterator<Item = (StatDomain, f64)> + '_ {
        self.iter().filter(|(_, v)| *v != 0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| *v == 0.0)
    }
}

impl Index<StatDomain> for StatVector {
    type Output = f64;

    fn index(&self, domain: StatDomain) -> &f64 {
        &self.values[domain.index()]
    }
}

impl Serialize for StatVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (domain, value) in self.nonzero() {
            map.serialize_entry(&domain, &value)?;
        }
        map.end()
    }
}

/// Value-per-unit for each [`StatDomain`], computed once per combatant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightVector {
    weights: [f64; StatDomain::COUNT],
}

impl Default for WeightVector {
    fn default() -> Self {
        Self::new()
    }
}

impl WeightVector {
    /// Create a new all-zero weight vector
    pub fn new() -> Self {
        WeightVector {
            weights: [0.0; StatDomain::COUNT],
        }
    }

    /// Build from a `(domain, weight)` list, summing duplicates
    pub fn from_pairs(pairs: &[(StatDomain, f64)]) -> Self {
        let mut weights = Self::new();
        weights.add_pairs(pairs);
        weights
    }

    pub fn add(&mut self, domain: StatDomain, weight: f64) {
        self.weights[domain.index()] += weight;
    }

    pub fn add_pairs(&mut self, pairs: &[(StatDomain, f64)]) {
        for (domain, weight) in pairs {
            self.add(*domain, *weight);
        }
    }

    pub fn get(&self, domain: StatDomain) -> f64 {
        self.weights[domain.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatDomain, f64)> + '_ {
        StatDomain::iter().map(move |d| (d, self.weights[d.index()]))
    }

    /// Summed per-domain products across all domains
    pub fn dot(&self, stats: &StatVector) -> f64 {
        self.contributions(stats).map(|(_, product)| product).sum()
    }

    /// Per-domain products, zero products skipped
    pub fn contributions<'a>(
        &'a self,
        stats: &'a StatVector,
    ) -> impl Iterator<Item = (StatDomain, f64)> + 'a {
        StatDomain::iter()
            .map(move |d| (d, self.weights[d.index()] * stats.get(d)))
            .filter(|(_, product)| *product != 0.0)
    }
}

impl Index<StatDomain> for WeightVector {
    type Output = f64;

    fn index(&self, domain: StatDomain) -> &f64 {
        &self.weights[domain.index()]
    }
}

impl Serialize for WeightVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (domain, weight) in self.iter().filter(|(_, w)| *w != 0.0) {
            map.serialize_entry(&domain, &weight)?;
        }
        map.end()
    }
}
