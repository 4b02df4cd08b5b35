//! StatAggregator - Converts an item's attributes into a StatVector
//!
//! Collection covers, in order:
//! - weapon damage as a melee or ranged DPS estimate
//! - flat armor and block
//! - stat modifier pairs (see [`dispatch`])
//! - embedded abilities, discounted by trigger kind, expanding proc triggers
//!   one level deep
//!
//! Enchantments are collected separately with [`StatAggregator::collect_enchant`].

pub mod dispatch;
pub mod special;

pub use special::{ProcBonus, SpecialCase};

use crate::config::UptimeMultipliers;
use crate::data::{
    AbilityEffect, AuraKind, EffectKind, EnchantDisplay, GameData, ItemStatKind, ItemTemplate,
    MAX_ABILITY_EFFECTS, MAX_ENCHANT_EFFECTS, MAX_ITEM_SPELLS,
};
use crate::error::ScoreError;
use crate::stats::{StatDomain, StatVector};
use crate::types::{CombatRole, SpellTrigger};

/// Collects item, ability and enchantment stats into a caller-owned [`StatVector`]
///
/// Collection is additive: collecting the same item twice into one vector
/// doubles its contribution. Reset the vector between items.
pub struct StatAggregator<'a, D: GameData + ?Sized> {
    data: &'a D,
    role: CombatRole,
    multipliers: UptimeMultipliers,
}

impl<'a, D: GameData + ?Sized> StatAggregator<'a, D> {
    /// Create an aggregator with the default uptime multipliers
    pub fn new(data: &'a D, role: CombatRole) -> Self {
        StatAggregator {
            data,
            role,
            multipliers: UptimeMultipliers::default(),
        }
    }

    pub fn with_multipliers(mut self, multipliers: UptimeMultipliers) -> Self {
        self.multipliers = multipliers;
        self
    }

    pub fn role(&self) -> CombatRole {
        self.role
    }

    /// Resolve an item id and collect it
    pub fn collect_item_id(&self, item_id: u32, stats: &mut StatVector) -> Result<(), ScoreError> {
        let item = self.data.item(item_id).ok_or(ScoreError::UnknownItem(item_id))?;
        self.collect_item(item, stats)
    }

    /// Collect one item's weapon damage, flat defenses, stats and abilities
    ///
    /// Fails without touching `stats` when a weapon has no usable speed.
    pub fn collect_item(&self, item: &ItemTemplate, stats: &mut StatVector) -> Result<(), ScoreError> {
        if item.is_weapon() {
            let dps = item.weapon_dps()?;
            let domain = if item.is_ranged_weapon() {
                StatDomain::RangedDps
            } else {
                StatDomain::MeleeDps
            };
            stats.add(domain, dps);
        }

        stats.add(StatDomain::Armor, item.armor as f64);
        stats.add(StatDomain::Block, item.block as f64);

        for stat in &item.stats {
            self.collect_item_stat(stat.kind, stat.value as f64, stats);
        }

        for spell in item.spells.iter().take(MAX_ITEM_SPELLS) {
            if spell.ability_id != 0 {
                self.collect_ability(spell.ability_id, spell.trigger, stats);
            }
        }
        Ok(())
    }

    /// Accumulate one generic stat modifier through the dispatch table
    pub fn collect_item_stat(&self, kind: ItemStatKind, value: f64, stats: &mut StatVector) {
        if let Some(domain) = dispatch::item_stat_domain(kind, self.role) {
            stats.add(domain, value);
        }
    }

    /// Collect an embedded ability; unknown ids contribute nothing
    pub fn collect_ability(&self, ability_id: u32, trigger: SpellTrigger, stats: &mut StatVector) {
        let Some(ability) = self.data.ability(ability_id) else {
            tracing::trace!("ability {} not found, skipping", ability_id);
            return;
        };

        if let Some(special) = SpecialCase::lookup(ability_id) {
            tracing::trace!("ability {} matched special case {:?}", ability_id, special);
            special.apply(self.role, stats);
            return;
        }

        let multiplier = if trigger.is_passive() {
            self.multipliers.on_equip
        } else {
            self.multipliers.triggered
        };
        for effect in ability.effects.iter().take(MAX_ABILITY_EFFECTS) {
            self.collect_effect(effect, multiplier, stats);
        }
    }

    /// Collect one effect slot, expanding a proc trigger one level deep
    pub fn collect_effect(&self, effect: &AbilityEffect, multiplier: f64, stats: &mut StatVector) {
        self.collect_effect_inner(effect, multiplier, true, stats);
    }

    fn collect_effect_inner(
        &self,
        effect: &AbilityEffect,
        multiplier: f64,
        expand_triggers: bool,
        stats: &mut StatVector,
    ) {
        if effect.kind != EffectKind::ApplyAura {
            return;
        }

        let value = effect.magnitude() * multiplier;
        match effect.aura {
            AuraKind::ModDamageDone => stats.add(StatDomain::SpellPower, value),
            AuraKind::ModAttackPower => stats.add(StatDomain::AttackPower, value),
            AuraKind::ModShieldBlockValue => stats.add(StatDomain::Block, value),
            AuraKind::ModRating => {
                for rating in effect.ratings().iter() {
                    if let Some(domain) = dispatch::rating_domain(rating, self.role) {
                        stats.add(domain, value);
                    }
                }
            }
            AuraKind::ProcTriggerSpell if expand_triggers => {
                let Some(triggered) = effect
                    .triggered_ability()
                    .and_then(|id| self.data.ability(id))
                else {
                    return;
                };
                for inner in triggered.effects.iter().take(MAX_ABILITY_EFFECTS) {
                    self.collect_effect_inner(inner, self.multipliers.triggered, false, stats);
                }
            }
            _ => {}
        }
    }

    /// Collect an enchantment's slots; unknown ids contribute nothing
    ///
    /// Each slot's linked ability is checked against the special cases first;
    /// otherwise a nonzero `Stat` slot is dispatched with its linked id read
    /// as an item stat kind.
    pub fn collect_enchant(&self, enchant_id: u32, stats: &mut StatVector) {
        let Some(enchant) = self.data.enchantment(enchant_id) else {
            tracing::trace!("enchantment {} not found, skipping", enchant_id);
            return;
        };

        for slot in enchant.slots.iter().take(MAX_ENCHANT_EFFECTS) {
            if let Some(special) = SpecialCase::lookup(slot.linked_id) {
                tracing::trace!(
                    "enchantment {} slot matched special case {:?}",
                    enchant_id,
                    special
                );
                special.apply(self.role, stats);
                continue;
            }

            if slot.display != EnchantDisplay::Stat || slot.amount == 0 {
                continue;
            }
            if let Some(kind) = ItemStatKind::from_id(slot.linked_id) {
                self.collect_item_stat(kind, slot.amount as f64, stats);
            }
        }
    }
}
