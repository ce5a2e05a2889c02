//! Character stat aggregation - the actor-owned stat record.
//!
//! Combines the eight attributes with the three dynamic pools and the small
//! amount of bookkeeping that hangs off them (level, death latches, the
//! magicka-recalculation latch). Combat, magic and AI mutate stats through
//! this type; they never hold references into it.

use crate::config::Tuning;
use crate::error::StatsError;
use crate::stats::{AttributeValue, PooledStat, StatState};

/// The eight character attributes.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Attribute {
    Strength,
    Intelligence,
    Willpower,
    Agility,
    Speed,
    Endurance,
    Personality,
    Luck,
}

impl Attribute {
    pub const COUNT: usize = 8;

    pub const ALL: [Attribute; Self::COUNT] = [
        Attribute::Strength,
        Attribute::Intelligence,
        Attribute::Willpower,
        Attribute::Agility,
        Attribute::Speed,
        Attribute::Endurance,
        Attribute::Personality,
        Attribute::Luck,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Resolve a raw index from external data.
    pub fn from_index(index: usize) -> Result<Self, StatsError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(StatsError::AttributeIndexOutOfRange(index))
    }
}

/// The three depletable resource pools.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Dynamic {
    Health,
    Magicka,
    Fatigue,
}

impl Dynamic {
    pub const COUNT: usize = 3;

    pub const ALL: [Dynamic; Self::COUNT] = [Dynamic::Health, Dynamic::Magicka, Dynamic::Fatigue];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Resolve a raw index from external data.
    pub fn from_index(index: usize) -> Result<Self, StatsError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(StatsError::DynamicIndexOutOfRange(index))
    }
}

/// Complete per-actor stat state.
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterStats {
    attributes: [AttributeValue; Attribute::COUNT],
    dynamics: [PooledStat<f32>; Dynamic::COUNT],
    level: i32,
    dead: bool,
    died: bool,
    recalc_magicka: bool,
}

impl CharacterStats {
    pub fn new() -> Self {
        Self {
            attributes: [AttributeValue::default(); Attribute::COUNT],
            dynamics: [PooledStat::default(); Dynamic::COUNT],
            level: 0,
            dead: false,
            died: false,
            recalc_magicka: false,
        }
    }

    pub fn attribute(&self, attribute: Attribute) -> &AttributeValue {
        &self.attributes[attribute.index()]
    }

    /// Set an attribute's base value, keeping its modifiers.
    pub fn set_attribute_base(&mut self, attribute: Attribute, base: i32) {
        let mut value = self.attributes[attribute.index()];
        value.set_base(base);
        self.set_attribute(attribute, value);
    }

    /// Replace an attribute wholesale.
    ///
    /// Intelligence changes flag the magicka pool for recalculation by the
    /// magic system. Changes to any fatigue-governing attribute re-base the
    /// fatigue pool to the new attribute sum while preserving the
    /// current-to-base fill ratio.
    pub fn set_attribute(&mut self, attribute: Attribute, value: AttributeValue) {
        if value == self.attributes[attribute.index()] {
            return;
        }
        self.attributes[attribute.index()] = value;

        match attribute {
            Attribute::Intelligence => self.recalc_magicka = true,
            Attribute::Strength
            | Attribute::Willpower
            | Attribute::Agility
            | Attribute::Endurance => self.rebase_fatigue(),
            _ => {}
        }
    }

    fn rebase_fatigue(&mut self) {
        let sum = (self.attribute(Attribute::Strength).modified()
            + self.attribute(Attribute::Willpower).modified()
            + self.attribute(Attribute::Agility).modified()
            + self.attribute(Attribute::Endurance).modified()) as f32;

        let mut fatigue = self.dynamics[Dynamic::Fatigue.index()];
        let diff = sum - fatigue.base();
        let ratio = if fatigue.base() > 0.0 {
            fatigue.current() / fatigue.base()
        } else {
            1.0
        };

        fatigue.set_modified(fatigue.modified() + diff, 0.0, f32::MAX);
        fatigue.set_current(fatigue.base() * ratio, false, false);
        self.set_dynamic(Dynamic::Fatigue, fatigue);
    }

    pub fn dynamic(&self, dynamic: Dynamic) -> &PooledStat<f32> {
        &self.dynamics[dynamic.index()]
    }

    pub fn health(&self) -> &PooledStat<f32> {
        self.dynamic(Dynamic::Health)
    }

    pub fn magicka(&self) -> &PooledStat<f32> {
        self.dynamic(Dynamic::Magicka)
    }

    pub fn fatigue(&self) -> &PooledStat<f32> {
        self.dynamic(Dynamic::Fatigue)
    }

    /// Replace a dynamic pool wholesale.
    ///
    /// Writing a health pool whose current value has fallen below 1 marks
    /// the character dead and zeroes the pool's modifier layers and current
    /// value, so an expiring drain cannot posthumously revive it.
    pub fn set_dynamic(&mut self, dynamic: Dynamic, value: PooledStat<f32>) {
        self.dynamics[dynamic.index()] = value;

        if dynamic == Dynamic::Health && self.dynamics[dynamic.index()].current() < 1.0 {
            self.dead = true;

            let health = &mut self.dynamics[dynamic.index()];
            health.set_modifier(0.0, false);
            health.set_current_modifier(0.0, false);
            health.set_current(0.0, false, false);
        }
    }

    pub fn set_health(&mut self, value: PooledStat<f32>) {
        self.set_dynamic(Dynamic::Health, value);
    }

    pub fn set_magicka(&mut self, value: PooledStat<f32>) {
        self.set_dynamic(Dynamic::Magicka, value);
    }

    pub fn set_fatigue(&mut self, value: PooledStat<f32>) {
        self.set_dynamic(Dynamic::Fatigue, value);
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn set_level(&mut self, level: i32) {
        self.level = level;
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Latch set by the simulation once a death has been observed, so
    /// one-shot reactions (quest triggers, loot drops) fire exactly once.
    pub fn notify_died(&mut self) {
        self.died = true;
    }

    pub fn has_died(&self) -> bool {
        self.died
    }

    pub fn clear_has_died(&mut self) {
        self.died = false;
    }

    /// Bring a dead character back with a full health pool.
    pub fn resurrect(&mut self) {
        if !self.dead {
            return;
        }

        let mut health = self.dynamics[Dynamic::Health.index()];
        if health.modified() < 1.0 {
            health.set_modified(1.0, 0.0, f32::MAX);
        }
        health.set_current(health.modified(), false, false);
        self.dynamics[Dynamic::Health.index()] = health;
        self.dead = false;
    }

    /// Consume the magicka-recalculation latch.
    ///
    /// Returns true exactly once after an Intelligence change (or an
    /// explicit request) until the latch is set again. The magicka formula
    /// itself belongs to the magic system.
    pub fn needs_magicka_recalc(&mut self) -> bool {
        if self.recalc_magicka {
            self.recalc_magicka = false;
            return true;
        }
        false
    }

    pub fn set_needs_magicka_recalc(&mut self, value: bool) {
        self.recalc_magicka = value;
    }

    /// Success multiplier derived from the remaining fatigue fraction.
    ///
    /// `base - mult * (1 - current/max)`; an empty ceiling counts as fully
    /// rested so degenerate pools never zero out action checks.
    pub fn fatigue_term(&self, tuning: &Tuning) -> f32 {
        let max = self.fatigue().modified();
        let current = self.fatigue().current();

        let normalized = if max.floor() == 0.0 {
            1.0
        } else {
            (current / max).max(0.0)
        };

        tuning.fatigue_base - tuning.fatigue_mult * (1.0 - normalized)
    }

    pub fn write_state(&self, state: &mut CharacterState) {
        for (attribute, record) in self.attributes.iter().zip(state.attributes.iter_mut()) {
            attribute.write_state(record);
        }
        for (dynamic, record) in self.dynamics.iter().zip(state.dynamics.iter_mut()) {
            dynamic.write_state(record);
        }

        state.level = self.level;
        state.dead = self.dead;
        state.died = self.died;
        state.recalc_magicka = self.recalc_magicka;
    }

    pub fn read_state(&mut self, state: &CharacterState) {
        for (attribute, record) in self.attributes.iter_mut().zip(state.attributes.iter()) {
            attribute.read_state(record);
        }
        for (dynamic, record) in self.dynamics.iter_mut().zip(state.dynamics.iter()) {
            dynamic.read_state(record);
        }

        self.level = state.level;
        self.dead = state.dead;
        self.died = state.died;
        self.recalc_magicka = state.recalc_magicka;
    }
}

impl Default for CharacterStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable snapshot of a full [`CharacterStats`] record.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CharacterState {
    pub attributes: [StatState<f32>; Attribute::COUNT],
    pub dynamics: [StatState<f32>; Dynamic::COUNT],
    pub level: i32,
    pub dead: bool,
    pub died: bool,
    pub recalc_magicka: bool,
}

impl Default for CharacterState {
    fn default() -> Self {
        Self {
            attributes: [StatState::default(); Attribute::COUNT],
            dynamics: [StatState::default(); Dynamic::COUNT],
            level: 0,
            dead: false,
            died: false,
            recalc_magicka: false,
        }
    }
}

impl CharacterState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character() -> CharacterStats {
        let mut stats = CharacterStats::new();
        for attribute in Attribute::ALL {
            stats.set_attribute_base(attribute, 40);
        }
        stats.set_health(PooledStat::new(50.0));
        stats.set_magicka(PooledStat::new(80.0));
        stats.set_fatigue(PooledStat::new(160.0));
        stats.set_level(1);
        // construction latched a recalc via the Intelligence write
        stats.set_needs_magicka_recalc(false);
        stats
    }

    #[test]
    fn attribute_index_resolution() {
        assert_eq!(Attribute::from_index(5), Ok(Attribute::Endurance));
        assert_eq!(
            Attribute::from_index(8),
            Err(StatsError::AttributeIndexOutOfRange(8))
        );
        assert_eq!(
            Dynamic::from_index(3),
            Err(StatsError::DynamicIndexOutOfRange(3))
        );
    }

    #[test]
    fn attribute_names_parse_case_insensitively() {
        assert_eq!("strength".parse(), Ok(Attribute::Strength));
        assert_eq!("Luck".parse(), Ok(Attribute::Luck));
        assert_eq!(Dynamic::Magicka.to_string(), "magicka");
    }

    #[test]
    fn endurance_change_rebases_fatigue_preserving_fill_ratio() {
        let mut stats = character();

        // drain the pool to half before the attribute change
        let mut fatigue = *stats.fatigue();
        fatigue.set_current(80.0, false, false);
        stats.set_fatigue(fatigue);

        stats.set_attribute_base(Attribute::Endurance, 60);

        // governing sum went from 160 to 180
        assert_eq!(stats.fatigue().base(), 180.0);
        assert_eq!(stats.fatigue().current(), 90.0);
    }

    #[test]
    fn luck_change_leaves_fatigue_alone() {
        let mut stats = character();
        stats.set_attribute_base(Attribute::Luck, 90);
        assert_eq!(stats.fatigue().base(), 160.0);
    }

    #[test]
    fn intelligence_change_latches_magicka_recalc_once() {
        let mut stats = character();
        stats.set_attribute_base(Attribute::Intelligence, 55);

        assert!(stats.needs_magicka_recalc());
        assert!(!stats.needs_magicka_recalc());
    }

    #[test]
    fn redundant_attribute_write_does_not_latch() {
        let mut stats = character();
        let unchanged = *stats.attribute(Attribute::Intelligence);
        stats.set_attribute(Attribute::Intelligence, unchanged);
        assert!(!stats.needs_magicka_recalc());
    }

    #[test]
    fn health_below_one_marks_death_and_zeroes_the_pool() {
        let mut stats = character();

        let mut health = *stats.health();
        health.set_modifier(5.0, false); // an active fortify
        stats.set_health(health);

        let mut health = *stats.health();
        health.set_current(0.5, false, false);
        stats.set_health(health);

        assert!(stats.is_dead());
        assert_eq!(stats.health().current(), 0.0);
        assert_eq!(stats.health().modifier(), 0.0);
        assert_eq!(stats.health().current_modifier(), 0.0);
    }

    #[test]
    fn resurrect_refills_health_and_clears_death() {
        let mut stats = character();

        let mut health = *stats.health();
        health.set_current(0.0, false, false);
        stats.set_health(health);
        assert!(stats.is_dead());

        stats.resurrect();
        assert!(!stats.is_dead());
        assert_eq!(stats.health().current(), stats.health().modified());
        assert!(stats.health().current() >= 1.0);
    }

    #[test]
    fn fatigue_term_spans_the_tuned_range() {
        let tuning = Tuning::default();
        let mut stats = character();

        assert_eq!(stats.fatigue_term(&tuning), tuning.fatigue_base);

        let mut fatigue = *stats.fatigue();
        fatigue.set_current(0.0, false, false);
        stats.set_fatigue(fatigue);
        assert_eq!(
            stats.fatigue_term(&tuning),
            tuning.fatigue_base - tuning.fatigue_mult
        );
    }

    #[test]
    fn fatigue_term_treats_empty_ceiling_as_rested() {
        let tuning = Tuning::default();
        let mut stats = character();
        stats.set_fatigue(PooledStat::new(0.0));
        assert_eq!(stats.fatigue_term(&tuning), tuning.fatigue_base);
    }

    #[test]
    fn state_round_trip_restores_pools_and_latches() {
        let mut stats = character();
        stats.set_attribute_base(Attribute::Strength, 60);

        let mut health = *stats.health();
        health.set_current(health.current() - 12.0, false, false);
        stats.set_health(health);
        stats.notify_died();

        let mut state = CharacterState::new();
        stats.write_state(&mut state);

        let mut restored = CharacterStats::new();
        restored.read_state(&state);

        assert_eq!(restored.level(), 1);
        assert!(restored.has_died());
        assert_eq!(restored.health().current(), stats.health().current());
        assert_eq!(
            restored.attribute(Attribute::Strength).base(),
            stats.attribute(Attribute::Strength).base()
        );
    }
}
