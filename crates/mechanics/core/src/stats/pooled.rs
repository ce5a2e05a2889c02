//! Depletable resource pool on top of a scalar stat.

use super::scalar::ScalarStat;
use super::state::StatState;
use super::value::StatValue;

/// A [`ScalarStat`] plus a depletable `current` value (health, magicka,
/// fatigue).
///
/// Invariant, absent the explicit override flags:
/// `ZERO <= current <= modified`. The flags exist for gameplay effects that
/// legitimately break the bounds: fortify effects may push `current` above
/// the ceiling, some drains may push it below zero during combat resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PooledStat<T: StatValue> {
    stat: ScalarStat<T>,
    current: T,
}

impl<T: StatValue> PooledStat<T> {
    /// Create a full pool: all layers and `current` equal to `base`.
    pub fn new(base: T) -> Self {
        Self {
            stat: ScalarStat::new(base),
            current: base,
        }
    }

    /// Create a pool from explicit layers and current value.
    pub fn with_modified(base: T, modified: T, current: T) -> Self {
        Self {
            stat: ScalarStat::with_modified(base, modified),
            current,
        }
    }

    pub fn base(&self) -> T {
        self.stat.base()
    }

    pub fn modified(&self) -> T {
        self.stat.modified()
    }

    pub fn current_modified(&self) -> T {
        self.stat.current_modified()
    }

    pub fn modifier(&self) -> T {
        self.stat.modifier()
    }

    pub fn current_modifier(&self) -> T {
        self.stat.current_modifier()
    }

    pub fn current(&self) -> T {
        self.current
    }

    /// Re-base the stat and refill `current` to the new value.
    pub fn set(&mut self, value: T) {
        self.stat.set(value);
        self.current = value;
    }

    /// Change the base, then clamp `current` down to the new ceiling if it
    /// now exceeds it. Never clamps up.
    pub fn set_base(&mut self, value: T) {
        self.stat.set_base(value);

        if self.current > self.stat.modified() {
            self.current = self.stat.modified();
        }
    }

    /// Set the modified layer (see [`ScalarStat::set_modified`]), then clamp
    /// `current` down to the new ceiling if it now exceeds it.
    pub fn set_modified(&mut self, value: T, min: T, max: T) {
        self.stat.set_modified(value, min, max);

        if self.current > self.stat.modified() {
            self.current = self.stat.modified();
        }
    }

    /// Set `current_modified` to an absolute value without touching
    /// `current`.
    pub fn set_current_modified(&mut self, value: T) {
        self.stat.set_current_modified(value);
    }

    /// Set the depletable value, subject to the pool bounds.
    ///
    /// Increases are accepted outright when they stay at or below the
    /// ceiling, or when `allow_above_modified` permits overshoot; if
    /// `current` is already above the ceiling the write is dropped rather
    /// than regressing it; otherwise the increase stops at the ceiling.
    /// Decreases are accepted down to zero, or further when
    /// `allow_below_zero` permits negative excursions; otherwise they stop
    /// at zero (skipping the write entirely when already at or below it).
    pub fn set_current(
        &mut self,
        value: T,
        allow_below_zero: bool,
        allow_above_modified: bool,
    ) {
        if value > self.current {
            // increase
            if value <= self.stat.modified() || allow_above_modified {
                self.current = value;
            } else if self.current > self.stat.modified() {
                // overshoot not allowed and current is already above the
                // ceiling: do nothing
            } else {
                // otherwise, only go as high as the ceiling
                self.current = self.stat.modified();
            }
        } else if value > T::ZERO || allow_below_zero {
            // allowed decrease
            self.current = value;
        } else if self.current > T::ZERO {
            // capped decrease
            self.current = T::ZERO;
        }
    }

    /// Replace the persistent modifier and shift `current` by the same
    /// delta, so a +10 fortify also raises the remaining pool by 10 subject
    /// to the usual clamp rules.
    pub fn set_modifier(&mut self, modifier: T, allow_below_zero: bool) {
        let diff = modifier - self.stat.modifier();
        self.stat.set_modifier(modifier);
        self.set_current(self.current + diff, allow_below_zero, false);
    }

    /// Replace the transient modifier and shift `current` by the same delta.
    ///
    /// Only a positive incoming modifier (an active fortify) may push
    /// `current` over the ceiling. Without this check a pool restored during
    /// a drain effect would be left with `current > modified` once the drain
    /// ends.
    pub fn set_current_modifier(&mut self, modifier: T, allow_below_zero: bool) {
        let diff = modifier - self.stat.current_modifier();
        self.stat.set_current_modifier(modifier);
        self.set_current(self.current + diff, allow_below_zero, modifier > T::ZERO);
    }

    /// Write the scalar layers plus `current` into `state`.
    pub fn write_state(&self, state: &mut StatState<T>) {
        self.stat.write_state(state);
        state.current = self.current;
    }

    /// Restore from `state` (see [`ScalarStat::read_state`]).
    pub fn read_state(&mut self, state: &StatState<T>) {
        self.stat.read_state(state);
        self.current = state.current;
    }
}

impl<T: StatValue> Default for PooledStat<T> {
    fn default() -> Self {
        Self::new(T::ZERO)
    }
}
