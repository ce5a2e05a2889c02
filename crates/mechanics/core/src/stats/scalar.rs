//! Generic base/modified/current-modified stat triple.

use super::state::StatState;
use super::value::StatValue;

/// A generic numeric stat with three layers:
///
/// - `base`: the permanent value, set by character progression
/// - `modified`: `base` plus the sum of active persistent buffs/debuffs
/// - `current_modified`: a further transient layer (instantaneous
///   fortify/drain) on top of `modified`
///
/// The two upper layers are tracked as absolute values but their *offsets*
/// from `base` are what the setters preserve: re-basing a stat shifts the
/// upper layers by the same delta, so an active +4 buff survives a level-up.
///
/// The internal `modified` value may go negative under heavy drains; it is
/// preserved unclamped so the offset bookkeeping stays exact, and only
/// clamped to zero when read through [`modified`](Self::modified).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalarStat<T: StatValue> {
    base: T,
    modified: T,
    current_modified: T,
}

impl<T: StatValue> ScalarStat<T> {
    /// Create a stat with all three layers equal to `base`.
    pub fn new(base: T) -> Self {
        Self {
            base,
            modified: base,
            current_modified: base,
        }
    }

    /// Create a stat with an already-applied modifier layer.
    ///
    /// `current_modified` always starts equal to `modified`.
    pub fn with_modified(base: T, modified: T) -> Self {
        Self {
            base,
            modified,
            current_modified: modified,
        }
    }

    pub fn base(&self) -> T {
        self.base
    }

    /// The modified value as consumers should see it, clamped to >= 0.
    pub fn modified(&self) -> T {
        if self.modified < T::ZERO {
            T::ZERO
        } else {
            self.modified
        }
    }

    pub fn current_modified(&self) -> T {
        self.current_modified
    }

    /// Net persistent modifier, derived and never stored independently.
    pub fn modifier(&self) -> T {
        self.modified - self.base
    }

    /// Net transient modifier on top of `modified`.
    pub fn current_modifier(&self) -> T {
        self.current_modified - self.modified
    }

    /// Re-base the stat to `value`, collapsing the modifier layer.
    ///
    /// `current_modified` shifts by the same delta, preserving any transient
    /// fortify/drain currently in effect.
    pub fn set(&mut self, value: T) {
        let diff = value - self.base;
        self.base = value;
        self.modified = value;
        self.current_modified = self.current_modified + diff;
    }

    /// Change the base, shifting both upper layers by the same delta so the
    /// existing modifier offsets are preserved.
    pub fn set_base(&mut self, value: T) {
        let diff = value - self.base;
        self.base = value;
        self.modified = self.modified + diff;
        self.current_modified = self.current_modified + diff;
    }

    /// Set the modified layer directly while keeping the implied base inside
    /// `[min, max]`.
    ///
    /// The requested `value` moves all three layers by the same delta. If
    /// that would push `base` out of range, `value` is recomputed so the
    /// base lands exactly on the violated bound; the modifier offset is
    /// preserved only insofar as the base stays in range. External callers
    /// use this to impose attribute caps while still going through the
    /// modifier pipeline.
    pub fn set_modified(&mut self, value: T, min: T, max: T) {
        let mut value = value;
        let mut diff = value - self.modified;

        if self.base + diff < min {
            value = min + (self.modified - self.base);
            diff = value - self.modified;
        } else if self.base + diff > max {
            value = max + (self.modified - self.base);
            diff = value - self.modified;
        }

        self.modified = value;
        self.base = self.base + diff;
        self.current_modified = self.current_modified + diff;
    }

    /// Set `current_modified` to an absolute value.
    pub fn set_current_modified(&mut self, value: T) {
        self.current_modified = value;
    }

    /// Replace the persistent modifier (does not accumulate).
    pub fn set_modifier(&mut self, modifier: T) {
        self.modified = self.base + modifier;
    }

    /// Replace the transient modifier (does not accumulate).
    pub fn set_current_modifier(&mut self, modifier: T) {
        self.current_modified = self.modified + modifier;
    }

    /// Write `base` and the current-modified snapshot into `state`.
    ///
    /// The persistent modifier layer is intentionally not written: buffs are
    /// re-applied by their owning effects after load.
    pub fn write_state(&self, state: &mut StatState<T>) {
        state.base = self.base;
        state.modified = self.current_modified;
    }

    /// Restore from `state`, resetting `modified` to `base`.
    pub fn read_state(&mut self, state: &StatState<T>) {
        self.base = state.base;
        self.modified = state.base;
        self.current_modified = state.modified;
    }
}

impl<T: StatValue> Default for ScalarStat<T> {
    fn default() -> Self {
        Self::new(T::ZERO)
    }
}
