//! Character attribute with asymmetric damage/restore semantics.

use super::state::StatState;

/// A character attribute (Strength, Agility, ...).
///
/// Unlike [`ScalarStat`](super::ScalarStat)'s additive modifier triple, an
/// attribute tracks damage separately from buffs so that the Restore action
/// (which cancels drains and repairs damage) stays distinct from fortify
/// effects:
///
/// - `base`: permanent value, >= 0
/// - `modifier`: net of positive and negative effect contributions
/// - `restore_modifier`: restore credit held against an active drain,
///   bounded by `-modifier` while the modifier is negative
/// - `damage`: accumulated attribute damage, bounded so the modified value
///   never goes negative through damage alone
///
/// Invariant: `modified() == max(0, base - damage + modifier +
/// restore_modifier)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeValue {
    base: i32,
    modifier: f32,
    restore_modifier: f32,
    damage: f32,
}

impl AttributeValue {
    /// Create an undamaged, unmodified attribute.
    pub fn new(base: i32) -> Self {
        Self {
            base: base.max(0),
            modifier: 0.0,
            restore_modifier: 0.0,
            damage: 0.0,
        }
    }

    /// The value consumers should see, clamped to >= 0.
    pub fn modified(&self) -> i32 {
        ((self.base as f32 - self.damage + self.modifier + self.restore_modifier) as i32).max(0)
    }

    pub fn base(&self) -> i32 {
        self.base
    }

    pub fn modifier(&self) -> f32 {
        self.modifier
    }

    pub fn restore_modifier(&self) -> f32 {
        self.restore_modifier
    }

    pub fn damage(&self) -> f32 {
        self.damage
    }

    /// Set the permanent value, clamped to >= 0.
    pub fn set_base(&mut self, base: i32) {
        self.base = base.max(0);
    }

    /// Replace the net modifier from the current positive and negative
    /// effect totals.
    ///
    /// Any restore credit larger than the new drain total is forfeited: a
    /// fresh drain must not inherit an oversized credit from an earlier,
    /// stronger one.
    pub fn set_modifier(&mut self, positive: f32, negative: f32) {
        self.modifier = positive - negative;
        if self.restore_modifier > negative {
            self.restore_modifier = negative;
        }
    }

    /// Apply attribute damage, capped so damage alone cannot drive the
    /// modified value below zero.
    pub fn take_damage(&mut self, amount: f32) {
        self.damage += amount.min(self.modified() as f32);
    }

    /// Apply a restore effect: repays damage first, then counteracts an
    /// active drain.
    ///
    /// The leftover after repaying damage feeds `restore_modifier` only
    /// while the net modifier is negative, and never past the point where
    /// the drain is fully cancelled. Restore never amplifies a buff.
    pub fn restore(&mut self, amount: f32) {
        let left_over = amount - self.damage;
        self.damage -= self.damage.min(amount);
        if self.modifier < 0.0 && left_over > 0.0 {
            self.restore_modifier += left_over;
            // only enough to cancel out the negative modifier
            if self.restore_modifier > -self.modifier {
                self.restore_modifier = -self.modifier;
            }
        }
    }

    pub fn write_state(&self, state: &mut StatState<f32>) {
        state.base = self.base as f32;
        state.modified = self.modifier;
        state.damage = self.damage;
        state.restore_modifier = self.restore_modifier;
    }

    pub fn read_state(&mut self, state: &StatState<f32>) {
        self.base = state.base as i32;
        self.modifier = state.modified;
        self.damage = state.damage;
        self.restore_modifier = state.restore_modifier;
    }
}
