//! Skill value: an attribute plus training progress.

use super::attribute::AttributeValue;
use super::state::StatState;

/// A trainable skill.
///
/// Shares all of [`AttributeValue`]'s damage/restore semantics and adds a
/// fractional `progress` counter accumulating toward the next rank. Rank-up
/// thresholds and curves belong to the progression system, not this model.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillValue {
    value: AttributeValue,
    progress: f32,
}

impl SkillValue {
    /// Create a skill at `base` with no progress toward the next rank.
    pub fn new(base: i32) -> Self {
        Self {
            value: AttributeValue::new(base),
            progress: 0.0,
        }
    }

    pub fn base(&self) -> i32 {
        self.value.base()
    }

    pub fn modified(&self) -> i32 {
        self.value.modified()
    }

    pub fn modifier(&self) -> f32 {
        self.value.modifier()
    }

    pub fn restore_modifier(&self) -> f32 {
        self.value.restore_modifier()
    }

    pub fn damage(&self) -> f32 {
        self.value.damage()
    }

    pub fn set_base(&mut self, base: i32) {
        self.value.set_base(base);
    }

    pub fn set_modifier(&mut self, positive: f32, negative: f32) {
        self.value.set_modifier(positive, negative);
    }

    pub fn take_damage(&mut self, amount: f32) {
        self.value.take_damage(amount);
    }

    pub fn restore(&mut self, amount: f32) {
        self.value.restore(amount);
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn set_progress(&mut self, progress: f32) {
        self.progress = progress;
    }

    pub fn write_state(&self, state: &mut StatState<f32>) {
        self.value.write_state(state);
        state.progress = self.progress;
    }

    pub fn read_state(&mut self, state: &StatState<f32>) {
        self.value.read_state(state);
        self.progress = state.progress;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delegates_attribute_semantics() {
        let mut skill = SkillValue::new(30);
        skill.set_modifier(0.0, 5.0);
        skill.take_damage(10.0);
        skill.restore(15.0);

        assert_eq!(skill.damage(), 0.0);
        assert_eq!(skill.restore_modifier(), 5.0);
        assert_eq!(skill.modified(), 30);
    }

    #[test]
    fn progress_is_independent_of_the_value() {
        let mut skill = SkillValue::new(30);
        skill.set_progress(0.75);
        skill.take_damage(10.0);
        assert_eq!(skill.progress(), 0.75);
    }

    #[test]
    fn state_round_trip_includes_progress() {
        let mut skill = SkillValue::new(30);
        skill.set_modifier(4.0, 0.0);
        skill.set_progress(0.4);

        let mut state = StatState::new();
        skill.write_state(&mut state);

        let mut restored = SkillValue::default();
        restored.read_state(&state);
        assert_eq!(restored.progress(), 0.4);
        assert_eq!(restored.modifier(), 4.0);
        assert_eq!(restored, skill);
    }
}
