//! Tunable mechanics constants.

/// Tuning constants consumed by the stat model.
///
/// These carry the curve parameters and caps that gameplay rules feed into
/// the mechanical transformations; balancing them is out of scope here.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tuning {
    /// Constant term of the fatigue success multiplier.
    pub fatigue_base: f32,
    /// Scale applied to the missing-fatigue fraction.
    pub fatigue_mult: f32,
    /// Lower cap passed to `set_modified` when rules adjust an attribute.
    pub attribute_min: f32,
    /// Upper cap passed to `set_modified` when rules adjust an attribute.
    pub attribute_max: f32,
}

impl Tuning {
    pub const DEFAULT_FATIGUE_BASE: f32 = 1.25;
    pub const DEFAULT_FATIGUE_MULT: f32 = 0.5;
    pub const DEFAULT_ATTRIBUTE_MIN: f32 = 0.0;
    pub const DEFAULT_ATTRIBUTE_MAX: f32 = 100.0;

    pub fn new() -> Self {
        Self {
            fatigue_base: Self::DEFAULT_FATIGUE_BASE,
            fatigue_mult: Self::DEFAULT_FATIGUE_MULT,
            attribute_min: Self::DEFAULT_ATTRIBUTE_MIN,
            attribute_max: Self::DEFAULT_ATTRIBUTE_MAX,
        }
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::new()
    }
}
