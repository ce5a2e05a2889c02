//! Numeric bound shared by the generic stat containers.
//!
//! [`ScalarStat`](super::ScalarStat) and [`PooledStat`](super::PooledStat)
//! hold the same logic for integer stats (attribute caps, AI ratings) and
//! floating-point stats (resource pools). Rather than duplicating that logic
//! per numeric type, both are written once against this trait.

use core::ops::{Add, Sub};

/// Numeric types a stat can be parameterized over.
///
/// The stat containers only ever compare, add and subtract values, so the
/// bound is deliberately minimal: ordered, subtractable, and comparable to
/// zero. No division, no overflow-sensitive widening.
pub trait StatValue:
    Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self>
{
    /// Additive identity for this numeric type.
    const ZERO: Self;
}

impl StatValue for i32 {
    const ZERO: Self = 0;
}

impl StatValue for f32 {
    const ZERO: Self = 0.0;
}
