//! Persisted stat record.
//!
//! One record type is shared by all four stat value types; fields a given
//! type does not use stay at their zero defaults. The record is deliberately
//! decoupled from any concrete save-file format: the save system owns the
//! container, this crate only defines what a single stat contributes to it.

use super::value::StatValue;

/// Serializable snapshot of a single stat.
///
/// Written by the `write_state`/`read_state` pair on each stat type:
/// - [`ScalarStat`](super::ScalarStat): `base` + `modified` (the
///   current-modified snapshot; the persistent modifier layer is
///   intentionally dropped on load)
/// - [`PooledStat`](super::PooledStat): additionally `current`
/// - [`AttributeValue`](super::AttributeValue): `base`, `modified` (net
///   modifier), `damage`, `restore_modifier`
/// - [`SkillValue`](super::SkillValue): additionally `progress`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatState<T: StatValue> {
    pub base: T,
    /// "mod" snapshot: current-modified for scalar/pooled stats, the net
    /// modifier for attributes and skills.
    pub modified: T,
    pub current: T,
    pub damage: f32,
    pub restore_modifier: f32,
    pub progress: f32,
}

impl<T: StatValue> Default for StatState<T> {
    fn default() -> Self {
        Self {
            base: T::ZERO,
            modified: T::ZERO,
            current: T::ZERO,
            damage: 0.0,
            restore_modifier: 0.0,
            progress: 0.0,
        }
    }
}

impl<T: StatValue> StatState<T> {
    /// Create a zeroed record.
    pub fn new() -> Self {
        Self::default()
    }
}
