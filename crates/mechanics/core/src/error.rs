//! Error types for mechanics-core.
//!
//! The stat arithmetic itself is total: out-of-range numeric inputs are
//! clamped, never rejected. Errors only arise at the boundary where raw
//! indices from external data (save records, script arguments) are mapped
//! onto the attribute/dynamic enums.

/// Errors produced when resolving raw indices to stat identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    /// Attribute index outside `0..Attribute::COUNT`.
    #[error("attribute index {0} is out of range")]
    AttributeIndexOutOfRange(usize),

    /// Dynamic stat index outside `0..Dynamic::COUNT`.
    #[error("dynamic stat index {0} is out of range")]
    DynamicIndexOutOfRange(usize),
}
