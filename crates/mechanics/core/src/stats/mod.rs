//! Layered stat value types.
//!
//! Four value types, each building on the previous:
//!
//! ```text
//! [ ScalarStat<T> ]   base / modified / current-modified triple
//!      ↓
//! [ PooledStat<T> ]   + depletable `current`, bounded by the modified ceiling
//!
//! [ AttributeValue ]  base - damage + modifier + restore-modifier
//!      ↓
//! [ SkillValue ]      + fractional training progress
//! ```
//!
//! ## Principles
//!
//! 1. **Value semantics**: plain `Copy` fields owned by the actor record,
//!    no identity, no sharing
//! 2. **Total operations**: out-of-range inputs are clamped, never rejected
//! 3. **Delta bookkeeping**: buffs and drains are tracked as offsets from
//!    `base`, so they survive re-basing (level-ups, template swaps)
//! 4. **Explicit persistence**: every type writes to and reads from a
//!    [`StatState`] record; nothing else leaves the process

pub mod attribute;
pub mod pooled;
pub mod scalar;
pub mod skill;
pub mod state;
pub mod value;

// Re-export primary types
pub use attribute::AttributeValue;
pub use pooled::PooledStat;
pub use scalar::ScalarStat;
pub use skill::SkillValue;
pub use state::StatState;
pub use value::StatValue;
