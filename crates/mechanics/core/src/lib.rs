//! Deterministic character mechanics shared across the simulation.
//!
//! `mechanics-core` defines the canonical numeric-state model for actors:
//! layered stat values (base / modified / transient), depletable resource
//! pools, attributes with asymmetric damage/restore semantics, and skills
//! with training progress. All APIs are pure call-and-return arithmetic; the
//! combat, magic, AI and save systems mutate state exclusively through the
//! types re-exported here.
pub mod character;
pub mod config;
pub mod error;
pub mod stats;

pub use character::{Attribute, CharacterState, CharacterStats, Dynamic};
pub use config::Tuning;
pub use error::StatsError;
pub use stats::{
    AttributeValue, PooledStat, ScalarStat, SkillValue, StatState, StatValue,
};
