//! Data-driven character content and loaders.
//!
//! This crate houses the static side of the stat model and the loaders that
//! read it from data files:
//! - Character templates (race/class base stat blocks, data-driven via RON)
//! - Mechanics tuning constants (data-driven via TOML)
//!
//! Content is consumed once at actor construction (or world load) and never
//! appears in live game state; the instantiated [`CharacterStats`] records
//! are what the simulation mutates afterwards.
//!
//! All loaders use mechanics-core types directly with serde.
//!
//! [`CharacterStats`]: mechanics_core::CharacterStats

pub mod loaders;
pub mod templates;

pub use loaders::{CharacterLoader, LoadResult, TuningLoader};
pub use templates::{AttributeBlock, CharacterTemplate};
