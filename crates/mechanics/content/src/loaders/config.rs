//! Mechanics tuning loader.

use std::path::Path;

use mechanics_core::Tuning;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`Tuning`] from TOML files.
///
/// Missing keys fall back to the defaults, so a tuning file only needs to
/// list the constants it overrides.
pub struct TuningLoader;

impl TuningLoader {
    /// Load tuning constants from a TOML file.
    pub fn load(path: &Path) -> LoadResult<Tuning> {
        let content = read_file(path)?;

        let tuning: Tuning = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tuning TOML: {}", e))?;

        tracing::debug!(path = %path.display(), "loaded mechanics tuning");

        Ok(tuning)
    }
}
