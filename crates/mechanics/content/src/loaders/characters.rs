//! Character catalog loader.
//!
//! Loads character templates (player classes, NPC archetypes) from RON files.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::templates::CharacterTemplate;

/// Loader for the character template catalog from RON files.
///
/// RON format: `Vec<(String, CharacterTemplate)>`, keyed by template id.
pub struct CharacterLoader;

impl CharacterLoader {
    /// Load a character catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<(String, CharacterTemplate)>> {
        let content = read_file(path)?;

        let templates: Vec<(String, CharacterTemplate)> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse character catalog RON: {}", e))?;

        tracing::debug!(
            count = templates.len(),
            path = %path.display(),
            "loaded character catalog"
        );

        Ok(templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use mechanics_core::Attribute;

    const CATALOG: &str = r#"[
    (
        "guard",
        (
            attributes: (
                strength: 50,
                intelligence: 30,
                willpower: 40,
                agility: 40,
                speed: 40,
                endurance: 50,
                personality: 30,
                luck: 40,
            ),
            level: 5,
            health: 72.0,
            magicka: 60.0,
            fatigue: 180.0,
        ),
    ),
    (
        "apprentice",
        (
            attributes: (
                strength: 30,
                intelligence: 50,
                willpower: 50,
                agility: 35,
                speed: 40,
                endurance: 30,
                personality: 40,
                luck: 40,
            ),
            level: 1,
            health: 38.0,
            magicka: 100.0,
            fatigue: 145.0,
        ),
    ),
]"#;

    #[test]
    fn loads_catalog_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let catalog = CharacterLoader::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);

        let (id, guard) = &catalog[0];
        assert_eq!(id, "guard");
        assert_eq!(guard.attributes.strength, 50);

        let stats = guard.instantiate();
        assert_eq!(stats.attribute(Attribute::Endurance).base(), 50);
        assert_eq!(stats.health().current(), 72.0);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CharacterLoader::load(&dir.path().join("nope.ron")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[(\"broken\", ()]").unwrap();

        let err = CharacterLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("character catalog"));
    }
}
