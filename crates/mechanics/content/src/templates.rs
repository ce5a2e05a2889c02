//! Character templates - the static data actors are built from.

use mechanics_core::{Attribute, CharacterStats, PooledStat};

/// Base attribute block of a template, one field per [`Attribute`].
///
/// Named fields rather than an array so data files stay readable and
/// misspelled keys fail at parse time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AttributeBlock {
    pub strength: i32,
    pub intelligence: i32,
    pub willpower: i32,
    pub agility: i32,
    pub speed: i32,
    pub endurance: i32,
    pub personality: i32,
    pub luck: i32,
}

impl AttributeBlock {
    /// Uniform block, mostly useful in tests and placeholder content.
    pub const fn uniform(value: i32) -> Self {
        Self {
            strength: value,
            intelligence: value,
            willpower: value,
            agility: value,
            speed: value,
            endurance: value,
            personality: value,
            luck: value,
        }
    }

    pub const fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Intelligence => self.intelligence,
            Attribute::Willpower => self.willpower,
            Attribute::Agility => self.agility,
            Attribute::Speed => self.speed,
            Attribute::Endurance => self.endurance,
            Attribute::Personality => self.personality,
            Attribute::Luck => self.luck,
        }
    }
}

/// Static template a character's initial stat record is built from
/// (race/class data, NPC catalog entries).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CharacterTemplate {
    pub attributes: AttributeBlock,
    pub level: i32,
    pub health: f32,
    pub magicka: f32,
    pub fatigue: f32,
}

impl CharacterTemplate {
    /// Build a live stat record with full pools.
    ///
    /// Attributes are applied first; the dynamic pools are written last so
    /// the template's explicit pool sizes win over the fatigue re-base the
    /// attribute writes trigger.
    pub fn instantiate(&self) -> CharacterStats {
        let mut stats = CharacterStats::new();

        for attribute in Attribute::ALL {
            stats.set_attribute_base(attribute, self.attributes.get(attribute));
        }

        stats.set_health(PooledStat::new(self.health));
        stats.set_magicka(PooledStat::new(self.magicka));
        stats.set_fatigue(PooledStat::new(self.fatigue));
        stats.set_level(self.level);
        stats.set_needs_magicka_recalc(false);

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instantiate_yields_full_pools() {
        let template = CharacterTemplate {
            attributes: AttributeBlock::uniform(40),
            level: 3,
            health: 52.0,
            magicka: 98.0,
            fatigue: 162.0,
        };

        let stats = template.instantiate();

        assert_eq!(stats.level(), 3);
        assert_eq!(stats.health().current(), 52.0);
        assert_eq!(stats.health().modified(), 52.0);
        assert_eq!(stats.magicka().current(), 98.0);
        assert_eq!(stats.fatigue().current(), 162.0);
        assert_eq!(stats.attribute(Attribute::Luck).base(), 40);
        assert!(!stats.is_dead());
    }

    #[test]
    fn character_state_survives_serialization() {
        use mechanics_core::{CharacterState, CharacterStats};

        let template = CharacterTemplate {
            attributes: AttributeBlock::uniform(40),
            level: 2,
            health: 50.0,
            magicka: 80.0,
            fatigue: 160.0,
        };
        let mut stats = template.instantiate();

        let mut health = *stats.health();
        health.set_current(31.5, false, false);
        stats.set_health(health);

        let mut state = CharacterState::new();
        stats.write_state(&mut state);

        let encoded = ron::to_string(&state).unwrap();
        let decoded: CharacterState = ron::from_str(&encoded).unwrap();

        let mut restored = CharacterStats::new();
        restored.read_state(&decoded);
        assert_eq!(restored.health().current(), 31.5);
        assert_eq!(restored.level(), 2);
    }

    #[test]
    fn instantiate_does_not_leave_a_recalc_latch() {
        let template = CharacterTemplate {
            attributes: AttributeBlock::uniform(30),
            level: 1,
            health: 40.0,
            magicka: 60.0,
            fatigue: 120.0,
        };

        let mut stats = template.instantiate();
        assert!(!stats.needs_magicka_recalc());
    }
}
