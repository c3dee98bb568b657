use super::HpMeter;
use crate::env::SpeciesDef;

/// The six base stats every creature carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub sp_attack: u32,
    pub sp_defense: u32,
    pub speed: u32,
}

impl StatBlock {
    pub fn new(
        hp: u32,
        attack: u32,
        defense: u32,
        sp_attack: u32,
        sp_defense: u32,
        speed: u32,
    ) -> Self {
        Self {
            hp,
            attack,
            defense,
            sp_attack,
            sp_defense,
            speed,
        }
    }
}

/// A creature in the player's collection, as the persistence collaborator
/// stores it: species identity plus its individual level and stats.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OwnedCreature {
    pub name: String,
    pub primary_type: String,
    pub secondary_type: Option<String>,
    pub level: u32,
    pub stats: StatBlock,
}

impl OwnedCreature {
    /// A freshly caught creature at the given level, stats copied from its
    /// species definition.
    pub fn from_species(species: &SpeciesDef, level: u32) -> Self {
        Self {
            name: species.name.clone(),
            primary_type: species.primary_type.clone(),
            secondary_type: species.secondary_type.clone(),
            level,
            stats: species.stats,
        }
    }
}

/// In-battle snapshot of one creature.
///
/// Max HP is fixed from the HP stat when the snapshot is taken; the current
/// meter is what moves mutate. The snapshot lives exactly as long as the
/// battle does.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub name: String,
    pub primary_type: String,
    pub secondary_type: Option<String>,
    pub level: u32,
    pub stats: StatBlock,
    pub hp: HpMeter,
    pub guarded: bool,
    pub fainted: bool,
}

impl Combatant {
    fn new(
        name: String,
        primary_type: String,
        secondary_type: Option<String>,
        level: u32,
        stats: StatBlock,
    ) -> Self {
        Self {
            name,
            primary_type,
            secondary_type,
            level,
            stats,
            hp: HpMeter::full(stats.hp),
            guarded: false,
            fainted: false,
        }
    }

    /// Snapshot a wild encounter from its species definition.
    pub fn wild(species: &SpeciesDef, level: u32) -> Self {
        Self::new(
            species.name.clone(),
            species.primary_type.clone(),
            species.secondary_type.clone(),
            level,
            species.stats,
        )
    }

    /// Snapshot the player's chosen creature.
    pub fn from_owned(owned: &OwnedCreature) -> Self {
        Self::new(
            owned.name.clone(),
            owned.primary_type.clone(),
            owned.secondary_type.clone(),
            owned.level,
            owned.stats,
        )
    }
}
