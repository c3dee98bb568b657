use crate::state::StatBlock;

/// Species oracle exposing the catalog of wild creatures.
///
/// Battle setup draws a random entry; the collection flow looks species up
/// by name when rebuilding owned creatures.
pub trait SpeciesOracle: Send + Sync {
    fn species_count(&self) -> usize;
    fn species_at(&self, index: usize) -> Option<&SpeciesDef>;

    fn species_by_name(&self, name: &str) -> Option<&SpeciesDef> {
        (0..self.species_count())
            .filter_map(|index| self.species_at(index))
            .find(|species| species.name == name)
    }
}

/// Catalog entry for one species: identity, typing, and base stats.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesDef {
    pub id: u16,
    pub name: String,
    pub primary_type: String,
    pub secondary_type: Option<String>,
    pub stats: StatBlock,
}

impl SpeciesDef {
    pub fn new(
        id: u16,
        name: impl Into<String>,
        primary_type: impl Into<String>,
        secondary_type: Option<&str>,
        stats: StatBlock,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            primary_type: primary_type.into(),
            secondary_type: secondary_type.map(str::to_owned),
            stats,
        }
    }
}

/// Concrete in-memory species catalog.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    species: Vec<SpeciesDef>,
}

impl Roster {
    pub fn new(species: Vec<SpeciesDef>) -> Self {
        Self { species }
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

impl SpeciesOracle for Roster {
    fn species_count(&self) -> usize {
        self.species.len()
    }

    fn species_at(&self, index: usize) -> Option<&SpeciesDef> {
        self.species.get(index)
    }
}
