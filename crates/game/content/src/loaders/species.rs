//! Species table loader.

use std::path::Path;

use game_core::{Roster, SpeciesDef};

use crate::loaders::{LoadResult, read_file};

/// Loader for species catalogs from RON files.
///
/// The file holds a plain list of species definitions:
///
/// ```ron
/// [
///     (
///         id: 1,
///         name: "Flarepup",
///         primary_type: "Fire",
///         secondary_type: None,
///         stats: (hp: 39, attack: 52, defense: 43,
///                 sp_attack: 60, sp_defense: 50, speed: 65),
///     ),
/// ]
/// ```
pub struct SpeciesLoader;

impl SpeciesLoader {
    /// Load a species catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        let species: Vec<SpeciesDef> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse species RON: {}", e))?;

        Ok(Roster::new(species))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::SpeciesOracle;
    use std::io::Write;

    #[test]
    fn loads_a_species_table() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
    (
        id: 1,
        name: "Flarepup",
        primary_type: "Fire",
        secondary_type: None,
        stats: (hp: 39, attack: 52, defense: 43, sp_attack: 60, sp_defense: 50, speed: 65),
    ),
    (
        id: 2,
        name: "Aquatail",
        primary_type: "Water",
        secondary_type: Some("Ice"),
        stats: (hp: 44, attack: 48, defense: 65, sp_attack: 50, sp_defense: 64, speed: 43),
    ),
]"#
        )
        .unwrap();

        let roster = SpeciesLoader::load(file.path()).unwrap();
        assert_eq!(roster.species_count(), 2);
        let aquatail = roster.species_by_name("Aquatail").unwrap();
        assert_eq!(aquatail.secondary_type.as_deref(), Some("Ice"));
        assert_eq!(aquatail.stats.defense, 65);
    }

    #[test]
    fn malformed_table_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not ron at all [").unwrap();
        assert!(SpeciesLoader::load(file.path()).is_err());
    }
}
