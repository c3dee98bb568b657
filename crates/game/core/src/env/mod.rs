//! Traits describing read-only world data.
//!
//! Oracles expose the static tile layout, the species catalog, and the
//! random source. The [`Env`] aggregate bundles them so the simulation can
//! reach everything it needs without hard coupling to concrete
//! implementations.
mod error;
mod map;
mod rng;
mod roster;

pub use error::OracleError;
pub use map::{MapDimensions, MapOracle, TerrainKind, Tile, TileGrid};
pub use rng::{PcgRng, RngOracle, SeedSequence, compute_seed};
pub use roster::{Roster, SpeciesDef, SpeciesOracle};

/// Aggregates the read-only oracles required by the simulation.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, M, S, R>
where
    M: MapOracle + ?Sized,
    S: SpeciesOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    map: Option<&'a M>,
    species: Option<&'a S>,
    rng: Option<&'a R>,
}

pub type GameEnv<'a> = Env<'a, dyn MapOracle + 'a, dyn SpeciesOracle + 'a, dyn RngOracle + 'a>;

impl<'a, M, S, R> Env<'a, M, S, R>
where
    M: MapOracle + ?Sized,
    S: SpeciesOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(map: Option<&'a M>, species: Option<&'a S>, rng: Option<&'a R>) -> Self {
        Self { map, species, rng }
    }

    pub fn with_all(map: &'a M, species: &'a S, rng: &'a R) -> Self {
        Self::new(Some(map), Some(species), Some(rng))
    }

    pub fn empty() -> Self {
        Self {
            map: None,
            species: None,
            rng: None,
        }
    }

    /// Returns the MapOracle, or an error if not available.
    pub fn map(&self) -> Result<&'a M, OracleError> {
        self.map.ok_or(OracleError::MapNotAvailable)
    }

    /// Returns the SpeciesOracle, or an error if not available.
    pub fn species(&self) -> Result<&'a S, OracleError> {
        self.species.ok_or(OracleError::SpeciesNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}

impl<'a, M, S, R> Env<'a, M, S, R>
where
    M: MapOracle + 'a,
    S: SpeciesOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv`.
    pub fn as_game_env(&self) -> GameEnv<'a> {
        let map: Option<&'a dyn MapOracle> = self.map.map(|map| map as _);
        let species: Option<&'a dyn SpeciesOracle> = self.species.map(|species| species as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        Env::new(map, species, rng)
    }
}
