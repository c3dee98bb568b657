//! Oracle access errors.

/// Errors that occur when a required oracle is missing from the environment.
///
/// These indicate a wiring mistake in the embedding layer, not a gameplay
/// condition; gameplay-level lookup misses are `Option`s, never errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// MapOracle is not available in the environment.
    #[error("MapOracle not available")]
    MapNotAvailable,

    /// SpeciesOracle is not available in the environment.
    #[error("SpeciesOracle not available")]
    SpeciesNotAvailable,

    /// RngOracle is not available in the environment.
    #[error("RngOracle not available")]
    RngNotAvailable,

    /// The species catalog has no entries to draw a wild combatant from.
    #[error("species catalog is empty")]
    EmptyRoster,
}
