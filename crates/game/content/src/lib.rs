//! Game data for the simulation core: the procedural map generator, the
//! built-in species roster, and file loaders for configuration and
//! external species tables.
//!
//! `game-content` is the data-providing collaborator; it produces oracles
//! (`TileGrid`, `Roster`) that `game-core` consumes but never constructs
//! itself.
pub mod generator;
pub mod roster;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use generator::{GeneratorParams, generate_map};
pub use roster::default_roster;
