/// Runtime errors.
///
/// Only session construction can fail; everything after that is tolerant.
/// Collaborator failures are logged and the simulation continues on
/// in-memory state.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RuntimeError {
    /// The species roster has no entries; battles could never be set up.
    #[error("species roster is empty")]
    EmptyRoster,

    /// The generated map has no walkable tile to place the avatar on.
    #[error("map has no walkable spawn tile")]
    NoSpawnPoint,
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
