//! Persistence collaborator for users and their collected creatures.
//!
//! The simulation calls the store at three well-defined points: loading
//! the owned-creature party at session start, saving a level-up, and
//! adding a freshly caught creature. Every failure is tolerated: the
//! session logs it and proceeds on in-memory state, so the player never
//! sees a hard error from here.
mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;

use game_core::OwnedCreature;

/// Identifier of a player account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct UserId(pub u32);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user#{}", self.0)
    }
}

/// A player account as the store keeps it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserRecord {
    pub id: u32,
    pub username: String,
    pub trainer_level: u32,
}

/// Errors surfaced by store implementations. Callers log these and keep
/// going; nothing downstream treats them as fatal.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store record is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// The persistence collaborator boundary.
pub trait CollectionStore: Send {
    /// Loads the user's collected creatures. A user with no saved
    /// collection yet gets an empty list, not an error.
    fn load_owned_creatures(&self, user: UserId) -> Result<Vec<OwnedCreature>, StoreError>;

    /// Records a creature's new level. Returns whether a matching creature
    /// was found and updated.
    fn save_level(
        &mut self,
        user: UserId,
        creature_name: &str,
        new_level: u32,
    ) -> Result<bool, StoreError>;

    /// Adds a caught creature to the user's collection. Returns whether
    /// the creature was stored.
    fn add_to_collection(
        &mut self,
        user: UserId,
        creature: OwnedCreature,
    ) -> Result<bool, StoreError>;
}
