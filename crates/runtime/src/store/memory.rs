use std::collections::HashMap;

use game_core::OwnedCreature;

use super::{CollectionStore, StoreError, UserId};

/// In-memory store, used for tests and as the fallback when no durable
/// store is configured. Contents die with the process.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    collections: HashMap<UserId, Vec<OwnedCreature>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds a user's collection, for tests and demo sessions.
    pub fn with_collection(user: UserId, creatures: Vec<OwnedCreature>) -> Self {
        let mut store = Self::new();
        store.collections.insert(user, creatures);
        store
    }
}

impl CollectionStore for InMemoryStore {
    fn load_owned_creatures(&self, user: UserId) -> Result<Vec<OwnedCreature>, StoreError> {
        Ok(self.collections.get(&user).cloned().unwrap_or_default())
    }

    fn save_level(
        &mut self,
        user: UserId,
        creature_name: &str,
        new_level: u32,
    ) -> Result<bool, StoreError> {
        let Some(creatures) = self.collections.get_mut(&user) else {
            return Ok(false);
        };
        match creatures
            .iter_mut()
            .find(|creature| creature.name == creature_name)
        {
            Some(creature) => {
                creature.level = new_level;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn add_to_collection(
        &mut self,
        user: UserId,
        creature: OwnedCreature,
    ) -> Result<bool, StoreError> {
        self.collections.entry(user).or_default().push(creature);
        Ok(true)
    }
}
