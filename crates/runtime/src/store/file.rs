use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use game_core::OwnedCreature;
use tracing::debug;

use super::{CollectionStore, StoreError, UserId, UserRecord};

/// One user's save file on disk.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
struct SaveFile {
    user: UserRecord,
    saved_at: DateTime<Utc>,
    creatures: Vec<OwnedCreature>,
}

/// JSON-file store: one save file per user under a data directory.
///
/// This is the repo's durable collaborator stand-in; a deployment with a
/// real database would implement [`CollectionStore`] against that instead.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted in the platform data directory, falling back to the
    /// current directory when the platform offers none.
    pub fn in_default_location() -> Self {
        let root = directories::ProjectDirs::from("", "", "wildgrove")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".wildgrove"));
        Self::new(root)
    }

    fn save_path(&self, user: UserId) -> PathBuf {
        self.root.join(format!("user_{}.json", user.0))
    }

    fn read_save(&self, user: UserId) -> Result<Option<SaveFile>, StoreError> {
        let path = self.save_path(user);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn write_save(&self, user: UserId, creatures: Vec<OwnedCreature>) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root)?;
        // Keep the existing account record across writes; first write
        // creates a default one.
        let record = self
            .read_save(user)?
            .map(|save| save.user)
            .unwrap_or_else(|| UserRecord {
                id: user.0,
                username: format!("player-{}", user.0),
                trainer_level: 1,
            });
        let save = SaveFile {
            user: record,
            saved_at: Utc::now(),
            creatures,
        };
        let path = self.save_path(user);
        fs::write(&path, serde_json::to_string_pretty(&save)?)?;
        debug!(path = %path.display(), "wrote save file");
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl CollectionStore for JsonFileStore {
    fn load_owned_creatures(&self, user: UserId) -> Result<Vec<OwnedCreature>, StoreError> {
        Ok(self
            .read_save(user)?
            .map(|save| save.creatures)
            .unwrap_or_default())
    }

    fn save_level(
        &mut self,
        user: UserId,
        creature_name: &str,
        new_level: u32,
    ) -> Result<bool, StoreError> {
        let mut creatures = self.load_owned_creatures(user)?;
        let Some(creature) = creatures
            .iter_mut()
            .find(|creature| creature.name == creature_name)
        else {
            return Ok(false);
        };
        creature.level = new_level;
        self.write_save(user, creatures)?;
        Ok(true)
    }

    fn add_to_collection(
        &mut self,
        user: UserId,
        creature: OwnedCreature,
    ) -> Result<bool, StoreError> {
        let mut creatures = self.load_owned_creatures(user)?;
        creatures.push(creature);
        self.write_save(user, creatures)?;
        Ok(true)
    }
}
