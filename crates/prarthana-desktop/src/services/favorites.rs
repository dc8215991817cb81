//! Desktop favorites persistence backed by a JSON file in the platform
//! data directory.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use prarthana_core::favorites::{parse_favorites, FavoritesStore};
use prarthana_core::{Error, Result};

const DATA_DIR_NAME: &str = "prarthana";
const FAVORITES_FILE_NAME: &str = "favorite_prayers.json";

/// Shared handle to the favorites backend held in app state.
pub type SharedFavoritesStore = Arc<dyn FavoritesStore + Send + Sync>;

/// File-backed favorites store (`dirs` data directory).
#[derive(Debug, Clone)]
pub struct FileFavoritesStore {
    path: PathBuf,
}

impl FileFavoritesStore {
    /// Store favorites at an explicit path
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The file this store reads and writes
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Default for FileFavoritesStore {
    fn default() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(DATA_DIR_NAME).join(FAVORITES_FILE_NAME))
    }
}

impl FavoritesStore for FileFavoritesStore {
    fn load(&self) -> Result<Vec<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(parse_favorites(&raw)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(error) => Err(Error::Io(error)),
        }
    }

    fn save(&self, names: &[String]) -> Result<()> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| Error::Storage(format!("no parent directory for {:?}", self.path)))?;
        fs::create_dir_all(parent)?;

        let serialized = serde_json::to_string(names)?;
        fs::write(&self.path, serialized)?;
        Ok(())
    }
}
