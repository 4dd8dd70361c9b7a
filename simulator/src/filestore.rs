use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use sweepcore::prelude::StoreResult;
use sweepcore::store::SlotStore;

/// Slot store persisted as a single JSON file of key/value strings.
/// Survives process restarts until `clear` removes the file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_map(&self) -> HashMap<String, String> {
        // Unreadable or malformed files degrade to an empty store.
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }
}

impl SlotStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_map().remove(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let mut map = self.read_map();
        map.insert(key.to_string(), value.to_string());
        let encoded = serde_json::to_string(&map)?;
        fs::write(&self.path, encoded)?;
        Ok(())
    }

    fn clear(&mut self) -> StoreResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
