use crate::prelude::StoreResult;
use std::collections::HashMap;

/// String-keyed slot store backing the detection archive. `get` returning
/// `None` covers both "absent" and "unreadable"; only writes can fail.
pub trait SlotStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
    fn clear(&mut self) -> StoreResult<()>;
}

/// In-process store used by tests and the visualizer. Lives for the
/// session only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> StoreResult<()> {
        self.slots.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_sets_gets_and_clears() {
        let mut store = MemoryStore::new();
        assert!(store.get("slot").is_none());
        store.set("slot", "payload").unwrap();
        assert_eq!(store.get("slot").as_deref(), Some("payload"));
        store.clear().unwrap();
        assert!(store.get("slot").is_none());
    }
}
