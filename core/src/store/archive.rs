use crate::prelude::StoreResult;
use crate::scene::Blip;
use crate::store::SlotStore;

/// Well-known slot holding the serialized detection list.
pub const DEFAULT_SLOT: &str = "blip-database";

/// Append-only archive of detection records over a single store slot.
///
/// Each `append` is a blocking read-modify-write of the whole list; the
/// single-threaded frame driver is the only writer, so there is no
/// concurrent-update concern to handle.
pub struct BlipArchive {
    store: Box<dyn SlotStore>,
    key: String,
}

impl BlipArchive {
    pub fn new(store: Box<dyn SlotStore>) -> Self {
        Self::with_key(store, DEFAULT_SLOT)
    }

    pub fn with_key(store: Box<dyn SlotStore>, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
        }
    }

    /// Appends one record to the persisted list.
    pub fn append(&mut self, blip: &Blip) -> StoreResult<()> {
        let mut records = self.load_all();
        records.push(blip.clone());
        let encoded = serde_json::to_string(&records)?;
        self.store.set(&self.key, &encoded)
    }

    /// Returns the persisted list in append order. An absent slot or one
    /// that fails to decode reads back as empty, never as an error.
    pub fn load_all(&self) -> Vec<Blip> {
        self.store
            .get(&self.key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Empties the slot. Drivers call this once at startup so no history
    /// leaks across sessions.
    pub fn reset(&mut self) -> StoreResult<()> {
        self.store.clear()
    }
}
