pub mod archive;
pub mod slot;

pub use archive::{BlipArchive, DEFAULT_SLOT};
pub use slot::{MemoryStore, SlotStore};
