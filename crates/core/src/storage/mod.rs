//! Storage module
//!
//! Key-value slot backends and the snapshot adapter that reads and writes a
//! record list to a single slot.

mod file_store;
mod memory;
mod repository;
mod snapshot;

pub use file_store::FileStorage;
pub use memory::MemoryStorage;
pub use repository::SlotStorage;
pub use snapshot::{decode, encode, load, save, Snapshot};
