//! Slot storage trait
//!
//! Defines the interface for a simple key-value persistent store.

use crate::Result;

/// A named-slot key-value store holding one text blob per key
pub trait SlotStorage {
    /// Read the raw blob stored under `key`, `None` if the slot is empty
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob stored under `key`
    ///
    /// A failed write must leave the previous blob in place.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// Clear the slot; clearing an empty slot succeeds
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: SlotStorage + ?Sized> SlotStorage for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
