use crate::error::Result;
use crate::model::{FuelLogEntry, Settings};
use std::path::PathBuf;

/// Abstract interface for raw blob I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `FuelLogStore` handles the "what" (ordering, degradation, mirroring).
pub trait StorageBackend {
    // --- Log collection ---

    /// Load the whole entry collection in on-disk order.
    /// Returns an empty collection when nothing has been written yet.
    /// Returns Err when the blob exists but cannot be read or parsed.
    fn load_entries(&self) -> Result<Vec<FuelLogEntry>>;

    /// Replace the whole entry collection.
    /// MUST be atomic: either the new collection is durable or the old one is untouched.
    fn save_entries(&self, entries: &[FuelLogEntry]) -> Result<()>;

    // --- Settings ---

    /// Load the settings record, `None` if it was never saved.
    fn load_settings(&self) -> Result<Option<Settings>>;

    /// Replace the settings record.
    fn save_settings(&self, settings: &Settings) -> Result<()>;

    /// Where the data lives. For `FsBackend` a real directory, for `MemBackend` a virtual path.
    fn location(&self) -> PathBuf;
}
