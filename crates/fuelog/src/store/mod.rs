//! # Storage Layer
//!
//! This module defines the storage abstraction for fuelog. The [`LogStore`] trait
//! allows the application to work with different storage backends.
//!
//! ## Two Blobs, Whole-Collection Writes
//!
//! The store keeps exactly two independent records:
//! 1. **Log collection**: every [`FuelLogEntry`], serialized as one JSON array.
//! 2. **Settings**: the [`Settings`] singleton, one JSON object.
//!
//! Every mutation is a full read-modify-write of the collection. The durability unit is
//! the whole collection, never a single entry, and backends must replace a blob
//! atomically (write a temp file, then rename).
//!
//! ## Ordering
//!
//! On-disk order is insertion order and carries no meaning. Order is imposed only by
//! [`LogStore::list`]: odometer end descending (most recently driven first), stable over
//! the load order for ties.
//!
//! ## Degrading Instead of Failing
//!
//! Reads never fail the caller:
//! - A corrupt or unreadable log collection lists as empty.
//! - Corrupt or missing settings read as [`Settings::default`].
//!
//! Both cases are logged at `warn`. Writes do report failure, since the caller has to
//! tell the user their entry was not saved.
//!
//! ## Mirroring
//!
//! `append` hands the committed entry to a [`crate::mirror::Mirror`] when the settings
//! enable it. The mirror's outcome never changes what `append` returns.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON files in a data directory, HTTP mirror.
//! - [`memory::InMemoryStore`]: For testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── logs.json       # Log collection
//! ├── settings.json   # Mirroring settings
//! └── config.json     # Client configuration (see crate::config)
//! ```

use crate::error::Result;
use crate::model::{FuelLogEntry, Settings};
use std::path::PathBuf;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod log_store;
pub mod mem_backend;
pub mod memory;

/// Abstract interface for the fuel log and its settings.
pub trait LogStore {
    /// All entries, odometer end descending. Empty on unreadable data.
    fn list(&self) -> Vec<FuelLogEntry>;

    /// Commit `entry` as the newest record, then mirror it if enabled.
    /// Errors only when the local commit failed.
    fn append(&mut self, entry: FuelLogEntry) -> Result<()>;

    /// Remove the entry with `id`. Unknown ids are a no-op.
    fn remove(&mut self, id: &str) -> Result<()>;

    /// Overwrite the whole collection.
    fn replace_all(&mut self, entries: Vec<FuelLogEntry>) -> Result<()>;

    /// Current settings, defaulting to mirroring disabled.
    fn settings(&self) -> Settings;

    /// Replace the settings record.
    fn save_settings(&mut self, settings: &Settings) -> Result<()>;

    /// Where the data lives (for display).
    fn location(&self) -> PathBuf;
}
