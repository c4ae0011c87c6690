use super::backend::StorageBackend;
use crate::error::{FuelogError, Result};
use crate::model::{FuelLogEntry, Settings};
use std::cell::RefCell;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Blobs are kept as serialized JSON text, like the files `FsBackend` writes, so a test
/// can plant unreadable content with [`MemBackend::set_raw_entries`].
///
/// Uses `RefCell` for interior mutability since fuelog is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    entries: RefCell<Option<String>>,
    settings: RefCell<Option<String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Overwrite the raw entries blob, bypassing serialization.
    pub fn set_raw_entries(&self, raw: &str) {
        *self.entries.borrow_mut() = Some(raw.to_string());
    }

    /// Overwrite the raw settings blob, bypassing serialization.
    pub fn set_raw_settings(&self, raw: &str) {
        *self.settings.borrow_mut() = Some(raw.to_string());
    }

    /// The raw entries blob as last written.
    pub fn raw_entries(&self) -> Option<String> {
        self.entries.borrow().clone()
    }

    fn check_writable(&self) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(FuelogError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn load_entries(&self) -> Result<Vec<FuelLogEntry>> {
        match self.entries.borrow().as_deref() {
            Some(raw) => Ok(serde_json::from_str(raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save_entries(&self, entries: &[FuelLogEntry]) -> Result<()> {
        self.check_writable()?;
        let raw = serde_json::to_string(entries)?;
        *self.entries.borrow_mut() = Some(raw);
        Ok(())
    }

    fn load_settings(&self) -> Result<Option<Settings>> {
        match self.settings.borrow().as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.check_writable()?;
        let raw = serde_json::to_string(settings)?;
        *self.settings.borrow_mut() = Some(raw);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://fuelog")
    }
}
