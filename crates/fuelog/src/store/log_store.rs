use super::backend::StorageBackend;
use super::LogStore;
use crate::error::Result;
use crate::mirror::Mirror;
use crate::model::{FuelLogEntry, Settings};
use std::path::PathBuf;

pub struct FuelLogStore<B: StorageBackend, M: Mirror> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    mirror: M,
}

impl<B: StorageBackend, M: Mirror> FuelLogStore<B, M> {
    pub fn new(backend: B, mirror: M) -> Self {
        Self { backend, mirror }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn mirror(&self) -> &M {
        &self.mirror
    }

    fn load_or_empty(&self) -> Vec<FuelLogEntry> {
        match self.backend.load_entries() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    location = %self.backend.location().display(),
                    error = %e,
                    "log collection unreadable, treating it as empty"
                );
                Vec::new()
            }
        }
    }
}

impl<B: StorageBackend, M: Mirror> LogStore for FuelLogStore<B, M> {
    fn list(&self) -> Vec<FuelLogEntry> {
        let mut entries = self.load_or_empty();
        // Stable, so equal odometer readings keep their load order
        entries.sort_by(|a, b| b.odo_end.total_cmp(&a.odo_end));
        entries
    }

    fn append(&mut self, entry: FuelLogEntry) -> Result<()> {
        // 1. Commit locally. This alone decides the outcome.
        let mut entries = self.load_or_empty();
        entries.push(entry);
        self.backend.save_entries(&entries)?;
        tracing::debug!(count = entries.len(), "log collection committed");

        // 2. Best-effort mirror, outcome never observed
        let settings = self.settings();
        if let (Some(endpoint), Some(committed)) = (settings.mirror_endpoint(), entries.last()) {
            self.mirror.mirror(endpoint, committed);
        }

        Ok(())
    }

    fn remove(&mut self, id: &str) -> Result<()> {
        let mut entries = self.load_or_empty();
        let before = entries.len();
        entries.retain(|e| e.id != id);

        if entries.len() == before {
            tracing::debug!(id, "no entry to remove");
            return Ok(());
        }
        self.backend.save_entries(&entries)
    }

    fn replace_all(&mut self, entries: Vec<FuelLogEntry>) -> Result<()> {
        self.backend.save_entries(&entries)?;
        tracing::debug!(count = entries.len(), "log collection replaced");
        Ok(())
    }

    fn settings(&self) -> Settings {
        match self.backend.load_settings() {
            Ok(settings) => settings.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "settings unreadable, using defaults");
                Settings::default()
            }
        }
    }

    fn save_settings(&mut self, settings: &Settings) -> Result<()> {
        self.backend.save_settings(settings)
    }

    fn location(&self) -> PathBuf {
        self.backend.location()
    }
}
