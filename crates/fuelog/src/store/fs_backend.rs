use super::backend::StorageBackend;
use crate::error::{FuelogError, Result};
use crate::model::{FuelLogEntry, Settings};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const LOGS_FILE: &str = "logs.json";
pub const SETTINGS_FILE: &str = "settings.json";

/// Filesystem backend: one JSON file per blob inside a data directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(FuelogError::Io)?;
        }
        Ok(())
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let path = self.root.join(name);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(FuelogError::Io)?;
        let value = serde_json::from_str(&content).map_err(FuelogError::Serialization)?;
        Ok(Some(value))
    }

    fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<()> {
        self.ensure_dir()?;

        let content = serde_json::to_string_pretty(value).map_err(FuelogError::Serialization)?;

        // Atomic write
        let stem = name.trim_end_matches(".json");
        let tmp_file = self.root.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(FuelogError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, self.root.join(name)) {
            let _ = fs::remove_file(&tmp_file);
            return Err(FuelogError::Io(e));
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_entries(&self) -> Result<Vec<FuelLogEntry>> {
        Ok(self.read_json(LOGS_FILE)?.unwrap_or_default())
    }

    fn save_entries(&self, entries: &[FuelLogEntry]) -> Result<()> {
        self.write_json(LOGS_FILE, entries)
    }

    fn load_settings(&self) -> Result<Option<Settings>> {
        self.read_json(SETTINGS_FILE)
    }

    fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.write_json(SETTINGS_FILE, settings)
    }

    fn location(&self) -> PathBuf {
        self.root.clone()
    }
}
