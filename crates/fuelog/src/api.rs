//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry
//! point for all fuelog operations, whatever the client.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (parses selector strings, supplies today's date)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, no I/O and no presentation.
//!
//! ## Selectors
//!
//! [`FuelogApi::delete_entries`] takes raw strings and parses them with
//! [`crate::index::parse_selectors`]: `3`, `1-3` or an entry id. A malformed selector
//! (`0`, `5-3`) fails the whole call before anything is removed.
//!
//! ## Generic Over LogStore
//!
//! `FuelogApi<S: LogStore>` is generic over the store:
//! - Production: `FuelogApi<FileStore>`
//! - Testing: `FuelogApi<InMemoryStore>`
//!
//! API tests check dispatch and argument handling only; command logic is tested in the
//! command modules.

use crate::commands;
use crate::error::{FuelogError, Result};
use crate::index::parse_selectors;
use crate::model::EntryDraft;
use crate::store::LogStore;
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};

/// The main API facade for fuelog operations.
pub struct FuelogApi<S: LogStore> {
    store: S,
    data_dir: PathBuf,
}

impl<S: LogStore> FuelogApi<S> {
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn add_entry(&mut self, draft: &EntryDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft, today())
    }

    pub fn preview_metrics(&self, draft: &EntryDraft) -> Result<commands::CmdResult> {
        commands::metrics::run(&self.store, draft)
    }

    pub fn list_entries(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn delete_entries<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors).map_err(FuelogError::Api)?;
        if selectors.is_empty() {
            return Err(FuelogError::Api("No entries selected".to_string()));
        }
        commands::delete::run(&mut self.store, &selectors)
    }

    pub fn summary(&self) -> Result<commands::CmdResult> {
        commands::summary::run(&self.store)
    }

    pub fn generate_sample(&mut self) -> Result<commands::CmdResult> {
        commands::sample::run(&mut self.store, today())
    }

    pub fn reset(&mut self, include_settings: bool) -> Result<commands::CmdResult> {
        commands::reset::run(&mut self.store, include_settings)
    }

    pub fn settings(
        &mut self,
        action: commands::settings::SettingsAction,
    ) -> Result<commands::CmdResult> {
        commands::settings::run(&mut self.store, action)
    }

    pub fn config(&self, action: commands::config::ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
