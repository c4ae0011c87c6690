//! # Data Directory and Context Setup
//!
//! All state lives in a single per-user data directory:
//!
//! ```text
//! <data dir>/
//! ├── logs.json
//! ├── settings.json
//! └── config.json
//! ```
//!
//! ## Resolution Order
//!
//! 1. An explicit override (the CLI's `--data <DIR>`), used as is.
//! 2. The `FUELOG_HOME` environment variable. Tests use this to isolate state.
//! 3. The OS data directory for `com.fuelog.fuelog`, via the `directories` crate.
//!
//! The directory is created lazily, on the first write.
//!
//! ## Mirroring Needs a Runtime
//!
//! [`initialize`] takes a tokio runtime handle for the HTTP mirror. The returned
//! [`FuelogContext`] keeps a clone of the mirror so the client can
//! [`HttpMirror::drain`] it before exiting.

use crate::api::FuelogApi;
use crate::config::FuelogConfig;
use crate::error::{FuelogError, Result};
use crate::mirror::HttpMirror;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tokio::runtime::Handle;

pub const HOME_ENV_VAR: &str = "FUELOG_HOME";

pub struct FuelogContext {
    pub api: FuelogApi<FileStore>,
    pub config: FuelogConfig,
    pub mirror: HttpMirror,
}

/// Resolves the data directory, see the module docs for the order.
pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }

    if let Some(home) = std::env::var_os(HOME_ENV_VAR).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }

    ProjectDirs::from("com", "fuelog", "fuelog")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| FuelogError::Store("Could not determine a data directory".to_string()))
}

/// Builds the file-backed API for the resolved data directory.
///
/// An unreadable `config.json` falls back to defaults with a warning.
pub fn initialize(data_override: Option<PathBuf>, runtime: Handle) -> Result<FuelogContext> {
    let data_dir = resolve_data_dir(data_override)?;
    tracing::debug!(data_dir = %data_dir.display(), "using data directory");

    let config = FuelogConfig::load(&data_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config unreadable, using defaults");
        FuelogConfig::default()
    });

    let mirror = HttpMirror::new(runtime, config.mirror_timeout())?;
    let store = FileStore::open(data_dir.clone(), mirror.clone());
    let api = FuelogApi::new(store, data_dir);

    Ok(FuelogContext {
        api,
        config,
        mirror,
    })
}
