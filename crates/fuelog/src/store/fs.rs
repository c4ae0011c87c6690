use super::fs_backend::FsBackend;
use super::log_store::FuelLogStore;
use crate::mirror::{HttpMirror, Mirror};
use std::path::PathBuf;

/// Production store: JSON files in `root`, mirrored over HTTP by default.
pub type FileStore<M = HttpMirror> = FuelLogStore<FsBackend, M>;

impl<M: Mirror> FuelLogStore<FsBackend, M> {
    pub fn open(root: PathBuf, mirror: M) -> Self {
        FuelLogStore::new(FsBackend::new(root), mirror)
    }
}
