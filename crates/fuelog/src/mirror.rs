//! # Remote Mirror
//!
//! After an entry has been committed locally, the store may hand a copy to a [`Mirror`]
//! for delivery to a user-configured endpoint (typically a spreadsheet web app).
//!
//! Mirroring is strictly best-effort:
//! - [`Mirror::mirror`] returns nothing. The caller never learns whether delivery worked.
//! - Failures are logged with `tracing` and otherwise dropped.
//! - The local write is the source of truth; a failed mirror is never retried.
//!
//! ## Implementations
//!
//! - [`HttpMirror`]: POSTs a form body (`action=append`, `data=<entry JSON>`) from a
//!   detached task on a tokio runtime. Tasks are tracked so a short-lived process can
//!   give them a grace period before exiting, see [`HttpMirror::drain`].
//! - [`NoMirror`]: drops everything, for clients without a runtime.

use crate::error::{FuelogError, Result};
use crate::model::FuelLogEntry;
use reqwest::Client;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio_util::task::TaskTracker;

pub const MIRROR_ACTION: &str = "append";

/// Receives copies of newly appended entries.
pub trait Mirror {
    /// Dispatch `entry` to `endpoint` without waiting for the outcome.
    fn mirror(&self, endpoint: &str, entry: &FuelLogEntry);
}

/// A mirror that discards every entry.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoMirror;

impl Mirror for NoMirror {
    fn mirror(&self, endpoint: &str, entry: &FuelLogEntry) {
        tracing::debug!(endpoint, id = %entry.id, "mirroring unavailable, skipping");
    }
}

/// Fire-and-forget HTTP mirror.
#[derive(Debug, Clone)]
pub struct HttpMirror {
    client: Client,
    runtime: Handle,
    tracker: TaskTracker,
}

impl HttpMirror {
    /// Create a mirror that spawns its requests on `runtime`.
    ///
    /// `timeout` bounds each request; a hung endpoint only ever costs a background task.
    pub fn new(runtime: Handle, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FuelogError::Mirror(e.to_string()))?;

        Ok(Self {
            client,
            runtime,
            tracker: TaskTracker::new(),
        })
    }

    /// Number of dispatched requests that have not finished yet.
    pub fn in_flight(&self) -> usize {
        self.tracker.len()
    }

    /// Wait up to `grace` for in-flight requests. Returns false if some were still running.
    ///
    /// Meant for process shutdown only; nothing on the append path waits on this.
    pub async fn drain(&self, grace: Duration) -> bool {
        self.tracker.close();
        let finished = tokio::time::timeout(grace, self.tracker.wait()).await.is_ok();
        self.tracker.reopen();
        if !finished {
            tracing::warn!(
                pending = self.tracker.len(),
                "abandoning unfinished mirror requests"
            );
        }
        finished
    }
}

impl Mirror for HttpMirror {
    fn mirror(&self, endpoint: &str, entry: &FuelLogEntry) {
        let payload = match serde_json::to_string(entry) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(id = %entry.id, error = %e, "could not encode entry for mirror");
                return;
            }
        };

        let request = self
            .client
            .post(endpoint)
            .form(&[("action", MIRROR_ACTION), ("data", payload.as_str())]);
        let endpoint = endpoint.to_string();
        let id = entry.id.clone();

        tracing::debug!(%endpoint, %id, "dispatching mirror request");
        self.tracker.spawn_on(
            async move {
                // The response body is opaque to us; only transport failures are worth noting
                match request.send().await {
                    Ok(response) => {
                        tracing::info!(%endpoint, %id, status = %response.status(), "entry mirrored")
                    }
                    Err(e) => {
                        tracing::warn!(%endpoint, %id, error = %e, "failed to mirror entry")
                    }
                }
            },
            &self.runtime,
        );
    }
}
