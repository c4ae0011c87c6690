//! # Command Layer
//!
//! This module contains the **core business logic** of fuelog. Each command lives in its
//! own submodule and implements plain Rust functions over a [`LogStore`].
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Validate drafts and build entries through the Metrics Engine
//! - Resolve display indexes and selectors to entry ids
//! - Return structured [`CmdResult`] values with affected entries and messages
//! - Stay completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O** beyond the store: no stdout, stderr, or terminal concerns
//! - **Argument parsing**: That's the client's job
//! - **Exit codes**: Return `Result`, let the caller decide
//! - **Reading the clock** where it matters for results: `today` is passed in, so
//!   date defaults are testable
//!
//! ## Structured Returns
//!
//! [`CmdResult`] carries whatever the command produced:
//! - `listed_entries`: entries to display, with their display index
//! - `affected_entries`: entries created or removed by the operation
//! - `metrics`, `summary`, `settings`, `config`: command-specific payloads
//! - `messages`: leveled messages (info, success, warning, error)
//!
//! ## Testing Strategy
//!
//! **This is where most of the testing lives.** Command tests run against
//! [`crate::store::memory::InMemoryStore`] and check `CmdResult` contents, store state
//! and error cases.
//!
//! ## Command Modules
//!
//! - [`add`]: Validate a draft and append it
//! - [`metrics`]: Live metrics preview for a draft
//! - [`list`]: Sorted, indexed listing
//! - [`delete`]: Remove entries by selector
//! - [`summary`]: Dashboard aggregates and trend series
//! - [`sample`]: Replace the log with sample data
//! - [`reset`]: Clear the log, optionally the settings too
//! - [`settings`]: Show or change mirroring
//! - [`config`]: Show or change client configuration
//! - [`helpers`]: Shared utilities

use crate::config::FuelogConfig;
use crate::index::DisplayEntry;
use crate::metrics::TripMetrics;
use crate::model::Settings;
use serde::Serialize;

pub mod add;
pub mod config;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod metrics;
pub mod reset;
pub mod sample;
pub mod settings;
pub mod summary;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_entries: Vec<DisplayEntry>,
    pub affected_entries: Vec<DisplayEntry>,
    pub metrics: Option<TripMetrics>,
    pub summary: Option<summary::LogSummary>,
    pub settings: Option<Settings>,
    pub config: Option<FuelogConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_entries(mut self, entries: Vec<DisplayEntry>) -> Self {
        self.listed_entries = entries;
        self
    }

    pub fn with_affected_entries(mut self, entries: Vec<DisplayEntry>) -> Self {
        self.affected_entries = entries;
        self
    }

    pub fn with_metrics(mut self, metrics: TripMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn with_summary(mut self, summary: summary::LogSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_config(mut self, config: FuelogConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True if any message is an error.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
