//! # Fuelog
//!
//! A personal fuel logbook. Each refuel is recorded with its odometer readings, from which
//! the trip distance and two efficiency figures are derived: distance per litre and
//! distance per unit of currency. Entries are kept locally and can optionally be mirrored
//! to a remote endpoint on a best-effort basis.
//!
//! ## Architecture
//!
//! The crate is layered, each layer depending only on the one below:
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  UI client (fuelog-cli)       │  parsing, rendering, exit codes
//! ├──────────────────────────────┤
//! │  api::FuelogApi               │  thin facade, selector parsing
//! ├──────────────────────────────┤
//! │  commands::*                  │  business logic, returns CmdResult
//! ├──────────────────────────────┤
//! │  store::LogStore              │  persistence, ordering, mirroring
//! └──────────────────────────────┘
//! ```
//!
//! The pure pieces sit beside the layers:
//! - [`metrics`]: the Metrics Engine, distance and efficiency computation
//! - [`model`]: entry and settings records, draft validation
//! - [`index`]: display indexes and selectors
//! - [`mirror`]: best-effort remote delivery
//!
//! ## Clients
//!
//! Clients build a context with [`init::initialize`] and talk only to
//! [`api::FuelogApi`]. Every API call returns structured data
//! ([`commands::CmdResult`]); nothing in this crate prints.
//!
//! ## Testing
//!
//! Command and API logic is tested against [`store::memory::InMemoryStore`]. The file
//! backend and the HTTP mirror have their own integration tests under `tests/`.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod metrics;
pub mod mirror;
pub mod model;
pub mod store;
