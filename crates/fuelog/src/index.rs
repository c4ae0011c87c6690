//! # Entry Identifiers: Id vs Display Index
//!
//! Every entry carries an opaque string id, which is what the store removes by. Ids are
//! awkward to type, so clients also number the listed entries `1..N`.
//!
//! The display index is positional: it is assigned over the full canonical listing
//! (odometer end descending, see [`crate::store::LogStore::list`]), so entry `1` is always
//! the most recently driven one. It is recomputed on every listing and is never stored.
//!
//! ## Selector Grammar
//!
//! - **Index**: `N` (e.g., `1`, `12`), 1-based
//! - **Range**: `Start-End` (e.g., `2-4`), inclusive, start must be ≤ end
//! - **Id**: anything else, matched verbatim against entry ids
//!
//! **Developer Note**: When implementing list/delete commands, always use
//! [`index_entries`]. Never enumerate a list yourself.

use crate::model::FuelLogEntry;
use std::str::FromStr;

/// An entry paired with its position in the canonical listing.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayEntry {
    pub index: usize,
    pub entry: FuelLogEntry,
}

/// Assigns 1-based display indexes, keeping the given order.
///
/// Expects entries as returned by [`crate::store::LogStore::list`].
pub fn index_entries(entries: Vec<FuelLogEntry>) -> Vec<DisplayEntry> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| DisplayEntry {
            index: i + 1,
            entry,
        })
        .collect()
}

/// A user input selecting one or more entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySelector {
    Index(usize),
    Range(usize, usize),
    Id(String),
}

impl std::fmt::Display for EntrySelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntrySelector::Index(i) => write!(f, "{}", i),
            EntrySelector::Range(start, end) => write!(f, "{}-{}", start, end),
            EntrySelector::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for EntrySelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty selector".to_string());
        }

        if let Ok(index) = s.parse::<usize>() {
            return positive(index).map(EntrySelector::Index);
        }

        // Ids are uuids and contain dashes too, so only all-numeric halves make a range
        if let Some((start, end)) = s.split_once('-') {
            if let (Ok(start), Ok(end)) = (start.parse::<usize>(), end.parse::<usize>()) {
                let start = positive(start)?;
                let end = positive(end)?;
                if start > end {
                    return Err(format!("Invalid range {}: start is after end", s));
                }
                return Ok(EntrySelector::Range(start, end));
            }
        }

        Ok(EntrySelector::Id(s.to_string()))
    }
}

fn positive(index: usize) -> Result<usize, String> {
    if index == 0 {
        Err("Indexes start at 1".to_string())
    } else {
        Ok(index)
    }
}

/// Parses every input, deduplicating while preserving order.
pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<EntrySelector>, String> {
    let mut selectors: Vec<EntrySelector> = Vec::new();
    for input in inputs {
        let selector: EntrySelector = input.as_ref().parse()?;
        if !selectors.contains(&selector) {
            selectors.push(selector);
        }
    }
    Ok(selectors)
}
