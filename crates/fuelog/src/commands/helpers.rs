use crate::index::{index_entries, DisplayEntry, EntrySelector};
use crate::store::LogStore;

pub fn indexed_entries<S: LogStore>(store: &S) -> Vec<DisplayEntry> {
    index_entries(store.list())
}

/// The odometer reading a new trip continues from: the end of the first listed entry,
/// or 0 for an empty log.
pub fn last_odometer<S: LogStore>(store: &S) -> f64 {
    store.list().first().map(|e| e.odo_end).unwrap_or(0.0)
}

/// Outcome of matching selectors against the current listing.
#[derive(Debug, Default)]
pub struct Resolved {
    /// Matched entries, deduplicated, in selector order.
    pub entries: Vec<DisplayEntry>,
    /// Selectors that matched nothing. A range past the listing is reported as one span.
    pub missing: Vec<String>,
}

pub fn resolve_selectors(indexed: &[DisplayEntry], selectors: &[EntrySelector]) -> Resolved {
    fn push(found: &DisplayEntry, resolved: &mut Resolved) {
        if !resolved.entries.iter().any(|e| e.entry.id == found.entry.id) {
            resolved.entries.push(found.clone());
        }
    }

    let mut resolved = Resolved::default();

    for selector in selectors {
        match selector {
            EntrySelector::Index(index) => match indexed.iter().find(|e| e.index == *index) {
                Some(found) => push(found, &mut resolved),
                None => resolved.missing.push(index.to_string()),
            },
            EntrySelector::Range(start, end) => {
                for found in indexed.iter().filter(|e| (*start..=*end).contains(&e.index)) {
                    push(found, &mut resolved);
                }
                // Indexes are 1..=len, so only the tail of a range can fall off the listing
                let first_missing = (*start).max(indexed.len() + 1);
                if first_missing <= *end {
                    resolved.missing.push(missing_span(first_missing, *end));
                }
            }
            EntrySelector::Id(id) => match indexed.iter().find(|e| e.entry.id == *id) {
                Some(found) => push(found, &mut resolved),
                None => resolved.missing.push(id.clone()),
            },
        }
    }

    resolved
}

fn missing_span(start: usize, end: usize) -> String {
    if start == end {
        start.to_string()
    } else {
        format!("{}-{}", start, end)
    }
}
