use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::EntrySelector;
use crate::store::LogStore;

use super::helpers::{indexed_entries, resolve_selectors};

/// Removes the selected entries.
///
/// Indexes refer to the listing as it was before the command ran, so `rm 1 2` removes
/// the first two listed entries. Selectors that match nothing are reported as warnings.
///
/// All removals are committed in one write: either every target is gone or, if the write
/// fails, none is.
pub fn run<S: LogStore>(store: &mut S, selectors: &[EntrySelector]) -> Result<CmdResult> {
    let indexed = indexed_entries(store);
    let resolved = resolve_selectors(&indexed, selectors);
    let mut result = CmdResult::default();

    if !resolved.entries.is_empty() {
        let remaining = indexed
            .into_iter()
            .filter(|e| !resolved.entries.iter().any(|t| t.entry.id == e.entry.id))
            .map(|e| e.entry)
            .collect();
        store.replace_all(remaining)?;
    }

    for target in &resolved.entries {
        result.add_message(CmdMessage::success(format!(
            "Entry deleted ({}): {} on {}",
            target.index, target.entry.fuel_brand, target.entry.date
        )));
    }

    for missing in &resolved.missing {
        result.add_message(CmdMessage::warning(format!("No entry matches {}", missing)));
    }

    if resolved.entries.is_empty() {
        result.add_message(CmdMessage::info("Nothing deleted"));
    }

    Ok(result.with_affected_entries(resolved.entries))
}
