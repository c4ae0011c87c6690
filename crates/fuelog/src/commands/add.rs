use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::metrics::{Metrics, TripMetrics};
use crate::model::{EntryDraft, FuelLogEntry};
use crate::store::LogStore;
use chrono::NaiveDate;

use super::helpers::{indexed_entries, last_odometer};

/// Validates `draft` and appends the resulting entry.
///
/// A blank odometer start continues from the last odometer reading; a blank date is
/// `today`. A rejected draft leaves the store untouched.
pub fn run<S: LogStore>(store: &mut S, draft: &EntryDraft, today: NaiveDate) -> Result<CmdResult> {
    let reading = draft.validate(last_odometer(store), today)?;
    let entry = FuelLogEntry::new(reading);
    let id = entry.id.clone();
    let metrics = TripMetrics::Valid(Metrics {
        distance: entry.distance,
        cost_efficiency: entry.cost_efficiency,
        volume_efficiency: entry.volume_efficiency,
    });
    let message = format!(
        "Entry added: {} on {}, {} km",
        entry.fuel_brand, entry.date, entry.distance
    );

    store.append(entry)?;

    let affected: Vec<_> = indexed_entries(store)
        .into_iter()
        .filter(|e| e.entry.id == id)
        .collect();

    let mut result = CmdResult::default()
        .with_affected_entries(affected)
        .with_metrics(metrics);
    result.add_message(CmdMessage::success(message));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FuelogError, ValidationError};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    fn draft(start: Option<&str>, end: &str) -> EntryDraft {
        EntryDraft {
            date: None,
            fuel_brand: "Shell".into(),
            amount_paid: "71.75".into(),
            litres: "35".into(),
            odo_start: start.map(String::from),
            odo_end: end.into(),
            notes: "".into(),
        }
    }

    #[test]
    fn adds_entry_with_derived_metrics() {
        let mut store = InMemoryStore::new_in_memory();
        let result = run(&mut store, &draft(Some("50000"), "50450"), today()).unwrap();

        assert_eq!(result.affected_entries.len(), 1);
        let added = &result.affected_entries[0];
        assert_eq!(added.index, 1);
        assert_eq!(added.entry.distance, 450.0);
        assert_eq!(added.entry.volume_efficiency, 12.86);
        assert_eq!(added.entry.cost_efficiency, 6.27);
        assert_eq!(added.entry.date, today());
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn blank_start_continues_from_last_odometer() {
        let mut fixture = StoreFixture::new().with_trips(2);
        let result = run(&mut fixture.store, &draft(None, "11300"), today()).unwrap();

        let added = &result.affected_entries[0].entry;
        assert_eq!(added.odo_start, 10_800.0);
        assert_eq!(added.distance, 500.0);
    }

    #[test]
    fn empty_log_starts_from_zero() {
        let mut store = InMemoryStore::new_in_memory();
        let result = run(&mut store, &draft(None, "120"), today()).unwrap();
        assert_eq!(result.affected_entries[0].entry.odo_start, 0.0);
    }

    #[test]
    fn rejected_draft_leaves_store_untouched() {
        let mut fixture = StoreFixture::new().with_trips(1);
        let before = fixture.store.list();

        let err = run(&mut fixture.store, &draft(None, "10000"), today()).unwrap_err();
        assert!(matches!(
            err,
            FuelogError::Validation(ValidationError::NonPositiveDistance)
        ));
        assert_eq!(fixture.store.list(), before);
    }

    #[test]
    fn missing_brand_is_rejected() {
        let mut store = InMemoryStore::new_in_memory();
        let mut d = draft(Some("0"), "100");
        d.fuel_brand = String::new();

        let err = run(&mut store, &d, today()).unwrap_err();
        assert!(matches!(
            err,
            FuelogError::Validation(ValidationError::MissingField("fuel brand"))
        ));
        assert!(store.list().is_empty());
    }

    #[test]
    fn write_failure_is_reported() {
        let mut store = InMemoryStore::new_in_memory();
        store.backend().set_simulate_write_error(true);

        let result = run(&mut store, &draft(Some("0"), "100"), today());
        assert!(matches!(result, Err(FuelogError::Store(_))));
    }
}
