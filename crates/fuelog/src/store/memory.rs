use super::log_store::FuelLogStore;
use super::mem_backend::MemBackend;
use crate::mirror::NoMirror;

pub type InMemoryStore = FuelLogStore<MemBackend, NoMirror>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new_in_memory()
    }
}

impl InMemoryStore {
    pub fn new_in_memory() -> Self {
        FuelLogStore::new(MemBackend::new(), NoMirror)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::mirror::Mirror;
    use crate::model::{FuelLogEntry, Reading};
    use crate::store::LogStore;
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Builds a valid entry for the given odometer span (35 L, 71.75 paid).
    pub fn entry(odo_start: f64, odo_end: f64) -> FuelLogEntry {
        FuelLogEntry::new(Reading {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            fuel_brand: "Shell".to_string(),
            amount_paid: 71.75,
            litres: 35.0,
            odo_start,
            odo_end,
            notes: String::new(),
        })
    }

    /// Mirror that remembers every dispatch. Clones share the same log.
    #[derive(Clone, Default)]
    pub struct RecordingMirror {
        calls: Rc<RefCell<Vec<(String, FuelLogEntry)>>>,
    }

    impl RecordingMirror {
        pub fn calls(&self) -> Vec<(String, FuelLogEntry)> {
            self.calls.borrow().clone()
        }
    }

    impl Mirror for RecordingMirror {
        fn mirror(&self, endpoint: &str, entry: &FuelLogEntry) {
            self.calls
                .borrow_mut()
                .push((endpoint.to_string(), entry.clone()));
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new_in_memory(),
            }
        }

        /// Appends `count` consecutive trips of 400 km starting at odometer 10000.
        pub fn with_trips(mut self, count: usize) -> Self {
            for i in 0..count {
                let start = 10_000.0 + (i as f64) * 400.0;
                self.store.append(entry(start, start + 400.0)).unwrap();
            }
            self
        }

        pub fn with_entry(mut self, entry: FuelLogEntry) -> Self {
            self.store.append(entry).unwrap();
            self
        }
    }
}
