use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::metrics::round_to;
use crate::model::{FuelLogEntry, Reading};
use crate::store::LogStore;
use chrono::{Duration, NaiveDate};
use rand::Rng;

use super::helpers::indexed_entries;

pub const SAMPLE_SIZE: usize = 5;
pub const SAMPLE_NOTES: &str = "Generated Sample Data";

const BRANDS: [&str; 2] = ["Shell", "Petronas"];
const FIRST_ODOMETER: f64 = 50_000.0;
const ODOMETER_STEP: f64 = 450.0;
const PRICE_PER_LITRE: f64 = 2.05;

/// Builds plausible entries: 400 to 450 km trips on 35 to 40 L, one week apart going back
/// from `today`, odometer advancing 450 per entry.
pub fn sample_entries<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> Vec<FuelLogEntry> {
    (0..SAMPLE_SIZE)
        .map(|i| {
            let distance = round_to(400.0 + rng.random::<f64>() * 50.0, 1);
            let litres = round_to(35.0 + rng.random::<f64>() * 5.0, 2);
            let odo_start = FIRST_ODOMETER + ODOMETER_STEP * i as f64;

            FuelLogEntry::new(Reading {
                date: today - Duration::days(7 * i as i64),
                fuel_brand: BRANDS[i % BRANDS.len()].to_string(),
                amount_paid: round_to(litres * PRICE_PER_LITRE, 2),
                litres,
                odo_start,
                odo_end: odo_start + distance,
                notes: SAMPLE_NOTES.to_string(),
            })
        })
        .collect()
}

/// Replaces the whole log with sample entries. Nothing is mirrored.
pub fn run<S: LogStore>(store: &mut S, today: NaiveDate) -> Result<CmdResult> {
    let replaced = store.list().len();
    let entries = sample_entries(&mut rand::rng(), today);
    let generated = entries.len();
    store.replace_all(entries)?;

    let mut result = CmdResult::default().with_listed_entries(indexed_entries(store));
    if replaced > 0 {
        result.add_message(CmdMessage::warning(format!(
            "Replaced {} existing entries",
            replaced
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Generated {} sample entries",
        generated
    )));
    Ok(result)
}
