use crate::error::ValidationError;
use crate::metrics::{compute_trip_metrics, parse_number};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One refueling event, with its derived metrics stored alongside the raw readings.
///
/// The money and efficiency fields keep the logbook's historical JSON names (`amountRM`,
/// `kmPerRM`, `kmPerLiter`) so mirror endpoints and existing log files keep working. The
/// descriptive camelCase names are accepted on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelLogEntry {
    pub id: String,
    pub date: NaiveDate,
    pub fuel_brand: String,
    #[serde(rename = "amountRM", alias = "amountPaid")]
    pub amount_paid: f64,
    pub litres: f64,
    pub odo_start: f64,
    pub odo_end: f64,
    pub distance: f64,
    #[serde(rename = "kmPerRM", alias = "costEfficiency")]
    pub cost_efficiency: f64,
    #[serde(rename = "kmPerLiter", alias = "volumeEfficiency")]
    pub volume_efficiency: f64,
    #[serde(default)]
    pub notes: String,
    // Insertion marker only, never used for ordering
    #[serde(rename = "timestamp", with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl FuelLogEntry {
    /// Builds an entry from checked readings, computing the derived fields once.
    pub fn new(reading: Reading) -> Self {
        let metrics = compute_trip_metrics(
            Some(reading.odo_start),
            Some(reading.odo_end),
            Some(reading.litres),
            Some(reading.amount_paid),
        )
        .metrics();

        Self {
            id: Uuid::new_v4().to_string(),
            date: reading.date,
            fuel_brand: reading.fuel_brand,
            amount_paid: reading.amount_paid,
            litres: reading.litres,
            odo_start: reading.odo_start,
            odo_end: reading.odo_end,
            distance: metrics.distance,
            cost_efficiency: metrics.cost_efficiency,
            volume_efficiency: metrics.volume_efficiency,
            notes: reading.notes,
            created_at: Utc::now(),
        }
    }
}

/// Parsed and checked values for a new entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub date: NaiveDate,
    pub fuel_brand: String,
    pub amount_paid: f64,
    pub litres: f64,
    pub odo_start: f64,
    pub odo_end: f64,
    pub notes: String,
}

/// Raw input for a new entry, exactly as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    /// `YYYY-MM-DD`; blank or absent means today.
    pub date: Option<String>,
    pub fuel_brand: String,
    pub amount_paid: String,
    pub litres: String,
    /// Blank or absent means "continue from the last odometer reading".
    pub odo_start: Option<String>,
    pub odo_end: String,
    pub notes: String,
}

impl EntryDraft {
    /// Submission-time validation.
    ///
    /// Rejects blank required fields (brand, amount, litres, odometer end), numbers that do
    /// not parse, negative readings, and trips whose computed distance is not positive.
    pub fn validate(
        &self,
        last_odometer: f64,
        today: NaiveDate,
    ) -> std::result::Result<Reading, ValidationError> {
        let required = [
            ("fuel brand", &self.fuel_brand),
            ("amount", &self.amount_paid),
            ("litres", &self.litres),
            ("odometer end", &self.odo_end),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(name));
            }
        }

        let amount_paid = non_negative("amount", &self.amount_paid)?;
        let litres = non_negative("litres", &self.litres)?;
        let odo_end = non_negative("odometer end", &self.odo_end)?;
        let odo_start = match self.odo_start.as_deref().map(str::trim) {
            None | Some("") => last_odometer,
            Some(raw) => non_negative("odometer start", raw)?,
        };

        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => today,
            Some(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .map_err(|_| ValidationError::InvalidDate(raw.to_string()))?,
        };

        let trip = compute_trip_metrics(Some(odo_start), Some(odo_end), Some(litres), None);
        if !trip.is_valid() || trip.metrics().distance <= 0.0 {
            return Err(ValidationError::NonPositiveDistance);
        }

        Ok(Reading {
            date,
            fuel_brand: self.fuel_brand.trim().to_string(),
            amount_paid,
            litres,
            odo_start,
            odo_end,
            notes: self.notes.trim().to_string(),
        })
    }
}

fn non_negative(field: &'static str, raw: &str) -> std::result::Result<f64, ValidationError> {
    let value = parse_number(raw).ok_or_else(|| ValidationError::InvalidNumber {
        field,
        value: raw.to_string(),
    })?;
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field, value });
    }
    Ok(value)
}

/// Remote mirroring preferences. A single record, replaced wholesale on save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub remote_mirroring_enabled: bool,
    pub remote_endpoint_url: String,
}

impl Settings {
    /// The endpoint to mirror to, if mirroring is switched on and a URL is configured.
    pub fn mirror_endpoint(&self) -> Option<&str> {
        let url = self.remote_endpoint_url.trim();
        if self.remote_mirroring_enabled && !url.is_empty() {
            Some(url)
        } else {
            None
        }
    }
}
