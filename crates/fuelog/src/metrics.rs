//! # Metrics Engine
//!
//! Pure computations over the raw numbers of a refuel: trip distance, distance per
//! unit of currency and distance per litre.
//!
//! [`compute_trip_metrics`] is meant to be called on every change of its inputs
//! (clients preview the numbers while the user is still typing), so it never fails:
//! incomplete or inconsistent input produces [`TripMetrics::Invalid`], whose metrics
//! are all zero. A zero or negative denominator yields an efficiency of `0.0`.
//!
//! Rounding:
//! - distance: 1 decimal
//! - efficiencies: 2 decimals
//!
//! Submission-time validation lives in [`crate::model::EntryDraft::validate`] and is
//! stricter than the live preview.

use serde::Serialize;

/// Derived quantities for one trip segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub distance: f64,
    pub cost_efficiency: f64,
    pub volume_efficiency: f64,
}

/// Outcome of a live metrics computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TripMetrics {
    Valid(Metrics),
    /// Odometer readings missing, unparsable, or not increasing.
    Invalid,
}

impl TripMetrics {
    pub fn is_valid(&self) -> bool {
        matches!(self, TripMetrics::Valid(_))
    }

    /// The metrics to display; all zero for the invalid case.
    pub fn metrics(&self) -> Metrics {
        match self {
            TripMetrics::Valid(m) => *m,
            TripMetrics::Invalid => Metrics::default(),
        }
    }
}

/// Computes distance and efficiencies from raw readings.
///
/// `None` stands for an absent or unparsable input.
pub fn compute_trip_metrics(
    odo_start: Option<f64>,
    odo_end: Option<f64>,
    volume: Option<f64>,
    amount: Option<f64>,
) -> TripMetrics {
    let (start, end) = match (finite(odo_start), finite(odo_end)) {
        (Some(s), Some(e)) if e > s => (s, e),
        _ => return TripMetrics::Invalid,
    };

    let raw_distance = end - start;
    let volume_efficiency = ratio(raw_distance, finite(volume));
    let cost_efficiency = ratio(raw_distance, finite(amount));

    TripMetrics::Valid(Metrics {
        distance: round_to(raw_distance, 1),
        cost_efficiency: round_to(cost_efficiency, 2),
        volume_efficiency: round_to(volume_efficiency, 2),
    })
}

/// Parses a raw user-typed number. Blank, malformed and non-finite input is `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn ratio(distance: f64, denominator: Option<f64>) -> f64 {
    match denominator {
        Some(d) if d > 0.0 => distance / d,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_reference_trip() {
        let result = compute_trip_metrics(Some(50000.0), Some(50450.0), Some(35.0), Some(71.75));
        assert_eq!(
            result,
            TripMetrics::Valid(Metrics {
                distance: 450.0,
                cost_efficiency: 6.27,
                volume_efficiency: 12.86,
            })
        );
    }

    #[test]
    fn distance_is_rounded_to_one_decimal() {
        let result = compute_trip_metrics(Some(100.0), Some(150.26), Some(10.0), Some(10.0));
        assert_eq!(result.metrics().distance, 50.3);
    }

    #[test]
    fn efficiencies_match_formulas_within_rounding() {
        let cases = [
            (0.0, 312.4, 27.3, 60.1),
            (12_000.5, 12_433.9, 31.02, 63.59),
            (99_999.0, 100_001.0, 0.5, 1.25),
        ];
        for (start, end, volume, amount) in cases {
            let m = compute_trip_metrics(Some(start), Some(end), Some(volume), Some(amount))
                .metrics();
            let distance = end - start;
            assert!((m.distance - distance).abs() <= 0.05 + 1e-9);
            assert!((m.volume_efficiency - distance / volume).abs() <= 0.005 + 1e-9);
            assert!((m.cost_efficiency - distance / amount).abs() <= 0.005 + 1e-9);
        }
    }

    #[test]
    fn equal_odometer_is_invalid() {
        let result = compute_trip_metrics(Some(500.0), Some(500.0), Some(10.0), Some(10.0));
        assert_eq!(result, TripMetrics::Invalid);
        assert_eq!(result.metrics(), Metrics::default());
    }

    #[test]
    fn decreasing_odometer_is_invalid() {
        let result = compute_trip_metrics(Some(500.0), Some(420.0), Some(10.0), Some(10.0));
        assert!(!result.is_valid());
    }

    #[test]
    fn missing_or_non_finite_odometer_is_invalid() {
        assert!(!compute_trip_metrics(None, Some(10.0), None, None).is_valid());
        assert!(!compute_trip_metrics(Some(0.0), None, None, None).is_valid());
        assert!(!compute_trip_metrics(Some(0.0), Some(f64::NAN), None, None).is_valid());
        assert!(!compute_trip_metrics(Some(0.0), Some(f64::INFINITY), None, None).is_valid());
    }

    #[test]
    fn non_positive_denominators_yield_zero() {
        let m = compute_trip_metrics(Some(0.0), Some(100.0), Some(0.0), Some(-5.0)).metrics();
        assert_eq!(m.distance, 100.0);
        assert_eq!(m.volume_efficiency, 0.0);
        assert_eq!(m.cost_efficiency, 0.0);

        let m = compute_trip_metrics(Some(0.0), Some(100.0), None, None).metrics();
        assert_eq!(m.volume_efficiency, 0.0);
        assert_eq!(m.cost_efficiency, 0.0);
    }

    #[test]
    fn parse_number_is_lenient_about_whitespace_only() {
        assert_eq!(parse_number(" 42.5 "), Some(42.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("12abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }
}
