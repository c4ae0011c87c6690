//! Dashboard aggregates over the whole log.
//!
//! Averages are ratios of totals, not means of per-entry figures: a long trip weighs
//! more than a short one.

use crate::commands::CmdResult;
use crate::error::Result;
use crate::metrics::round_to;
use crate::model::FuelLogEntry;
use crate::store::LogStore;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogSummary {
    pub entry_count: usize,
    pub total_distance: f64,
    pub total_spent: f64,
    pub total_litres: f64,
    /// Total distance per total litre.
    pub avg_volume_efficiency: f64,
    /// Total distance per total spent.
    pub avg_cost_efficiency: f64,
    /// Oldest first.
    pub trend: Vec<TrendPoint>,
}

/// One point of the efficiency trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub volume_efficiency: f64,
    pub amount_paid: f64,
}

/// Aggregates entries given in listing order (most recently driven first).
pub fn summarize(entries: &[FuelLogEntry]) -> LogSummary {
    let total_distance: f64 = entries.iter().map(|e| e.distance).sum();
    let total_spent: f64 = entries.iter().map(|e| e.amount_paid).sum();
    let total_litres: f64 = entries.iter().map(|e| e.litres).sum();

    let trend = entries
        .iter()
        .rev()
        .map(|e| TrendPoint {
            date: e.date,
            volume_efficiency: e.volume_efficiency,
            amount_paid: e.amount_paid,
        })
        .collect();

    LogSummary {
        entry_count: entries.len(),
        total_distance: round_to(total_distance, 1),
        total_spent: round_to(total_spent, 2),
        total_litres: round_to(total_litres, 2),
        avg_volume_efficiency: average(total_distance, total_litres),
        avg_cost_efficiency: average(total_distance, total_spent),
        trend,
    }
}

fn average(distance: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        round_to(distance / denominator, 2)
    } else {
        0.0
    }
}

pub fn run<S: LogStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_summary(summarize(&store.list())))
}
