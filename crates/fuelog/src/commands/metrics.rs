use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::metrics::{compute_trip_metrics, parse_number};
use crate::model::EntryDraft;
use crate::store::LogStore;

use super::helpers::last_odometer;

/// Live preview of the metrics a draft would produce.
///
/// Never rejects input: incomplete drafts preview as all zeros. Like [`super::add`], a
/// blank odometer start continues from the last reading.
pub fn run<S: LogStore>(store: &S, draft: &EntryDraft) -> Result<CmdResult> {
    let odo_start = match draft.odo_start.as_deref() {
        Some(raw) if !raw.trim().is_empty() => parse_number(raw),
        _ => Some(last_odometer(store)),
    };

    let trip = compute_trip_metrics(
        odo_start,
        parse_number(&draft.odo_end),
        parse_number(&draft.litres),
        parse_number(&draft.amount_paid),
    );

    let mut result = CmdResult::default().with_metrics(trip);
    if !trip.is_valid() {
        result.add_message(CmdMessage::info(
            "Enter an odometer end above the start to see trip metrics",
        ));
    }
    Ok(result)
}
