//! Metrics collection.
//!
//! # Metrics
//! - `mapchange_requests_total` (counter): change requests by kind, outcome
//! - `mapchange_match_active` (gauge): 1 while a match is being played
//!
//! No exporter is installed here; the embedding host decides whether to
//! install a recorder.

use crate::coordinator::ChangeKind;

/// Count one change request.
pub fn record_change(kind: ChangeKind, outcome: &'static str) {
    ::metrics::counter!(
        "mapchange_requests_total",
        "kind" => kind.as_str(),
        "outcome" => outcome
    )
    .increment(1);
}
