//! Interval-overlap conflict detection.
//!
//! Two intervals conflict iff `candidate_start < o.end && candidate_end >
//! o.start` (half-open overlap). Adjacent intervals, where one ends
//! exactly when the other starts, are NOT conflicts. The check is
//! advisory: the caller decides whether to block or proceed.

use chrono::{DateTime, Utc};

use crate::model::Event;

/// Find every event that overlaps the candidate interval.
///
/// Order-preserving relative to the input; an empty result means no
/// conflict. Zero-width events (no `end`) conflict only with intervals
/// that strictly straddle their instant.
pub fn find_conflicts(
    candidate_start: DateTime<Utc>,
    candidate_end: DateTime<Utc>,
    events: &[Event],
) -> Vec<Event> {
    events
        .iter()
        .filter(|event| event.overlaps(candidate_start, candidate_end))
        .cloned()
        .collect()
}
