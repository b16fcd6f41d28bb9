//! Case timeline aggregation.
//!
//! Merges events and deadlines into a single chronologically ordered
//! sequence, filtered by case. The "all" filter keeps only case-linked
//! items; unlinked items stay visible in the calendar view, which is a
//! separate concept from the case timeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Deadline, Event};

/// Case filter for timeline aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseFilter {
    /// Every item linked to any case.
    All,
    /// Only items linked to the given case id.
    Case(String),
}

impl CaseFilter {
    /// Parse the CLI/UI filter value; `"all"` is the sentinel.
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            Self::All
        } else {
            Self::Case(value.to_string())
        }
    }

    fn matches(&self, case_id: Option<&str>) -> bool {
        match self {
            Self::All => case_id.is_some_and(|id| !id.is_empty()),
            Self::Case(wanted) => case_id == Some(wanted.as_str()),
        }
    }
}

/// A single entry on a case timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TimelineItem {
    Event(Event),
    Deadline(Deadline),
}

impl TimelineItem {
    /// Common sort key: event start or deadline due instant.
    pub fn sort_key(&self) -> DateTime<Utc> {
        match self {
            Self::Event(event) => event.start,
            Self::Deadline(deadline) => deadline.due,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Event(event) => &event.title,
            Self::Deadline(deadline) => &deadline.title,
        }
    }

    pub fn case_id(&self) -> Option<&str> {
        match self {
            Self::Event(event) => event.case_id.as_deref(),
            Self::Deadline(deadline) => deadline.case_id.as_deref(),
        }
    }
}

/// Build a chronologically ordered timeline from fresh copies of the
/// matching events and deadlines.
///
/// Events are concatenated before deadlines and the sort is stable, so
/// an event at an instant precedes a deadline at the same instant.
pub fn build_timeline(
    events: &[Event],
    deadlines: &[Deadline],
    filter: &CaseFilter,
) -> Vec<TimelineItem> {
    let mut items: Vec<TimelineItem> = events
        .iter()
        .filter(|e| filter.matches(e.case_id.as_deref()))
        .cloned()
        .map(TimelineItem::Event)
        .chain(
            deadlines
                .iter()
                .filter(|d| filter.matches(d.case_id.as_deref()))
                .cloned()
                .map(TimelineItem::Deadline),
        )
        .collect();

    items.sort_by_key(TimelineItem::sort_key);
    items
}
