//! Domain types for the scheduling engine.
//!
//! Events and deadlines are the two time-stamped collections the engine
//! computes over; notifications are produced from them. All types are
//! plain serde-friendly values; ownership of the collections lives in
//! [`crate::store::ScheduleStore`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Category of a calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Meeting,
    Court,
    Deadline,
    Consultation,
    Work,
    Other,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Meeting => "meeting",
            Self::Court => "court",
            Self::Deadline => "deadline",
            Self::Consultation => "consultation",
            Self::Work => "work",
            Self::Other => "other",
        }
    }
}

/// Priority of an event, deadline, or notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Recurrence frequency of an event.
///
/// A deliberately small, closed set: no RRULE grammar, no exception
/// dates. Month-based frequencies use clamped calendar arithmetic
/// (see [`crate::recurrence`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    None,
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
        }
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Self::None
    }
}

/// A single concrete calendar item.
///
/// `end` is absent for all-day/point items, which are treated as
/// zero-width at `start` for conflict purposes. Expanded instances of a
/// recurring event carry `original_event_id` pointing back at the base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    pub category: EventCategory,
    pub priority: Priority,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub case_id: Option<String>,
    #[serde(default)]
    pub case_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub billing_code: Option<String>,
    #[serde(default)]
    pub recurring: bool,
    #[serde(default)]
    pub recurrence: Frequency,
    #[serde(default)]
    pub original_event_id: Option<String>,
}

impl Event {
    /// Create a minimal event; remaining fields via the `with_` builders.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: DateTime<Utc>,
        category: EventCategory,
        priority: Priority,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start,
            end: None,
            category,
            priority,
            client: None,
            case_id: None,
            case_name: None,
            location: None,
            description: None,
            billing_code: None,
            recurring: false,
            recurrence: Frequency::None,
            original_event_id: None,
        }
    }

    /// Set the end instant
    pub fn with_end(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the client name
    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self
    }

    /// Link to a case
    pub fn with_case(mut self, case_id: impl Into<String>, case_name: impl Into<String>) -> Self {
        self.case_id = Some(case_id.into());
        self.case_name = Some(case_name.into());
        self
    }

    /// Set the location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the billing code
    pub fn with_billing_code(mut self, code: impl Into<String>) -> Self {
        self.billing_code = Some(code.into());
        self
    }

    /// Mark as recurring with the given frequency
    pub fn with_recurrence(mut self, frequency: Frequency) -> Self {
        self.recurring = frequency != Frequency::None;
        self.recurrence = frequency;
        self
    }

    /// End instant for interval arithmetic: point items are zero-width.
    pub fn effective_end(&self) -> DateTime<Utc> {
        self.end.unwrap_or(self.start)
    }

    /// Check if this event overlaps a candidate interval.
    ///
    /// Half-open overlap: touching boundaries do not overlap.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        start < self.effective_end() && end > self.start
    }

    /// Get duration in minutes (zero for point items)
    pub fn duration_minutes(&self) -> i64 {
        (self.effective_end() - self.start).num_minutes()
    }

    /// Check required fields and time-range sanity.
    ///
    /// # Errors
    /// Returns an error if `id` or `title` is empty, or `end < start`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "id" });
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "title" });
        }
        if let Some(end) = self.end {
            if end < self.start {
                return Err(ValidationError::InvalidTimeRange {
                    start: self.start,
                    end,
                });
            }
        }
        Ok(())
    }
}

/// A deadline: a point-in-time obligation, never recurring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deadline {
    pub id: String,
    pub title: String,
    pub due: DateTime<Utc>,
    #[serde(default)]
    pub client: String,
    pub priority: Priority,
    #[serde(default)]
    pub case_id: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl Deadline {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        due: DateTime<Utc>,
        priority: Priority,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            due,
            client: String::new(),
            priority,
            case_id: None,
            description: String::new(),
        }
    }

    /// Set the client name
    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.client = client.into();
        self
    }

    /// Link to a case
    pub fn with_case(mut self, case_id: impl Into<String>) -> Self {
        self.case_id = Some(case_id.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check required fields.
    ///
    /// # Errors
    /// Returns an error if `id` or `title` is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "id" });
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "title" });
        }
        Ok(())
    }
}

/// Kind of notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Reminder,
    Deadline,
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reminder => "reminder",
            Self::Deadline => "deadline",
            Self::Info => "info",
        }
    }
}

/// A notification draft produced by evaluation.
///
/// Drafts carry no id and no timestamp; both are assigned by the store
/// when the draft is materialized, so creation order stays monotonic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationDraft {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub priority: Priority,
    #[serde(default)]
    pub source_id: Option<String>,
}

/// A stored notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    /// Monotonic: set via the store, never cleared.
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub source_id: Option<String>,
}

impl Notification {
    /// Materialize a draft with a store-assigned id and timestamp.
    pub fn from_draft(draft: NotificationDraft, id: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            message: draft.message,
            kind: draft.kind,
            priority: draft.priority,
            created_at,
            read: false,
            source_id: draft.source_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, h, m, 0).unwrap()
    }

    #[test]
    fn event_serialization_roundtrip() {
        let event = Event::new("e1", "Hearing", t(10, 0), EventCategory::Court, Priority::High)
            .with_end(t(11, 0))
            .with_client("Acme Corp")
            .with_case("case-7", "Acme v. Widgets")
            .with_billing_code("L120")
            .with_recurrence(Frequency::Weekly);

        let json = serde_json::to_string(&event).unwrap();
        let decoded: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, event);
        assert!(decoded.recurring);
    }

    #[test]
    fn event_validate_rejects_empty_title() {
        let event = Event::new("e1", "  ", t(10, 0), EventCategory::Meeting, Priority::Medium);
        assert!(event.validate().is_err());
    }

    #[test]
    fn event_validate_rejects_inverted_range() {
        let event = Event::new("e1", "Call", t(11, 0), EventCategory::Meeting, Priority::Medium)
            .with_end(t(10, 0));
        assert!(matches!(
            event.validate(),
            Err(ValidationError::InvalidTimeRange { .. })
        ));
    }

    #[test]
    fn point_event_is_zero_width() {
        let event = Event::new("e1", "Filing", t(10, 0), EventCategory::Deadline, Priority::Urgent);
        assert_eq!(event.effective_end(), event.start);
        assert_eq!(event.duration_minutes(), 0);
        // Straddling interval overlaps, touching interval does not
        assert!(event.overlaps(t(9, 30), t(10, 30)));
        assert!(!event.overlaps(t(9, 0), t(10, 0)));
    }

    #[test]
    fn category_and_priority_render_lowercase() {
        assert_eq!(EventCategory::Court.as_str(), "court");
        assert_eq!(Priority::Urgent.as_str(), "urgent");
        assert_eq!(
            serde_json::to_string(&Frequency::Biweekly).unwrap(),
            "\"biweekly\""
        );
    }

    #[test]
    fn draft_materialization_defaults_unread() {
        let draft = NotificationDraft {
            title: "Deadline approaching".into(),
            message: "\"Brief\" is due in 2 hours".into(),
            kind: NotificationKind::Deadline,
            priority: Priority::Urgent,
            source_id: Some("d1".into()),
        };
        let n = Notification::from_draft(draft, "n1".into(), t(8, 0));
        assert!(!n.read);
        assert_eq!(n.source_id.as_deref(), Some("d1"));
        assert_eq!(n.created_at, t(8, 0));
    }
}
