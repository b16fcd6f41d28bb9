//! In-memory owner of the events, deadlines, and notifications
//! collections.
//!
//! The store is the only stateful component; everything else in the
//! crate computes over the snapshots it hands out. Mutations are
//! synchronous and atomic: validation happens before anything is
//! touched, so a returned error always means the collections are
//! unchanged. Persistence is the caller's concern, via
//! [`StoreSnapshot`].
//!
//! Conflict handling is two-phase: [`ScheduleStore::check_conflicts`]
//! returns data, and insertion proceeds only when the caller commits.
//! The store itself never blocks on a conflict.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::conflict;
use crate::error::{CoreError, StoreError, ValidationError};
use crate::model::{
    Deadline, Event, EventCategory, Notification, NotificationDraft,
};
use crate::notify;
use crate::recurrence;
use crate::timeline::{self, CaseFilter, TimelineItem};

/// Serializable snapshot of the full store state.
///
/// The engine never touches the filesystem; an external collaborator
/// persists this value (the CLI writes it as JSON).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub deadlines: Vec<Deadline>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

/// In-memory schedule store.
#[derive(Debug, Default)]
pub struct ScheduleStore {
    events: Vec<Event>,
    deadlines: Vec<Deadline>,
    notifications: Vec<Notification>,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from a persisted snapshot.
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        Self {
            events: snapshot.events,
            deadlines: snapshot.deadlines,
            notifications: snapshot.notifications,
        }
    }

    /// Snapshot the full state for persistence.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            events: self.events.clone(),
            deadlines: self.deadlines.clone(),
            notifications: self.notifications.clone(),
        }
    }

    // ── Event commands ──────────────────────────────────────────────

    /// Insert an event, expanding recurrence first.
    ///
    /// All produced occurrences are validated (including id uniqueness
    /// against the store and within the batch) before any of them is
    /// inserted; the insert is all-or-nothing. Returns the number of
    /// occurrences stored.
    ///
    /// Conflict checking is deliberately not part of this operation:
    /// run [`Self::check_conflicts`] first and commit only on the
    /// caller's explicit decision.
    ///
    /// # Errors
    /// Returns a validation error on empty id/title, inverted time
    /// range, or duplicate id; the store is unchanged.
    pub fn add_event(&mut self, event: Event) -> Result<usize, CoreError> {
        event.validate()?;

        let batch = recurrence::expand(&event);

        let mut seen: HashSet<&str> = self.events.iter().map(|e| e.id.as_str()).collect();
        for occurrence in &batch {
            if !seen.insert(occurrence.id.as_str()) {
                return Err(ValidationError::DuplicateId(occurrence.id.clone()).into());
            }
        }

        let inserted = batch.len();
        self.events.extend(batch);
        Ok(inserted)
    }

    /// Rewrite an event's start/end (drag or resize).
    ///
    /// # Errors
    /// `NotFound` when the id is unknown; a validation error when the
    /// new range is inverted. Nothing is mutated on error.
    pub fn update_event_time(
        &mut self,
        id: &str,
        new_start: DateTime<Utc>,
        new_end: Option<DateTime<Utc>>,
    ) -> Result<(), CoreError> {
        if let Some(end) = new_end {
            if end < new_start {
                return Err(ValidationError::InvalidTimeRange {
                    start: new_start,
                    end,
                }
                .into());
            }
        }
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| StoreError::not_found("event", id))?;
        event.start = new_start;
        event.end = new_end;
        Ok(())
    }

    /// Link an event to a case.
    ///
    /// # Errors
    /// `NotFound` when the id is unknown.
    pub fn link_case(
        &mut self,
        id: &str,
        case_id: impl Into<String>,
        case_name: impl Into<String>,
    ) -> Result<(), CoreError> {
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| StoreError::not_found("event", id))?;
        event.case_id = Some(case_id.into());
        event.case_name = Some(case_name.into());
        Ok(())
    }

    /// Clear an event's case link. A miss is an intentional no-op,
    /// reported through the returned flag.
    pub fn unlink_case(&mut self, id: &str) -> bool {
        match self.events.iter_mut().find(|e| e.id == id) {
            Some(event) => {
                event.case_id = None;
                event.case_name = None;
                true
            }
            None => false,
        }
    }

    /// Remove an event by id. Expanded siblings of a recurring base are
    /// independent entities and are not cascaded.
    pub fn remove_event(&mut self, id: &str) -> bool {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        self.events.len() != before
    }

    // ── Deadline commands ───────────────────────────────────────────

    /// Insert a deadline.
    ///
    /// # Errors
    /// Returns a validation error on empty id/title or duplicate id.
    pub fn add_deadline(&mut self, deadline: Deadline) -> Result<(), CoreError> {
        deadline.validate()?;
        if self.deadlines.iter().any(|d| d.id == deadline.id) {
            return Err(ValidationError::DuplicateId(deadline.id).into());
        }
        self.deadlines.push(deadline);
        Ok(())
    }

    /// Remove a deadline by id; `false` reports a miss.
    pub fn remove_deadline(&mut self, id: &str) -> bool {
        let before = self.deadlines.len();
        self.deadlines.retain(|d| d.id != id);
        self.deadlines.len() != before
    }

    // ── Notification commands ───────────────────────────────────────

    /// Evaluate the reminder/deadline windows at `now` and materialize
    /// every resulting draft. Returns the newly created batch.
    ///
    /// The evaluation itself is stateless: a caller polling on a cadence
    /// suppresses duplicates by tracking the `source_id`s it has already
    /// surfaced.
    pub fn poll_notifications(
        &mut self,
        now: DateTime<Utc>,
        reminder_lead_minutes: u32,
    ) -> Vec<Notification> {
        let drafts = notify::evaluate(now, reminder_lead_minutes, &self.events, &self.deadlines);
        drafts
            .into_iter()
            .map(|draft| self.push_notification(draft, now))
            .collect()
    }

    /// Materialize a single draft directly (action feedback and the
    /// like). The store assigns the id and timestamp.
    pub fn notify(&mut self, draft: NotificationDraft, now: DateTime<Utc>) -> Notification {
        self.push_notification(draft, now)
    }

    fn push_notification(&mut self, draft: NotificationDraft, now: DateTime<Utc>) -> Notification {
        let notification =
            Notification::from_draft(draft, uuid::Uuid::new_v4().to_string(), now);
        self.notifications.push(notification.clone());
        notification
    }

    /// Mark a notification read. Monotonic: there is no way back to
    /// unread. `false` reports a miss.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }

    /// Cap retention at `max` notifications, dropping the oldest first.
    /// Returns how many were removed.
    pub fn prune_notifications(&mut self, max: usize) -> usize {
        if self.notifications.len() <= max {
            return 0;
        }
        let excess = self.notifications.len() - max;
        self.notifications.drain(..excess);
        excess
    }

    // ── Queries ─────────────────────────────────────────────────────

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn deadlines(&self) -> &[Deadline] {
        &self.deadlines
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn deadline(&self, id: &str) -> Option<&Deadline> {
        self.deadlines.iter().find(|d| d.id == id)
    }

    /// Events linked to the given case, in insertion order.
    pub fn events_by_case(&self, case_id: &str) -> Vec<Event> {
        self.events
            .iter()
            .filter(|e| e.case_id.as_deref() == Some(case_id))
            .cloned()
            .collect()
    }

    /// Events of the given category, in insertion order.
    pub fn events_by_category(&self, category: EventCategory) -> Vec<Event> {
        self.events
            .iter()
            .filter(|e| e.category == category)
            .cloned()
            .collect()
    }

    /// Deadlines linked to the given case, in insertion order.
    pub fn deadlines_by_case(&self, case_id: &str) -> Vec<Deadline> {
        self.deadlines
            .iter()
            .filter(|d| d.case_id.as_deref() == Some(case_id))
            .cloned()
            .collect()
    }

    /// Deadlines inside the fixed 24-hour urgency window at `now`.
    pub fn urgent_deadlines(&self, now: DateTime<Utc>) -> Vec<Deadline> {
        self.deadlines
            .iter()
            .filter(|d| notify::is_urgent(now, d.due))
            .cloned()
            .collect()
    }

    /// Phase one of insertion: every stored event overlapping the
    /// candidate interval. Advisory only.
    pub fn check_conflicts(
        &self,
        candidate_start: DateTime<Utc>,
        candidate_end: DateTime<Utc>,
    ) -> Vec<Event> {
        conflict::find_conflicts(candidate_start, candidate_end, &self.events)
    }

    /// Case timeline over the current snapshots.
    pub fn timeline(&self, filter: &CaseFilter) -> Vec<TimelineItem> {
        timeline::build_timeline(&self.events, &self.deadlines, filter)
    }
}
