//! Notification evaluation over event and deadline snapshots.
//!
//! `evaluate` is a pure function: identical inputs produce identical
//! draft sets. It reports everything currently inside its windows on
//! every call; duplicate suppression across repeated polls belongs to
//! the driving layer, which can key off each draft's `source_id`.

use chrono::{DateTime, Duration, Utc};

use crate::model::{Deadline, Event, NotificationDraft, NotificationKind};
use crate::timetext;

/// Fixed urgency window for deadlines, in hours. Independent of the
/// configurable reminder lead.
pub const URGENT_WINDOW_HOURS: i64 = 24;

/// A deadline is urgent iff it is due within the next 24 hours.
/// Overdue deadlines are never urgent.
pub fn is_urgent(now: DateTime<Utc>, due: DateTime<Utc>) -> bool {
    let remaining = due - now;
    remaining > Duration::zero() && remaining <= Duration::hours(URGENT_WINDOW_HOURS)
}

/// Evaluate which items need notification at `now`.
///
/// Deadlines inside the fixed 24-hour window produce `deadline` drafts;
/// events starting within `reminder_lead_minutes` produce `reminder`
/// drafts. A lead of 0 disables reminders, since no interval satisfies
/// `0 < diff <= 0`.
pub fn evaluate(
    now: DateTime<Utc>,
    reminder_lead_minutes: u32,
    events: &[Event],
    deadlines: &[Deadline],
) -> Vec<NotificationDraft> {
    let mut drafts = Vec::new();

    for deadline in deadlines {
        if is_urgent(now, deadline.due) {
            drafts.push(NotificationDraft {
                title: "Deadline approaching".to_string(),
                message: format!(
                    "\"{}\" is due {}",
                    deadline.title,
                    timetext::time_until(now, deadline.due)
                ),
                kind: NotificationKind::Deadline,
                priority: deadline.priority,
                source_id: Some(deadline.id.clone()),
            });
        }
    }

    let lead = Duration::minutes(i64::from(reminder_lead_minutes));
    for event in events {
        let until_start = event.start - now;
        if until_start > Duration::zero() && until_start <= lead {
            drafts.push(NotificationDraft {
                title: "Upcoming event".to_string(),
                message: format!(
                    "\"{}\" starts {}",
                    event.title,
                    timetext::time_until(now, event.start)
                ),
                kind: NotificationKind::Reminder,
                priority: event.priority,
                source_id: Some(event.id.clone()),
            });
        }
    }

    drafts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EventCategory, Priority};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 19, 17, 0, 0).unwrap()
    }

    fn deadline_in(minutes: i64) -> Deadline {
        Deadline::new(
            "d1",
            "File brief",
            now() + Duration::minutes(minutes),
            Priority::Urgent,
        )
    }

    fn event_in(minutes: i64) -> Event {
        Event::new(
            "e1",
            "Client call",
            now() + Duration::minutes(minutes),
            EventCategory::Consultation,
            Priority::High,
        )
    }

    #[test]
    fn urgency_boundary_is_exactly_24_hours() {
        assert!(is_urgent(now(), now() + Duration::hours(24)));
        assert!(!is_urgent(now(), now() + Duration::hours(24) + Duration::seconds(1)));
        assert!(is_urgent(now(), now() + Duration::seconds(1)));
        // Overdue is never urgent
        assert!(!is_urgent(now(), now() - Duration::seconds(1)));
        assert!(!is_urgent(now(), now()));
    }

    #[test]
    fn deadline_draft_references_relative_time() {
        let deadlines = vec![Deadline::new(
            "d1",
            "File brief",
            Utc.with_ymd_and_hms(2024, 1, 20, 10, 0, 0).unwrap(),
            Priority::Urgent,
        )];
        let drafts = evaluate(now(), 30, &[], &deadlines);
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].kind, NotificationKind::Deadline);
        assert_eq!(drafts[0].message, "\"File brief\" is due in 17 hours");
        assert_eq!(drafts[0].source_id.as_deref(), Some("d1"));
    }

    #[test]
    fn deadline_outside_window_is_silent() {
        let drafts = evaluate(now(), 30, &[], &[deadline_in(25 * 60)]);
        assert!(drafts.is_empty());
        let drafts = evaluate(now(), 30, &[], &[deadline_in(-10)]);
        assert!(drafts.is_empty());
    }

    #[test]
    fn event_reminder_respects_lead() {
        let events = vec![event_in(20)];
        let drafts = evaluate(now(), 30, &events, &[]);
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].kind, NotificationKind::Reminder);
        assert_eq!(drafts[0].priority, Priority::High);

        // Outside the lead window
        assert!(evaluate(now(), 15, &events, &[]).is_empty());
        // Already started
        assert!(evaluate(now(), 30, &[event_in(-5)], &[]).is_empty());
    }

    #[test]
    fn zero_lead_disables_reminders() {
        let drafts = evaluate(now(), 0, &[event_in(1)], &[]);
        assert!(drafts.is_empty());
    }

    #[test]
    fn evaluate_is_pure() {
        let events = vec![event_in(10)];
        let deadlines = vec![deadline_in(60)];
        let first = evaluate(now(), 30, &events, &deadlines);
        let second = evaluate(now(), 30, &events, &deadlines);
        assert_eq!(first, second);
    }
}
