//! Recurrence expansion for calendar events.
//!
//! Expands a recurring base event into a bounded sequence of concrete
//! occurrences. Month-based frequencies use clamped calendar arithmetic:
//! Jan 31 + 1 month lands on Feb 28/29, not Mar 2/3.

use chrono::{DateTime, Duration, Months, Utc};

use crate::model::{Event, Frequency};

/// Hard cap on occurrences generated per base event, the base included.
/// A fixed safety limit, not user-configurable.
pub const MAX_OCCURRENCES: usize = 52;

/// Expand a base event into its concrete occurrences.
///
/// A non-recurring base comes back as a single-element sequence,
/// unchanged. For recurring bases the first occurrence is the base
/// itself; each following occurrence `i` gets id `"<base.id>_<i>"` and
/// `original_event_id = base.id`, with start/end advanced by the
/// frequency's calendar increment and the base's duration preserved.
///
/// A calendar step that cannot be computed ends expansion with whatever
/// was generated so far.
pub fn expand(base: &Event) -> Vec<Event> {
    if !base.recurring || base.recurrence == Frequency::None {
        return vec![base.clone()];
    }

    let duration = base.effective_end() - base.start;
    let mut occurrences = Vec::with_capacity(MAX_OCCURRENCES);
    occurrences.push(base.clone());

    let mut current = base.start;
    for index in 1..MAX_OCCURRENCES {
        current = match advance(current, base.recurrence) {
            Some(next) => next,
            None => break,
        };

        let mut occurrence = base.clone();
        occurrence.id = format!("{}_{}", base.id, index);
        occurrence.original_event_id = Some(base.id.clone());
        occurrence.start = current;
        occurrence.end = base.end.map(|_| current + duration);
        occurrences.push(occurrence);
    }

    occurrences
}

/// Advance an instant by one calendar increment of `frequency`.
///
/// Returns `None` for `Frequency::None` and for steps the calendar
/// cannot represent.
fn advance(current: DateTime<Utc>, frequency: Frequency) -> Option<DateTime<Utc>> {
    match frequency {
        Frequency::None => None,
        Frequency::Daily => current.checked_add_signed(Duration::days(1)),
        Frequency::Weekly => current.checked_add_signed(Duration::days(7)),
        Frequency::Biweekly => current.checked_add_signed(Duration::days(14)),
        Frequency::Monthly => current.checked_add_months(Months::new(1)),
        Frequency::Quarterly => current.checked_add_months(Months::new(3)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EventCategory, Priority};
    use chrono::TimeZone;

    fn base_event(freq: Frequency) -> Event {
        Event::new(
            "1",
            "Team meeting",
            Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
            EventCategory::Meeting,
            Priority::Medium,
        )
        .with_end(Utc.with_ymd_and_hms(2024, 1, 1, 11, 0, 0).unwrap())
        .with_recurrence(freq)
    }

    #[test]
    fn non_recurring_returns_base_unchanged() {
        let base = base_event(Frequency::None);
        let expanded = expand(&base);
        assert_eq!(expanded.len(), 1);
        assert_eq!(expanded[0], base);
    }

    #[test]
    fn weekly_expansion_advances_by_seven_days() {
        let expanded = expand(&base_event(Frequency::Weekly));
        assert_eq!(expanded.len(), MAX_OCCURRENCES);

        let second = &expanded[1];
        assert_eq!(second.id, "1_1");
        assert_eq!(second.original_event_id.as_deref(), Some("1"));
        assert_eq!(
            second.start,
            Utc.with_ymd_and_hms(2024, 1, 8, 10, 0, 0).unwrap()
        );
        assert_eq!(
            second.end,
            Some(Utc.with_ymd_and_hms(2024, 1, 8, 11, 0, 0).unwrap())
        );
    }

    #[test]
    fn expansion_never_exceeds_cap() {
        for freq in [
            Frequency::Daily,
            Frequency::Weekly,
            Frequency::Biweekly,
            Frequency::Monthly,
            Frequency::Quarterly,
        ] {
            let expanded = expand(&base_event(freq));
            assert!(expanded.len() <= MAX_OCCURRENCES);
            assert_eq!(expanded[0].id, "1");
            for occurrence in &expanded[1..] {
                assert_eq!(occurrence.original_event_id.as_deref(), Some("1"));
            }
        }
    }

    #[test]
    fn duration_is_preserved_across_occurrences() {
        let expanded = expand(&base_event(Frequency::Daily));
        for occurrence in &expanded {
            assert_eq!(occurrence.duration_minutes(), 60);
        }
    }

    #[test]
    fn point_events_expand_without_end() {
        let mut base = base_event(Frequency::Daily);
        base.end = None;
        let expanded = expand(&base);
        assert!(expanded.iter().all(|o| o.end.is_none()));
        assert_eq!(
            expanded[1].start,
            Utc.with_ymd_and_hms(2024, 1, 2, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn monthly_clamps_to_end_of_month() {
        let base = Event::new(
            "31",
            "Month-end review",
            Utc.with_ymd_and_hms(2024, 1, 31, 9, 0, 0).unwrap(),
            EventCategory::Work,
            Priority::Low,
        )
        .with_recurrence(Frequency::Monthly);

        let expanded = expand(&base);
        // 2024 is a leap year: Jan 31 -> Feb 29, then Feb 29 -> Mar 29.
        assert_eq!(
            expanded[1].start,
            Utc.with_ymd_and_hms(2024, 2, 29, 9, 0, 0).unwrap()
        );
        assert_eq!(
            expanded[2].start,
            Utc.with_ymd_and_hms(2024, 3, 29, 9, 0, 0).unwrap()
        );
    }

    #[test]
    fn quarterly_advances_three_months() {
        let expanded = expand(&base_event(Frequency::Quarterly));
        assert_eq!(
            expanded[1].start,
            Utc.with_ymd_and_hms(2024, 4, 1, 10, 0, 0).unwrap()
        );
        assert_eq!(
            expanded[4].start,
            Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn recurring_flag_without_frequency_is_single() {
        let mut base = base_event(Frequency::None);
        base.recurring = true;
        let expanded = expand(&base);
        assert_eq!(expanded.len(), 1);
    }
}
