pub mod config;
pub mod deadline;
pub mod event;
pub mod notify;
pub mod timeline;

use docket_core::{EventCategory, Frequency, Priority};

/// clap value parser for event categories.
pub fn parse_category(value: &str) -> Result<EventCategory, String> {
    match value {
        "meeting" => Ok(EventCategory::Meeting),
        "court" => Ok(EventCategory::Court),
        "deadline" => Ok(EventCategory::Deadline),
        "consultation" => Ok(EventCategory::Consultation),
        "work" => Ok(EventCategory::Work),
        "other" => Ok(EventCategory::Other),
        other => Err(format!("unknown category '{other}'")),
    }
}

/// clap value parser for priorities.
pub fn parse_priority(value: &str) -> Result<Priority, String> {
    match value {
        "urgent" => Ok(Priority::Urgent),
        "high" => Ok(Priority::High),
        "medium" => Ok(Priority::Medium),
        "low" => Ok(Priority::Low),
        other => Err(format!("unknown priority '{other}'")),
    }
}

/// clap value parser for recurrence frequencies.
pub fn parse_frequency(value: &str) -> Result<Frequency, String> {
    match value {
        "none" => Ok(Frequency::None),
        "daily" => Ok(Frequency::Daily),
        "weekly" => Ok(Frequency::Weekly),
        "biweekly" => Ok(Frequency::Biweekly),
        "monthly" => Ok(Frequency::Monthly),
        "quarterly" => Ok(Frequency::Quarterly),
        other => Err(format!("unknown frequency '{other}'")),
    }
}
