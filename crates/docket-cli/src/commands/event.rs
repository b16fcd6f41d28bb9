use chrono::{DateTime, Utc};
use clap::Subcommand;
use docket_core::{
    timetext, Event, EventCategory, Frequency, NotificationDraft, NotificationKind, Priority,
};

use crate::state;

#[derive(Subcommand)]
pub enum EventAction {
    /// Add an event (checks conflicts first; --force commits anyway)
    Add {
        /// Event title
        title: String,
        /// Start instant (RFC 3339, e.g. 2024-01-15T10:00:00Z)
        #[arg(long)]
        start: DateTime<Utc>,
        /// End instant; omit for all-day/point items
        #[arg(long)]
        end: Option<DateTime<Utc>>,
        #[arg(long, default_value = "meeting", value_parser = super::parse_category)]
        category: EventCategory,
        #[arg(long, default_value = "medium", value_parser = super::parse_priority)]
        priority: Priority,
        #[arg(long)]
        client: Option<String>,
        #[arg(long)]
        case_id: Option<String>,
        #[arg(long)]
        case_name: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        billing_code: Option<String>,
        /// Recurrence frequency (daily, weekly, biweekly, monthly, quarterly)
        #[arg(long, default_value = "none", value_parser = super::parse_frequency)]
        recurrence: Frequency,
        /// Explicit id; a UUID is generated when omitted
        #[arg(long)]
        id: Option<String>,
        /// Insert even when conflicts are reported
        #[arg(long)]
        force: bool,
    },
    /// List events
    List {
        #[arg(long)]
        json: bool,
        /// Only events linked to this case
        #[arg(long)]
        case: Option<String>,
    },
    /// Rewrite an event's start/end (drag or resize)
    Move {
        id: String,
        #[arg(long)]
        start: DateTime<Utc>,
        #[arg(long)]
        end: Option<DateTime<Utc>>,
    },
    /// Link an event to a case
    Link {
        id: String,
        case_id: String,
        case_name: String,
    },
    /// Clear an event's case link
    Unlink { id: String },
    /// Remove an event
    Remove { id: String },
    /// Report events overlapping a candidate interval
    Conflicts {
        #[arg(long)]
        start: DateTime<Utc>,
        #[arg(long)]
        end: DateTime<Utc>,
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: EventAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        EventAction::Add {
            title,
            start,
            end,
            category,
            priority,
            client,
            case_id,
            case_name,
            location,
            description,
            billing_code,
            recurrence,
            id,
            force,
        } => {
            let mut store = state::load_store()?;

            let candidate_end = end.unwrap_or(start);
            let conflicts = store.check_conflicts(start, candidate_end);
            if !conflicts.is_empty() && !force {
                for conflict in &conflicts {
                    eprintln!(
                        "conflicts with \"{}\" ({} - {})",
                        conflict.title,
                        conflict.start.to_rfc3339(),
                        conflict.effective_end().to_rfc3339()
                    );
                }
                return Err(format!(
                    "{} conflicting event(s); re-run with --force to insert anyway",
                    conflicts.len()
                )
                .into());
            }

            let id = id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
            let mut event = Event::new(id.clone(), title.clone(), start, category, priority)
                .with_recurrence(recurrence);
            event.end = end;
            event.client = client;
            event.case_name = case_name;
            event.case_id = case_id;
            event.location = location;
            event.description = description;
            event.billing_code = billing_code;

            let inserted = store.add_event(event)?;
            store.notify(
                NotificationDraft {
                    title: "Event created".to_string(),
                    message: format!("\"{title}\" added ({inserted} occurrence(s))"),
                    kind: NotificationKind::Info,
                    priority: Priority::Low,
                    source_id: Some(id.clone()),
                },
                Utc::now(),
            );
            state::save_store(&store)?;
            println!("Event created: {id} ({inserted} occurrence(s))");
        }
        EventAction::List { json, case } => {
            let store = state::load_store()?;
            let events: Vec<Event> = match case {
                Some(case_id) => store.events_by_case(&case_id),
                None => store.events().to_vec(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&events)?);
            } else {
                for event in &events {
                    let span = match event.end {
                        Some(end) => timetext::duration_label(event.start, end),
                        None => "all day".to_string(),
                    };
                    println!(
                        "{}  {}  [{}] {} ({})",
                        event.id,
                        event.start.to_rfc3339(),
                        event.category.as_str(),
                        event.title,
                        span
                    );
                }
            }
        }
        EventAction::Move { id, start, end } => {
            let mut store = state::load_store()?;
            store.update_event_time(&id, start, end)?;
            state::save_store(&store)?;
            println!("Event moved: {id}");
        }
        EventAction::Link {
            id,
            case_id,
            case_name,
        } => {
            let mut store = state::load_store()?;
            store.link_case(&id, &case_id, &case_name)?;
            state::save_store(&store)?;
            println!("Event {id} linked to case {case_id}");
        }
        EventAction::Unlink { id } => {
            let mut store = state::load_store()?;
            if store.unlink_case(&id) {
                state::save_store(&store)?;
                println!("Event {id} unlinked");
            } else {
                println!("No event with id {id}; nothing to unlink");
            }
        }
        EventAction::Remove { id } => {
            let mut store = state::load_store()?;
            if store.remove_event(&id) {
                state::save_store(&store)?;
                println!("Event removed: {id}");
            } else {
                println!("No event with id {id}");
            }
        }
        EventAction::Conflicts { start, end, json } => {
            let store = state::load_store()?;
            let conflicts = store.check_conflicts(start, end);
            if json {
                println!("{}", serde_json::to_string_pretty(&conflicts)?);
            } else if conflicts.is_empty() {
                println!("No conflicts");
            } else {
                for conflict in &conflicts {
                    println!(
                        "{}  {}  {}",
                        conflict.id,
                        conflict.start.to_rfc3339(),
                        conflict.title
                    );
                }
            }
        }
    }
    Ok(())
}
