use chrono::{DateTime, Utc};
use clap::Subcommand;
use docket_core::{timetext, Deadline, Priority};

use crate::state;

#[derive(Subcommand)]
pub enum DeadlineAction {
    /// Add a deadline
    Add {
        /// Deadline title
        title: String,
        /// Due instant (RFC 3339)
        #[arg(long)]
        due: DateTime<Utc>,
        #[arg(long, default_value = "high", value_parser = super::parse_priority)]
        priority: Priority,
        #[arg(long)]
        client: Option<String>,
        #[arg(long)]
        case_id: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Explicit id; a UUID is generated when omitted
        #[arg(long)]
        id: Option<String>,
    },
    /// List deadlines
    List {
        #[arg(long)]
        json: bool,
        /// Only deadlines due within the next 24 hours
        #[arg(long)]
        urgent: bool,
    },
    /// Remove a deadline
    Remove { id: String },
}

pub fn run(action: DeadlineAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        DeadlineAction::Add {
            title,
            due,
            priority,
            client,
            case_id,
            description,
            id,
        } => {
            let mut store = state::load_store()?;
            let id = id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
            let mut deadline = Deadline::new(id.clone(), title, due, priority);
            deadline.client = client.unwrap_or_default();
            deadline.case_id = case_id;
            deadline.description = description.unwrap_or_default();

            store.add_deadline(deadline)?;
            state::save_store(&store)?;
            println!("Deadline created: {id}");
        }
        DeadlineAction::List { json, urgent } => {
            let store = state::load_store()?;
            let now = Utc::now();
            let deadlines: Vec<Deadline> = if urgent {
                store.urgent_deadlines(now)
            } else {
                store.deadlines().to_vec()
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&deadlines)?);
            } else {
                for deadline in &deadlines {
                    println!(
                        "{}  {}  [{}] {} ({})",
                        deadline.id,
                        deadline.due.to_rfc3339(),
                        deadline.priority.as_str(),
                        deadline.title,
                        timetext::time_until(now, deadline.due)
                    );
                }
            }
        }
        DeadlineAction::Remove { id } => {
            let mut store = state::load_store()?;
            if store.remove_deadline(&id) {
                state::save_store(&store)?;
                println!("Deadline removed: {id}");
            } else {
                println!("No deadline with id {id}");
            }
        }
    }
    Ok(())
}
