use chrono::Utc;
use clap::Subcommand;
use docket_core::{timetext, CaseFilter, TimelineItem};

use crate::state;

#[derive(Subcommand)]
pub enum TimelineAction {
    /// Show a chronological case timeline
    Show {
        /// Case id, or "all" for every case-linked item
        #[arg(long, default_value = "all")]
        case: String,
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: TimelineAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimelineAction::Show { case, json } => {
            let store = state::load_store()?;
            let timeline = store.timeline(&CaseFilter::parse(&case));
            if json {
                println!("{}", serde_json::to_string_pretty(&timeline)?);
                return Ok(());
            }

            let now = Utc::now();
            for item in &timeline {
                match item {
                    TimelineItem::Event(event) => println!(
                        "{}  event     {} [{}] ({})",
                        event.start.to_rfc3339(),
                        event.title,
                        event.case_id.as_deref().unwrap_or("-"),
                        timetext::time_until(now, event.start)
                    ),
                    TimelineItem::Deadline(deadline) => println!(
                        "{}  deadline  {} [{}] ({})",
                        deadline.due.to_rfc3339(),
                        deadline.title,
                        deadline.case_id.as_deref().unwrap_or("-"),
                        timetext::time_until(now, deadline.due)
                    ),
                }
            }
        }
    }
    Ok(())
}
