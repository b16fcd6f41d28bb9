use chrono::Utc;
use clap::Subcommand;
use docket_core::{timetext, Config, Notification};

use crate::state;

#[derive(Subcommand)]
pub enum NotifyAction {
    /// Evaluate reminder/deadline windows now and record the results
    Poll,
    /// List recorded notifications
    List {
        #[arg(long)]
        json: bool,
        /// Only unread notifications
        #[arg(long)]
        unread: bool,
    },
    /// Mark a notification read
    Read { id: String },
    /// Drop the oldest notifications beyond the retention cap
    Prune {
        /// Override the configured retention cap
        #[arg(long)]
        max: Option<usize>,
    },
}

pub fn run(action: NotifyAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        NotifyAction::Poll => {
            let config = Config::load_or_default();
            if !config.notifications.enabled {
                println!("Notifications are disabled (notifications.enabled = false)");
                return Ok(());
            }

            let mut store = state::load_store()?;
            let now = Utc::now();
            let created =
                store.poll_notifications(now, config.notifications.reminder_lead_minutes);
            tracing::info!(count = created.len(), "notification poll complete");
            state::save_store(&store)?;

            if created.is_empty() {
                println!("Nothing due");
            }
            for notification in &created {
                println!("[{}] {}", notification.kind.as_str(), notification.message);
            }
        }
        NotifyAction::List { json, unread } => {
            let store = state::load_store()?;
            let now = Utc::now();
            let notifications: Vec<Notification> = store
                .notifications()
                .iter()
                .filter(|n| !unread || !n.read)
                .cloned()
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&notifications)?);
            } else {
                for n in &notifications {
                    let marker = if n.read { " " } else { "*" };
                    println!(
                        "{marker} {}  [{}] {} ({})",
                        n.id,
                        n.kind.as_str(),
                        n.message,
                        timetext::time_ago(now, n.created_at)
                    );
                }
            }
        }
        NotifyAction::Read { id } => {
            let mut store = state::load_store()?;
            if store.mark_read(&id) {
                state::save_store(&store)?;
                println!("Notification {id} marked read");
            } else {
                println!("No notification with id {id}");
            }
        }
        NotifyAction::Prune { max } => {
            let config = Config::load_or_default();
            let cap = max.unwrap_or(config.notifications.retention);
            let mut store = state::load_store()?;
            let removed = store.prune_notifications(cap);
            state::save_store(&store)?;
            println!("Pruned {removed} notification(s)");
        }
    }
    Ok(())
}
