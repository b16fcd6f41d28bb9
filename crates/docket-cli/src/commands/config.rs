use clap::Subcommand;
use docket_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the full configuration
    Show,
    /// Get a value by dot-separated key
    Get {
        /// e.g. notifications.reminder_lead_minutes
        key: String,
    },
    /// Set a value by dot-separated key
    Set { key: String, value: String },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Get { key } => {
            let config = Config::load_or_default();
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown key '{key}'").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_or_default();
            config.set(&key, &value)?;
            println!("{key} = {value}");
        }
    }
    Ok(())
}
