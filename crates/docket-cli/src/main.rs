use clap::{Parser, Subcommand};

mod commands;
mod state;

#[derive(Parser)]
#[command(name = "docket-cli", version, about = "Docket CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calendar event management
    Event {
        #[command(subcommand)]
        action: commands::event::EventAction,
    },
    /// Deadline management
    Deadline {
        #[command(subcommand)]
        action: commands::deadline::DeadlineAction,
    },
    /// Case timeline views
    Timeline {
        #[command(subcommand)]
        action: commands::timeline::TimelineAction,
    },
    /// Notification polling and inbox
    Notify {
        #[command(subcommand)]
        action: commands::notify::NotifyAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Event { action } => commands::event::run(action),
        Commands::Deadline { action } => commands::deadline::run(action),
        Commands::Timeline { action } => commands::timeline::run(action),
        Commands::Notify { action } => commands::notify::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
