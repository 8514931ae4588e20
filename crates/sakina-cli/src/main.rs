use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "sakina", version, about = "Sakina daily content CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Today's verse, supplication, remembrance or reflection prompt
    Today {
        #[command(subcommand)]
        action: commands::today::TodayAction,
    },
    /// Mood check-in: a verse and supplication for how you feel
    Mood {
        #[command(subcommand)]
        action: commands::mood::MoodAction,
    },
    /// AI reflection message allowance
    Quota {
        #[command(subcommand)]
        action: commands::quota::QuotaAction,
    },
    /// Patience reflection journal
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Show the local day used for rotation
    Day {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("SAKINA_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Today { action } => commands::today::run(action),
        Commands::Mood { action } => commands::mood::run(action),
        Commands::Quota { action } => commands::quota::run(action),
        Commands::Journal { action } => commands::journal::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Day { json } => commands::day::run(json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
