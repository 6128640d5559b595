//! Zenith CLI
//!
//! Runs the quotes API server and offers offline access to the catalog.

use clap::{Parser, Subcommand};
use zenith_core::logging_facility::{self, Profile};

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "zenith")]
#[command(about = "Zenith - motivational quotes by emotion", long_about = None)]
struct Cli {
    /// Log output profile (development or production)
    #[arg(
        long,
        global = true,
        env = "ZENITH_LOG_PROFILE",
        default_value = "development"
    )]
    log_profile: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Seed the catalog and serve the HTTP API
    Serve(config::ServeArgs),
    /// List the seeded emotions
    Emotions(commands::emotions::EmotionsArgs),
    /// List quotes, optionally for a single emotion
    Quotes(commands::quotes::QuotesArgs),
    /// Print one random quote for an emotion
    Random(commands::quotes::RandomArgs),
}

#[tokio::main]
async fn main() {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging_facility::init(cli.log_profile);

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args).await,
        Commands::Emotions(args) => commands::emotions::execute(args),
        Commands::Quotes(args) => commands::quotes::execute_list(args),
        Commands::Random(args) => commands::quotes::execute_random(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
