mod report;


use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "mediapulse-cli")]
#[command(about = "MediaPulse analytics command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Aggregate a records file and print the analytics report
    Report {
        /// Path to a JSON array of raw records
        #[arg(long)]
        input: PathBuf,

        /// Optional YAML analytics configuration
        #[arg(long)]
        config: Option<PathBuf>,

        /// Emit the full result as pretty JSON instead of a text report
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let log_level =
        std::env::var("MEDIAPULSE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Report {
            input,
            config,
            json,
        } => report::run_report(&input, config.as_deref(), json),
    }
}
