// crates/storewatch-cli/src/main.rs

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod format;

use commands::process::handle_process_command;
use commands::report::handle_report_command;

/// A CLI for the store return-rate risk pipeline
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Classify a raw store metrics export into the processed-data artifact.
    Process {
        /// CSV export with per-store sales and return-rate columns.
        #[arg(short, long)]
        input: PathBuf,
        /// Destination for the processed JSON array.
        #[arg(short, long, default_value = "data/processed_data.json")]
        output: PathBuf,
    },
    /// Print channel and brand rollups over a processed-data artifact.
    Report {
        /// Previously written processed JSON array.
        #[arg(short, long, default_value = "data/processed_data.json")]
        data: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Process { input, output } => handle_process_command(&input, &output),
        Commands::Report { data } => handle_report_command(&data),
    }
}
