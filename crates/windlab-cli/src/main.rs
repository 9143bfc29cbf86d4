//! Windlab CLI - explore wind tunnel test data with local AI analysis.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use windlab_ai::GenConfig;

mod commands;

/// Windlab - wind tunnel data explorer with local LLM analysis
#[derive(Parser)]
#[command(name = "windlab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use the concise generation preset (short answers, capped length,
    /// low temperature; suited to slower hardware)
    #[arg(long, global = true)]
    concise: bool,

    /// Path to the wind tunnel CSV file
    #[arg(long, global = true, default_value = "data/wind_tunnel_test_data.csv")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dataset summary (counts and per-field ranges)
    Summary,

    /// Ask the model one question about the dataset
    Ask {
        /// The question
        question: String,
    },

    /// Check that the local inference service is reachable
    Ping,

    /// Interactive question/answer loop with history
    Chat,

    /// Show the active endpoint, model, and dataset schema
    Info,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "warn" };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let config = if cli.concise {
        GenConfig::concise()
    } else {
        GenConfig::verbose()
    }
    .with_env_overrides();

    match cli.command {
        Commands::Summary => commands::summary::run(&cli.data),
        Commands::Info => commands::info::run(&cli.data, &config),
        Commands::Ask { question } => {
            block_on(commands::ask::run(&cli.data, &question, config))
        }
        Commands::Ping => block_on(commands::ping::run(config)),
        Commands::Chat => block_on(commands::chat::run(&cli.data, config)),
    }
}

fn block_on<F: std::future::Future<Output = miette::Result<()>>>(fut: F) -> miette::Result<()> {
    tokio::runtime::Runtime::new()
        .map_err(|e| miette::miette!("failed to start async runtime: {}", e))?
        .block_on(fut)
}
