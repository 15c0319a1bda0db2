// CLI for shuffling, simulating and playing draw sessions

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tombola_core::DrawSpeed;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "tombola")]
#[command(about = "Tombola - random draw orders for numbered-token games", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path (TOML or JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override a configuration value, e.g. --set avoid-count=4
    #[arg(long = "set", global = true, value_name = "KEY=VALUE")]
    overrides: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one random permutation of the item set
    Shuffle {
        /// Number of items (defaults to the configured item count)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for a reproducible order
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run back-to-back sessions and report how each opening compares to the previous tail
    Simulate {
        /// Number of sessions to run
        #[arg(short, long, default_value = "10")]
        sessions: usize,

        /// Seed for reproducible sessions
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Draw a session one item at a time
    Play {
        /// Pacing between draws (slow, normal, fast, very-fast)
        #[arg(long)]
        speed: Option<DrawSpeed>,

        /// Stop after this many draws
        #[arg(short, long)]
        limit: Option<usize>,

        /// Draw without pausing between items
        #[arg(long)]
        no_delay: bool,

        /// Seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = config::load(cli.config.as_deref(), &cli.overrides)?;

    match cli.command {
        Commands::Shuffle { count, seed } => {
            commands::shuffle::run(&config, count, seed)?;
        }
        Commands::Simulate { sessions, seed } => {
            commands::simulate::run(&config, sessions, seed)?;
        }
        Commands::Play {
            speed,
            limit,
            no_delay,
            seed,
        } => {
            let options = commands::play::PlayOptions {
                speed: speed.unwrap_or(config.speed),
                limit,
                pace: !no_delay,
                seed,
            };
            commands::play::run(&config, options).await?;
        }
    }

    Ok(())
}
