//! Ringroute CLI entry point

use clap::{Parser, Subcommand};
use ringroute_input::{OutputFormat, Settings};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "ringroute")]
#[command(about = "Shortest-time routes across circular bus lines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format: text or json (overrides settings)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Directory holding ringroute.toml and .env (defaults to current directory)
    #[arg(short = 'C', long, default_value = ".")]
    dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the fastest route between two stops
    Route {
        /// Start stop
        #[arg(long)]
        from: String,

        /// Destination stop
        #[arg(long)]
        to: String,

        /// Network file (.toml, .yaml, .json)
        #[arg(short, long)]
        network: Option<PathBuf>,
    },
    /// Enter circles, intersections, and stops at the prompt
    Interactive,
    /// Print the built graph as JSON adjacency
    Graph {
        /// Network file (.toml, .yaml, .json)
        #[arg(short, long)]
        network: Option<PathBuf>,
    },
    /// Validate a network file and summarize it
    Check {
        /// Network file (.toml, .yaml, .json)
        #[arg(short, long)]
        network: Option<PathBuf>,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(&cli.dir)?;
    if let Some(format) = cli.format {
        settings.format = format;
    }

    // Initialize logging; stdout stays reserved for results
    let log_level = if cli.verbose { "debug" } else { settings.log_level.as_str() };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!("ringroute={}", log_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Ringroute v{}", env!("CARGO_PKG_VERSION"));
    if let Some(env_file) = &settings.env_file {
        tracing::debug!("Loaded environment from {}", env_file.display());
    }

    match cli.command {
        Commands::Route { from, to, network } => {
            commands::route(&settings, network, &from, &to)
        }
        Commands::Interactive => {
            commands::interactive(&settings)
        }
        Commands::Graph { network } => {
            commands::graph(&settings, network)
        }
        Commands::Check { network } => {
            commands::check(&settings, network)
        }
        Commands::Version => {
            println!("Ringroute v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
