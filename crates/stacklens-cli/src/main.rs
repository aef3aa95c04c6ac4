//! stacklens - render grouped thread snapshots as bordered stack reports

mod commands;
mod config;
mod logging;
mod snapshot;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "stacklens",
    version,
    about = "Render grouped thread snapshots as fixed-width stack reports"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Path to a stacklens.toml config file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a snapshot file as a bordered report
    Render(commands::render::RenderArgs),
    /// Parse a snapshot file and report what it contains
    Validate {
        /// Snapshot JSON file
        snapshot: PathBuf,
    },
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // `init` must run before a config file exists; everything else loads it.
    let config = match &cli.command {
        Commands::Init { .. } => config::Config::default(),
        _ => config::load(cli.config.as_deref())?,
    };
    logging::init(cli.debug, &config.log.level);

    match cli.command {
        Commands::Render(args) => commands::render::run(&config, args),
        Commands::Validate { snapshot } => commands::validate::run(&snapshot),
        Commands::Init { force } => commands::init::run(cli.config.as_deref(), force),
    }
}
