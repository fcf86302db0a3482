mod commands;
mod surface;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "carousel", about = "Image carousel source tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML config file (defaults are used when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an image listing and print the accepted URLs
    Parse(commands::parse::ParseArgs),
    /// Load a listing and replay navigation events against it
    Walk(commands::walk::WalkArgs),
    /// Print or save the default config as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config_path = cli.config.as_deref();
    match &cli.command {
        Commands::Parse(args) => commands::parse::run(args, config_path),
        Commands::Walk(args) => commands::walk::run(args, config_path),
        Commands::Config(args) => commands::config::run(args),
    }
}
